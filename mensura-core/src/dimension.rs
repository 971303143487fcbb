//! Physical dimensions as exponent records over the seven SI base dimensions.

use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven base physical dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseDimension {
    /// Length (L).
    Length,
    /// Mass (M).
    Mass,
    /// Time (T).
    Time,
    /// Electric current (I).
    ElectricCurrent,
    /// Temperature (Θ).
    Temperature,
    /// Amount of substance (N).
    SubstanceAmount,
    /// Luminous intensity (J).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions, in the order [`Dimension`] stores their exponents.
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::SubstanceAmount,
        BaseDimension::LuminousIntensity,
    ];

    /// Conventional one-letter symbol.
    ///
    /// ```rust
    /// use mensura_core::BaseDimension;
    /// assert_eq!(BaseDimension::Temperature.symbol(), "Θ");
    /// ```
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::SubstanceAmount => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    /// Lower-case descriptive name.
    pub const fn label(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::ElectricCurrent => "electric current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::SubstanceAmount => "substance amount",
            BaseDimension::LuminousIntensity => "luminous intensity",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol())
    }
}

/// The **dimension** of a physical quantity: one signed exponent per base dimension.
///
/// Two dimensions are equal iff all seven exponents match. Ordering is lexicographic over the fields in
/// declaration order. Every unit family defines its dimension once as a constant.
///
/// ```rust
/// use mensura_core::Dimension;
///
/// let acceleration = Dimension::LENGTH.quotient(Dimension::TIME.product(Dimension::TIME));
/// assert_eq!(acceleration, Dimension::new(1, 0, -2, 0, 0, 0, 0));
/// assert_eq!(acceleration.to_string(), "LT^(-2)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    /// Exponent of length.
    pub length: i8,
    /// Exponent of mass.
    pub mass: i8,
    /// Exponent of time.
    pub time: i8,
    /// Exponent of electric current.
    pub electric_current: i8,
    /// Exponent of temperature.
    pub temperature: i8,
    /// Exponent of substance amount.
    pub substance_amount: i8,
    /// Exponent of luminous intensity.
    pub luminous_intensity: i8,
}

impl Dimension {
    /// All exponents zero.
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 0);
    /// L
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0, 0, 0, 0);
    /// M
    pub const MASS: Dimension = Dimension::new(0, 1, 0, 0, 0, 0, 0);
    /// T
    pub const TIME: Dimension = Dimension::new(0, 0, 1, 0, 0, 0, 0);
    /// I
    pub const ELECTRIC_CURRENT: Dimension = Dimension::new(0, 0, 0, 1, 0, 0, 0);
    /// Θ
    pub const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 0, 1, 0, 0);
    /// N
    pub const SUBSTANCE_AMOUNT: Dimension = Dimension::new(0, 0, 0, 0, 0, 1, 0);
    /// J
    pub const LUMINOUS_INTENSITY: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 1);

    /// Builds a dimension from its seven exponents, in base-dimension order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        electric_current: i8,
        temperature: i8,
        substance_amount: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            electric_current,
            temperature,
            substance_amount,
            luminous_intensity,
        }
    }

    /// Exponent of a single base dimension.
    pub const fn exponent(self, base: BaseDimension) -> i8 {
        match base {
            BaseDimension::Length => self.length,
            BaseDimension::Mass => self.mass,
            BaseDimension::Time => self.time,
            BaseDimension::ElectricCurrent => self.electric_current,
            BaseDimension::Temperature => self.temperature,
            BaseDimension::SubstanceAmount => self.substance_amount,
            BaseDimension::LuminousIntensity => self.luminous_intensity,
        }
    }

    /// Dimension of a product: exponents add.
    ///
    /// # Panics
    ///
    /// Panics when an exponent leaves the `i8` range. In a `const` relation check this is a compile error. Use
    /// [`Dimension::checked_product`] for exponents that come from outside the crate.
    pub const fn product(self, other: Dimension) -> Dimension {
        match self.checked_product(other) {
            Some(dimension) => dimension,
            None => panic!("dimension exponent out of range"),
        }
    }

    /// Dimension of a quotient: exponents subtract.
    ///
    /// # Panics
    ///
    /// Panics when an exponent leaves the `i8` range, like [`Dimension::product`].
    pub const fn quotient(self, other: Dimension) -> Dimension {
        match self.checked_quotient(other) {
            Some(dimension) => dimension,
            None => panic!("dimension exponent out of range"),
        }
    }

    /// Dimension of a product, or `None` when an exponent would overflow.
    pub const fn checked_product(self, other: Dimension) -> Option<Dimension> {
        Self::combine(self.exponents(), other.exponents(), false)
    }

    /// Dimension of a quotient, or `None` when an exponent would overflow.
    pub const fn checked_quotient(self, other: Dimension) -> Option<Dimension> {
        Self::combine(self.exponents(), other.exponents(), true)
    }

    const fn exponents(self) -> [i8; 7] {
        [
            self.length,
            self.mass,
            self.time,
            self.electric_current,
            self.temperature,
            self.substance_amount,
            self.luminous_intensity,
        ]
    }

    const fn combine(lhs: [i8; 7], rhs: [i8; 7], subtract: bool) -> Option<Dimension> {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            let exponent = if subtract {
                lhs[i].checked_sub(rhs[i])
            } else {
                lhs[i].checked_add(rhs[i])
            };
            match exponent {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(Dimension::new(out[0], out[1], out[2], out[3], out[4], out[5], out[6]))
    }

    /// Const-evaluable equality, used by compile-time relation checks.
    pub const fn equals(self, other: Dimension) -> bool {
        self.length == other.length
            && self.mass == other.mass
            && self.time == other.time
            && self.electric_current == other.electric_current
            && self.temperature == other.temperature
            && self.substance_amount == other.substance_amount
            && self.luminous_intensity == other.luminous_intensity
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        self.equals(Dimension::DIMENSIONLESS)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        for base in BaseDimension::ALL {
            match self.exponent(base) {
                0 => {}
                1 => f.write_str(base.symbol())?,
                e if e < 0 => write!(f, "{}^({})", base.symbol(), e)?,
                e => write!(f, "{}^{}", base.symbol(), e)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_and_quotient_are_inverse() {
        let speed = Dimension::LENGTH.quotient(Dimension::TIME);
        assert_eq!(speed.product(Dimension::TIME), Dimension::LENGTH);
        assert_eq!(speed.quotient(speed), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn exponent_overflow_is_reported() {
        let big = Dimension::new(0, 0, 100, 0, 0, 0, 0);
        assert_eq!(big.checked_product(big), None);
        assert_eq!(big.quotient(big), Dimension::DIMENSIONLESS);
        let low = Dimension::new(0, 0, 0, 0, 0, 0, i8::MIN);
        assert_eq!(low.checked_quotient(Dimension::LUMINOUS_INTENSITY), None);
        assert_eq!(
            Dimension::TIME.checked_product(Dimension::TIME),
            Some(Dimension::new(0, 0, 2, 0, 0, 0, 0))
        );
    }

    #[test]
    #[should_panic(expected = "dimension exponent out of range")]
    fn product_panics_on_overflow() {
        let big = Dimension::new(127, 0, 0, 0, 0, 0, 0);
        let _ = big.product(Dimension::LENGTH);
    }

    #[test]
    fn exponent_reads_each_field() {
        let d = Dimension::new(1, 2, 3, 4, 5, 6, 7);
        for (i, base) in BaseDimension::ALL.into_iter().enumerate() {
            assert_eq!(d.exponent(base), i as i8 + 1);
        }
    }

    #[test]
    fn equals_matches_partial_eq() {
        let a = Dimension::new(1, 0, -2, 0, 0, 0, 0);
        let b = Dimension::new(1, 0, -2, 0, 0, 0, 0);
        let c = Dimension::new(1, 0, -1, 0, 0, 0, 0);
        assert!(a.equals(b));
        assert_eq!(a, b);
        assert!(!a.equals(c));
        assert_ne!(a, c);
    }

    #[test]
    fn ordering_is_lexicographic() {
        // length dominates every later field
        assert!(Dimension::new(1, -5, -5, 0, 0, 0, 0) > Dimension::new(0, 9, 9, 9, 9, 9, 9));
        assert!(Dimension::TIME > Dimension::ELECTRIC_CURRENT);
        assert!(Dimension::DIMENSIONLESS < Dimension::LUMINOUS_INTENSITY);
    }

    #[test]
    fn default_is_dimensionless() {
        assert!(Dimension::default().is_dimensionless());
        assert!(!Dimension::MASS.is_dimensionless());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_omits_zero_and_unit_exponents() {
        assert_eq!(Dimension::LENGTH.to_string(), "L");
        assert_eq!(Dimension::new(2, 0, -1, 0, 0, 0, 0).to_string(), "L^2T^(-1)");
        assert_eq!(Dimension::new(-1, 1, -2, 0, 0, 0, 0).to_string(), "L^(-1)MT^(-2)");
        assert_eq!(Dimension::new(0, 0, 0, 0, -1, 0, 0).to_string(), "Θ^(-1)");
    }

    #[test]
    fn display_dimensionless() {
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
    }

    #[test]
    fn base_dimension_symbols_and_labels() {
        let symbols: Vec<&str> = BaseDimension::ALL.iter().map(|b| b.symbol()).collect();
        assert_eq!(symbols, ["L", "M", "T", "I", "Θ", "N", "J"]);
        assert_eq!(BaseDimension::SubstanceAmount.label(), "substance amount");
        assert_eq!(BaseDimension::Mass.to_string(), "M");
    }
}
