//! Quantity kinds and the scalar quantity wrapper.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::format::number_to_string;
use crate::system::System;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker trait for a **kind** of physical quantity (speed, thermal diffusivity, …).
///
/// A kind names one physical quantity and ties it to the unit family it is measured in. Several kinds may share a
/// family (thermal diffusivity and kinematic viscosity are both measured in m²/s) yet stay distinct types. The
/// scalar and vector forms of one quantity share a kind, so [`Vector::magnitude`](crate::Vector::magnitude) can
/// return the matching [`Scalar`] generically.
///
/// Kinds are modelled as empty enums:
///
/// ```rust
/// use mensura_core::{Kind, Scalar};
/// use mensura_core::length::LengthUnit;
///
/// pub enum WavelengthKind {}
/// impl Kind for WavelengthKind {
///     type Unit = LengthUnit;
///     const NAME: &'static str = "Wavelength";
/// }
///
/// let green = Scalar::<WavelengthKind>::new(532e-6, LengthUnit::Millimetre);
/// assert!((green.value() - 532e-9).abs() < 1e-20);
/// ```
pub trait Kind: 'static {
    /// Unit family this kind is measured in.
    type Unit: Unit;

    /// Name of the quantity, used by `Debug`.
    const NAME: &'static str;
}

/// A scalar physical quantity of kind `K`.
///
/// The value is always stored in the standard unit of `K::Unit`; the unit given at construction is converted away
/// immediately and output methods convert back on demand. Arithmetic is only defined between quantities of the same
/// kind, plus the cross-kind relations in [`relations`](crate::relations).
///
/// ```rust
/// use mensura_core::acceleration::{AccelerationMagnitude, AccelerationUnit};
///
/// let g = AccelerationMagnitude::new(10.0, AccelerationUnit::MetrePerSquareSecond);
/// let ft = g.to(AccelerationUnit::FootPerSquareSecond);
/// assert!((ft - 32.8084).abs() < 1e-4);
/// ```
pub struct Scalar<K: Kind> {
    value: f64,
    kind: PhantomData<K>,
}

impl<K: Kind> Scalar<K> {
    /// Zero in the standard unit.
    pub const ZERO: Self = Self::from_standard(0.0);

    /// Dimension of this quantity.
    pub const DIMENSION: Dimension = <K::Unit as Unit>::DIMENSION;

    /// Creates a quantity from a value expressed in `unit`.
    #[inline]
    pub fn new(value: f64, unit: K::Unit) -> Self {
        Self::from_standard(K::Unit::convert_value(value, unit, K::Unit::STANDARD))
    }

    /// Wraps a value that is already expressed in the standard unit.
    #[inline]
    pub(crate) const fn from_standard(value: f64) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Value in the standard unit.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The standard unit values are stored in.
    #[inline]
    pub fn unit() -> K::Unit {
        K::Unit::STANDARD
    }

    /// Value expressed in `unit`.
    ///
    /// ```rust
    /// use mensura_core::length::{Length, LengthUnit};
    /// let d = Length::new(1.0, LengthUnit::Mile);
    /// assert!((d.to(LengthUnit::Foot) - 5280.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn to(self, unit: K::Unit) -> f64 {
        K::Unit::convert_value(self.value, K::Unit::STANDARD, unit)
    }

    /// Value expressed in the consistent unit of `system`.
    pub fn in_system(self, system: System) -> Result<f64> {
        Ok(self.to(K::Unit::in_system(system)?))
    }

    /// Overwrites the value with `value` expressed in `unit`.
    pub fn set(&mut self, value: f64, unit: K::Unit) {
        *self = Self::new(value, unit);
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_standard(self.value.abs())
    }

    /// Smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_standard(self.value.min(other.value))
    }

    /// Larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_standard(self.value.max(other.value))
    }

    /// `true` when the stored value is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    /// Bare number in the standard unit.
    pub fn print(&self) -> String {
        number_to_string(self.value)
    }

    /// Bare number in `unit`.
    pub fn print_in(&self, unit: K::Unit) -> String {
        number_to_string(self.to(unit))
    }

    /// Bare number in the consistent unit of `system`.
    pub fn print_in_system(&self, system: System) -> Result<String> {
        self.in_system(system).map(number_to_string)
    }

    /// JSON value (a bare number) in the standard unit.
    pub fn json(&self) -> String {
        self.print()
    }

    /// JSON value (a bare number) in `unit`.
    pub fn json_in(&self, unit: K::Unit) -> String {
        self.print_in(unit)
    }

    /// JSON value (a bare number) in the consistent unit of `system`.
    pub fn json_in_system(&self, system: System) -> Result<String> {
        self.print_in_system(system)
    }

    /// XML content (a bare number) in the standard unit.
    pub fn xml(&self) -> String {
        self.print()
    }

    /// XML content (a bare number) in `unit`.
    pub fn xml_in(&self, unit: K::Unit) -> String {
        self.print_in(unit)
    }

    /// XML content (a bare number) in the consistent unit of `system`.
    pub fn xml_in_system(&self, system: System) -> Result<String> {
        self.print_in_system(system)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Std trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Clone for Scalar<K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kind> Copy for Scalar<K> {}

impl<K: Kind> Default for Scalar<K> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<K: Kind> Debug for Scalar<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(K::NAME).field(&self.value).finish()
    }
}

/// Formats as `<value> <standard abbreviation>`. A precision, if given, applies to the number.
impl<K: Kind> Display for Scalar<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let number = match f.precision() {
            Some(p) => format!("{:.*}", p, self.value),
            None => number_to_string(self.value),
        };
        let symbol = K::Unit::STANDARD.abbreviation();
        if symbol.is_empty() {
            f.write_str(&number)
        } else {
            write!(f, "{} {}", number, symbol)
        }
    }
}

impl<K: Kind> PartialEq for Scalar<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: Kind> PartialOrd for Scalar<K> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/// Parses `"<number> <unit spelling>"`, e.g. `"9.81 m/s^2"`.
///
/// ```rust
/// use mensura_core::speed::Speed;
/// let v: Speed = "36 km/h".parse().unwrap();
/// assert!((v.value() - 10.0).abs() < 1e-12);
/// ```
impl<K: Kind> FromStr for Scalar<K> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (number, spelling) = match s.split_once(char::is_whitespace) {
            Some((number, spelling)) => (number, spelling.trim()),
            None => (s, ""),
        };
        let value: f64 = number
            .parse()
            .map_err(|_| Error::InvalidNumber(number.to_string()))?;
        let unit = K::Unit::parse(spelling)?;
        Ok(Self::new(value, unit))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Add for Scalar<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<K: Kind> AddAssign for Scalar<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: Kind> Sub for Scalar<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<K: Kind> SubAssign for Scalar<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: Kind> Neg for Scalar<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_standard(-self.value)
    }
}

impl<K: Kind> Mul<f64> for Scalar<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_standard(self.value * rhs)
    }
}

impl<K: Kind> Mul<Scalar<K>> for f64 {
    type Output = Scalar<K>;
    #[inline]
    fn mul(self, rhs: Scalar<K>) -> Scalar<K> {
        rhs * self
    }
}

impl<K: Kind> MulAssign<f64> for Scalar<K> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl<K: Kind> Div<f64> for Scalar<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_standard(self.value / rhs)
    }
}

impl<K: Kind> DivAssign<f64> for Scalar<K> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

/// Ratio of two quantities of the same kind.
impl<K: Kind> Div for Scalar<K> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.value / rhs.value
    }
}

impl<K: Kind> Sum for Scalar<K> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K: Kind> Serialize for Scalar<K> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Kind> Deserialize<'de> for Scalar<K> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::from_standard(value))
    }
}

/// Serde helper module for serializing scalars together with their unit.
///
/// Use it with `#[serde(with = "...")]` to write `{"value": .., "unit": ".."}`. Serialization always uses the
/// standard unit; deserialization accepts any spelling of the family and converts.
///
/// ```rust
/// use mensura_core::length::Length;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Part {
///     #[serde(with = "mensura_core::serde_with_unit")]
///     width: Length, // {"value": 0.0254, "unit": "m"}
///
///     depth: Length, // 0.1 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a scalar as a struct with `value` and `unit` fields.
    pub fn serialize<K, S>(quantity: &Scalar<K>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        K: Kind,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", K::Unit::STANDARD.abbreviation())?;
        state.end()
    }

    /// Deserializes a scalar from a struct with `value` and optionally `unit` fields.
    ///
    /// A missing `unit` means the standard unit. Any spelling accepted by [`Unit::parse`] is converted.
    pub fn deserialize<'de, K, D>(deserializer: D) -> core::result::Result<Scalar<K>, D::Error>
    where
        K: Kind,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct ScalarVisitor<K>(PhantomData<K>);

        impl<'de, K: Kind> Visitor<'de> for ScalarVisitor<K> {
            type Value = Scalar<K>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Scalar<K>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = match unit {
                    Some(spelling) => K::Unit::parse(&spelling).map_err(de::Error::custom)?,
                    None => K::Unit::STANDARD,
                };

                Ok(Scalar::new(value, unit))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            ScalarVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::acceleration::{AccelerationMagnitude, AccelerationUnit};
    use crate::units::length::{Length, LengthUnit};
    use crate::units::unitless::PoissonRatio;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_normalizes_to_standard() {
        let d = Length::new(3.0, LengthUnit::Foot);
        assert_relative_eq!(d.value(), 0.9144, max_relative = 1e-15);
        assert_eq!(Length::unit(), LengthUnit::Metre);
    }

    #[test]
    fn standard_unit_round_trip_is_exact() {
        let a = AccelerationMagnitude::new(0.1 + 0.2, AccelerationUnit::MetrePerSquareSecond);
        assert_eq!(a.value(), 0.1 + 0.2);
        assert_eq!(a.to(AccelerationUnit::MetrePerSquareSecond), 0.1 + 0.2);
    }

    #[test]
    fn ten_metres_per_square_second_in_feet() {
        let a = AccelerationMagnitude::new(10.0, AccelerationUnit::MetrePerSquareSecond);
        assert_relative_eq!(
            a.to(AccelerationUnit::FootPerSquareSecond),
            32.808398950131235,
            max_relative = 1e-12
        );
    }

    #[test]
    fn in_system_uses_consistent_unit() {
        let d = Length::new(1.0, LengthUnit::Metre);
        assert_abs_diff_eq!(
            d.in_system(System::MillimetreGramSecondKelvin).unwrap(),
            1000.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            d.in_system(System::InchPoundSecondRankine).unwrap(),
            1.0 / 0.0254,
            epsilon = 1e-9
        );
    }

    #[test]
    fn set_replaces_value() {
        let mut d = Length::ZERO;
        d.set(2.0, LengthUnit::Kilometre);
        assert_eq!(d.value(), 2000.0);
    }

    #[test]
    fn default_is_zero() {
        assert!(Length::default().is_zero());
        assert_eq!(Length::default(), Length::ZERO);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn arithmetic_same_kind() {
        let a = Length::new(1.0, LengthUnit::Metre);
        let b = Length::new(50.0, LengthUnit::Centimetre);
        assert_eq!((a + b).value(), 1.5);
        assert_eq!((a - b).value(), 0.5);
        assert_eq!((-a).value(), -1.0);
        assert_eq!((a * 3.0).value(), 3.0);
        assert_eq!((3.0 * a).value(), 3.0);
        assert_eq!((a / 4.0).value(), 0.25);
        assert_eq!(a / b, 2.0);
    }

    #[test]
    fn compound_assignment() {
        let mut a = Length::new(1.0, LengthUnit::Metre);
        a += Length::new(1.0, LengthUnit::Metre);
        assert_eq!(a.value(), 2.0);
        a -= Length::new(0.5, LengthUnit::Metre);
        assert_eq!(a.value(), 1.5);
        a *= 2.0;
        assert_eq!(a.value(), 3.0);
        a /= 3.0;
        assert_eq!(a.value(), 1.0);
    }

    #[test]
    fn comparisons_follow_standard_value() {
        let mile = Length::new(1.0, LengthUnit::Mile);
        let km = Length::new(1.0, LengthUnit::Kilometre);
        assert!(mile > km);
        assert!(km <= mile);
        assert_ne!(mile, km);
        assert_eq!(mile.max(km), mile);
        assert_eq!(mile.min(km), km);
        assert_eq!((-mile).abs(), mile);
    }

    #[test]
    fn sum_of_lengths() {
        let total: Length = (1..=4).map(|i| Length::new(i as f64, LengthUnit::Metre)).sum();
        assert_eq!(total.value(), 10.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Text output
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn print_json_xml_are_bare_numbers() {
        let d = Length::new(1.5, LengthUnit::Metre);
        assert_eq!(d.print(), "1.5");
        assert_eq!(d.print_in(LengthUnit::Millimetre), "1500");
        assert_eq!(d.json(), "1.5");
        assert_eq!(d.json_in(LengthUnit::Centimetre), "150");
        assert_eq!(d.xml(), "1.5");
        assert_eq!(d.xml_in_system(System::MillimetreGramSecondKelvin).unwrap(), "1500");
    }

    #[test]
    fn display_appends_standard_abbreviation() {
        let a = AccelerationMagnitude::new(9.81, AccelerationUnit::MetrePerSquareSecond);
        assert_eq!(a.to_string(), "9.81 m/s^2");
        assert_eq!(format!("{:.1}", a), "9.8 m/s^2");
        assert_eq!(PoissonRatio::from_number(0.3).to_string(), "0.3");
    }

    #[test]
    fn debug_names_the_kind() {
        let d = Length::new(2.0, LengthUnit::Metre);
        assert_eq!(format!("{:?}", d), "Length(2.0)");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_number_and_unit() {
        let a: AccelerationMagnitude = "9.81 m/s^2".parse().unwrap();
        assert_eq!(a.value(), 9.81);
        let d: Length = "  12 in ".parse().unwrap();
        assert_relative_eq!(d.value(), 0.3048, max_relative = 1e-15);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "ten m".parse::<Length>(),
            Err(Error::InvalidNumber("ten".into()))
        );
        assert_eq!(
            "10 furlong".parse::<Length>(),
            Err(Error::UnrecognizedUnit {
                family: "length",
                spelling: "furlong".into()
            })
        );
    }

    proptest! {
        #[test]
        fn prop_to_inverts_new(value in -1e9..1e9f64) {
            for &unit in <LengthUnit as Unit>::ALL {
                let d = Length::new(value, unit);
                prop_assert!((d.to(unit) - value).abs() <= 1e-9 * (1.0 + value.abs()));
            }
        }

        #[test]
        fn prop_addition_commutes(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let x = Length::new(a, LengthUnit::Foot);
            let y = Length::new(b, LengthUnit::Inch);
            prop_assert_eq!(x + y, y + x);
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::units::length::{Length, LengthUnit};
    use crate::units::temperature::Temperature;
    use approx::assert_abs_diff_eq;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Reading {
        #[serde(with = "crate::serde_with_unit")]
        depth: Length,
        span: Length,
    }

    #[test]
    fn scalar_is_a_bare_standard_value() {
        let l = Length::new(1.5, LengthUnit::Kilometre);
        assert_eq!(serde_json::to_string(&l).unwrap(), "1500.0");
        let back: Length = serde_json::from_str("1500.0").unwrap();
        assert_eq!(back, l);
    }

    #[test]
    fn with_unit_writes_value_and_standard_unit() {
        let reading = Reading {
            depth: Length::new(2.0, LengthUnit::Metre),
            span: Length::new(0.5, LengthUnit::Metre),
        };
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"depth":{"value":2.0,"unit":"m"},"span":0.5}"#);
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn with_unit_converts_other_spellings() {
        let reading: Reading = serde_json::from_str(r#"{"depth":{"value":12.0,"unit":"in"},"span":1.0}"#).unwrap();
        assert_abs_diff_eq!(reading.depth.value(), 0.3048, epsilon = 1e-12);

        let standard: Reading = serde_json::from_str(r#"{"depth":{"value":3.0},"span":1.0}"#).unwrap();
        assert_eq!(standard.depth, Length::new(3.0, LengthUnit::Metre));
    }

    #[test]
    fn with_unit_rejects_bad_input() {
        #[derive(Deserialize, Debug)]
        struct Sample {
            #[serde(with = "crate::serde_with_unit")]
            #[allow(dead_code)]
            t: Temperature,
        }
        let unknown = serde_json::from_str::<Sample>(r#"{"t":{"value":1.0,"unit":"banana"}}"#).unwrap_err();
        assert!(unknown.to_string().contains("unrecognized temperature unit"));
        assert!(serde_json::from_str::<Sample>(r#"{"t":{"unit":"K"}}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"t":{"value":1.0,"value":2.0}}"#).is_err());
    }
}
