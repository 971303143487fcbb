//! Dimensionless ratios.
//!
//! The single unit has an empty symbol, so a unitless quantity displays as a bare number.
//!
//! ```rust
//! use mensura_core::unitless::PoissonRatio;
//!
//! let nu = PoissonRatio::from_number(0.3);
//! assert_eq!(nu.to_string(), "0.3");
//! ```

use crate::{Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// The unit of a pure number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(family = "unitless", dimension = Dimension::DIMENSIONLESS, standard = Unity)]
pub enum Unitless {
    /// The number one.
    #[unit(
        symbol = "",
        ratio = 1.0,
        aliases = ["1", "-", "unitless"],
        systems = [
            MetreKilogramSecondKelvin,
            MillimetreGramSecondKelvin,
            FootPoundSecondRankine,
            InchPoundSecondRankine
        ]
    )]
    Unity,
}

/// Kind marker for Poisson's ratio.
pub enum PoissonRatioKind {}
impl Kind for PoissonRatioKind {
    type Unit = Unitless;
    const NAME: &'static str = "PoissonRatio";
}

/// Kind marker for the heat capacity ratio.
pub enum SpecificHeatRatioKind {}
impl Kind for SpecificHeatRatioKind {
    type Unit = Unitless;
    const NAME: &'static str = "SpecificHeatRatio";
}

/// Negative ratio of transverse to axial strain.
pub type PoissonRatio = Scalar<PoissonRatioKind>;

/// Ratio of isobaric to isochoric specific heat capacity, `γ`.
pub type SpecificHeatRatio = Scalar<SpecificHeatRatioKind>;

impl<K: Kind<Unit = Unitless>> Scalar<K> {
    /// Wraps a pure number.
    #[inline]
    pub const fn from_number(value: f64) -> Self {
        Self::from_standard(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::family_checks::assert_family_invariants;
    use crate::{System, Unit};

    #[test]
    fn family_invariants() {
        assert_family_invariants::<Unitless>();
    }

    #[test]
    fn empty_symbol() {
        assert_eq!(Unitless::Unity.abbreviation(), "");
        assert_eq!(Unitless::parse(""), Ok(Unitless::Unity));
        assert_eq!(Unitless::parse("1"), Ok(Unitless::Unity));
        assert_eq!(SpecificHeatRatio::from_number(1.4).to_string(), "1.4");
    }

    #[test]
    fn every_system_maps_to_unity() {
        for system in System::ALL {
            assert_eq!(Unitless::in_system(system), Ok(Unitless::Unity));
        }
        assert_eq!(PoissonRatio::from_number(0.3).in_system(System::InchPoundSecondRankine), Ok(0.3));
    }
}
