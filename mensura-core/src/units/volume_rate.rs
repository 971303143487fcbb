//! Volumetric flow rate.
//!
//! Every entry of the table is derived from the cube of a length ratio, so cubic units and litres agree to
//! floating-point precision.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of volume per unit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "volume rate",
    dimension = Dimension::new(3, 0, -1, 0, 0, 0, 0),
    standard = CubicMetrePerSecond
)]
pub enum VolumeRateUnit {
    /// Cubic mile per second (mi^3/s).
    #[unit(
        symbol = "mi^3/s",
        ratio = constants::cubed(constants::MILE),
        aliases = ["mi^3/sec", "mi3/s", "mi3/sec"]
    )]
    CubicMilePerSecond,
    /// Cubic kilometre per second (km^3/s).
    #[unit(
        symbol = "km^3/s",
        ratio = constants::cubed(1000.0),
        aliases = ["km^3/sec", "km3/s", "km3/sec"]
    )]
    CubicKilometrePerSecond,
    /// Cubic yard per second (yd^3/s).
    #[unit(
        symbol = "yd^3/s",
        ratio = constants::cubed(constants::YARD),
        aliases = ["yd^3/sec", "yd3/s", "yd3/sec"]
    )]
    CubicYardPerSecond,
    /// Cubic metre per second (m^3/s).
    #[unit(
        symbol = "m^3/s",
        ratio = 1.0,
        aliases = ["m^3/sec", "m3/s", "m3/sec"],
        systems = [MetreKilogramSecondKelvin]
    )]
    CubicMetrePerSecond,
    /// Cubic foot per second (ft^3/s).
    #[unit(
        symbol = "ft^3/s",
        ratio = constants::cubed(constants::FOOT),
        aliases = ["ft^3/sec", "ft3/s", "ft3/sec"],
        systems = [FootPoundSecondRankine]
    )]
    CubicFootPerSecond,
    /// Cubic decimetre per second (dm^3/s).
    #[unit(
        symbol = "dm^3/s",
        ratio = constants::cubed(0.1),
        aliases = ["dm^3/sec", "dm3/s", "dm3/sec"]
    )]
    CubicDecimetrePerSecond,
    /// Cubic inch per second (in^3/s).
    #[unit(
        symbol = "in^3/s",
        ratio = constants::cubed(constants::INCH),
        aliases = ["in^3/sec", "in3/s", "in3/sec"],
        systems = [InchPoundSecondRankine]
    )]
    CubicInchPerSecond,
    /// Cubic centimetre per second (cm^3/s).
    #[unit(
        symbol = "cm^3/s",
        ratio = constants::cubed(0.01),
        aliases = ["cm^3/sec", "cm3/s", "cm3/sec"]
    )]
    CubicCentimetrePerSecond,
    /// Cubic millimetre per second (mm^3/s).
    #[unit(
        symbol = "mm^3/s",
        ratio = constants::cubed(0.001),
        aliases = ["mm^3/sec", "mm3/s", "mm3/sec"],
        systems = [MillimetreGramSecondKelvin]
    )]
    CubicMillimetrePerSecond,
    /// Cubic milli-inch per second (thou^3/s).
    #[unit(
        symbol = "thou^3/s",
        ratio = constants::cubed(constants::MILLIINCH),
        aliases = [
            "thou^3/sec", "thou3/s", "thou3/sec", "mil^3/s", "mil^3/sec", "mil3/s",
            "mil3/sec", "milin^3/s", "milin^3/sec", "milin3/s", "milin3/sec",
            "milliinch^3/s", "milliinch^3/sec", "milliinch3/s", "milliinch3/sec",
        ]
    )]
    CubicMilliinchPerSecond,
    /// Cubic micrometre per second (μm^3/s).
    #[unit(
        symbol = "μm^3/s",
        ratio = constants::cubed(0.000001),
        aliases = ["μm^3/sec", "μm3/s", "μm3/sec", "um^3/s", "um^3/sec", "um3/s", "um3/sec"]
    )]
    CubicMicrometrePerSecond,
    /// Cubic micro-inch per second (μin^3/s).
    #[unit(
        symbol = "μin^3/s",
        ratio = constants::cubed(constants::MICROINCH),
        aliases = [
            "μin^3/sec", "μin3/s", "μin3/sec", "uin^3/s", "uin^3/sec", "uin3/s",
            "uin3/sec",
        ]
    )]
    CubicMicroinchPerSecond,

    /// Litre per second (L/s).
    #[unit(
        symbol = "L/s",
        ratio = constants::cubed(0.1),
        aliases = ["l/s", "L/sec", "l/sec", "litre/s", "liter/s"]
    )]
    LitrePerSecond,
    /// Millilitre per second (mL/s).
    #[unit(
        symbol = "mL/s",
        ratio = constants::cubed(0.01),
        aliases = ["ml/s", "mL/sec", "ml/sec"]
    )]
    MillilitrePerSecond,
}

/// Kind marker for volumetric flow rate.
pub enum VolumeRateKind {}
impl Kind for VolumeRateKind {
    type Unit = VolumeRateUnit;
    const NAME: &'static str = "VolumeRate";
}

/// Volume passing per unit time.
pub type VolumeRate = Scalar<VolumeRateKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::family_checks::assert_family_invariants;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn family_invariants() {
        assert_family_invariants::<VolumeRateUnit>();
    }

    #[test]
    fn table_agrees_with_cubed_length_ratios() {
        use VolumeRateUnit::*;
        let c = VolumeRateUnit::conversion(CubicFootPerSecond, CubicInchPerSecond);
        assert_relative_eq!(c.factor(), 1728.0, max_relative = 1e-12);
        let c = VolumeRateUnit::conversion(CubicYardPerSecond, CubicFootPerSecond);
        assert_relative_eq!(c.factor(), 27.0, max_relative = 1e-12);
        let c = VolumeRateUnit::conversion(CubicMetrePerSecond, LitrePerSecond);
        assert_relative_eq!(c.factor(), 1000.0, max_relative = 1e-12);
        let c = VolumeRateUnit::conversion(CubicCentimetrePerSecond, MillilitrePerSecond);
        assert_relative_eq!(c.factor(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn cubic_kilometre_litre_round_trip() {
        let flow = VolumeRate::new(1.0, VolumeRateUnit::CubicKilometrePerSecond);
        let litres = flow.to(VolumeRateUnit::LitrePerSecond);
        assert_relative_eq!(litres, 1e12, max_relative = 1e-12);
        let back = VolumeRate::new(litres, VolumeRateUnit::LitrePerSecond);
        assert_relative_eq!(back.to(VolumeRateUnit::CubicKilometrePerSecond), 1.0, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_every_pair_round_trips(
            i in 0usize..VolumeRateUnit::ALL.len(),
            j in 0usize..VolumeRateUnit::ALL.len(),
            x in -1e9..1e9f64,
        ) {
            let a = VolumeRateUnit::ALL[i];
            let b = VolumeRateUnit::ALL[j];
            let there = VolumeRateUnit::convert_value(x, a, b);
            let back = VolumeRateUnit::convert_value(there, b, a);
            prop_assert!((back - x).abs() <= 1e-9 * (1.0 + x.abs()));
        }
    }
}
