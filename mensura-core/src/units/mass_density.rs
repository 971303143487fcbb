//! Mass density.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of mass per unit volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "mass density",
    dimension = Dimension::new(-3, 1, 0, 0, 0, 0, 0),
    standard = KilogramPerCubicMetre
)]
pub enum MassDensityUnit {
    /// Kilogram per cubic metre (kg/m^3).
    #[unit(
        symbol = "kg/m^3",
        ratio = 1.0,
        aliases = ["kg/m3"],
        systems = [MetreKilogramSecondKelvin]
    )]
    KilogramPerCubicMetre,
    /// Gram per cubic millimetre (g/mm^3).
    #[unit(
        symbol = "g/mm^3",
        ratio = 1e-3 / constants::cubed(1e-3),
        aliases = ["g/mm3"],
        systems = [MillimetreGramSecondKelvin]
    )]
    GramPerCubicMillimetre,
    /// Gram per cubic centimetre (g/cm^3).
    #[unit(symbol = "g/cm^3", ratio = 1e-3 / constants::cubed(1e-2), aliases = ["g/cm3", "g/cc", "g/mL"])]
    GramPerCubicCentimetre,
    /// Slug per cubic foot (slug/ft^3).
    #[unit(
        symbol = "slug/ft^3",
        ratio = constants::SLUG / constants::cubed(constants::FOOT),
        aliases = ["slug/ft3"],
        systems = [FootPoundSecondRankine]
    )]
    SlugPerCubicFoot,
    /// Slinch per cubic inch (slinch/in^3).
    #[unit(
        symbol = "slinch/in^3",
        ratio = constants::SLINCH / constants::cubed(constants::INCH),
        aliases = ["slinch/in3"],
        systems = [InchPoundSecondRankine]
    )]
    SlinchPerCubicInch,
    /// Pound per cubic foot (lb/ft^3).
    #[unit(
        symbol = "lb/ft^3",
        ratio = constants::POUND / constants::cubed(constants::FOOT),
        aliases = ["lb/ft3", "lbm/ft^3"]
    )]
    PoundPerCubicFoot,
    /// Pound per cubic inch (lb/in^3).
    #[unit(
        symbol = "lb/in^3",
        ratio = constants::POUND / constants::cubed(constants::INCH),
        aliases = ["lb/in3", "lbm/in^3"]
    )]
    PoundPerCubicInch,
}

/// Kind marker for mass density.
pub enum MassDensityKind {}
impl Kind for MassDensityKind {
    type Unit = MassDensityUnit;
    const NAME: &'static str = "MassDensity";
}

/// Mass per unit volume.
pub type MassDensity = Scalar<MassDensityKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::family_checks::assert_family_invariants;
    use approx::assert_relative_eq;

    #[test]
    fn family_invariants() {
        assert_family_invariants::<MassDensityUnit>();
    }

    #[test]
    fn water() {
        let water = MassDensity::new(1.0, MassDensityUnit::GramPerCubicCentimetre);
        assert_relative_eq!(water.value(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(
            water.to(MassDensityUnit::PoundPerCubicFoot),
            62.42796057614462,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            water.to(MassDensityUnit::GramPerCubicMillimetre),
            1e-3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn slugs_and_slinches() {
        let d = MassDensity::new(1.0, MassDensityUnit::SlinchPerCubicInch);
        // 1 slinch = 12 slug, 1 in^3 = 1/1728 ft^3
        assert_relative_eq!(d.to(MassDensityUnit::SlugPerCubicFoot), 12.0 * 1728.0, max_relative = 1e-12);
    }
}
