//! Specific heat capacities and the specific gas constant.
//!
//! All three kinds are energy per unit mass per unit temperature and share [`SpecificHeatCapacityUnit`].

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of energy per unit mass per unit temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "specific heat capacity",
    dimension = Dimension::new(2, 0, -2, 0, -1, 0, 0),
    standard = JoulePerKilogramPerKelvin
)]
pub enum SpecificHeatCapacityUnit {
    /// Joule per kilogram per kelvin (J/kg/K).
    #[unit(
        symbol = "J/kg/K",
        ratio = 1.0,
        aliases = ["J/(kg·K)", "J/kg-K", "J/kg·K", "m^2/s^2/K"],
        systems = [MetreKilogramSecondKelvin]
    )]
    JoulePerKilogramPerKelvin,
    /// Nanojoule per gram per kelvin (nJ/g/K).
    #[unit(
        symbol = "nJ/g/K",
        ratio = 1e-9 / 1e-3,
        aliases = ["nJ/(g·K)", "nJ/g-K"],
        systems = [MillimetreGramSecondKelvin]
    )]
    NanojoulePerGramPerKelvin,
    /// Kilojoule per kilogram per kelvin (kJ/kg/K).
    #[unit(symbol = "kJ/kg/K", ratio = 1e3, aliases = ["kJ/(kg·K)", "kJ/kg-K"])]
    KilojoulePerKilogramPerKelvin,
    /// Joule per gram per kelvin (J/g/K).
    #[unit(symbol = "J/g/K", ratio = 1e3, aliases = ["J/(g·K)", "J/g-K"])]
    JoulePerGramPerKelvin,
    /// Foot pound-force per slug per degree Rankine (ft·lbf/slug/°R).
    #[unit(
        symbol = "ft·lbf/slug/°R",
        ratio = constants::FOOT * constants::POUND_FORCE / (constants::SLUG * constants::RANKINE),
        aliases = ["ft*lbf/slug/°R", "ft·lbf/slug/R", "ft^2/s^2/°R"],
        systems = [FootPoundSecondRankine]
    )]
    FootPoundForcePerSlugPerRankine,
    /// Inch pound-force per slinch per degree Rankine (in·lbf/slinch/°R).
    #[unit(
        symbol = "in·lbf/slinch/°R",
        ratio = constants::INCH * constants::POUND_FORCE / (constants::SLINCH * constants::RANKINE),
        aliases = ["in*lbf/slinch/°R", "in·lbf/slinch/R", "in^2/s^2/°R"],
        systems = [InchPoundSecondRankine]
    )]
    InchPoundForcePerSlinchPerRankine,
}

/// Kind marker for the specific heat capacity at constant pressure.
pub enum SpecificIsobaricHeatCapacityKind {}
impl Kind for SpecificIsobaricHeatCapacityKind {
    type Unit = SpecificHeatCapacityUnit;
    const NAME: &'static str = "SpecificIsobaricHeatCapacity";
}

/// Kind marker for the specific heat capacity at constant volume.
pub enum SpecificIsochoricHeatCapacityKind {}
impl Kind for SpecificIsochoricHeatCapacityKind {
    type Unit = SpecificHeatCapacityUnit;
    const NAME: &'static str = "SpecificIsochoricHeatCapacity";
}

/// Kind marker for the specific gas constant.
pub enum SpecificGasConstantKind {}
impl Kind for SpecificGasConstantKind {
    type Unit = SpecificHeatCapacityUnit;
    const NAME: &'static str = "SpecificGasConstant";
}

/// Specific heat capacity at constant pressure, `c_p`.
pub type SpecificIsobaricHeatCapacity = Scalar<SpecificIsobaricHeatCapacityKind>;

/// Specific heat capacity at constant volume, `c_v`.
pub type SpecificIsochoricHeatCapacity = Scalar<SpecificIsochoricHeatCapacityKind>;

/// Universal gas constant divided by molar mass, `R_s`.
pub type SpecificGasConstant = Scalar<SpecificGasConstantKind>;
