//! Thermal conductivity.
//!
//! In both foot-pound and inch-pound systems the consistent unit reduces to pound-force per second per degree
//! Rankine, so one unit serves both.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of thermal conductivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "thermal conductivity",
    dimension = Dimension::new(1, 1, -3, 0, -1, 0, 0),
    standard = WattPerMetrePerKelvin
)]
pub enum ThermalConductivityUnit {
    /// Watt per metre per kelvin (W/m/K).
    #[unit(
        symbol = "W/m/K",
        ratio = 1.0,
        aliases = ["W/(m·K)", "W/m-K", "W/m·K"],
        systems = [MetreKilogramSecondKelvin]
    )]
    WattPerMetrePerKelvin,
    /// Nanowatt per millimetre per kelvin (nW/mm/K).
    #[unit(
        symbol = "nW/mm/K",
        ratio = 1e-9 / 1e-3,
        aliases = ["nW/(mm·K)", "nW/mm-K"],
        systems = [MillimetreGramSecondKelvin]
    )]
    NanowattPerMillimetrePerKelvin,
    /// Watt per centimetre per kelvin (W/cm/K).
    #[unit(symbol = "W/cm/K", ratio = 100.0, aliases = ["W/(cm·K)", "W/cm-K"])]
    WattPerCentimetrePerKelvin,
    /// Pound-force per second per degree Rankine (lbf/s/°R).
    #[unit(
        symbol = "lbf/s/°R",
        ratio = constants::POUND_FORCE / constants::RANKINE,
        aliases = ["lbf/s/R", "lbf/(s·°R)", "ft·lbf/s/ft/°R", "in·lbf/s/in/°R"],
        systems = [FootPoundSecondRankine, InchPoundSecondRankine]
    )]
    PoundForcePerSecondPerRankine,
}

/// Kind marker for thermal conductivity.
pub enum ThermalConductivityKind {}
impl Kind for ThermalConductivityKind {
    type Unit = ThermalConductivityUnit;
    const NAME: &'static str = "ThermalConductivity";
}

/// Rate of heat flow per unit length and temperature difference.
pub type ThermalConductivity = Scalar<ThermalConductivityKind>;
