//! Temperature differences.
//!
//! A difference of one degree Celsius equals a difference of one kelvin, so this family converts by ratio alone.
//! Absolute temperatures, which need an offset, live in [`temperature`](crate::temperature).

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of temperature difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(family = "temperature difference", dimension = Dimension::TEMPERATURE, standard = Kelvin)]
pub enum TemperatureDifferenceUnit {
    /// Kelvin (K).
    #[unit(
        symbol = "K",
        ratio = 1.0,
        aliases = ["°K", "degK", "kelvin"],
        systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin]
    )]
    Kelvin,
    /// Degree Celsius (°C).
    #[unit(symbol = "°C", ratio = 1.0, aliases = ["C", "degC", "celsius"])]
    Celsius,
    /// Degree Rankine (°R).
    #[unit(
        symbol = "°R",
        ratio = constants::RANKINE,
        aliases = ["R", "degR", "rankine"],
        systems = [FootPoundSecondRankine, InchPoundSecondRankine]
    )]
    Rankine,
    /// Degree Fahrenheit (°F).
    #[unit(symbol = "°F", ratio = constants::RANKINE, aliases = ["F", "degF", "fahrenheit"])]
    Fahrenheit,
}

/// Kind marker for temperature differences.
pub enum TemperatureDifferenceKind {}
impl Kind for TemperatureDifferenceKind {
    type Unit = TemperatureDifferenceUnit;
    const NAME: &'static str = "TemperatureDifference";
}

/// Difference between two temperatures.
pub type TemperatureDifference = Scalar<TemperatureDifferenceKind>;
