//! Absolute temperature.
//!
//! Celsius and Fahrenheit readings are offset from absolute zero, so conversions in this family are affine.
//!
//! ```rust
//! use mensura_core::temperature::{Temperature, TemperatureUnit};
//!
//! let boiling = Temperature::new(100.0, TemperatureUnit::Celsius);
//! assert!((boiling.value() - 373.15).abs() < 1e-9);
//! assert!((boiling.to(TemperatureUnit::Fahrenheit) - 212.0).abs() < 1e-9);
//! ```

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of absolute temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(family = "temperature", dimension = Dimension::TEMPERATURE, standard = Kelvin)]
pub enum TemperatureUnit {
    /// Kelvin (K).
    #[unit(
        symbol = "K",
        ratio = 1.0,
        aliases = ["°K", "degK", "kelvin"],
        systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin]
    )]
    Kelvin,
    /// Degree Celsius (°C).
    #[unit(
        symbol = "°C",
        ratio = 1.0,
        offset = constants::CELSIUS_OFFSET,
        aliases = ["C", "degC", "celsius"]
    )]
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
    #[unit(
        symbol = "°F",
        ratio = constants::RANKINE,
        offset = constants::RANKINE * constants::FAHRENHEIT_OFFSET,
        aliases = ["F", "degF", "fahrenheit"]
    )]
    Fahrenheit,
}

/// Kind marker for absolute temperature.
pub enum TemperatureKind {}
impl Kind for TemperatureKind {
    type Unit = TemperatureUnit;
    const NAME: &'static str = "Temperature";
}

/// Absolute (thermodynamic) temperature.
pub type Temperature = Scalar<TemperatureKind>;
