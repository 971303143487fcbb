//! Temperature gradients.

use crate::{constants, Dimension, Kind, Scalar, Vector};
use mensura_derive::Unit;

/// Units of temperature gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "temperature gradient",
    dimension = Dimension::new(-1, 0, 0, 0, 1, 0, 0),
    standard = KelvinPerMetre
)]
pub enum TemperatureGradientUnit {
    /// Kelvin per metre (K/m).
    #[unit(symbol = "K/m", ratio = 1.0, systems = [MetreKilogramSecondKelvin])]
    KelvinPerMetre,
    /// Kelvin per millimetre (K/mm).
    #[unit(symbol = "K/mm", ratio = 1000.0, systems = [MillimetreGramSecondKelvin])]
    KelvinPerMillimetre,
    /// Degree Celsius per metre (°C/m).
    #[unit(symbol = "°C/m", ratio = 1.0, aliases = ["C/m", "degC/m"])]
    CelsiusPerMetre,
    /// Degree Celsius per millimetre (°C/mm).
    #[unit(symbol = "°C/mm", ratio = 1000.0, aliases = ["C/mm", "degC/mm"])]
    CelsiusPerMillimetre,
    /// Degree Rankine per foot (°R/ft).
    #[unit(
        symbol = "°R/ft",
        ratio = constants::RANKINE / constants::FOOT,
        aliases = ["R/ft", "degR/ft"],
        systems = [FootPoundSecondRankine]
    )]
    RankinePerFoot,
    /// Degree Rankine per inch (°R/in).
    #[unit(
        symbol = "°R/in",
        ratio = constants::RANKINE / constants::INCH,
        aliases = ["R/in", "degR/in"],
        systems = [InchPoundSecondRankine]
    )]
    RankinePerInch,
    /// Degree Fahrenheit per foot (°F/ft).
    #[unit(symbol = "°F/ft", ratio = constants::RANKINE / constants::FOOT, aliases = ["F/ft", "degF/ft"])]
    FahrenheitPerFoot,
    /// Degree Fahrenheit per inch (°F/in).
    #[unit(symbol = "°F/in", ratio = constants::RANKINE / constants::INCH, aliases = ["F/in", "degF/in"])]
    FahrenheitPerInch,
}

/// Kind marker for temperature gradients.
pub enum TemperatureGradientKind {}
impl Kind for TemperatureGradientKind {
    type Unit = TemperatureGradientUnit;
    const NAME: &'static str = "TemperatureGradient";
}

/// Magnitude of a temperature gradient.
pub type TemperatureGradientMagnitude = Scalar<TemperatureGradientKind>;

/// Three-dimensional temperature gradient.
pub type TemperatureGradient = Vector<TemperatureGradientKind>;
