//! Area per unit time: thermal diffusivity and kinematic viscosity.

use crate::{constants, Dimension, Kind, Scalar};
use mensura_derive::Unit;

/// Units of area per unit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "diffusivity",
    dimension = Dimension::new(2, 0, -1, 0, 0, 0, 0),
    standard = SquareMetrePerSecond
)]
pub enum DiffusivityUnit {
    /// Square mile per second (mi^2/s).
    #[unit(
        symbol = "mi^2/s",
        ratio = constants::squared(constants::MILE),
        aliases = ["mi^2/sec", "mi2/s", "mi2/sec"]
    )]
    SquareMilePerSecond,
    /// Square kilometre per second (km^2/s).
    #[unit(
        symbol = "km^2/s",
        ratio = constants::squared(1000.0),
        aliases = ["km^2/sec", "km2/s", "km2/sec"]
    )]
    SquareKilometrePerSecond,
    /// Square yard per second (yd^2/s).
    #[unit(
        symbol = "yd^2/s",
        ratio = constants::squared(constants::YARD),
        aliases = ["yd^2/sec", "yd2/s", "yd2/sec"]
    )]
    SquareYardPerSecond,
    /// Square metre per second (m^2/s).
    #[unit(
        symbol = "m^2/s",
        ratio = 1.0,
        aliases = ["m^2/sec", "m2/s", "m2/sec"],
        systems = [MetreKilogramSecondKelvin]
    )]
    SquareMetrePerSecond,
    /// Square foot per second (ft^2/s).
    #[unit(
        symbol = "ft^2/s",
        ratio = constants::squared(constants::FOOT),
        aliases = ["ft^2/sec", "ft2/s", "ft2/sec"],
        systems = [FootPoundSecondRankine]
    )]
    SquareFootPerSecond,
    /// Square decimetre per second (dm^2/s).
    #[unit(
        symbol = "dm^2/s",
        ratio = constants::squared(0.1),
        aliases = ["dm^2/sec", "dm2/s", "dm2/sec"]
    )]
    SquareDecimetrePerSecond,
    /// Square inch per second (in^2/s).
    #[unit(
        symbol = "in^2/s",
        ratio = constants::squared(constants::INCH),
        aliases = ["in^2/sec", "in2/s", "in2/sec"],
        systems = [InchPoundSecondRankine]
    )]
    SquareInchPerSecond,
    /// Square centimetre per second (cm^2/s).
    #[unit(
        symbol = "cm^2/s",
        ratio = constants::squared(0.01),
        aliases = ["cm^2/sec", "cm2/s", "cm2/sec"]
    )]
    SquareCentimetrePerSecond,
    /// Square millimetre per second (mm^2/s).
    #[unit(
        symbol = "mm^2/s",
        ratio = constants::squared(0.001),
        aliases = ["mm^2/sec", "mm2/s", "mm2/sec"],
        systems = [MillimetreGramSecondKelvin]
    )]
    SquareMillimetrePerSecond,
    /// Square milli-inch per second (thou^2/s).
    #[unit(
        symbol = "thou^2/s",
        ratio = constants::squared(constants::MILLIINCH),
        aliases = [
            "thou^2/sec", "thou2/s", "thou2/sec", "mil^2/s", "mil^2/sec", "mil2/s",
            "mil2/sec", "milin^2/s", "milin^2/sec", "milin2/s", "milin2/sec",
            "milliinch^2/s", "milliinch^2/sec", "milliinch2/s", "milliinch2/sec",
        ]
    )]
    SquareMilliinchPerSecond,
    /// Square micrometre per second (μm^2/s).
    #[unit(
        symbol = "μm^2/s",
        ratio = constants::squared(0.000001),
        aliases = ["μm^2/sec", "μm2/s", "μm2/sec", "um^2/s", "um^2/sec", "um2/s", "um2/sec"]
    )]
    SquareMicrometrePerSecond,
    /// Square micro-inch per second (μin^2/s).
    #[unit(
        symbol = "μin^2/s",
        ratio = constants::squared(constants::MICROINCH),
        aliases = [
            "μin^2/sec", "μin2/s", "μin2/sec", "uin^2/s", "uin^2/sec", "uin2/s",
            "uin2/sec",
        ]
    )]
    SquareMicroinchPerSecond,

    /// Stokes (St), one square centimetre per second.
    #[unit(symbol = "St", ratio = 1e-4, aliases = ["stokes"])]
    Stokes,
    /// Centistokes (cSt), one square millimetre per second.
    #[unit(symbol = "cSt", ratio = 1e-6, aliases = ["centistokes"])]
    Centistokes,
}

/// Kind marker for thermal diffusivity.
pub enum ThermalDiffusivityKind {}
impl Kind for ThermalDiffusivityKind {
    type Unit = DiffusivityUnit;
    const NAME: &'static str = "ThermalDiffusivity";
}

/// Kind marker for kinematic viscosity.
pub enum KinematicViscosityKind {}
impl Kind for KinematicViscosityKind {
    type Unit = DiffusivityUnit;
    const NAME: &'static str = "KinematicViscosity";
}

/// Rate at which heat spreads through a material.
pub type ThermalDiffusivity = Scalar<ThermalDiffusivityKind>;

/// Dynamic viscosity divided by density.
pub type KinematicViscosity = Scalar<KinematicViscosityKind>;
