//! Speed and velocity.

use crate::{constants, Dimension, Kind, Scalar, Vector};
use mensura_derive::Unit;

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "speed",
    dimension = Dimension::new(1, 0, -1, 0, 0, 0, 0),
    standard = MetrePerSecond
)]
pub enum SpeedUnit {
    /// Mile per second (mi/s).
    #[unit(symbol = "mi/s", ratio = constants::MILE, aliases = ["mi/sec"])]
    MilePerSecond,
    /// Kilometre per second (km/s).
    #[unit(symbol = "km/s", ratio = 1000.0, aliases = ["km/sec"])]
    KilometrePerSecond,
    /// Yard per second (yd/s).
    #[unit(symbol = "yd/s", ratio = constants::YARD, aliases = ["yd/sec"])]
    YardPerSecond,
    /// Metre per second (m/s).
    #[unit(symbol = "m/s", ratio = 1.0, aliases = ["m/sec"], systems = [MetreKilogramSecondKelvin])]
    MetrePerSecond,
    /// Foot per second (ft/s).
    #[unit(
        symbol = "ft/s",
        ratio = constants::FOOT,
        aliases = ["ft/sec"],
        systems = [FootPoundSecondRankine]
    )]
    FootPerSecond,
    /// Decimetre per second (dm/s).
    #[unit(symbol = "dm/s", ratio = 0.1, aliases = ["dm/sec"])]
    DecimetrePerSecond,
    /// Inch per second (in/s).
    #[unit(
        symbol = "in/s",
        ratio = constants::INCH,
        aliases = ["in/sec"],
        systems = [InchPoundSecondRankine]
    )]
    InchPerSecond,
    /// Centimetre per second (cm/s).
    #[unit(symbol = "cm/s", ratio = 0.01, aliases = ["cm/sec"])]
    CentimetrePerSecond,
    /// Millimetre per second (mm/s).
    #[unit(
        symbol = "mm/s",
        ratio = 0.001,
        aliases = ["mm/sec"],
        systems = [MillimetreGramSecondKelvin]
    )]
    MillimetrePerSecond,
    /// Milli-inch per second (thou/s).
    #[unit(
        symbol = "thou/s",
        ratio = constants::MILLIINCH,
        aliases = [
            "thou/sec", "mil/s", "mil/sec", "milin/s", "milin/sec", "milliinch/s",
            "milliinch/sec",
        ]
    )]
    MilliinchPerSecond,
    /// Micrometre per second (μm/s).
    #[unit(symbol = "μm/s", ratio = 0.000001, aliases = ["μm/sec", "um/s", "um/sec"])]
    MicrometrePerSecond,
    /// Micro-inch per second (μin/s).
    #[unit(
        symbol = "μin/s",
        ratio = constants::MICROINCH,
        aliases = ["μin/sec", "uin/s", "uin/sec"]
    )]
    MicroinchPerSecond,
    /// Mile per hour (mi/h).
    #[unit(symbol = "mi/h", ratio = constants::MILE / constants::HOUR, aliases = ["mph", "mi/hr"])]
    MilePerHour,
    /// Kilometre per hour (km/h).
    #[unit(
        symbol = "km/h",
        ratio = 1000.0 / constants::HOUR,
        aliases = ["kph", "km/hr", "kmh"]
    )]
    KilometrePerHour,
    /// Knot, one nautical mile per hour (kn).
    #[unit(
        symbol = "kn",
        ratio = constants::NAUTICAL_MILE / constants::HOUR,
        aliases = ["kt", "knot", "knots"]
    )]
    Knot,
}

/// Kind marker for speed and velocity.
pub enum SpeedKind {}
impl Kind for SpeedKind {
    type Unit = SpeedUnit;
    const NAME: &'static str = "Speed";
}

/// Magnitude of a velocity.
pub type Speed = Scalar<SpeedKind>;

/// Three-dimensional velocity vector.
pub type Velocity = Vector<SpeedKind>;
