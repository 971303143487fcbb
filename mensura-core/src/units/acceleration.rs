//! Acceleration.
//!
//! This family carries the complete set of accepted spellings: every length prefix combines with the `/s^2`,
//! `/s2`, `/s/s`, `/sec^2`, `/sec2` and `/sec/sec` suffixes, the milli-inch also answers to `thou`, `mil` and
//! `milin`, and micro prefixes accept both `μ` and `u`.
//!
//! ```rust
//! use mensura_core::acceleration::{AccelerationMagnitude, AccelerationUnit};
//! use mensura_core::Unit;
//!
//! assert_eq!(AccelerationUnit::parse("km/s^2"), Ok(AccelerationUnit::KilometrePerSquareSecond));
//! assert_eq!(AccelerationUnit::parse("uin/sec/sec"), Ok(AccelerationUnit::MicroinchPerSquareSecond));
//! assert!(AccelerationUnit::parse("banana").is_err());
//!
//! let g = AccelerationMagnitude::new(1.0, AccelerationUnit::StandardGravity);
//! assert_eq!(g.value(), 9.80665);
//! ```

use crate::{constants, Dimension, Kind, Scalar, Vector};
use mensura_derive::Unit;

/// Units of acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(
    family = "acceleration",
    dimension = Dimension::new(1, 0, -2, 0, 0, 0, 0),
    standard = MetrePerSquareSecond
)]
pub enum AccelerationUnit {
    /// Mile per square second (mi/s^2).
    #[unit(
        symbol = "mi/s^2",
        ratio = constants::MILE,
        aliases = ["mi/s2", "mi/s/s", "mi/sec^2", "mi/sec2", "mi/sec/sec"]
    )]
    MilePerSquareSecond,
    /// Kilometre per square second (km/s^2).
    #[unit(
        symbol = "km/s^2",
        ratio = 1000.0,
        aliases = ["km/s2", "km/s/s", "km/sec^2", "km/sec2", "km/sec/sec"]
    )]
    KilometrePerSquareSecond,
    /// Yard per square second (yd/s^2).
    #[unit(
        symbol = "yd/s^2",
        ratio = constants::YARD,
        aliases = ["yd/s2", "yd/s/s", "yd/sec^2", "yd/sec2", "yd/sec/sec"]
    )]
    YardPerSquareSecond,
    /// Metre per square second (m/s^2).
    #[unit(
        symbol = "m/s^2",
        ratio = 1.0,
        aliases = ["m/s2", "m/s/s", "m/sec^2", "m/sec2", "m/sec/sec"],
        systems = [MetreKilogramSecondKelvin]
    )]
    MetrePerSquareSecond,
    /// Foot per square second (ft/s^2).
    #[unit(
        symbol = "ft/s^2",
        ratio = constants::FOOT,
        aliases = ["ft/s2", "ft/s/s", "ft/sec^2", "ft/sec2", "ft/sec/sec"],
        systems = [FootPoundSecondRankine]
    )]
    FootPerSquareSecond,
    /// Decimetre per square second (dm/s^2).
    #[unit(
        symbol = "dm/s^2",
        ratio = 0.1,
        aliases = ["dm/s2", "dm/s/s", "dm/sec^2", "dm/sec2", "dm/sec/sec"]
    )]
    DecimetrePerSquareSecond,
    /// Inch per square second (in/s^2).
    #[unit(
        symbol = "in/s^2",
        ratio = constants::INCH,
        aliases = ["in/s2", "in/s/s", "in/sec^2", "in/sec2", "in/sec/sec"],
        systems = [InchPoundSecondRankine]
    )]
    InchPerSquareSecond,
    /// Centimetre per square second (cm/s^2).
    #[unit(
        symbol = "cm/s^2",
        ratio = 0.01,
        aliases = ["cm/s2", "cm/s/s", "cm/sec^2", "cm/sec2", "cm/sec/sec"]
    )]
    CentimetrePerSquareSecond,
    /// Millimetre per square second (mm/s^2).
    #[unit(
        symbol = "mm/s^2",
        ratio = 0.001,
        aliases = ["mm/s2", "mm/s/s", "mm/sec^2", "mm/sec2", "mm/sec/sec"],
        systems = [MillimetreGramSecondKelvin]
    )]
    MillimetrePerSquareSecond,
    /// Milli-inch per square second (thou/s^2).
    #[unit(
        symbol = "thou/s^2",
        ratio = constants::MILLIINCH,
        aliases = [
            "thou/s2", "thou/s/s", "thou/sec^2", "thou/sec2", "thou/sec/sec", "mil/s^2",
            "mil/s2", "mil/s/s", "mil/sec^2", "mil/sec2", "mil/sec/sec", "milin/s^2",
            "milin/s2", "milin/s/s", "milin/sec^2", "milin/sec2", "milin/sec/sec",
            "milliinch/s^2", "milliinch/s2", "milliinch/s/s", "milliinch/sec^2",
            "milliinch/sec2", "milliinch/sec/sec",
        ]
    )]
    MilliinchPerSquareSecond,
    /// Micrometre per square second (μm/s^2).
    #[unit(
        symbol = "μm/s^2",
        ratio = 0.000001,
        aliases = [
            "μm/s2", "μm/s/s", "μm/sec^2", "μm/sec2", "μm/sec/sec", "um/s^2", "um/s2",
            "um/s/s", "um/sec^2", "um/sec2", "um/sec/sec",
        ]
    )]
    MicrometrePerSquareSecond,
    /// Micro-inch per square second (μin/s^2).
    #[unit(
        symbol = "μin/s^2",
        ratio = constants::MICROINCH,
        aliases = [
            "μin/s2", "μin/s/s", "μin/sec^2", "μin/sec2", "μin/sec/sec", "uin/s^2",
            "uin/s2", "uin/s/s", "uin/sec^2", "uin/sec2", "uin/sec/sec",
        ]
    )]
    MicroinchPerSquareSecond,
    /// Standard gravity (g₀ = 9.80665 m/s^2).
    #[unit(symbol = "g0", ratio = constants::STANDARD_GRAVITY, aliases = ["g₀", "gn"])]
    StandardGravity,
}

/// Kind marker for acceleration.
pub enum AccelerationKind {}
impl Kind for AccelerationKind {
    type Unit = AccelerationUnit;
    const NAME: &'static str = "Acceleration";
}

/// Magnitude of an acceleration.
pub type AccelerationMagnitude = Scalar<AccelerationKind>;

/// Three-dimensional acceleration vector.
pub type Acceleration = Vector<AccelerationKind>;
