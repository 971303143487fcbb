//! Plane angles.
//!
//! Angles are stored in radians. Every system of units uses the radian, so [`Angle::in_system`] never fails.
//!
//! ```rust
//! use mensura_core::angle::{Angle, AngleUnit};
//!
//! let right = Angle::new(90.0, AngleUnit::Degree);
//! assert!((right.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((right.sin() - 1.0).abs() < 1e-12);
//! assert!((Angle::new(370.0, AngleUnit::Degree).wrap_signed().to(AngleUnit::Degree) - 10.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Kind, Scalar};
use core::f64::consts::{PI, TAU};
use mensura_derive::Unit;

/// Units of plane angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(family = "angle", dimension = Dimension::DIMENSIONLESS, standard = Radian)]
pub enum AngleUnit {
    /// Radian (rad).
    #[unit(
        symbol = "rad",
        ratio = 1.0,
        aliases = ["radian", "radians"],
        systems = [
            MetreKilogramSecondKelvin,
            MillimetreGramSecondKelvin,
            FootPoundSecondRankine,
            InchPoundSecondRankine
        ]
    )]
    Radian,
    /// Degree (deg, °).
    #[unit(symbol = "deg", ratio = PI / 180.0, aliases = ["degree", "degrees", "°"])]
    Degree,
    /// Arcminute, a sixtieth of a degree.
    #[unit(
        symbol = "arcmin",
        ratio = PI / 10_800.0,
        aliases = ["'", "am", "arcminute", "arcminutes"]
    )]
    Arcminute,
    /// Arcsecond, a sixtieth of an arcminute.
    #[unit(
        symbol = "arcsec",
        ratio = PI / 648_000.0,
        aliases = ["\"", "as", "arcs", "arcsecond", "arcseconds"]
    )]
    Arcsecond,
    /// Full revolution.
    #[unit(symbol = "rev", ratio = TAU, aliases = ["revolution", "revolutions", "turn", "turns"])]
    Revolution,
}

/// Kind marker for plane angles.
pub enum AngleKind {}
impl Kind for AngleKind {
    type Unit = AngleUnit;
    const NAME: &'static str = "Angle";
}

/// A plane angle.
pub type Angle = Scalar<AngleKind>;

impl Angle {
    /// Half a revolution.
    pub const HALF_TURN: Angle = Angle::from_standard(PI);
    /// One full revolution.
    pub const FULL_TURN: Angle = Angle::from_standard(TAU);

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.value().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.value().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.value().tan()
    }

    /// Wraps into `[0, 2π)`.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        Self::from_standard(self.value().rem_euclid(TAU))
    }

    /// Wraps into `(-π, π]`.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let y = (self.value() + PI).rem_euclid(TAU) - PI;
        Self::from_standard(if y <= -PI { y + TAU } else { y })
    }

    /// Smallest signed separation, in `(-π, π]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }
}
