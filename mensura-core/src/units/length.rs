//! Length and position.

use crate::{constants, Dimension, Kind, Scalar, Vector};
use mensura_derive::Unit;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(family = "length", dimension = Dimension::LENGTH, standard = Metre)]
pub enum LengthUnit {
    /// Mile (mi).
    #[unit(symbol = "mi", ratio = constants::MILE, aliases = ["mile", "miles"])]
    Mile,
    /// Kilometre (km).
    #[unit(
        symbol = "km",
        ratio = 1000.0,
        aliases = ["kilometre", "kilometres", "kilometer", "kilometers"]
    )]
    Kilometre,
    /// Yard (yd).
    #[unit(symbol = "yd", ratio = constants::YARD, aliases = ["yard", "yards"])]
    Yard,
    /// Metre (m).
    #[unit(
        symbol = "m",
        ratio = 1.0,
        aliases = ["metre", "metres", "meter", "meters"],
        systems = [MetreKilogramSecondKelvin]
    )]
    Metre,
    /// Foot (ft).
    #[unit(
        symbol = "ft",
        ratio = constants::FOOT,
        aliases = ["foot", "feet"],
        systems = [FootPoundSecondRankine]
    )]
    Foot,
    /// Decimetre (dm).
    #[unit(
        symbol = "dm",
        ratio = 0.1,
        aliases = ["decimetre", "decimetres", "decimeter", "decimeters"]
    )]
    Decimetre,
    /// Inch (in).
    #[unit(
        symbol = "in",
        ratio = constants::INCH,
        aliases = ["inch", "inches"],
        systems = [InchPoundSecondRankine]
    )]
    Inch,
    /// Centimetre (cm).
    #[unit(
        symbol = "cm",
        ratio = 0.01,
        aliases = ["centimetre", "centimetres", "centimeter", "centimeters"]
    )]
    Centimetre,
    /// Millimetre (mm).
    #[unit(
        symbol = "mm",
        ratio = 0.001,
        aliases = ["millimetre", "millimetres", "millimeter", "millimeters"],
        systems = [MillimetreGramSecondKelvin]
    )]
    Millimetre,
    /// Milli-inch (thou).
    #[unit(
        symbol = "thou",
        ratio = constants::MILLIINCH,
        aliases = ["mil", "milin", "milliinch", "milliinches"]
    )]
    Milliinch,
    /// Micrometre (μm).
    #[unit(
        symbol = "μm",
        ratio = 0.000001,
        aliases = ["um", "micrometre", "micrometres", "micrometer", "micrometers", "micron"]
    )]
    Micrometre,
    /// Micro-inch (μin).
    #[unit(
        symbol = "μin",
        ratio = constants::MICROINCH,
        aliases = ["uin", "microinch", "microinches"]
    )]
    Microinch,
    /// International nautical mile (nmi).
    #[unit(symbol = "nmi", ratio = constants::NAUTICAL_MILE, aliases = ["NM", "nautical mile"])]
    NauticalMile,
}

/// Kind marker for lengths and positions.
pub enum LengthKind {}
impl Kind for LengthKind {
    type Unit = LengthUnit;
    const NAME: &'static str = "Length";
}

/// A length (distance, size, magnitude of a position).
pub type Length = Scalar<LengthKind>;

/// Position vector.
///
/// ```rust
/// use mensura_core::length::{LengthUnit, Position};
///
/// let p = Position::new([3.0, 4.0, 0.0], LengthUnit::Foot);
/// assert!((p.magnitude().to(LengthUnit::Foot) - 5.0).abs() < 1e-12);
/// ```
pub type Position = Vector<LengthKind>;
