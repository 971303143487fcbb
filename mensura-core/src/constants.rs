//! Exact defining constants from which every conversion ratio is derived.
//!
//! All values are expressed in the SI standard unit of their dimension. Area and volume ratios are built with
//! [`squared`] and [`cubed`] rather than written out, so each family traces back to the same few literals.

/// Inch in metres (exact by definition).
pub const INCH: f64 = 0.0254;
/// Foot in metres.
pub const FOOT: f64 = 0.3048;
/// Yard in metres.
pub const YARD: f64 = 0.9144;
/// International mile in metres.
pub const MILE: f64 = 1609.344;
/// Thousandth of an inch (thou, mil) in metres.
pub const MILLIINCH: f64 = 0.0000254;
/// Millionth of an inch in metres.
pub const MICROINCH: f64 = 0.0000000254;
/// International nautical mile in metres.
pub const NAUTICAL_MILE: f64 = 1852.0;

/// Avoirdupois pound in kilograms.
pub const POUND: f64 = 0.45359237;
/// Standard acceleration of gravity in m/s².
pub const STANDARD_GRAVITY: f64 = 9.80665;
/// Pound-force in newtons.
pub const POUND_FORCE: f64 = POUND * STANDARD_GRAVITY;
/// Slug (lbf·s²/ft) in kilograms.
pub const SLUG: f64 = POUND_FORCE / FOOT;
/// Slinch (lbf·s²/in) in kilograms.
pub const SLINCH: f64 = POUND_FORCE / INCH;

/// Rankine (and Fahrenheit) degree in kelvin.
pub const RANKINE: f64 = 5.0 / 9.0;
/// Kelvin value of 0 °C.
pub const CELSIUS_OFFSET: f64 = 273.15;
/// Rankine value of 0 °F.
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Standard atmosphere in pascals.
pub const STANDARD_ATMOSPHERE: f64 = 101_325.0;
/// Bar in pascals.
pub const BAR: f64 = 100_000.0;

/// Minute in seconds.
pub const MINUTE: f64 = 60.0;
/// Hour in seconds.
pub const HOUR: f64 = 3_600.0;
/// Day in seconds.
pub const DAY: f64 = 86_400.0;

/// Bits per byte.
pub const BYTE: f64 = 8.0;
/// Binary prefix multiplier (2¹⁰).
pub const KIBI: f64 = 1024.0;

/// `x²`, for area-based ratios.
#[inline]
pub const fn squared(x: f64) -> f64 {
    x * x
}

/// `x³`, for volume-based ratios.
#[inline]
pub const fn cubed(x: f64) -> f64 {
    x * x * x
}
