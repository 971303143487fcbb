//! Core type system for physical quantities with run-time unit families.
//!
//! `mensura-core` models quantities the way engineering codes exchange them:
//!
//! - A *unit family* is an enum implementing [`Unit`] (derived with `#[derive(Unit)]`). It knows its abbreviations,
//!   accepted spellings, standard unit, conversion table and the consistent unit of every [`System`] it maps.
//! - A *kind* is an uninhabited marker implementing [`Kind`]. Several kinds may share one family (thermal diffusivity
//!   and kinematic viscosity are both area per time), and a scalar and a vector of the same kind share one marker.
//! - A [`Scalar<K>`] or [`Vector<K>`] stores its value in the standard unit of `K`'s family. Units only matter at the
//!   boundary: [`Scalar::new`] converts in, [`Scalar::to`] converts out.
//! - [`Direction`] is a unit vector. `Scalar<K> * Direction` gives a `Vector<K>`.
//! - The [`relations`] between kinds (speed over time is acceleration, and so on) are operator impls checked
//!   against each kind's [`Dimension`] at compile time.
//!
//! Most users should depend on `mensura` (the facade crate).
//!
//! # What this crate solves
//!
//! - Compile-time separation of kinds, including kinds that share a dimension.
//! - Run-time unit selection from strings: `"km/s^2".parse::<AccelerationUnit>()`.
//! - Conversion to the consistent unit of a system of units (m·kg·s·K, mm·g·s·K, ft·lbf·s·°R, in·lbf·s·°R).
//! - Affine conversions for absolute temperatures.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (values are `f64`).
//! - Arbitrary unit expressions: only the predefined families and relations exist.
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::acceleration::{AccelerationMagnitude, AccelerationUnit};
//! use mensura_core::System;
//!
//! let a = AccelerationMagnitude::new(10.0, AccelerationUnit::MetrePerSquareSecond);
//! assert!((a.to(AccelerationUnit::FootPerSquareSecond) - 32.8084).abs() < 1e-4);
//! assert_eq!(a.print_in_system(System::InchPoundSecondRankine).unwrap(), "393.7007874015748");
//!
//! let unit: AccelerationUnit = "km/s^2".parse().unwrap();
//! assert_eq!(unit, AccelerationUnit::KilometrePerSquareSecond);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for quantities, directions, [`Dimension`] and [`System`], plus
//!   `serde_with_unit` for self-describing `{ "value", "unit" }` fields.
//!
//! # Logging
//!
//! Registry construction and rejected spellings are reported through the [`log`] facade. No logger is installed.
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with the crate's [`Error`]. Arithmetic follows IEEE-754: NaN and infinities
//! propagate, except in the checked relations that report [`Error::DivisionByZero`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod constants;
mod conversion;
mod dimension;
mod direction;
mod error;
pub mod format;
mod macros;
mod quantity;
mod registry;
pub mod relations;
mod system;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use conversion::{Conversion, ConversionTable};
pub use dimension::{BaseDimension, Dimension};
pub use direction::Direction;
pub use error::{Error, Result};
pub use mensura_derive::Unit;
pub use quantity::{Kind, Scalar};
pub use registry::Registry;
pub use system::System;
pub use unit::Unit;
pub use vector::Vector;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit families
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::acceleration;
pub use units::angle;
pub use units::diffusivity;
pub use units::dynamic_viscosity;
pub use units::frequency;
pub use units::length;
pub use units::mass_density;
pub use units::memory;
pub use units::memory_rate;
pub use units::pressure;
pub use units::specific_heat_capacity;
pub use units::speed;
pub use units::temperature;
pub use units::temperature_difference;
pub use units::temperature_gradient;
pub use units::thermal_conductivity;
pub use units::time;
pub use units::unitless;
pub use units::volume_rate;
