//! Physical quantities with table-driven unit conversion.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core` together with
//! every predefined unit family and quantity kind.
//!
//! A quantity is a [`Scalar<K>`] or [`Vector<K>`] whose value is kept in the standard unit of its family. Units are
//! plain enum values, so they can be chosen at run time, parsed from strings and mapped to the consistent unit of a
//! [`System`] of units.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add a length to a duration, or a shear modulus to a pressure).
//! - Parses unit spellings the way input files write them (`"ft/sec/sec"`, `"uin/s^2"`, `"°F"`).
//! - Converts to the consistent unit of a system of units for handing values to solvers.
//! - Derives kinds from each other (`Speed / Duration` is an `AccelerationMagnitude`).
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra or user-defined unit families outside `mensura-core`.
//! - Exact arithmetic: quantities are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{AccelerationMagnitude, AccelerationUnit, Duration, Speed, SpeedUnit, TimeUnit};
//!
//! let a = AccelerationMagnitude::new(10.0, AccelerationUnit::MetrePerSquareSecond);
//! assert!((a.to(AccelerationUnit::FootPerSquareSecond) - 32.8084).abs() < 1e-4);
//!
//! let v = Speed::new(5.0, SpeedUnit::MetrePerSecond);
//! let t = Duration::new(2.0, TimeUnit::Second);
//! assert_eq!(v / t, AccelerationMagnitude::new(2.5, AccelerationUnit::MetrePerSquareSecond));
//! ```
//!
//! Parse units and quantities:
//!
//! ```rust
//! use mensura::{AccelerationUnit, Length, LengthUnit, Unit};
//!
//! assert_eq!(AccelerationUnit::parse("km/s^2"), Ok(AccelerationUnit::KilometrePerSquareSecond));
//! assert!(AccelerationUnit::parse("banana").is_err());
//!
//! let l: Length = "12 in".parse().unwrap();
//! assert!((l.to(LengthUnit::Foot) - 1.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Duration, Length, LengthUnit, TimeUnit};
//!
//! let d = Length::new(1.0, LengthUnit::Metre);
//! let t = Duration::new(1.0, TimeUnit::Second);
//! let _ = d + t; // different kinds
//! ```
//!
//! # Modules
//!
//! Families are grouped by physical quantity (also re-exported at the crate root):
//!
//! - `mensura::acceleration`, `mensura::speed`, `mensura::length`, `mensura::time`, `mensura::frequency`
//! - `mensura::angle` (trigonometry and wrapping helpers)
//! - `mensura::temperature` (affine), `mensura::temperature_difference`, `mensura::temperature_gradient`
//! - `mensura::pressure`, `mensura::mass_density`, `mensura::dynamic_viscosity`, `mensura::diffusivity`
//! - `mensura::thermal_conductivity`, `mensura::specific_heat_capacity`, `mensura::volume_rate`
//! - `mensura::memory`, `mensura::memory_rate`, `mensura::unitless`
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support. Scalars serialize as the bare standard-unit value, vectors and directions as
//!   `{x, y, z}`. `serde_with_unit` writes a self-describing `{ "value", "unit" }` pair.
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`]. Plain arithmetic follows IEEE-754 behavior.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![forbid(unsafe_code)]

pub use mensura_core::*;

pub use mensura_core::units::acceleration::*;
pub use mensura_core::units::angle::*;
pub use mensura_core::units::diffusivity::*;
pub use mensura_core::units::dynamic_viscosity::*;
pub use mensura_core::units::frequency::*;
pub use mensura_core::units::length::*;
pub use mensura_core::units::mass_density::*;
pub use mensura_core::units::memory::*;
pub use mensura_core::units::memory_rate::*;
pub use mensura_core::units::pressure::*;
pub use mensura_core::units::specific_heat_capacity::*;
pub use mensura_core::units::speed::*;
pub use mensura_core::units::temperature::*;
pub use mensura_core::units::temperature_difference::*;
pub use mensura_core::units::temperature_gradient::*;
pub use mensura_core::units::thermal_conductivity::*;
pub use mensura_core::units::time::*;
pub use mensura_core::units::unitless::*;
pub use mensura_core::units::volume_rate::*;
