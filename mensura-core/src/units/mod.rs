//! Predefined unit families and the quantity kinds measured in them.
//!
//! Every module declares one unit family enum (deriving [`Unit`](crate::Unit)), the kinds measured in it and the
//! matching `Scalar`/`Vector` aliases. The families live in `mensura-core` so relations between them can be
//! implemented without running into Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`acceleration`]: acceleration magnitude and vector acceleration.
//! - [`angle`]: plane angles, plus trig and wrapping helpers.
//! - [`diffusivity`]: thermal diffusivity and kinematic viscosity (area per time).
//! - [`dynamic_viscosity`]: dynamic viscosity.
//! - [`frequency`]: frequency.
//! - [`length`]: length and position.
//! - [`mass_density`]: mass density.
//! - [`memory`]: amounts of digital information.
//! - [`memory_rate`]: rates of digital information.
//! - [`pressure`]: shear modulus and isothermal bulk modulus (stress units).
//! - [`specific_heat_capacity`]: isobaric and isochoric specific heat capacities, specific gas constant.
//! - [`speed`]: speed and velocity.
//! - [`temperature`]: absolute temperature (affine conversions).
//! - [`temperature_difference`]: temperature differences (ratio conversions only).
//! - [`temperature_gradient`]: temperature gradient magnitude and vector temperature gradient.
//! - [`thermal_conductivity`]: scalar thermal conductivity.
//! - [`time`]: durations.
//! - [`unitless`]: dimensionless ratios (Poisson's ratio, heat capacity ratio).
//! - [`volume_rate`]: volumetric flow rate.

pub mod acceleration;
pub mod angle;
pub mod diffusivity;
pub mod dynamic_viscosity;
pub mod frequency;
pub mod length;
pub mod mass_density;
pub mod memory;
pub mod memory_rate;
pub mod pressure;
pub mod specific_heat_capacity;
pub mod speed;
pub mod temperature;
pub mod temperature_difference;
pub mod temperature_gradient;
pub mod thermal_conductivity;
pub mod time;
pub mod unitless;
pub mod volume_rate;
