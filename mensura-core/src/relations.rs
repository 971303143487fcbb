//! Derived-quantity relations.
//!
//! Multiplying or dividing quantities of different kinds yields a quantity of the kind the physics dictates.
//! Values are combined in their standard units, which are coherent, so no conversion factor ever appears here.
//!
//! ```rust
//! use mensura_core::acceleration::{AccelerationMagnitude, AccelerationUnit};
//! use mensura_core::speed::{Speed, SpeedUnit};
//! use mensura_core::time::{Duration, TimeUnit};
//!
//! let v = Speed::new(5.0, SpeedUnit::MetrePerSecond);
//! let t = Duration::new(2.0, TimeUnit::Second);
//! let a: AccelerationMagnitude = v / t;
//! assert_eq!(a, AccelerationMagnitude::new(2.5, AccelerationUnit::MetrePerSquareSecond));
//! ```
//!
//! Relations whose division has no meaningful result at zero are checked:
//!
//! ```rust
//! use mensura_core::length::{Length, LengthUnit};
//! use mensura_core::temperature_difference::{TemperatureDifference, TemperatureDifferenceUnit};
//!
//! let dt = TemperatureDifference::new(5.0, TemperatureDifferenceUnit::Kelvin);
//! assert!((dt / Length::ZERO).is_err());
//! ```

use crate::acceleration::{Acceleration, AccelerationMagnitude};
use crate::diffusivity::{KinematicViscosity, ThermalDiffusivity};
use crate::dynamic_viscosity::DynamicViscosity;
use crate::frequency::Frequency;
use crate::length::{Length, Position};
use crate::macros::{scalar_product, scalar_sum, vector_product};
use crate::mass_density::MassDensity;
use crate::memory::Memory;
use crate::memory_rate::MemoryRate;
use crate::specific_heat_capacity::{
    SpecificGasConstant, SpecificIsobaricHeatCapacity, SpecificIsochoricHeatCapacity,
};
use crate::speed::{Speed, Velocity};
use crate::temperature::Temperature;
use crate::temperature_difference::TemperatureDifference;
use crate::temperature_gradient::TemperatureGradientMagnitude;
use crate::thermal_conductivity::ThermalConductivity;
use crate::time::Duration;
use crate::unitless::SpecificHeatRatio;
use crate::{Error, Result};
use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

// ─────────────────────────────────────────────────────────────────────────────
// Kinematics
// ─────────────────────────────────────────────────────────────────────────────

scalar_product!(AccelerationMagnitude * Duration = Speed);
scalar_product!(Speed * Frequency = AccelerationMagnitude);
scalar_product!(Speed * Duration = Length);
scalar_product!(Length * Frequency = Speed);

vector_product!(Acceleration * Duration = Velocity);
vector_product!(Velocity * Frequency = Acceleration);
vector_product!(Velocity * Duration = Position);

// ─────────────────────────────────────────────────────────────────────────────
// Time and frequency
// ─────────────────────────────────────────────────────────────────────────────

const _: () = assert!(Duration::DIMENSION.product(Frequency::DIMENSION).is_dimensionless());

/// A duration times a frequency counts events.
impl Mul<Frequency> for Duration {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Frequency) -> f64 {
        self.value() * rhs.value()
    }
}

impl Mul<Duration> for Frequency {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Duration) -> f64 {
        self.value() * rhs.value()
    }
}

/// A count of events over a duration.
impl Div<Duration> for f64 {
    type Output = Frequency;
    #[inline]
    fn div(self, rhs: Duration) -> Frequency {
        Frequency::from_standard(self / rhs.value())
    }
}

impl Div<Frequency> for f64 {
    type Output = Duration;
    #[inline]
    fn div(self, rhs: Frequency) -> Duration {
        Duration::from_standard(self / rhs.value())
    }
}

impl Frequency {
    /// The frequency of an event recurring every `period`. A zero period gives an infinite frequency.
    #[inline]
    pub fn from_period(period: Duration) -> Self {
        1.0 / period
    }
}

impl Duration {
    /// The period of an event recurring at `frequency`. A zero frequency gives an infinite period.
    #[inline]
    pub fn from_frequency(frequency: Frequency) -> Self {
        1.0 / frequency
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Digital information
// ─────────────────────────────────────────────────────────────────────────────

scalar_product!(MemoryRate * Duration = Memory);
scalar_product!(Memory * Frequency = MemoryRate);

// ─────────────────────────────────────────────────────────────────────────────
// Thermodynamics and transport
// ─────────────────────────────────────────────────────────────────────────────

scalar_product!(checked TemperatureGradientMagnitude * Length = TemperatureDifference);
scalar_product!(KinematicViscosity * MassDensity = DynamicViscosity);
scalar_product!(SpecificIsochoricHeatCapacity * SpecificHeatRatio = SpecificIsobaricHeatCapacity);
scalar_sum!(SpecificIsochoricHeatCapacity + SpecificGasConstant = SpecificIsobaricHeatCapacity);

const _: () = assert!(ThermalDiffusivity::DIMENSION.equals(
    ThermalConductivity::DIMENSION.quotient(MassDensity::DIMENSION.product(SpecificIsobaricHeatCapacity::DIMENSION))
));

impl ThermalDiffusivity {
    /// `α = k / (ρ·c_p)`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `ρ·c_p` is zero.
    pub fn from_conductivity(
        conductivity: ThermalConductivity,
        density: MassDensity,
        heat_capacity: SpecificIsobaricHeatCapacity,
    ) -> Result<Self> {
        let volumetric = density.value() * heat_capacity.value();
        if volumetric == 0.0 {
            return Err(Error::DivisionByZero {
                dividend: conductivity.to_string(),
                divisor: format!("{} × {}", density, heat_capacity),
            });
        }
        Ok(Self::from_standard(conductivity.value() / volumetric))
    }
}

const _: () = assert!(SpecificIsochoricHeatCapacity::DIMENSION.equals(SpecificGasConstant::DIMENSION));

/// `γ - 1` for an ideal gas, or the error naming the gas constant that would be divided by it.
fn excess_ratio(gas_constant: SpecificGasConstant, ratio: SpecificHeatRatio) -> Result<f64> {
    let excess = ratio.value() - 1.0;
    if excess == 0.0 {
        return Err(Error::DivisionByZero {
            dividend: gas_constant.to_string(),
            divisor: format!("{} - 1", ratio),
        });
    }
    Ok(excess)
}

impl SpecificIsochoricHeatCapacity {
    /// Ideal gas `c_v = R / (γ - 1)`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `γ` is exactly 1.
    pub fn from_gas_constant(gas_constant: SpecificGasConstant, ratio: SpecificHeatRatio) -> Result<Self> {
        let excess = excess_ratio(gas_constant, ratio)?;
        Ok(Self::from_standard(gas_constant.value() / excess))
    }
}

impl SpecificIsobaricHeatCapacity {
    /// Ideal gas `c_p = γ·R / (γ - 1)`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `γ` is exactly 1.
    pub fn from_gas_constant(gas_constant: SpecificGasConstant, ratio: SpecificHeatRatio) -> Result<Self> {
        let excess = excess_ratio(gas_constant, ratio)?;
        Ok(Self::from_standard(ratio.value() * gas_constant.value() / excess))
    }
}

// Absolute temperatures shift by differences; differences of absolute temperatures are differences.

impl Add<TemperatureDifference> for Temperature {
    type Output = Temperature;
    #[inline]
    fn add(self, rhs: TemperatureDifference) -> Temperature {
        Temperature::from_standard(self.value() + rhs.value())
    }
}

impl Add<Temperature> for TemperatureDifference {
    type Output = Temperature;
    #[inline]
    fn add(self, rhs: Temperature) -> Temperature {
        Temperature::from_standard(self.value() + rhs.value())
    }
}

impl Sub<TemperatureDifference> for Temperature {
    type Output = Temperature;
    #[inline]
    fn sub(self, rhs: TemperatureDifference) -> Temperature {
        Temperature::from_standard(self.value() - rhs.value())
    }
}

impl AddAssign<TemperatureDifference> for Temperature {
    #[inline]
    fn add_assign(&mut self, rhs: TemperatureDifference) {
        *self = *self + rhs;
    }
}

impl SubAssign<TemperatureDifference> for Temperature {
    #[inline]
    fn sub_assign(&mut self, rhs: TemperatureDifference) {
        *self = *self - rhs;
    }
}

impl Temperature {
    /// `self - other`, as a temperature difference.
    ///
    /// ```rust
    /// use mensura_core::temperature::{Temperature, TemperatureUnit};
    /// use mensura_core::temperature_difference::TemperatureDifferenceUnit;
    ///
    /// let hot = Temperature::new(212.0, TemperatureUnit::Fahrenheit);
    /// let cold = Temperature::new(0.0, TemperatureUnit::Celsius);
    /// let dt = hot.difference(cold);
    /// assert!((dt.to(TemperatureDifferenceUnit::Celsius) - 100.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn difference(self, other: Temperature) -> TemperatureDifference {
        TemperatureDifference::from_standard(self.value() - other.value())
    }
}
