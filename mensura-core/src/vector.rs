//! Three-dimensional vector quantities.

use crate::direction::Direction;
use crate::dimension::Dimension;
use crate::error::Result;
use crate::format::{json_triple, print_triple, xml_triple};
use crate::quantity::{Kind, Scalar};
use crate::system::System;
use crate::unit::Unit;
use crate::units::angle::Angle;
use core::fmt::{Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::*;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A three-dimensional vector quantity of kind `K`.
///
/// Components are stored in the standard unit of `K::Unit`. Converting to another unit applies the family's table
/// entry to all three components as one batch.
///
/// ```rust
/// use mensura_core::acceleration::{Acceleration, AccelerationUnit};
///
/// let a = Acceleration::new([3.0, 0.0, 4.0], AccelerationUnit::MetrePerSquareSecond);
/// assert_eq!(a.magnitude().value(), 5.0);
/// assert_eq!(a.print(), "(3, 0, 4)");
/// ```
pub struct Vector<K: Kind> {
    value: Vector3<f64>,
    kind: PhantomData<K>,
}

impl<K: Kind> Vector<K> {
    /// Dimension of this quantity.
    pub const DIMENSION: Dimension = <K::Unit as Unit>::DIMENSION;

    /// The zero vector.
    pub fn zero() -> Self {
        Self::from_standard(Vector3::zeros())
    }

    /// Creates a vector from components expressed in `unit`.
    pub fn new(mut components: [f64; 3], unit: K::Unit) -> Self {
        K::Unit::convert(&mut components, unit, K::Unit::STANDARD);
        Self::from_standard(Vector3::from(components))
    }

    /// Creates a vector from an `nalgebra` vector expressed in `unit`.
    pub fn from_vector3(components: Vector3<f64>, unit: K::Unit) -> Self {
        Self::new(components.into(), unit)
    }

    /// Vector of the given magnitude along `direction`.
    pub fn from_magnitude_direction(magnitude: Scalar<K>, direction: Direction) -> Self {
        Self::from_standard(direction.as_vector3() * magnitude.value())
    }

    #[inline]
    pub(crate) fn from_standard(value: Vector3<f64>) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Components in the standard unit.
    #[inline]
    pub fn value(&self) -> Vector3<f64> {
        self.value
    }

    /// x component.
    pub fn x(&self) -> Scalar<K> {
        Scalar::from_standard(self.value.x)
    }

    /// y component.
    pub fn y(&self) -> Scalar<K> {
        Scalar::from_standard(self.value.y)
    }

    /// z component.
    pub fn z(&self) -> Scalar<K> {
        Scalar::from_standard(self.value.z)
    }

    /// Components expressed in `unit`.
    pub fn to(&self, unit: K::Unit) -> [f64; 3] {
        let mut components: [f64; 3] = self.value.into();
        K::Unit::convert(&mut components, K::Unit::STANDARD, unit);
        components
    }

    /// Components expressed in the consistent unit of `system`.
    pub fn in_system(&self, system: System) -> Result<[f64; 3]> {
        Ok(self.to(K::Unit::in_system(system)?))
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> Scalar<K> {
        Scalar::from_standard(self.value.norm())
    }

    /// Unit vector along `self`. Fails for the zero vector.
    pub fn direction(&self) -> Result<Direction> {
        Direction::try_from(self.value)
    }

    /// Angle between two vectors of the same kind. NaN when either is zero.
    ///
    /// ```rust
    /// use mensura_core::speed::{SpeedUnit, Velocity};
    /// use mensura_core::angle::AngleUnit;
    ///
    /// let a = Velocity::new([1.0, 0.0, 0.0], SpeedUnit::MetrePerSecond);
    /// let b = Velocity::new([0.0, 2.0, 0.0], SpeedUnit::MetrePerSecond);
    /// assert!((a.angle(&b).to(AngleUnit::Degree) - 90.0).abs() < 1e-12);
    /// ```
    pub fn angle(&self, other: &Self) -> Angle {
        let cosine = self.value.dot(&other.value) / (self.value.norm() * other.value.norm());
        Angle::from_standard(cosine.clamp(-1.0, 1.0).acos())
    }

    /// `(x, y, z)` in the standard unit.
    pub fn print(&self) -> String {
        print_triple(self.value.into())
    }

    /// `(x, y, z)` in `unit`.
    pub fn print_in(&self, unit: K::Unit) -> String {
        print_triple(self.to(unit))
    }

    /// `(x, y, z)` in the consistent unit of `system`.
    pub fn print_in_system(&self, system: System) -> Result<String> {
        self.in_system(system).map(print_triple)
    }

    /// `{"x":..,"y":..,"z":..}` in the standard unit.
    pub fn json(&self) -> String {
        json_triple(self.value.into())
    }

    /// `{"x":..,"y":..,"z":..}` in `unit`.
    pub fn json_in(&self, unit: K::Unit) -> String {
        json_triple(self.to(unit))
    }

    /// `{"x":..,"y":..,"z":..}` in the consistent unit of `system`.
    pub fn json_in_system(&self, system: System) -> Result<String> {
        self.in_system(system).map(json_triple)
    }

    /// `<x>..</x><y>..</y><z>..</z>` in the standard unit.
    pub fn xml(&self) -> String {
        xml_triple(self.value.into())
    }

    /// `<x>..</x><y>..</y><z>..</z>` in `unit`.
    pub fn xml_in(&self, unit: K::Unit) -> String {
        xml_triple(self.to(unit))
    }

    /// `<x>..</x><y>..</y><z>..</z>` in the consistent unit of `system`.
    pub fn xml_in_system(&self, system: System) -> Result<String> {
        self.in_system(system).map(xml_triple)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Std trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Clone for Vector<K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kind> Copy for Vector<K> {}

impl<K: Kind> Default for Vector<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: Kind> Debug for Vector<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(K::NAME)
            .field(&self.value.x)
            .field(&self.value.y)
            .field(&self.value.z)
            .finish()
    }
}

impl<K: Kind> Display for Vector<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let symbol = K::Unit::STANDARD.abbreviation();
        if symbol.is_empty() {
            f.write_str(&self.print())
        } else {
            write!(f, "{} {}", self.print(), symbol)
        }
    }
}

impl<K: Kind> PartialEq for Vector<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Add for Vector<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<K: Kind> AddAssign for Vector<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: Kind> Sub for Vector<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<K: Kind> SubAssign for Vector<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: Kind> Neg for Vector<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_standard(-self.value)
    }
}

impl<K: Kind> Mul<f64> for Vector<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_standard(self.value * rhs)
    }
}

impl<K: Kind> Mul<Vector<K>> for f64 {
    type Output = Vector<K>;
    #[inline]
    fn mul(self, rhs: Vector<K>) -> Vector<K> {
        rhs * self
    }
}

impl<K: Kind> MulAssign<f64> for Vector<K> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl<K: Kind> Div<f64> for Vector<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_standard(self.value / rhs)
    }
}

impl<K: Kind> DivAssign<f64> for Vector<K> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct Components {
    x: f64,
    y: f64,
    z: f64,
}

#[cfg(feature = "serde")]
impl<K: Kind> Serialize for Vector<K> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Components {
            x: self.value.x,
            y: self.value.y,
            z: self.value.z,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Kind> Deserialize<'de> for Vector<K> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Components { x, y, z } = Components::deserialize(deserializer)?;
        Ok(Self::from_standard(Vector3::new(x, y, z)))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::units::speed::{SpeedUnit, Velocity};

    #[test]
    fn vector_is_an_xyz_object_in_standard_units() {
        let v = Velocity::new([1.0, 0.0, -2.0], SpeedUnit::KilometrePerHour);
        let json = serde_json::to_string(&Velocity::new([3.0, 0.0, -1.5], SpeedUnit::MetrePerSecond)).unwrap();
        assert_eq!(json, r#"{"x":3.0,"y":0.0,"z":-1.5}"#);
        let back: Velocity = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn vector_requires_every_component() {
        assert!(serde_json::from_str::<Velocity>(r#"{"x":1.0,"y":2.0}"#).is_err());
    }
}
