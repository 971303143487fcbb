//! Unit vectors in three-dimensional space.

use crate::error::{Error, Result};
use crate::format::{json_triple, print_triple, xml_triple};
use crate::quantity::{Kind, Scalar};
use crate::units::angle::Angle;
use crate::vector::Vector;
use core::fmt::{Display, Formatter};
use core::ops::Mul;
use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A direction: a three-dimensional vector of length one.
///
/// Every constructor normalizes its input, so a `Direction` always has magnitude 1 (within rounding). The zero
/// vector has no direction and is rejected with [`Error::ZeroDirection`].
///
/// ```rust
/// use mensura_core::Direction;
///
/// let d = Direction::new(3.0, 0.0, -4.0).unwrap();
/// assert_eq!(d.x_y_z(), [0.6, 0.0, -0.8]);
/// assert!(Direction::new(0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    x_y_z: Vector3<f64>,
}

impl Direction {
    /// Normalizes `(x, y, z)` into a direction.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::try_from(Vector3::new(x, y, z))
    }

    /// x component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x_y_z.x
    }

    /// y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.x_y_z.y
    }

    /// z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.x_y_z.z
    }

    /// All three components.
    #[inline]
    pub fn x_y_z(&self) -> [f64; 3] {
        self.x_y_z.into()
    }

    /// Components as an `nalgebra` vector.
    #[inline]
    pub fn as_vector3(&self) -> Vector3<f64> {
        self.x_y_z
    }

    /// Euclidean norm; one up to rounding.
    pub fn magnitude(&self) -> f64 {
        self.x_y_z.norm()
    }

    /// Dot product, the cosine of the angle between both directions.
    pub fn dot(&self, other: &Direction) -> f64 {
        self.x_y_z.dot(&other.x_y_z)
    }

    /// Right-handed cross product, normalized. Fails when both directions are parallel.
    ///
    /// ```rust
    /// use mensura_core::Direction;
    ///
    /// let x = Direction::new(1.0, 0.0, 0.0).unwrap();
    /// let y = Direction::new(0.0, 1.0, 0.0).unwrap();
    /// assert_eq!(x.cross(&y).unwrap(), Direction::new(0.0, 0.0, 1.0).unwrap());
    /// assert!(x.cross(&x).is_err());
    /// ```
    pub fn cross(&self, other: &Direction) -> Result<Direction> {
        let product = self.x_y_z.cross(&other.x_y_z);
        Self::try_from(product).map_err(|_| Error::ParallelDirections)
    }

    /// Outer product `self ⊗ other`.
    pub fn dyadic(&self, other: &Direction) -> Matrix3<f64> {
        self.x_y_z * other.x_y_z.transpose()
    }

    /// Angle between both directions, in `[0, π]`.
    pub fn angle(&self, other: &Direction) -> Angle {
        Angle::from_standard(self.dot(other).clamp(-1.0, 1.0).acos())
    }

    /// `(x, y, z)`.
    pub fn print(&self) -> String {
        print_triple(self.x_y_z())
    }

    /// `{"x":..,"y":..,"z":..}`.
    pub fn json(&self) -> String {
        json_triple(self.x_y_z())
    }

    /// `<x>..</x><y>..</y><z>..</z>`.
    pub fn xml(&self) -> String {
        xml_triple(self.x_y_z())
    }
}

impl Default for Direction {
    /// The positive x axis.
    fn default() -> Self {
        Self {
            x_y_z: Vector3::x(),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.print())
    }
}

impl TryFrom<Vector3<f64>> for Direction {
    type Error = Error;

    fn try_from(value: Vector3<f64>) -> Result<Self> {
        if value.iter().any(|c| !c.is_finite()) {
            return Err(Error::ZeroDirection);
        }
        // Scale by the largest component first so the norm neither overflows nor underflows.
        let largest = value.amax();
        if largest == 0.0 {
            return Err(Error::ZeroDirection);
        }
        let scaled = value / largest;
        Ok(Self {
            x_y_z: scaled / scaled.norm(),
        })
    }
}

impl TryFrom<[f64; 3]> for Direction {
    type Error = Error;

    fn try_from(value: [f64; 3]) -> Result<Self> {
        Self::try_from(Vector3::from(value))
    }
}

impl<K: Kind> Mul<Scalar<K>> for Direction {
    type Output = Vector<K>;

    fn mul(self, magnitude: Scalar<K>) -> Vector<K> {
        Vector::from_magnitude_direction(magnitude, self)
    }
}

impl<K: Kind> Mul<Direction> for Scalar<K> {
    type Output = Vector<K>;

    fn mul(self, direction: Direction) -> Vector<K> {
        Vector::from_magnitude_direction(self, direction)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Components {
            x: f64,
            y: f64,
            z: f64,
        }
        Components {
            x: self.x(),
            y: self.y(),
            z: self.z(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Direction {
    /// Re-normalizes the components and rejects the zero vector.
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Components {
            x: f64,
            y: f64,
            z: f64,
        }
        let Components { x, y, z } = Components::deserialize(deserializer)?;
        Direction::new(x, y, z).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::angle::AngleUnit;
    use crate::units::speed::{Speed, SpeedUnit, Velocity};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_normalizes() {
        let d = Direction::new(0.0, 0.0, 12.5).unwrap();
        assert_eq!(d.x_y_z(), [0.0, 0.0, 1.0]);
        assert_eq!(d.magnitude(), 1.0);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Direction::new(0.0, 0.0, 0.0), Err(Error::ZeroDirection));
        assert_eq!(Direction::try_from([0.0; 3]), Err(Error::ZeroDirection));
        assert_eq!(
            Error::ZeroDirection.to_string(),
            "attempting to create a direction from (0, 0, 0)"
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Direction::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Direction::new(f64::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn extreme_magnitudes_normalize() {
        let huge = Direction::try_from(Vector3::new(1e200, 1e200, 0.0)).unwrap();
        assert_relative_eq!(huge.x(), core::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(huge.magnitude(), 1.0, epsilon = 1e-15);

        let tiny = Direction::try_from(Vector3::new(1e-200, 0.0, 0.0)).unwrap();
        assert_eq!(tiny.x_y_z(), [1.0, 0.0, 0.0]);

        let subnormal = Direction::new(0.0, -5e-324, 0.0).unwrap();
        assert_eq!(subnormal.x_y_z(), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn default_is_x_axis() {
        assert_eq!(Direction::default().x_y_z(), [1.0, 0.0, 0.0]);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Products and angles
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn cross_is_right_handed() {
        let y = Direction::new(0.0, 1.0, 0.0).unwrap();
        let z = Direction::new(0.0, 0.0, 1.0).unwrap();
        assert_eq!(y.cross(&z).unwrap().x_y_z(), [1.0, 0.0, 0.0]);
        assert_eq!(z.cross(&y).unwrap().x_y_z(), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn cross_of_parallel_directions_fails() {
        let d = Direction::new(1.0, 1.0, 0.0).unwrap();
        let opposite = Direction::new(-2.0, -2.0, 0.0).unwrap();
        assert_eq!(d.cross(&opposite), Err(Error::ParallelDirections));
    }

    #[test]
    fn dyadic_is_outer_product() {
        let a = Direction::new(1.0, 0.0, 0.0).unwrap();
        let b = Direction::new(0.0, 1.0, 0.0).unwrap();
        let m = a.dyadic(&b);
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m.sum(), 1.0);
    }

    #[test]
    fn dot_and_angle() {
        let a = Direction::new(1.0, 0.0, 0.0).unwrap();
        let b = Direction::new(1.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(a.dot(&b), core::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(a.angle(&b).to(AngleUnit::Degree), 45.0, epsilon = 1e-12);
        assert_eq!(a.angle(&a).value(), 0.0);
    }

    #[test]
    fn scalar_times_direction_is_vector() {
        let speed = Speed::new(10.0, SpeedUnit::MetrePerSecond);
        let d = Direction::new(0.0, 3.0, 4.0).unwrap();
        let v: Velocity = speed * d;
        assert_relative_eq!(v.value(), Vector3::new(0.0, 6.0, 8.0), epsilon = 1e-12);
        assert_eq!(d * speed, v);
        assert_relative_eq!(v.magnitude().value(), 10.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Text output
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn text_formats() {
        let d = Direction::new(0.0, -5.0, 0.0).unwrap();
        assert_eq!(d.print(), "(0, -1, 0)");
        assert_eq!(d.to_string(), "(0, -1, 0)");
        assert_eq!(d.json(), r#"{"x":0,"y":-1,"z":0}"#);
        assert_eq!(d.xml(), "<x>0</x><y>-1</y><z>0</z>");
    }

    proptest! {
        #[test]
        fn prop_normalized(x in -1e6..1e6f64, y in -1e6..1e6f64, z in -1e6..1e6f64) {
            prop_assume!(x != 0.0 || y != 0.0 || z != 0.0);
            let d = Direction::new(x, y, z).unwrap();
            prop_assert!((d.magnitude() - 1.0).abs() < 1e-12);
        }
    }
}
