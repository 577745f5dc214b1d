//! Fundamental geometric types for diagram assembly.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Position in three dimensional space measured in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
    /// Distance along the global Z axis.
    pub z: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Return a copy of this point moved by `distance` along `direction`.
    #[must_use]
    pub fn translated(self, direction: Vector, distance: f64) -> Self {
        Self::from(self.to_vector() + distance * direction.to_vector())
    }
}

impl From<Vector3<f64>> for Point {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Point> for Vector3<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Cartesian direction vector used to orient and extrude diagrams.
///
/// The assembler expects directions of unit length; the serde-friendly
/// wrapper exists so finalized buffers can cross a process boundary
/// without enabling nalgebra's serde support.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// Component along the global X axis.
    pub x: f64,
    /// Component along the global Y axis.
    pub y: f64,
    /// Component along the global Z axis.
    pub z: f64,
}

impl Vector {
    /// Create a [`Vector`] with explicit components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert the vector into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.to_vector().norm()
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(value: Vector) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use diagramx::point;
///
/// let origin = point(0.0, 0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// Convenience helper for creating [`Vector`] instances.
///
/// # Examples
/// ```
/// use diagramx::vector;
///
/// let up = vector(0.0, 0.0, 1.0);
/// assert_eq!(up.z, 1.0);
/// ```
#[must_use]
pub const fn vector(x: f64, y: f64, z: f64) -> Vector {
    Vector::new(x, y, z)
}

/// Locate the zero of a linearly interpolated value along a segment.
///
/// Given the segment from `org` to `dest` carrying the values `val_org` and
/// `val_dest` at its ends, returns the position where the interpolated value
/// vanishes. Callers must establish `val_org * val_dest <= 0` beforehand;
/// with that precondition the function is total. When both values are equal
/// (which under the precondition means both are zero) the segment carries no
/// crossing and the origin is returned.
///
/// # Examples
/// ```
/// use diagramx::{point, zero_crossing};
///
/// let crossing = zero_crossing(point(0.0, 0.0, 0.0), 4.0, point(1.0, 0.0, 0.0), -2.0);
/// assert!((crossing.x - 4.0 / 6.0).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn zero_crossing(org: Point, val_org: f64, dest: Point, val_dest: f64) -> Point {
    let difference = val_org - val_dest;
    let s0 = if difference.abs() > 0.0 {
        val_org / difference
    } else {
        0.0
    };
    Point::from(org.to_vector() + s0 * (dest.to_vector() - org.to_vector()))
}
