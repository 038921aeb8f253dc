#![warn(missing_docs)]

//! Math types for the hedra geometry kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! 3D solid geometry: points, vectors, directions, and tolerance
//! constants, plus the plane-projection helpers the face-orientation
//! code relies on.

use nalgebra::Unit;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vec3>;

/// Project a vector onto the plane through the origin with the given
/// unit normal (removes the normal component).
pub fn project_onto_plane(v: &Vec3, normal: &Dir3) -> Vec3 {
    v - v.dot(normal) * normal.as_ref()
}

/// Unsigned angle between two vectors, in radians, in `[0, pi]`.
///
/// Returns 0 if either vector is (numerically) zero.
pub fn angle_between(a: &Vec3, b: &Vec3) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < 1e-300 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in model units (mm).
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 mm linear, 1e-4 rad angular).
    ///
    /// The angular value is deliberately loose: it is the threshold for
    /// deciding which side of a face's plane a reference point lies on,
    /// where a near-coplanar point means the input is ambiguous rather
    /// than merely imprecise.
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-4,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
