#![warn(missing_docs)]

//! Solid modeling facade for hedra.
//!
//! Provides the [`Solid`] type — a closed soup of planar polygons with
//! outward normals, the primary interface for building and combining
//! 3D geometry.
//!
//! # Example
//!
//! ```
//! use hedra_kernel::Solid;
//! use hedra_kernel_mesh::Aabb3;
//! use hedra_kernel_math::Point3;
//!
//! let block = Solid::box_solid(&Aabb3::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 20.0, 30.0),
//! )).unwrap();
//! assert!((block.volume() - 6000.0).abs() < 1e-9);
//! ```

pub use hedra_kernel_booleans;
pub use hedra_kernel_math;
pub use hedra_kernel_mesh;

use hedra_kernel_math::{Point3, Vec3};
use hedra_kernel_mesh::{Aabb3, Polygon};
use thiserror::Error;

/// Errors raised by solid construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A closed solid needs at least four faces.
    #[error("a closed solid needs at least 4 faces, got {0}")]
    TooFewFaces(usize),
    /// A directed boundary edge is unmatched; the faces do not close up.
    #[error("faces do not form a closed shell (unmatched boundary edges)")]
    NotClosed,
    /// The shell closes but encloses zero or negative volume, meaning
    /// the normals point inward or the shell is degenerate.
    #[error("shell encloses non-positive volume {0} (normals inward or degenerate)")]
    NonPositiveVolume(f64),
    /// Extrusion direction lies in the profile plane.
    #[error("extrusion direction is parallel to the profile plane")]
    DegenerateExtrusion,
    /// Box bounds are inverted, collapsed on an axis, or non-finite.
    #[error("box bounds have no positive extent")]
    DegenerateBox,
}

/// A 3D solid bounded by planar polygons with outward normals.
///
/// Solids built with [`Solid::from_faces`] are validated as closed
/// shells. Results of boolean operations are valid solids by
/// construction but may carry T-vertices along cut seams, so they are
/// not re-validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty solid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a solid from boundary faces, validating closure and
    /// orientation.
    ///
    /// The faces must share vertices exactly (every directed edge
    /// matched by its reverse) and be wound outward.
    pub fn from_faces(faces: Vec<Polygon>) -> Result<Self, KernelError> {
        if faces.len() < 4 {
            return Err(KernelError::TooFewFaces(faces.len()));
        }
        if !hedra_kernel_mesh::is_watertight(&faces) {
            return Err(KernelError::NotClosed);
        }
        let volume = hedra_kernel_mesh::signed_volume(&faces);
        if volume <= 0.0 {
            return Err(KernelError::NonPositiveVolume(volume));
        }
        Ok(Self { polygons: faces })
    }

    /// Wrap a polygon soup produced by an operation that guarantees a
    /// valid boundary (booleans, extrusion).
    fn from_boundary(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Axis-aligned box spanning the given bounds.
    ///
    /// The bounds must be finite with positive extent on every axis.
    pub fn box_solid(bounds: &Aabb3) -> Result<Self, KernelError> {
        let size = bounds.size();
        if !bounds.is_finite() || size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
            return Err(KernelError::DegenerateBox);
        }
        let (a, b) = (bounds.min, bounds.max);
        let v = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
        let quads = [
            // -z, +z, -y, +y, -x, +x
            [v(a.x, a.y, a.z), v(a.x, b.y, a.z), v(b.x, b.y, a.z), v(b.x, a.y, a.z)],
            [v(a.x, a.y, b.z), v(b.x, a.y, b.z), v(b.x, b.y, b.z), v(a.x, b.y, b.z)],
            [v(a.x, a.y, a.z), v(b.x, a.y, a.z), v(b.x, a.y, b.z), v(a.x, a.y, b.z)],
            [v(a.x, b.y, a.z), v(a.x, b.y, b.z), v(b.x, b.y, b.z), v(b.x, b.y, a.z)],
            [v(a.x, a.y, a.z), v(a.x, a.y, b.z), v(a.x, b.y, b.z), v(a.x, b.y, a.z)],
            [v(b.x, a.y, a.z), v(b.x, b.y, a.z), v(b.x, b.y, b.z), v(b.x, a.y, b.z)],
        ];
        let polygons = quads
            .iter()
            .map(|q| {
                // With positive extents the quads cannot be collinear.
                Polygon::new(q.to_vec()).unwrap_or_else(|_| unreachable!("box faces are planar"))
            })
            .collect();
        Ok(Self { polygons })
    }

    /// Extrude a planar profile along a direction vector into a prism.
    ///
    /// The profile may face either way relative to `direction`; the
    /// result is always wound outward. The direction's magnitude is the
    /// extrusion distance.
    pub fn extrude(profile: &Polygon, direction: Vec3) -> Result<Self, KernelError> {
        let along = profile.plane().normal.dot(&direction);
        if along.abs() < 1e-12 {
            return Err(KernelError::DegenerateExtrusion);
        }
        // Normalize to a base whose normal points along the direction:
        // `base.flipped()` is then the outward start cap and the
        // translated base the outward far cap.
        let base = if along > 0.0 {
            profile.clone()
        } else {
            profile.flipped()
        };

        let mut polygons = Vec::with_capacity(base.vertices().len() + 2);
        polygons.push(base.flipped());
        polygons.push(base.translated(direction));
        for (a, b) in base.edges() {
            let quad = vec![a, b, b + direction, a + direction];
            polygons.push(
                Polygon::new(quad).map_err(|_| KernelError::DegenerateExtrusion)?,
            );
        }
        Ok(Self::from_boundary(polygons))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Boolean difference (self − other).
    pub fn difference(&self, other: &Solid) -> Solid {
        if self.is_empty() {
            return Solid::empty();
        }
        if other.is_empty() {
            return self.clone();
        }
        let polygons = hedra_kernel_booleans::difference(&self.polygons, &other.polygons);
        log::debug!(
            "difference: {} - {} faces -> {} faces",
            self.polygons.len(),
            other.polygons.len(),
            polygons.len()
        );
        Solid::from_boundary(polygons)
    }

    /// A copy translated by `offset`.
    pub fn translated(&self, offset: Vec3) -> Solid {
        Solid {
            polygons: self.polygons.iter().map(|p| p.translated(offset)).collect(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check if the solid has no faces.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The boundary polygons.
    pub fn faces(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        hedra_kernel_mesh::signed_volume(&self.polygons)
    }

    /// Total boundary area.
    pub fn surface_area(&self) -> f64 {
        hedra_kernel_mesh::surface_area(&self.polygons)
    }

    /// Volume-weighted center of mass.
    pub fn center_of_mass(&self) -> Point3 {
        hedra_kernel_mesh::center_of_mass(&self.polygons)
    }

    /// Axis-aligned bounding box of the boundary.
    pub fn bounding_box(&self) -> Aabb3 {
        hedra_kernel_mesh::bounding_box(&self.polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Solid {
        Solid::box_solid(&Aabb3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        ))
        .unwrap()
    }

    #[test]
    fn test_box_volume_and_area() {
        let b = Solid::box_solid(&Aabb3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 20.0, 30.0),
        ))
        .unwrap();
        assert_relative_eq!(b.volume(), 6000.0, epsilon = 1e-9);
        assert_relative_eq!(b.surface_area(), 2200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_box_solid_degenerate_bounds_rejected() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(
            Solid::box_solid(&Aabb3::new(p, p)),
            Err(KernelError::DegenerateBox),
            "collapsed bounds must not build"
        );
        assert_eq!(
            Solid::box_solid(&Aabb3::new(Point3::new(1.0, 0.0, 0.0), Point3::origin())),
            Err(KernelError::DegenerateBox),
            "inverted bounds must not build"
        );
        assert_eq!(
            Solid::box_solid(&Aabb3::empty()),
            Err(KernelError::DegenerateBox)
        );
    }

    #[test]
    fn test_box_center_of_mass() {
        let com = unit_box().center_of_mass();
        assert!((com - Point3::new(0.5, 0.5, 0.5)).norm() < 1e-9);
    }

    #[test]
    fn test_from_faces_accepts_box() {
        let faces = unit_box().faces().to_vec();
        let solid = Solid::from_faces(faces).unwrap();
        assert!((solid.volume() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_faces_rejects_open_shell() {
        let mut faces = unit_box().faces().to_vec();
        faces.pop();
        assert_eq!(Solid::from_faces(faces), Err(KernelError::NotClosed));
    }

    #[test]
    fn test_from_faces_rejects_inward_normals() {
        let faces: Vec<Polygon> = unit_box().faces().iter().map(Polygon::flipped).collect();
        assert!(matches!(
            Solid::from_faces(faces),
            Err(KernelError::NonPositiveVolume(_))
        ));
    }

    #[test]
    fn test_from_faces_rejects_too_few() {
        let faces = unit_box().faces()[..3].to_vec();
        assert_eq!(Solid::from_faces(faces), Err(KernelError::TooFewFaces(3)));
    }

    #[test]
    fn test_extrude_square() {
        let profile = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 3.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ])
        .unwrap();
        let prism = Solid::extrude(&profile, Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert!((prism.volume() - 30.0).abs() < 1e-9);
        assert!(hedra_kernel_mesh::is_watertight(prism.faces()));
    }

    #[test]
    fn test_extrude_against_profile_normal() {
        // Extruding downward through a +z facing profile still yields
        // positive volume.
        let profile = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        let prism = Solid::extrude(&profile, Vec3::new(0.0, 0.0, -4.0)).unwrap();
        assert!((prism.volume() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_extrude_in_plane_fails() {
        let profile = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        let err = Solid::extrude(&profile, Vec3::new(1.0, 0.0, 0.0));
        assert!(matches!(err, Err(KernelError::DegenerateExtrusion)));
    }

    #[test]
    fn test_difference_half_box() {
        let a = unit_box();
        let b = Solid::box_solid(&Aabb3::new(
            Point3::new(0.5, -1.0, -1.0),
            Point3::new(2.0, 2.0, 2.0),
        ))
        .unwrap();
        let half = a.difference(&b);
        assert!((half.volume() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_difference_with_empty() {
        let a = unit_box();
        assert!((a.difference(&Solid::empty()).volume() - 1.0).abs() < 1e-12);
        assert!(Solid::empty().difference(&a).is_empty());
    }

    #[test]
    fn test_translated() {
        let moved = unit_box().translated(Vec3::new(10.0, 0.0, 0.0));
        let aabb = moved.bounding_box();
        assert!((aabb.min.x - 10.0).abs() < 1e-12);
        assert!((aabb.max.x - 11.0).abs() < 1e-12);
        assert!((moved.volume() - 1.0).abs() < 1e-9);
    }
}
