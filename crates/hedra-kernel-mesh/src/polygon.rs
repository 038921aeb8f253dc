//! Planar polygons: the faces of every solid in hedra.

use hedra_kernel_math::{Point3, Vec3};
use thiserror::Error;

use crate::plane::Plane;

/// Errors raised when constructing a polygon from raw points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolygonError {
    /// Fewer than three vertices were supplied.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// The first two edges are parallel; no plane normal can be derived.
    #[error("polygon has a degenerate normal (first two edges are parallel)")]
    DegenerateNormal,
    /// A vertex lies off the plane derived from the first two edges.
    #[error("polygon vertex {index} is {deviation} off the face plane")]
    NonCoplanar {
        /// Index of the offending vertex.
        index: usize,
        /// Its distance from the derived plane.
        deviation: f64,
    },
}

/// An ordered, implicitly closed sequence of coplanar points.
///
/// The winding order defines the geometric normal: counter-clockwise
/// when viewed from the side the normal points toward. Vertices are
/// immutable after construction; all edits (flip, expansion,
/// translation) return new polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Build a polygon from ordered vertices, deriving the plane from
    /// the first two edges.
    ///
    /// Coplanarity of the remaining vertices is checked against a
    /// tolerance scaled by the polygon's extent; violation is a caller
    /// error surfaced as [`PolygonError::NonCoplanar`].
    pub fn new(vertices: Vec<Point3>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }
        let plane = Plane::from_points(&vertices[0], &vertices[1], &vertices[2])
            .ok_or(PolygonError::DegenerateNormal)?;

        // Opportunistic coplanarity check: only vertices past the first
        // three can disagree with the derived plane.
        let extent = vertices
            .iter()
            .map(|v| (v - vertices[0]).norm())
            .fold(0.0f64, f64::max);
        let eps = 1e-9 * (1.0 + extent);
        for (index, v) in vertices.iter().enumerate().skip(3) {
            let deviation = plane.signed_distance(v).abs();
            if deviation > eps {
                return Err(PolygonError::NonCoplanar { index, deviation });
            }
        }

        Ok(Self { vertices, plane })
    }

    /// Build a polygon with a known plane, skipping the coplanarity
    /// check. Used by the boolean engine for split fragments, which are
    /// planar by construction; the caller guarantees the invariant.
    pub fn from_plane(vertices: Vec<Point3>, plane: Plane) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices, plane }
    }

    /// The ordered vertices (implicitly closed: last connects to first).
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The supporting plane, oriented by the winding order.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Consecutive vertex pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices.
    ///
    /// For the planar, roughly regular faces this kernel deals in, this
    /// is an adequate stand-in for the center of mass.
    pub fn centroid(&self) -> Point3 {
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::zeros(), |acc, v| acc + v.coords);
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// In-plane distance from the centroid to the nearest edge line.
    ///
    /// For a convex polygon this is the radius of the largest disk
    /// about the centroid that the polygon is guaranteed to contain.
    /// Zero-length edges are skipped.
    pub fn centroid_clearance(&self) -> f64 {
        let c = self.centroid();
        self.edges()
            .map(|(a, b)| {
                let e = b - a;
                e.cross(&(c - a)).norm() / e.norm()
            })
            .fold(f64::INFINITY, f64::min)
    }

    /// Reverse the winding order (and the plane orientation) in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// A copy with reversed winding.
    pub fn flipped(&self) -> Self {
        let mut p = self.clone();
        p.flip();
        p
    }

    /// A copy translated by `offset`. The plane offset shifts by the
    /// normal component of the translation.
    pub fn translated(&self, offset: Vec3) -> Self {
        let vertices = self.vertices.iter().map(|v| v + offset).collect();
        let plane = Plane {
            normal: self.plane.normal,
            w: self.plane.w + self.plane.normal.dot(&offset),
        };
        Self { vertices, plane }
    }

    /// Scale the polygon uniformly in its own plane, about its
    /// centroid, until every edge line lies at least `clearance` away
    /// from the centroid.
    ///
    /// Edge length is not the measure that matters here: a long thin
    /// polygon keeps its centroid close to the long edges no matter how
    /// far it is scaled, while the clearance grows linearly with the
    /// scale factor. Already-large polygons are returned unchanged. The
    /// supporting plane is unaffected.
    pub fn expanded_to_min_clearance(&self, clearance: f64) -> Self {
        let current = self.centroid_clearance();
        if current >= clearance {
            return self.clone();
        }
        let factor = clearance / current;
        let c = self.centroid();
        let vertices = self.vertices.iter().map(|v| c + (v - c) * factor).collect();
        Self {
            vertices,
            plane: self.plane,
        }
    }
}
