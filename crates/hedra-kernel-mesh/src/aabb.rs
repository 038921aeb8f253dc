//! Axis-aligned bounding boxes.
//!
//! The carving pipeline sizes its starting block and its cutter slabs
//! from the AABB of the input faces, so this box carries a few derived
//! measures (size, diagonal, center) beyond the usual overlap test.

use hedra_kernel_math::{Point3, Vec3};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// AABB of a point set; empty (inverted) for an empty iterator.
    pub fn from_points<'a, I: IntoIterator<Item = &'a Point3>>(points: I) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        aabb
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Test if two AABBs overlap (touching counts as overlap).
    pub fn overlaps(&self, other: &Aabb3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Expand the AABB by a margin in all directions.
    pub fn expand(&mut self, margin: f64) {
        self.min.x -= margin;
        self.min.y -= margin;
        self.min.z -= margin;
        self.max.x += margin;
        self.max.y += margin;
        self.max.z += margin;
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the longest axis.
    pub fn largest_dimension(&self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }

    /// Corner-to-corner diagonal length.
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point3 {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// False for the empty (inverted) box and for boxes with NaN or
    /// infinite corners.
    pub fn is_finite(&self) -> bool {
        self.min.coords.iter().all(|c| c.is_finite())
            && self.max.coords.iter().all(|c| c.is_finite())
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let b = Aabb3::new(Point3::new(5.0, 5.0, 5.0), Point3::new(15.0, 15.0, 15.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Aabb3::new(Point3::new(20.0, 20.0, 20.0), Point3::new(30.0, 30.0, 30.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_aabb_touching() {
        let a = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let b = Aabb3::new(Point3::new(10.0, 0.0, 0.0), Point3::new(20.0, 10.0, 10.0));
        assert!(a.overlaps(&b)); // touching counts
    }

    #[test]
    fn test_from_points() {
        let pts = [
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-1.0, 4.0, 0.0),
            Point3::new(0.5, 0.5, 0.5),
        ];
        let aabb = Aabb3::from_points(pts.iter());
        assert!((aabb.min - Point3::new(-1.0, -2.0, 0.0)).norm() < 1e-12);
        assert!((aabb.max - Point3::new(1.0, 4.0, 3.0)).norm() < 1e-12);
        assert!(aabb.is_finite());
    }

    #[test]
    fn test_empty_is_not_finite() {
        assert!(!Aabb3::empty().is_finite());
        assert!(!Aabb3::from_points(std::iter::empty()).is_finite());
    }

    #[test]
    fn test_derived_measures() {
        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 12.0));
        assert!((aabb.largest_dimension() - 12.0).abs() < 1e-12);
        assert!((aabb.diagonal() - 13.0).abs() < 1e-12);
        assert!((aabb.center() - Point3::new(1.5, 2.0, 6.0)).norm() < 1e-12);
    }

    #[test]
    fn test_expand() {
        let mut aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        aabb.expand(2.0);
        assert!((aabb.min - Point3::new(-2.0, -2.0, -2.0)).norm() < 1e-12);
        assert!((aabb.max - Point3::new(3.0, 3.0, 3.0)).norm() < 1e-12);
    }
}
