//! Oriented planes and the polygon split primitive used by BSP clipping.

use hedra_kernel_math::{Dir3, Point3, Tolerance};

use crate::polygon::Polygon;

/// Classification tolerance for point-vs-plane tests during splitting.
///
/// Coarser than `Tolerance::DEFAULT.linear`: splitting wants nearby
/// vertices snapped onto the plane rather than spawning sliver
/// fragments.
pub const PLANE_EPSILON: f64 = 1e-5;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// An oriented plane: points `p` with `normal . p == w` lie on it,
/// the half-space `normal . p > w` is in front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Dir3,
    /// Signed offset from the origin along the normal.
    pub w: f64,
}

impl Plane {
    /// Plane through three points, oriented by `(b - a) x (c - a)`.
    ///
    /// Returns `None` if the points are (numerically) collinear.
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Option<Self> {
        let n = (b - a).cross(&(c - a));
        if n.norm() < 1e-12 {
            return None;
        }
        let normal = Dir3::new_normalize(n);
        Some(Self {
            normal,
            w: normal.dot(&a.coords),
        })
    }

    /// Signed distance of a point from the plane (positive in front).
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) - self.w
    }

    /// Reverse orientation in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// A copy with reversed orientation.
    pub fn flipped(&self) -> Self {
        let mut p = *self;
        p.flip();
        p
    }

    /// Whether two planes coincide with the *same* orientation.
    ///
    /// The offset comparison is relative to the offset magnitude so the
    /// test behaves the same for millimetre- and metre-scale models.
    pub fn coincides_with(&self, other: &Plane, tol: &Tolerance) -> bool {
        self.normal.dot(&other.normal) > 1.0 - 1e-9
            && (self.w - other.w).abs() <= tol.linear * (1.0 + self.w.abs().max(other.w.abs()))
    }

    /// Split `polygon` by this plane into the four output bins.
    ///
    /// Coplanar polygons go to `coplanar_front` or `coplanar_back` by
    /// normal agreement; spanning polygons are divided along the plane
    /// with both fragments inheriting the original polygon's plane.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let verts = polygon.vertices();
        let mut polygon_type = COPLANAR;
        let mut types = Vec::with_capacity(verts.len());
        for v in verts {
            let t = self.signed_distance(v);
            let ty = if t < -PLANE_EPSILON {
                BACK
            } else if t > PLANE_EPSILON {
                FRONT
            } else {
                COPLANAR
            };
            polygon_type |= ty;
            types.push(ty);
        }

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane().normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let n = verts.len();
                let mut f: Vec<Point3> = Vec::with_capacity(n + 1);
                let mut b: Vec<Point3> = Vec::with_capacity(n + 1);
                for i in 0..n {
                    let j = (i + 1) % n;
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (verts[i], verts[j]);
                    if ti != BACK {
                        f.push(vi);
                    }
                    if ti != FRONT {
                        b.push(vi);
                    }
                    if (ti | tj) == SPANNING {
                        let edge = vj - vi;
                        let t = (self.w - self.normal.dot(&vi.coords)) / self.normal.dot(&edge);
                        let v = vi + edge * t;
                        f.push(v);
                        b.push(v);
                    }
                }
                if f.len() >= 3 {
                    front.push(Polygon::from_plane(f, *polygon.plane()));
                }
                if b.len() >= 3 {
                    back.push(Polygon::from_plane(b, *polygon.plane()));
                }
            }
        }
    }
}
