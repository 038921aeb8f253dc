//! Mass properties and closure checks for polygon soups.
//!
//! Volume and center of mass use the divergence theorem over a fan
//! triangulation of each face, so they are exact for closed soups of
//! planar polygons with consistent outward winding.

use std::collections::HashMap;

use hedra_kernel_math::Point3;

use crate::aabb::Aabb3;
use crate::polygon::Polygon;

/// Fan triangulation of a polygon, as vertex triples.
fn triangles(polygon: &Polygon) -> impl Iterator<Item = (Point3, Point3, Point3)> + '_ {
    let verts = polygon.vertices();
    (1..verts.len() - 1).map(move |i| (verts[0], verts[i], verts[i + 1]))
}

/// Signed volume of a polygon soup.
///
/// Positive for a closed soup with outward normals, negative for
/// inward normals, and meaningless for open soups.
pub fn signed_volume(polygons: &[Polygon]) -> f64 {
    let mut vol = 0.0;
    for poly in polygons {
        for (a, b, c) in triangles(poly) {
            vol += a.coords.dot(&b.coords.cross(&c.coords)) / 6.0;
        }
    }
    vol
}

/// Total area of all polygons.
pub fn surface_area(polygons: &[Polygon]) -> f64 {
    let mut area = 0.0;
    for poly in polygons {
        for (a, b, c) in triangles(poly) {
            area += (b - a).cross(&(c - a)).norm() / 2.0;
        }
    }
    area
}

/// Volume-weighted center of mass of a closed soup.
///
/// Each fan triangle and the origin form a signed tetrahedron; the
/// result is the volume-weighted mean of the tetrahedron centroids.
/// Falls back to the AABB center when the net signed volume is
/// (numerically) zero, where the moment ratio is undefined. Like
/// [`signed_volume`], the result is meaningless for open soups.
pub fn center_of_mass(polygons: &[Polygon]) -> Point3 {
    let mut vol = 0.0;
    let mut moment = hedra_kernel_math::Vec3::zeros();
    for poly in polygons {
        for (a, b, c) in triangles(poly) {
            let v = a.coords.dot(&b.coords.cross(&c.coords)) / 6.0;
            vol += v;
            moment += v * (a.coords + b.coords + c.coords) / 4.0;
        }
    }
    if vol.abs() < 1e-12 {
        return bounding_box(polygons).center();
    }
    Point3::from(moment / vol)
}

/// AABB of all vertices in the soup.
pub fn bounding_box(polygons: &[Polygon]) -> Aabb3 {
    let mut aabb = Aabb3::empty();
    for poly in polygons {
        for v in poly.vertices() {
            aabb.include_point(v);
        }
    }
    aabb
}

/// Quantized vertex key for edge matching.
fn vertex_key(p: &Point3) -> (i64, i64, i64) {
    let q = |c: f64| (c * 1e9).round() as i64;
    (q(p.x), q(p.y), q(p.z))
}

/// Check that every directed edge is matched by exactly one opposite
/// directed edge.
///
/// This is the closure criterion for a soup whose faces share vertices
/// exactly, such as the output of a face-soup constructor. Booleaned
/// meshes may carry T-vertices along cut seams and can fail this check
/// while still bounding a valid solid.
pub fn is_watertight(polygons: &[Polygon]) -> bool {
    let mut counts: HashMap<((i64, i64, i64), (i64, i64, i64)), i64> = HashMap::new();
    for poly in polygons {
        for (a, b) in poly.edges() {
            let (ka, kb) = (vertex_key(&a), vertex_key(&b));
            if ka == kb {
                return false;
            }
            *counts.entry((ka, kb)).or_insert(0) += 1;
            *counts.entry((kb, ka)).or_insert(0) -= 1;
        }
    }
    counts.values().all(|&c| c == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hedra_kernel_math::Point3;

    fn quad(pts: [[f64; 3]; 4]) -> Polygon {
        Polygon::new(
            pts.iter()
                .map(|p| Point3::new(p[0], p[1], p[2]))
                .collect(),
        )
        .unwrap()
    }

    /// Unit cube at the origin, outward winding.
    fn unit_cube() -> Vec<Polygon> {
        vec![
            quad([[0., 0., 0.], [0., 1., 0.], [1., 1., 0.], [1., 0., 0.]]),
            quad([[0., 0., 1.], [1., 0., 1.], [1., 1., 1.], [0., 1., 1.]]),
            quad([[0., 0., 0.], [1., 0., 0.], [1., 0., 1.], [0., 0., 1.]]),
            quad([[0., 1., 0.], [0., 1., 1.], [1., 1., 1.], [1., 1., 0.]]),
            quad([[0., 0., 0.], [0., 0., 1.], [0., 1., 1.], [0., 1., 0.]]),
            quad([[1., 0., 0.], [1., 1., 0.], [1., 1., 1.], [1., 0., 1.]]),
        ]
    }

    #[test]
    fn test_cube_volume() {
        assert_relative_eq!(signed_volume(&unit_cube()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flipped_cube_volume_is_negative() {
        let inside_out: Vec<Polygon> = unit_cube().iter().map(Polygon::flipped).collect();
        assert!((signed_volume(&inside_out) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cube_surface_area() {
        assert_relative_eq!(surface_area(&unit_cube()), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cube_center_of_mass() {
        let com = center_of_mass(&unit_cube());
        assert!((com - Point3::new(0.5, 0.5, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_center_of_mass_zero_volume_fallback() {
        // A quad paired with its flip encloses nothing: the signed
        // tetrahedron volumes cancel exactly and the AABB center is
        // reported instead of the undefined moment ratio.
        let face = quad([[0., 0., 2.], [1., 0., 2.], [1., 1., 2.], [0., 1., 2.]]);
        let soup = vec![face.flipped(), face];
        let com = center_of_mass(&soup);
        assert!((com - Point3::new(0.5, 0.5, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn test_bounding_box() {
        let aabb = bounding_box(&unit_cube());
        assert!((aabb.min - Point3::new(0.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((aabb.max - Point3::new(1.0, 1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_cube_is_watertight() {
        assert!(is_watertight(&unit_cube()));
    }

    #[test]
    fn test_open_soup_is_not_watertight() {
        let mut cube = unit_cube();
        cube.pop();
        assert!(!is_watertight(&cube));
    }

    #[test]
    fn test_volume_translation_invariant() {
        let moved: Vec<Polygon> = unit_cube()
            .iter()
            .map(|p| p.translated(hedra_kernel_math::Vec3::new(100.0, -50.0, 7.0)))
            .collect();
        assert!((signed_volume(&moved) - 1.0).abs() < 1e-9);
    }
}
