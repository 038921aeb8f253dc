//! Panel layout for the two-cube sculpture.
//!
//! Each cube is six flat panels of `thickness` material tiling the
//! shell around a `dim`-edged inner cavity, with no gaps and no
//! overlaps: bottom and top carry the full outer footprint, front and
//! back the full width between them, left and right fill what remains.
//!
//! Panels are deliberately built through the oriented-face
//! reconstruction path rather than assembled directly, mirroring how
//! the physical pieces are specified: by their bounding planes and an
//! outward side per face.

use hedra_carve::{build_solid, CarveError, OrientedFace};
use hedra_kernel_math::{Point3, Vec3};
use hedra_kernel_mesh::{Polygon, PolygonError};

use crate::config::SculptureParams;
use crate::piece::Piece;

/// The six oriented faces of an axis-aligned box, each referenced from
/// a point beyond the corresponding wall.
///
/// Bounds collapsed on any axis make the walls collinear and are
/// rejected.
pub fn parallelepiped_faces(
    min: Point3,
    max: Point3,
) -> Result<Vec<OrientedFace>, PolygonError> {
    let (a, b) = (min, max);
    let center = Point3::from((a.coords + b.coords) * 0.5);
    let v = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
    let walls: [[Point3; 4]; 6] = [
        [v(a.x, a.y, a.z), v(b.x, a.y, a.z), v(b.x, b.y, a.z), v(a.x, b.y, a.z)],
        [v(a.x, a.y, b.z), v(b.x, a.y, b.z), v(b.x, b.y, b.z), v(a.x, b.y, b.z)],
        [v(a.x, a.y, a.z), v(b.x, a.y, a.z), v(b.x, a.y, b.z), v(a.x, a.y, b.z)],
        [v(a.x, b.y, a.z), v(b.x, b.y, a.z), v(b.x, b.y, b.z), v(a.x, b.y, b.z)],
        [v(a.x, a.y, a.z), v(a.x, b.y, a.z), v(a.x, b.y, b.z), v(a.x, a.y, b.z)],
        [v(b.x, a.y, a.z), v(b.x, b.y, a.z), v(b.x, b.y, b.z), v(b.x, a.y, b.z)],
    ];
    walls
        .iter()
        .map(|quad| {
            let polygon = Polygon::new(quad.to_vec())?;
            // Reflect the box center through the wall to land strictly
            // outside it.
            let outward = Point3::from(polygon.centroid().coords * 2.0 - center.coords);
            Ok(OrientedFace::new(polygon, outward))
        })
        .collect()
}

/// Build the six named panels of one cube whose inner cavity spans
/// `origin .. origin + dim` on every axis.
///
/// Panel names are `<prefix>/<bottom|top|front|back|left|right>` and
/// unique within the cube.
pub fn cube_panels(
    params: &SculptureParams,
    origin: Point3,
    prefix: &str,
) -> Result<Vec<Piece>, CarveError> {
    let o = origin;
    let d = params.dim;
    let t = params.thickness;
    let bounds: [(&str, [f64; 3], [f64; 3]); 6] = [
        ("bottom", [o.x - t, o.y - t, o.z - t], [o.x + d + t, o.y + d + t, o.z]),
        ("top", [o.x - t, o.y - t, o.z + d], [o.x + d + t, o.y + d + t, o.z + d + t]),
        ("front", [o.x - t, o.y - t, o.z], [o.x + d + t, o.y, o.z + d]),
        ("back", [o.x - t, o.y + d, o.z], [o.x + d + t, o.y + d + t, o.z + d]),
        ("left", [o.x - t, o.y, o.z], [o.x, o.y + d, o.z + d]),
        ("right", [o.x + d, o.y, o.z], [o.x + d + t, o.y + d, o.z + d]),
    ];
    bounds
        .iter()
        .map(|(side, min, max)| {
            let faces = parallelepiped_faces(
                Point3::new(min[0], min[1], min[2]),
                Point3::new(max[0], max[1], max[2]),
            )?;
            let solid = build_solid(&faces)?;
            Ok(Piece::new(format!("{prefix}/{side}"), solid))
        })
        .collect()
}

/// Offset vector of the second cube.
pub fn cube_offset(params: &SculptureParams) -> Vec3 {
    Vec3::new(params.offset[0], params.offset[1], params.offset[2])
}
