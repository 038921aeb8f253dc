#![warn(missing_docs)]

//! Oriented-face solid reconstruction.
//!
//! Takes an unordered set of planar faces, each tagged with a reference
//! point marking its outward side, and builds the unique bounded solid
//! whose boundary lies on those face planes. The construction carves a
//! working block down by subtracting, for every face, an oversized slab
//! covering the outward side of its plane; what remains is the
//! intersection of the inward half-spaces, clipped to the block.
//!
//! The faces themselves only need to *support* the boundary: they may
//! be larger or smaller than the final boundary regions, and their
//! winding order carries no meaning (the reference point alone decides
//! orientation).

use hedra_kernel::{KernelError, Solid};
use hedra_kernel_math::{project_onto_plane, Dir3, Point3, Tolerance};
use hedra_kernel_mesh::{Aabb3, Plane, Polygon, PolygonError, PLANE_EPSILON};
use thiserror::Error;

/// Errors raised by solid reconstruction.
#[derive(Error, Debug)]
pub enum CarveError {
    /// No faces were supplied.
    #[error("no faces supplied")]
    EmptyInput,
    /// A face's reference point lies on (or too close to) its own
    /// plane, so neither side can be called outward.
    #[error("face {face}: reference point lies on the face plane, outward side is ambiguous")]
    AmbiguousOrientation {
        /// Index of the face in the input slice.
        face: usize,
    },
    /// The face planes do not bound a non-empty region.
    #[error("carved solid is degenerate: {detail}")]
    DegenerateSolid {
        /// What the validation found.
        detail: String,
    },
    /// A face polygon could not be constructed.
    #[error(transparent)]
    Face(#[from] PolygonError),
    /// A kernel operation failed.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// A planar face plus a reference point marking its outward side.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedFace {
    polygon: Polygon,
    outward: Point3,
}

impl OrientedFace {
    /// Pair a polygon with an outward reference point.
    pub fn new(polygon: Polygon, outward: Point3) -> Self {
        Self { polygon, outward }
    }

    /// Convenience constructor from raw points.
    pub fn from_points(points: Vec<Point3>, outward: Point3) -> Result<Self, PolygonError> {
        Ok(Self::new(Polygon::new(points)?, outward))
    }

    /// The face polygon.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// The outward reference point.
    pub fn outward(&self) -> Point3 {
        self.outward
    }

    /// The face normal pointing toward the reference point's half-space.
    ///
    /// Returns `None` when the reference point sits within the angular
    /// tolerance of the face plane (measured as its elevation angle
    /// from the plane, seen from the face centroid).
    pub fn resolved_normal(&self, tol: &Tolerance) -> Option<Dir3> {
        let plane = self.polygon.plane();
        let v = self.outward - self.polygon.centroid();
        let off = plane.signed_distance(&self.outward);
        let lateral = project_onto_plane(&v, &plane.normal).norm();
        if off.abs().atan2(lateral) < tol.angular {
            return None;
        }
        Some(if off > 0.0 {
            plane.normal
        } else {
            -plane.normal
        })
    }
}

/// Build the bounded solid enclosed by the given oriented faces, using
/// default tolerances.
pub fn build_solid(faces: &[OrientedFace]) -> Result<Solid, CarveError> {
    build_solid_with(faces, &Tolerance::DEFAULT)
}

/// Build the bounded solid enclosed by the given oriented faces.
///
/// Faces are processed in input order, so the construction is
/// deterministic. The result is validated: it must enclose positive
/// volume, and every boundary polygon must lie on the plane of some
/// input face. A surviving fragment on a wall of the working block
/// means the input planes left the region unbounded.
pub fn build_solid_with(faces: &[OrientedFace], tol: &Tolerance) -> Result<Solid, CarveError> {
    if faces.is_empty() {
        return Err(CarveError::EmptyInput);
    }

    let aabb = Aabb3::from_points(faces.iter().flat_map(|f| f.polygon.vertices()));
    let size = aabb.size();
    if !aabb.is_finite() || size.x.min(size.y).min(size.z) <= tol.linear {
        return Err(CarveError::DegenerateSolid {
            detail: "input vertices span no volume".into(),
        });
    }
    let diagonal = aabb.diagonal();

    let mut resolved_planes = Vec::with_capacity(faces.len());
    let mut solid = Solid::box_solid(&aabb)?;
    for (index, face) in faces.iter().enumerate() {
        let normal = face
            .resolved_normal(tol)
            .ok_or(CarveError::AmbiguousOrientation { face: index })?;
        let plane = face.polygon.plane();
        resolved_planes.push(if normal.dot(&plane.normal) > 0.0 {
            *plane
        } else {
            plane.flipped()
        });

        // The slab must cover the entire outward side of the plane
        // within the working block: every block point projects within
        // one diagonal of the face centroid, so expand the face until
        // each edge line clears the centroid by a full diagonal, then
        // extrude outward by one diagonal.
        let slab_base = face.polygon.expanded_to_min_clearance(diagonal);
        let slab = Solid::extrude(&slab_base, normal.into_inner() * diagonal)?;
        solid = solid.difference(&slab);
        log::debug!(
            "carve: face {index} cut, {} boundary faces remain",
            solid.faces().len()
        );
    }

    validate_carved(&solid, &resolved_planes, diagonal, tol)?;
    Ok(solid)
}

/// Post-carve validation: positive volume, and every (non-sliver)
/// boundary polygon supported by an input plane.
fn validate_carved(
    solid: &Solid,
    planes: &[Plane],
    diagonal: f64,
    tol: &Tolerance,
) -> Result<(), CarveError> {
    let volume = solid.volume();
    if !(volume > tol.linear) {
        return Err(CarveError::DegenerateSolid {
            detail: format!("carved region has volume {volume}"),
        });
    }
    // Splitting snaps vertices within PLANE_EPSILON onto cut planes, so
    // slivers up to that width can survive on the block walls; anything
    // larger on an unsupported plane is a real unbounded wall.
    let sliver_area = PLANE_EPSILON * diagonal * diagonal;
    for poly in solid.faces() {
        let area = hedra_kernel_mesh::surface_area(std::slice::from_ref(poly));
        if area <= sliver_area {
            continue;
        }
        if !planes.iter().any(|p| poly.plane().coincides_with(p, tol)) {
            return Err(CarveError::DegenerateSolid {
                detail: format!(
                    "boundary region (area {area:.3}) lies on no input face plane; \
                     the input does not bound the region"
                ),
            });
        }
    }
    Ok(())
}
