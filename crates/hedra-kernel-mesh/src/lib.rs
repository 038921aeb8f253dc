#![warn(missing_docs)]

//! Polygon-soup geometric substrate for the hedra kernel.
//!
//! Solids in hedra are closed soups of planar polygons with outward
//! normals. This crate provides the building blocks shared by the
//! boolean engine and the kernel facade: planes, planar polygons,
//! axis-aligned bounding boxes, and mesh measurement (volume, surface
//! area, centroid, watertightness).

mod aabb;
mod measure;
mod plane;
mod polygon;

pub use aabb::Aabb3;
pub use measure::{bounding_box, center_of_mass, is_watertight, signed_volume, surface_area};
pub use plane::{Plane, PLANE_EPSILON};
pub use polygon::{Polygon, PolygonError};
