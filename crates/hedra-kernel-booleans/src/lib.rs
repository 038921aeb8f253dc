#![warn(missing_docs)]

//! Boolean operations on closed polygon soups.
//!
//! Solids are represented as BSP trees for the duration of an
//! operation. The clipping sequence keeps only the boundary polygons
//! that belong to the result, so output soups stay free of interior
//! geometry; they may however carry T-vertices along cut seams.

use hedra_kernel_mesh::Polygon;

mod bsp;

pub use bsp::Node;

/// Boundary polygons of `a - b`, both given as closed soups with
/// outward normals.
pub fn difference(a: &[Polygon], b: &[Polygon]) -> Vec<Polygon> {
    log::trace!(
        "difference: {} minus {} polygons",
        a.len(),
        b.len()
    );
    let mut a = Node::new(a);
    let mut b = Node::new(b);

    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(&b.all_polygons());
    a.invert();

    a.all_polygons()
}
