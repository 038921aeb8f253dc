//! Binary space partitioning tree over polygon soups.
//!
//! Each node stores the polygons coplanar with its splitting plane and
//! recursively partitions the rest into front and back subtrees. The
//! tree supports the two operations the boolean pipeline needs:
//! clipping a polygon list against the solid the tree represents, and
//! inverting the solid in place.

use hedra_kernel_mesh::{Plane, Polygon};

/// A BSP tree node.
#[derive(Debug, Clone, Default)]
pub struct Node {
    plane: Option<Plane>,
    front: Option<Box<Node>>,
    back: Option<Box<Node>>,
    polygons: Vec<Polygon>,
}

impl Node {
    /// Build a tree from a polygon soup.
    pub fn new(polygons: &[Polygon]) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Convert the solid to its complement: flip every polygon and
    /// plane, and swap front and back subtrees.
    pub fn invert(&mut self) {
        for p in &mut self.polygons {
            p.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Remove the parts of `polygons` inside the solid this tree
    /// represents.
    pub fn clip_polygons(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        let Some(plane) = &self.plane else {
            return polygons.to_vec();
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        for poly in polygons {
            plane.split_polygon(
                poly,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        // Coplanar polygons ride with the side their normal faces.
        front.append(&mut coplanar_front);
        back.append(&mut coplanar_back);

        let mut front = match &self.front {
            Some(node) => node.clip_polygons(&front),
            None => front,
        };
        let back = match &self.back {
            Some(node) => node.clip_polygons(&back),
            // No back subtree means the back half-space is solid.
            None => Vec::new(),
        };

        front.extend(back);
        front
    }

    /// Remove the parts of this tree's polygons inside `other`'s solid.
    pub fn clip_to(&mut self, other: &Node) {
        self.polygons = other.clip_polygons(&self.polygons);
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// All polygons stored in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut out = self.polygons.clone();
        if let Some(front) = &self.front {
            out.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            out.extend(back.all_polygons());
        }
        out
    }

    /// Insert polygons into the tree, extending it as needed. The
    /// first polygon's plane seeds a fresh node.
    pub fn build(&mut self, polygons: &[Polygon]) {
        if polygons.is_empty() {
            return;
        }
        let plane = *self
            .plane
            .get_or_insert_with(|| *polygons[0].plane());

        let mut front = Vec::new();
        let mut back = Vec::new();
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        for poly in polygons {
            plane.split_polygon(
                poly,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        // Either-facing coplanar polygons live at this node.
        self.polygons.append(&mut coplanar_front);
        self.polygons.append(&mut coplanar_back);
        if !front.is_empty() {
            self.front
                .get_or_insert_with(|| Box::new(Node::default()))
                .build(&front);
        }
        if !back.is_empty() {
            self.back
                .get_or_insert_with(|| Box::new(Node::default()))
                .build(&back);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedra_kernel_math::Point3;
    use hedra_kernel_mesh::signed_volume;

    fn box_polygons(min: Point3, max: Point3) -> Vec<Polygon> {
        let v = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
        let (a, b) = (min, max);
        let quads = [
            [v(a.x, a.y, a.z), v(a.x, b.y, a.z), v(b.x, b.y, a.z), v(b.x, a.y, a.z)],
            [v(a.x, a.y, b.z), v(b.x, a.y, b.z), v(b.x, b.y, b.z), v(a.x, b.y, b.z)],
            [v(a.x, a.y, a.z), v(b.x, a.y, a.z), v(b.x, a.y, b.z), v(a.x, a.y, b.z)],
            [v(a.x, b.y, a.z), v(a.x, b.y, b.z), v(b.x, b.y, b.z), v(b.x, b.y, a.z)],
            [v(a.x, a.y, a.z), v(a.x, a.y, b.z), v(a.x, b.y, b.z), v(a.x, b.y, a.z)],
            [v(b.x, a.y, a.z), v(b.x, b.y, a.z), v(b.x, b.y, b.z), v(b.x, a.y, b.z)],
        ];
        quads
            .iter()
            .map(|q| Polygon::new(q.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn test_round_trip_preserves_volume() {
        let cube = box_polygons(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
        let node = Node::new(&cube);
        let back = node.all_polygons();
        assert!((signed_volume(&back) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_double_invert_is_identity() {
        let cube = box_polygons(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let mut node = Node::new(&cube);
        node.invert();
        assert!((signed_volume(&node.all_polygons()) + 1.0).abs() < 1e-9);
        node.invert();
        assert!((signed_volume(&node.all_polygons()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_disjoint_keeps_everything() {
        let near = box_polygons(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let far = box_polygons(Point3::new(5.0, 5.0, 5.0), Point3::new(6.0, 6.0, 6.0));
        let node = Node::new(&near);
        let clipped = node.clip_polygons(&far);
        assert!((signed_volume(&clipped) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_contained_removes_everything() {
        let outer = box_polygons(Point3::new(-1.0, -1.0, -1.0), Point3::new(2.0, 2.0, 2.0));
        let inner = box_polygons(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let node = Node::new(&outer);
        let clipped = node.clip_polygons(&inner);
        assert!(clipped.is_empty(), "fully interior polygons must vanish");
    }
}
