//! # Trigon
//!
//! A planar triangle-mesh geometry kernel.
//!
//! Trigon owns a fixed collection of triangles covering part of the plane
//! and answers the two questions a navigation or pathfinding layer keeps
//! asking: which triangle is under this point, and which triangles border
//! that one. Both answers come back as cheap [`Triangle`](mesh::Triangle)
//! handles tied to the mesh's lifetime.
//!
//! ## Features
//!
//! - **Tolerance-aware predicates**: every coincidence and containment
//!   test measures Euclidean distance against one crate-wide tolerance,
//!   so boundary behavior is consistent across primitives
//! - **Validated construction**: degenerate segments and triangles are
//!   rejected when values are created, not when queries run
//! - **Precomputed adjacency**: neighbor lookups are table reads after a
//!   one-time pass at mesh construction
//! - **Type-safe ids**: triangles are named by [`TriangleId`](mesh::TriangleId)
//!   rather than raw indices
//!
//! ## Quick Start
//!
//! ```
//! use trigon::prelude::*;
//!
//! let vertices = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let mesh = TriangleMesh::from_triangles(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();
//!
//! let triangle = mesh.locate(Point::new(0.75, 0.25)).unwrap();
//! assert_eq!(triangle.id(), TriangleId::new(0));
//! assert_eq!(triangle.neighbors().len(), 1);
//! ```
//!
//! ## Tolerance
//!
//! All approximate comparisons share [`geom::TOLERANCE`]. Two points
//! closer than the tolerance are one point, a point within it of a segment
//! lies on the segment, and triangle containment widens each edge by the
//! same band. Sharing one constant is what makes point location gap-free
//! on a tiled mesh: a query point on a shared edge is contained by both
//! incident triangles, and [`locate`](mesh::TriangleMesh::locate) breaks
//! the tie toward the lowest id.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod geom;
pub mod mesh;

pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::error::{GeometryError, Result};
    pub use crate::geom::{
        clockwise_from, counter_clockwise_from, points_coincident, Point, Segment, Vector,
        TOLERANCE,
    };
    pub use crate::mesh::{Triangle, TriangleId, TriangleMesh, TriangleSkeleton};
}

// Re-export nalgebra so downstream users can match versions.
pub use nalgebra;

#[cfg(test)]
mod tests {
    use crate::geom::{points_coincident, Point};
    use crate::mesh::{TriangleId, TriangleMesh, TriangleSkeleton};

    #[test]
    fn square_mesh_walkthrough() {
        let lower = TriangleSkeleton::new(
            Point::new(1.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(1.0, 4.0),
        )
        .unwrap();
        let upper = TriangleSkeleton::new(
            Point::new(3.0, 4.0),
            Point::new(3.0, 2.0),
            Point::new(1.0, 4.0),
        )
        .unwrap();
        let mesh = TriangleMesh::new(vec![lower, upper]);

        let start = mesh.locate(Point::new(1.5, 2.5)).unwrap();
        assert_eq!(start.id(), TriangleId::new(0));

        let neighbors = start.neighbors();
        assert_eq!(neighbors.len(), 1);
        let next = neighbors[0];
        assert_eq!(next.id(), TriangleId::new(1));
        for vertex in upper.vertices() {
            assert!(next
                .vertices()
                .iter()
                .any(|&corner| points_coincident(corner, vertex)));
        }

        // Walking back returns to the start triangle.
        let back = next.neighbors();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].id(), start.id());
    }
}
