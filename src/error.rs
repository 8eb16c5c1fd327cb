//! Error types for trigon.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors that can occur while building or querying planar geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The endpoints of a segment coincide within the crate tolerance.
    #[error("degenerate segment: endpoints coincide near ({x}, {y})")]
    DegenerateSegment {
        /// The x coordinate of the coinciding endpoints.
        x: f64,
        /// The y coordinate of the coinciding endpoints.
        y: f64,
    },

    /// A triangle corner lies on the segment joining the other two corners.
    #[error("degenerate triangle: corner ({x}, {y}) lies on the opposite edge")]
    DegenerateTriangle {
        /// The x coordinate of the offending corner.
        x: f64,
        /// The y coordinate of the offending corner.
        y: f64,
    },

    /// No triangle in the mesh contains the queried point.
    #[error("point ({x}, {y}) is not covered by any triangle in the mesh")]
    PointNotCovered {
        /// The x coordinate of the queried point.
        x: f64,
        /// The y coordinate of the queried point.
        y: f64,
    },

    /// A triangle id does not name a triangle of the mesh.
    #[error("triangle id {id} out of range for a mesh of {len} triangles")]
    InvalidTriangleId {
        /// The raw index of the requested id.
        id: usize,
        /// The number of triangles in the mesh.
        len: usize,
    },

    /// A face references a vertex index outside the vertex list.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The index of the offending face.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },
}
