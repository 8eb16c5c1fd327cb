//! Triangle-mesh types and queries.
//!
//! The mesh layer has three pieces. A [`TriangleSkeleton`] is a validated
//! triangle with no identity; a [`TriangleMesh`] owns a fixed set of
//! skeletons, assigns each a [`TriangleId`] and precomputes which pairs
//! share an edge; a [`Triangle`] is a borrowed handle combining an id, its
//! corners and the owning mesh, which is what queries hand back.
//!
//! Meshes are built once and never modified, either directly from
//! skeletons with [`TriangleMesh::new`] or from indexed faces with
//! [`TriangleMesh::from_triangles`].

mod graph;
mod index;
mod skeleton;

pub use graph::{Triangle, TriangleMesh};
pub use index::TriangleId;
pub use skeleton::TriangleSkeleton;
