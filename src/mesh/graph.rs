//! Triangle meshes with precomputed adjacency.

use std::fmt;

use log::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geom::Point;
use crate::mesh::index::TriangleId;
use crate::mesh::skeleton::TriangleSkeleton;

/// An immutable collection of triangles with precomputed adjacency.
///
/// The mesh stores [`TriangleSkeleton`]s in a dense arena and assigns each
/// one a [`TriangleId`] equal to its position. Adjacency is computed once
/// at construction by comparing every pair of triangles, so
/// [`neighbors_of`](TriangleMesh::neighbors_of) is a table lookup. Nothing
/// can be added or removed afterwards, which is what lets the table stay
/// valid for the mesh's whole lifetime.
///
/// The triangles are not required to tile anything: disconnected islands,
/// overlaps and coincident duplicates are all representable. Queries only
/// promise that [`locate`](TriangleMesh::locate) resolves multiple
/// containing triangles to the lowest id.
///
/// # Example
///
/// ```
/// use trigon::geom::Point;
/// use trigon::mesh::{TriangleMesh, TriangleSkeleton};
///
/// let first = TriangleSkeleton::new(
///     Point::new(1.0, 2.0),
///     Point::new(3.0, 2.0),
///     Point::new(1.0, 4.0),
/// )
/// .unwrap();
/// let second = TriangleSkeleton::new(
///     Point::new(3.0, 4.0),
///     Point::new(3.0, 2.0),
///     Point::new(1.0, 4.0),
/// )
/// .unwrap();
///
/// let mesh = TriangleMesh::new(vec![first, second]);
/// let triangle = mesh.locate(Point::new(1.5, 2.5)).unwrap();
/// assert_eq!(triangle.neighbors().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    skeletons: Vec<TriangleSkeleton>,
    neighbors: Vec<Vec<TriangleId>>,
}

impl TriangleMesh {
    /// Build a mesh from validated triangles.
    ///
    /// Ids are assigned in input order. Construction compares every pair of
    /// triangles to fill the adjacency table, so it is quadratic in the
    /// number of triangles; all later adjacency queries are lookups.
    pub fn new(skeletons: Vec<TriangleSkeleton>) -> Self {
        let neighbors: Vec<Vec<TriangleId>> = skeletons
            .iter()
            .enumerate()
            .map(|(i, skeleton)| {
                skeletons
                    .iter()
                    .enumerate()
                    .filter(|&(j, other)| i != j && skeleton.is_adjacent_to(other))
                    .map(|(j, _)| TriangleId::new(j))
                    .collect()
            })
            .collect();

        let entries: usize = neighbors.iter().map(Vec::len).sum();
        debug!(
            "built mesh: {} triangles, {} adjacency entries",
            skeletons.len(),
            entries
        );

        Self {
            skeletons,
            neighbors,
        }
    }

    /// Build a mesh from a vertex list and vertex-index faces.
    ///
    /// Every face must reference valid vertex indices and describe a
    /// non-degenerate triangle. Validation is fail-fast: the first invalid
    /// face aborts construction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidVertexIndex`] when a face references
    /// a vertex outside `vertices`, and the degeneracy errors of
    /// [`TriangleSkeleton::new`] when a face's corners are coincident or
    /// collinear.
    ///
    /// # Example
    ///
    /// ```
    /// use trigon::geom::Point;
    /// use trigon::mesh::TriangleMesh;
    ///
    /// let vertices = [
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ];
    /// let mesh = TriangleMesh::from_triangles(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();
    /// assert_eq!(mesh.len(), 2);
    /// ```
    pub fn from_triangles(vertices: &[Point], faces: &[[usize; 3]]) -> Result<Self> {
        for (face_index, face) in faces.iter().enumerate() {
            for &vertex_index in face {
                if vertex_index >= vertices.len() {
                    return Err(GeometryError::InvalidVertexIndex {
                        face: face_index,
                        vertex: vertex_index,
                    });
                }
            }
        }

        let skeletons = faces
            .iter()
            .map(|&[a, b, c]| TriangleSkeleton::new(vertices[a], vertices[b], vertices[c]))
            .collect::<Result<Vec<_>>>()?;
        trace!(
            "validated {} faces against {} vertices",
            skeletons.len(),
            vertices.len()
        );

        Ok(Self::new(skeletons))
    }

    // ==================== Accessors ====================

    /// The number of triangles in the mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.skeletons.len()
    }

    /// True when the mesh holds no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.skeletons.is_empty()
    }

    /// The stored triangles, in id order.
    #[inline]
    pub fn skeletons(&self) -> &[TriangleSkeleton] {
        &self.skeletons
    }

    /// The triangle handle for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidTriangleId`] when `id` is out of
    /// range.
    pub fn triangle(&self, id: TriangleId) -> Result<Triangle<'_>> {
        if id.index() >= self.skeletons.len() {
            return Err(self.invalid_id(id));
        }
        Ok(self.handle(id))
    }

    // ==================== Queries ====================

    /// True when any triangle of the mesh contains `point`.
    pub fn contains_point(&self, point: Point) -> bool {
        self.skeletons
            .iter()
            .any(|skeleton| skeleton.contains_point(point))
    }

    /// The triangle under `point`.
    ///
    /// Containment includes the tolerance band around each triangle's
    /// boundary, so a point on a shared edge is inside both incident
    /// triangles; the lowest id wins, which keeps repeated queries
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PointNotCovered`] when no triangle
    /// contains `point`.
    pub fn locate(&self, point: Point) -> Result<Triangle<'_>> {
        self.skeletons
            .iter()
            .position(|skeleton| skeleton.contains_point(point))
            .map(|index| self.handle(TriangleId::new(index)))
            .ok_or(GeometryError::PointNotCovered {
                x: point.x,
                y: point.y,
            })
    }

    /// The triangles adjacent to the one named by `id`, in ascending id
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidTriangleId`] when `id` is out of
    /// range.
    pub fn neighbors_of(&self, id: TriangleId) -> Result<Vec<Triangle<'_>>> {
        if id.index() >= self.skeletons.len() {
            return Err(self.invalid_id(id));
        }
        Ok(self.neighbor_handles(id))
    }

    // ==================== Iteration ====================

    /// Iterate over all triangle ids in ascending order.
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.skeletons.len()).map(TriangleId::new)
    }

    /// Iterate over all triangles as handles, in id order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle<'_>> + '_ {
        self.triangle_ids().map(move |id| self.handle(id))
    }

    // ==================== Internals ====================

    /// Handle for an id known to be in range.
    fn handle(&self, id: TriangleId) -> Triangle<'_> {
        Triangle {
            id,
            skeleton: self.skeletons[id.index()],
            mesh: self,
        }
    }

    /// Handles for the adjacency row of an id known to be in range.
    fn neighbor_handles(&self, id: TriangleId) -> Vec<Triangle<'_>> {
        self.neighbors[id.index()]
            .iter()
            .map(|&neighbor| self.handle(neighbor))
            .collect()
    }

    fn invalid_id(&self, id: TriangleId) -> GeometryError {
        GeometryError::InvalidTriangleId {
            id: id.index(),
            len: self.skeletons.len(),
        }
    }
}

/// A read-only view of one triangle of a [`TriangleMesh`].
///
/// A handle pairs the triangle's id and corners with a reference to the
/// owning mesh, so neighbor lookups need no mesh argument and cannot
/// outlive the mesh. Handles are small and `Copy`; cloning one does not
/// clone any mesh data.
#[derive(Clone, Copy)]
pub struct Triangle<'m> {
    id: TriangleId,
    skeleton: TriangleSkeleton,
    mesh: &'m TriangleMesh,
}

impl<'m> Triangle<'m> {
    /// This triangle's id in the owning mesh.
    #[inline]
    pub fn id(&self) -> TriangleId {
        self.id
    }

    /// The first corner.
    #[inline]
    pub fn a(&self) -> Point {
        self.skeleton.a()
    }

    /// The second corner.
    #[inline]
    pub fn b(&self) -> Point {
        self.skeleton.b()
    }

    /// The third corner.
    #[inline]
    pub fn c(&self) -> Point {
        self.skeleton.c()
    }

    /// The three corners in storage order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        self.skeleton.vertices()
    }

    /// The underlying skeleton value.
    #[inline]
    pub fn skeleton(&self) -> TriangleSkeleton {
        self.skeleton
    }

    /// True when this triangle contains `point`, tolerance band included.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.skeleton.contains_point(point)
    }

    /// The triangles sharing an edge with this one, in ascending id order.
    ///
    /// The lookup hits the mesh's precomputed table. Handles are valid by
    /// construction, so this cannot fail.
    pub fn neighbors(&self) -> Vec<Triangle<'m>> {
        self.mesh.neighbor_handles(self.id)
    }

    /// True when the two triangles share exactly two corners.
    pub fn is_adjacent_to(&self, other: &Triangle<'_>) -> bool {
        self.skeleton.is_adjacent_to(&other.skeleton)
    }
}

impl fmt::Debug for Triangle<'_> {
    // Prints the id and corners, not the mesh back-reference.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Triangle")
            .field("id", &self.id)
            .field("a", &self.skeleton.a())
            .field("b", &self.skeleton.b())
            .field("c", &self.skeleton.c())
            .finish()
    }
}
