//! Validated triangles and point containment.

use crate::error::{GeometryError, Result};
use crate::geom::{points_coincident, Point, Segment, TOLERANCE};

/// A validated, non-degenerate triangle with no identity of its own.
///
/// Skeletons are plain values: two skeletons with coincident corners are
/// interchangeable. They are the raw material for
/// [`TriangleMesh`](crate::mesh::TriangleMesh), which assigns ids and
/// precomputes adjacency.
///
/// Construction enforces non-degeneracy, so every skeleton that exists has
/// positive area and well-defined barycentric coordinates. Queries never
/// need to re-check.
///
/// # Example
///
/// ```
/// use trigon::geom::Point;
/// use trigon::mesh::TriangleSkeleton;
///
/// let triangle = TriangleSkeleton::new(
///     Point::new(1.0, 2.0),
///     Point::new(3.0, 2.0),
///     Point::new(1.0, 4.0),
/// )
/// .unwrap();
/// assert!(triangle.contains_point(Point::new(1.5, 2.5)));
/// assert!(!triangle.contains_point(Point::new(0.0, 2.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSkeleton {
    vertices: [Point; 3],
}

impl TriangleSkeleton {
    /// Create a triangle from three corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] when two corners
    /// coincide within the crate tolerance, and
    /// [`GeometryError::DegenerateTriangle`] when a corner lies on the
    /// segment joining the other two. Collinear corners always fail one of
    /// the two checks.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        let ab = Segment::new(a, b)?;
        let ac = Segment::new(a, c)?;
        let bc = Segment::new(b, c)?;

        for (edge, opposite) in [(ab, c), (ac, b), (bc, a)] {
            if edge.contains(opposite) {
                return Err(GeometryError::DegenerateTriangle {
                    x: opposite.x,
                    y: opposite.y,
                });
            }
        }

        Ok(Self {
            vertices: [a, b, c],
        })
    }

    /// The first corner.
    #[inline]
    pub fn a(&self) -> Point {
        self.vertices[0]
    }

    /// The second corner.
    #[inline]
    pub fn b(&self) -> Point {
        self.vertices[1]
    }

    /// The third corner.
    #[inline]
    pub fn c(&self) -> Point {
        self.vertices[2]
    }

    /// The three corners in construction order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// True when `point` falls inside this triangle or within the crate
    /// tolerance of its boundary.
    ///
    /// The test solves for barycentric coordinates and widens the inside
    /// region by a band of `TOLERANCE` around each edge, expressed in
    /// barycentric units. The widening makes mesh coverage gap-free: a
    /// point sitting on an edge shared by two triangles is contained by
    /// both.
    pub fn contains_point(&self, point: Point) -> bool {
        let v0 = self.c() - self.a();
        let v1 = self.b() - self.a();
        let v2 = point - self.a();

        // Tolerance band around each edge, converted to barycentric units.
        let low_u = TOLERANCE / v0.norm();
        let low_v = TOLERANCE / v1.norm();

        let dot00 = v0.dot(&v0);
        let dot01 = v0.dot(&v1);
        let dot02 = v0.dot(&v2);
        let dot11 = v1.dot(&v1);
        let dot12 = v1.dot(&v2);

        let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
        let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

        u > -low_u && v > -low_v && u + v < 1.0 + low_u * u + low_v * v
    }

    /// True when the two triangles share exactly two corners.
    ///
    /// Corners are matched by coincidence, not by index, so the triangles
    /// may list a shared edge in any order. Sharing all three corners means
    /// the triangles are coincident, which does not count as adjacency.
    pub fn is_adjacent_to(&self, other: &TriangleSkeleton) -> bool {
        self.shared_vertex_count(other) == 2
    }

    /// The number of `other`'s corners coinciding with a corner of this
    /// triangle.
    fn shared_vertex_count(&self, other: &TriangleSkeleton) -> usize {
        other
            .vertices
            .iter()
            .filter(|&&vertex| self.has_vertex(vertex))
            .count()
    }

    /// True when any stored corner coincides with `point`.
    fn has_vertex(&self, point: Point) -> bool {
        self.vertices
            .iter()
            .any(|&vertex| points_coincident(vertex, point))
    }
}
