//! Line segments with tolerance-aware containment.

use crate::error::{GeometryError, Result};
use crate::geom::{points_coincident, Point, TOLERANCE};

/// A non-degenerate line segment between two points.
///
/// Construction rejects endpoint pairs that coincide under the crate
/// tolerance. A zero-length segment has no direction, and
/// [`closest_point_to`](Segment::closest_point_to) divides by the squared
/// segment length, so degenerate segments are unrepresentable instead of
/// being checked at every query.
///
/// A segment has no identity beyond its endpoints, and endpoint order does
/// not matter for [`coincident_with`](Segment::coincident_with).
///
/// # Example
///
/// ```
/// use trigon::geom::{Point, Segment};
///
/// let segment = Segment::new(Point::new(2.0, 1.0), Point::new(4.0, 1.0)).unwrap();
/// assert!(segment.contains(Point::new(3.0, 1.0)));
/// assert!(!segment.contains(Point::new(3.0, 2.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Create a segment between two distinct points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] if the endpoints
    /// coincide within the crate tolerance.
    pub fn new(a: Point, b: Point) -> Result<Self> {
        if points_coincident(a, b) {
            return Err(GeometryError::DegenerateSegment { x: a.x, y: a.y });
        }
        Ok(Self { a, b })
    }

    /// The first endpoint.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// The second endpoint.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    /// The Euclidean distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.a, &self.b)
    }

    /// The point on this segment closest to `point`.
    ///
    /// Projects `point` onto the carrying line and clamps the parameter to
    /// the segment's span, so the result is the nearest endpoint whenever
    /// the perpendicular foot falls outside the segment.
    pub fn closest_point_to(&self, point: Point) -> Point {
        let ab = self.b - self.a;
        let ap = point - self.a;
        // ab.norm_squared() is non-zero: construction rejects coincident endpoints.
        let t = (ap.dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
        self.a + ab * t
    }

    /// The distance from `point` to the nearest point of this segment.
    pub fn distance_to(&self, point: Point) -> f64 {
        nalgebra::distance(&self.closest_point_to(point), &point)
    }

    /// True when `point` lies on this segment within the crate tolerance.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.distance_to(point) < TOLERANCE
    }

    /// True when both segments join the same pair of points, in either order.
    pub fn coincident_with(&self, other: &Segment) -> bool {
        (points_coincident(self.a, other.a) && points_coincident(self.b, other.b))
            || (points_coincident(self.a, other.b) && points_coincident(self.b, other.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn horizontal() -> Segment {
        Segment::new(Point::new(2.0, 1.0), Point::new(4.0, 1.0)).unwrap()
    }

    #[test]
    fn stores_endpoints() {
        let segment = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)).unwrap();
        assert_relative_eq!(segment.a().x, 1.0);
        assert_relative_eq!(segment.a().y, 2.0);
        assert_relative_eq!(segment.b().x, 3.0);
        assert_relative_eq!(segment.b().y, 4.0);
    }

    #[test]
    fn rejects_coincident_endpoints() {
        let result = Segment::new(Point::new(1.0, 1.0), Point::new(1.000001, 1.0));
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateSegment { .. })
        ));
    }

    #[test]
    fn length_of_horizontal_segment() {
        assert_relative_eq!(horizontal().length(), 2.0);
    }

    #[test]
    fn distance_is_zero_on_the_segment() {
        let segment = horizontal();
        assert_relative_eq!(segment.distance_to(Point::new(2.0, 1.0)), 0.0);
        assert_relative_eq!(segment.distance_to(Point::new(4.0, 1.0)), 0.0);
        assert_relative_eq!(segment.distance_to(Point::new(3.0, 1.0)), 0.0);
    }

    #[test]
    fn distance_above_the_span_is_perpendicular() {
        let segment = horizontal();
        assert_relative_eq!(segment.distance_to(Point::new(3.0, 2.5)), 1.5);
    }

    #[test]
    fn distance_clamps_to_the_near_endpoint() {
        let segment = horizontal();
        assert_relative_eq!(
            segment.distance_to(Point::new(1.0, 2.0)),
            1.41421,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            segment.distance_to(Point::new(6.0, 2.0)),
            2.23607,
            epsilon = 1e-5
        );
    }

    #[test]
    fn distance_from_a_diagonal_segment() {
        let segment = Segment::new(Point::new(1.0, 1.0), Point::new(3.0, 3.0)).unwrap();
        assert_relative_eq!(
            segment.distance_to(Point::new(1.0, 3.0)),
            2.0_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn closest_point_projects_onto_the_span() {
        let segment = horizontal();
        let closest = segment.closest_point_to(Point::new(3.0, 2.5));
        assert_relative_eq!(closest.x, 3.0);
        assert_relative_eq!(closest.y, 1.0);
    }

    #[test]
    fn contains_points_within_tolerance_of_the_span() {
        let segment = horizontal();
        assert!(segment.contains(Point::new(2.5, 1.0)));
        assert!(segment.contains(Point::new(2.5, 1.0 + 1e-6)));
        assert!(!segment.contains(Point::new(2.5, 1.0 + 1e-4)));
    }

    #[test]
    fn coincidence_ignores_endpoint_order() {
        let forward = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)).unwrap();
        let backward = Segment::new(Point::new(3.0, 4.0), Point::new(1.0, 2.0)).unwrap();
        assert!(forward.coincident_with(&backward));
        assert!(backward.coincident_with(&forward));
    }

    #[test]
    fn coincidence_distinguishes_different_segments() {
        let first = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)).unwrap();
        let second = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 5.0)).unwrap();
        assert!(!first.coincident_with(&second));
    }
}
