//! Planar geometric primitives and tolerance-aware predicates.
//!
//! Positions are plain [`nalgebra`] points. This module adds the one fixed
//! tolerance the crate measures against and the predicates everything else
//! builds on. Coincidence, segment containment and triangle containment all
//! compare Euclidean distances against the same [`TOLERANCE`], which is what
//! keeps them consistent with each other at triangle boundaries: a point
//! within tolerance of a shared edge coincides with its projection in both
//! incident triangles, and both report it as contained.
//!
//! # Example
//!
//! ```
//! use trigon::geom::{points_coincident, Point};
//!
//! let a = Point::new(1.0, 1.0);
//! let b = Point::new(1.000005, 1.0);
//! assert!(points_coincident(a, b));
//! ```

mod segment;

pub use segment::Segment;

/// A position in the plane.
pub type Point = nalgebra::Point2<f64>;

/// A displacement between two [`Point`]s.
pub type Vector = nalgebra::Vector2<f64>;

/// Geometric tolerance for coincidence tests (distance in plane units).
///
/// Two points closer than this are treated as the same point, and a point
/// closer than this to a segment is treated as lying on it.
pub const TOLERANCE: f64 = 1e-5;

/// True when `a` and `b` lie within [`TOLERANCE`] of each other.
///
/// The test is against Euclidean distance, so the coincidence region is a
/// disc rather than a coordinate-wise box, and it is strict at the boundary:
/// two points exactly `TOLERANCE` apart are distinct.
#[inline]
pub fn points_coincident(a: Point, b: Point) -> bool {
    nalgebra::distance(&a, &b) < TOLERANCE
}

/// True when `a` points in a clockwise or parallel direction from `b`.
///
/// Non-strict: parallel vectors count as both clockwise and
/// counter-clockwise from each other, so orientation logic built on the
/// pair of predicates sees collinear configurations from both sides.
#[inline]
pub fn clockwise_from(a: Vector, b: Vector) -> bool {
    a.perp(&b) >= 0.0
}

/// True when `a` points in a counter-clockwise or parallel direction from `b`.
///
/// See [`clockwise_from`] for how parallel vectors are treated.
#[inline]
pub fn counter_clockwise_from(a: Vector, b: Vector) -> bool {
    a.perp(&b) <= 0.0
}
