//! Distance and comparison primitives over field points.
//!
//! Pure functions, no state. Every equality-of-distance comparison in the
//! crate goes through [`nearly_equal`] or [`strictly_less`].

use glam::DVec2;

use airspace_core::constants::DISTANCE_EPSILON;
use airspace_core::types::Point;

/// Field position as a glam vector.
pub fn to_vec(point: &Point) -> DVec2 {
    DVec2::new(point.x, point.y)
}

/// Euclidean distance between two points.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    to_vec(p1).distance(to_vec(p2))
}

/// Distances equal within `DISTANCE_EPSILON`. Two infinities compare equal.
pub fn nearly_equal(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < DISTANCE_EPSILON
}

/// `a < b` by more than `DISTANCE_EPSILON`.
pub fn strictly_less(a: f64, b: f64) -> bool {
    a < b - DISTANCE_EPSILON
}
