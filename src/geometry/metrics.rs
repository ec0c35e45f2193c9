//! Polygon metrics over coordinate rings.
//!
//! Rings are given in boundary order without repeating the first point; the
//! closing segment from the last point back to the first is implied.

use super::point::Point2;
use itertools::Itertools;
use num_traits::Float;

const EPS: f64 = 1e-12;

/// Signed shoelace area; positive for counter-clockwise rings.
pub fn signed_area<T: Float>(ring: &[Point2<T>]) -> T {
    if ring.len() < 3 {
        return T::zero();
    }
    let two = T::one() + T::one();
    ring.iter()
        .circular_tuple_windows()
        .fold(T::zero(), |acc, (a, b)| acc + a.cross(*b))
        / two
}

/// Unsigned polygon area.
pub fn polygon_area<T: Float>(ring: &[Point2<T>]) -> T {
    signed_area(ring).abs()
}

/// Area centroid of a simple polygon.
///
/// Returns `None` for rings with fewer than three points or zero area.
pub fn polygon_centroid<T: Float>(ring: &[Point2<T>]) -> Option<Point2<T>> {
    if ring.len() < 3 {
        return None;
    }
    let (mut cx, mut cy, mut twice_area) = (T::zero(), T::zero(), T::zero());
    for (a, b) in ring.iter().circular_tuple_windows() {
        let cross = a.cross(*b);
        twice_area = twice_area + cross;
        cx = cx + (a.x + b.x) * cross;
        cy = cy + (a.y + b.y) * cross;
    }
    let eps = T::from(EPS)?;
    if twice_area.abs() < eps {
        return None;
    }
    let three = T::from(3.0)?;
    let factor = T::one() / (three * twice_area);
    Some(Point2::new(cx * factor, cy * factor))
}
