//! `Point2`: planar coordinate pair over the caller's coordinate type.

use num_traits::Num;
use std::fmt;

/// Numeric types usable as diagram coordinates.
pub trait Coordinate: Num + Copy + PartialOrd + Default + fmt::Debug {}

impl<T: Num + Copy + PartialOrd + Default + fmt::Debug> Coordinate for T {}

/// A point (or extent) in the plane.
///
/// `T` is the caller's coordinate type; integer and floating types both work.
/// Helpers that need division or square roots live on `Float`-bounded impls.
#[derive(Copy, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T: Num + Copy> Point2<T> {
    /// The origin `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Point2::new(T::zero(), T::zero())
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Point2::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Point2::new(self.x - other.x, self.y - other.y)
    }

    /// z-component of the cross product of `self` and `other`.
    #[inline]
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared euclidean distance to `other`.
    #[inline]
    pub fn distance_sq(self, other: Self) -> T {
        let d = self.sub(other);
        d.x * d.x + d.y * d.y
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T: fmt::Debug> fmt::Debug for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point2").field(&self.x).field(&self.y).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
