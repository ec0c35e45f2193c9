//! Axis-aligned clip window bounding every region of a diagram.

use super::point::Point2;
use crate::mesh_error::MeshError;
use num_traits::Num;

/// Rectangle given by its lower-left `origin` and its `size`.
///
/// The diagram only stores the window; clipping against it is the
/// Generator's job.
#[derive(Copy, Clone, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct BoundingWindow<T> {
    origin: Point2<T>,
    size: Point2<T>,
}

impl<T: Num + Copy + PartialOrd> BoundingWindow<T> {
    /// Creates a window, rejecting negative extents.
    pub fn new(origin: Point2<T>, size: Point2<T>) -> Result<Self, MeshError> {
        check_size(size)?;
        Ok(BoundingWindow { origin, size })
    }

    #[inline]
    pub fn origin(&self) -> Point2<T> {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Point2<T> {
        self.size
    }

    /// Upper-right corner.
    #[inline]
    pub fn max(&self) -> Point2<T> {
        self.origin.add(self.size)
    }

    pub(crate) fn set_origin(&mut self, origin: Point2<T>) {
        self.origin = origin;
    }

    pub(crate) fn set_size(&mut self, size: Point2<T>) -> Result<(), MeshError> {
        check_size(size)?;
        self.size = size;
        Ok(())
    }

    /// Closed containment test (points on the border are inside).
    pub fn contains(&self, p: Point2<T>) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }

    /// Area of the window.
    #[inline]
    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }
}

fn check_size<T: Num + Copy + PartialOrd>(size: Point2<T>) -> Result<(), MeshError> {
    if size.x < T::zero() || size.y < T::zero() {
        return Err(MeshError::InvalidBoundary);
    }
    Ok(())
}
