//! Build-cycle state of a diagram.
//!
//! ```text
//! Empty --set_seeds--> SeedsSet --set_boundary/set_origin--> Configured
//!   --Generator fills--> Filled --build_edge x N--> Built --insert_cells--> Queryable
//! ```
//!
//! `reset` returns `Filled`, `Built` and `Queryable` to `Configured`;
//! `set_seeds` returns any state to `SeedsSet`.

use crate::mesh_error::MeshError;
use std::fmt;

/// Where a diagram is in its build cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildState {
    /// No seeds yet.
    #[default]
    Empty,
    /// Seeds and empty regions allocated; clip window not yet fixed.
    SeedsSet,
    /// Clip window fixed; the Generator may start filling.
    Configured,
    /// The Generator has appended geometry or built some regions.
    Filled,
    /// Every region polygon is built.
    Built,
    /// Built regions are registered in the generic mesh.
    Queryable,
}

impl BuildState {
    /// States in which the Generator may append geometry.
    pub const FILLING: &'static [BuildState] = &[BuildState::Configured, BuildState::Filled];

    /// Fails with `StateViolation` unless `self` is one of `allowed`.
    pub(crate) fn require(
        self,
        operation: &'static str,
        allowed: &[BuildState],
    ) -> Result<(), MeshError> {
        if allowed.contains(&self) {
            Ok(())
        } else {
            Err(MeshError::StateViolation {
                operation,
                state: self,
            })
        }
    }

    /// True once the Generator has produced data that queries can read.
    #[inline]
    pub fn has_geometry(self) -> bool {
        self >= BuildState::Filled
    }

    /// True once every region polygon is available.
    #[inline]
    pub fn is_built(self) -> bool {
        self >= BuildState::Built
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
