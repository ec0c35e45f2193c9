//! Invariant checking hooks shared by the diagram components.

use crate::mesh_error::MeshError;

/// Trait for structures that can check their own structural invariants.
pub trait DebugInvariants {
    /// Panic on the first broken invariant when invariant checking is enabled
    /// (debug builds, or the `strict-invariants` / `check-invariants` features).
    fn debug_assert_invariants(&self);
    /// Check every invariant and return the first violation found.
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Panics with `context` and the first broken invariant when `check` fails.
///
/// Guards diagram mutations that must leave the structure consistent, such as
/// `Diagram::insert_cells`. The check is only evaluated in debug builds or with
/// the `strict-invariants` / `check-invariants` features.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $context:expr) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(err) = $check {
            panic!("[invariants] {}: {}", $context, err);
        }
    };
}
