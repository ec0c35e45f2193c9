//! Dense, strongly typed handles for diagram entities.
//!
//! Every entity family (seeds, vertices, lines, edges, cells) is numbered
//! `0..len` in insertion order. Each family gets its own `#[repr(transparent)]`
//! newtype over `usize` so a vertex id cannot be passed where a seed id is
//! expected, while indexing stays a plain `usize` at zero cost.
//!
//! `Debug` prints `SeedId(3)`, `Display` prints the bare `3`.

use std::fmt;

macro_rules! dense_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw 0-based index.
            #[inline]
            pub const fn new(raw: usize) -> Self {
                $name(raw)
            }

            /// Returns the raw 0-based index.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(raw: usize) -> Self {
                $name(raw)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> usize {
                id.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id!(
    /// Index of a seed, and of the region that belongs to it.
    SeedId
);
dense_id!(
    /// Index of a vertex in the point store.
    VertexId
);
dense_id!(
    /// Index of a bisector line.
    LineId
);
dense_id!(
    /// Index of a clipped edge.
    EdgeId
);
dense_id!(
    /// Key of a cell in the generic mesh container.
    CellId
);

/// Region `i` is registered as cell `i`.
impl From<SeedId> for CellId {
    #[inline]
    fn from(seed: SeedId) -> Self {
        CellId(seed.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_index() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert_eq!(usize::from(v), 42);
        assert_eq!(VertexId::from(42), v);
    }

    #[test]
    fn debug_and_display() {
        let s = SeedId::new(7);
        assert_eq!(format!("{:?}", s), "SeedId(7)");
        assert_eq!(format!("{}", s), "7");
        assert_eq!(format!("{:?}", EdgeId::new(0)), "EdgeId(0)");
    }

    #[test]
    fn seed_maps_to_cell() {
        assert_eq!(CellId::from(SeedId::new(3)), CellId::new(3));
    }

    #[test]
    fn ordering_and_hash() {
        let a = LineId::new(1);
        let b = LineId::new(2);
        assert!(a < b);
        let set: std::collections::HashSet<_> = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
