//! MeshError: unified error type for voronoi-mesh public APIs
//!
//! Every fallible accessor and mutator of the diagram returns this error. A
//! variant always names the accessor or operation that failed together with the
//! offending id, so a malformed build can be traced back to the Generator call
//! that caused it.

use crate::voronoi::state::BuildState;
use thiserror::Error;

/// Coarse failure classes, used by callers that only need to branch on the
/// kind of contract that was broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An id at or past the current length of its sequence.
    OutOfRange,
    /// A query issued before the data it reads exists.
    PrematureQuery,
    /// An operation issued in the wrong build state.
    StateViolation,
    /// Arguments that can never be valid (e.g. a seed paired with itself).
    InvalidInput,
    /// A structural invariant found broken by validation.
    InvariantViolation,
}

/// Unified error type for diagram operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Id at or past the end of the addressed sequence.
    #[error("{accessor}: id {id} out of range (len {len})")]
    OutOfRange {
        accessor: &'static str,
        id: usize,
        len: usize,
    },
    /// Iteration or lookup requested before the Generator produced any data.
    #[error("{accessor}: premature query in state {state}")]
    PrematureQuery {
        accessor: &'static str,
        state: BuildState,
    },
    /// Cell handle requested for a region whose polygon was never built.
    #[error("{accessor}: region {region} has not been built")]
    RegionNotBuilt {
        accessor: &'static str,
        region: usize,
    },
    /// Operation not permitted in the current build state.
    #[error("{operation} is not allowed in state {state}")]
    StateViolation {
        operation: &'static str,
        state: BuildState,
    },
    /// Region already finalized; it must be cleared before it can change.
    #[error("{operation}: region {region} is already built")]
    RegionAlreadyBuilt {
        operation: &'static str,
        region: usize,
    },
    /// `set_seeds` called with an empty seed list.
    #[error("a diagram needs at least one seed")]
    NoSeeds,
    /// A seed pair whose two ids are the same seed.
    #[error("{accessor}: seed {seed} cannot be paired with itself")]
    DegenerateSeedPair { accessor: &'static str, seed: usize },
    /// Edge seed pair differs from the seed pair of the line it references.
    #[error("edge seeds ({left}, {right}) do not match line {line} seeds ({line_a}, {line_b})")]
    EdgeLineMismatch {
        left: usize,
        right: usize,
        line: usize,
        line_a: usize,
        line_b: usize,
    },
    /// Bounding window with a negative extent.
    #[error("bounding window size must be non-negative on both axes")]
    InvalidBoundary,
    /// A stored record points at an id that no longer (or never) existed.
    #[error("{owner} {owner_id} references {kind} {id}, but only {len} exist")]
    DanglingReference {
        owner: &'static str,
        owner_id: usize,
        kind: &'static str,
        id: usize,
        len: usize,
    },
    /// `neighbor` lists `seed` but `seed` does not list `neighbor`.
    #[error("neighbor graph asymmetric: {seed} -> {neighbor} has no mirror")]
    AsymmetricNeighbors { seed: usize, neighbor: usize },
    /// The same neighbor appears more than once for a seed.
    #[error("seed {seed} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { seed: usize, neighbor: usize },
    /// A built region with at least three points that is not a closed cycle.
    #[error("region {region} with {points} points is not a closed cycle")]
    OpenRegion { region: usize, points: usize },
    /// A vertex lying outside the bounding window.
    #[error("vertex {vertex} lies outside the bounding window")]
    VertexOutsideWindow { vertex: usize },
    /// Region arena and seed table disagree in length.
    #[error("{regions} regions allocated for {seeds} seeds")]
    RegionCountMismatch { regions: usize, seeds: usize },
}

impl MeshError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MeshError::OutOfRange { .. } => ErrorKind::OutOfRange,
            MeshError::PrematureQuery { .. } | MeshError::RegionNotBuilt { .. } => {
                ErrorKind::PrematureQuery
            }
            MeshError::StateViolation { .. } | MeshError::RegionAlreadyBuilt { .. } => {
                ErrorKind::StateViolation
            }
            MeshError::NoSeeds
            | MeshError::DegenerateSeedPair { .. }
            | MeshError::EdgeLineMismatch { .. }
            | MeshError::InvalidBoundary => ErrorKind::InvalidInput,
            MeshError::DanglingReference { .. }
            | MeshError::AsymmetricNeighbors { .. }
            | MeshError::DuplicateNeighbor { .. }
            | MeshError::OpenRegion { .. }
            | MeshError::VertexOutsideWindow { .. }
            | MeshError::RegionCountMismatch { .. } => ErrorKind::InvariantViolation,
        }
    }
}
