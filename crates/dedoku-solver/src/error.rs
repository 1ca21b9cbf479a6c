//! Solver error types.

use dedoku_core::ConsistencyError;

/// An error surfaced while applying techniques to a grid.
///
/// Errors are terminal for the affected solve only; the driver converts them
/// into an error status so batch callers keep going.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The grid state contradicts itself.
    #[display("inconsistency detected: {_0}")]
    Inconsistent(#[from] ConsistencyError),
}
