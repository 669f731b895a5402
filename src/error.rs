//! Error types for the simulation core.
//!
//! The taxonomy follows the lifecycle: `InvalidTopology` is fatal at build
//! time and leaves no partial state behind, `InvalidState` is a recoverable
//! misuse of the lifecycle API, and `OutOfRange` is a link-table access
//! outside the validated bounds (unreachable after a successful `init` for
//! the built-in components).

use thiserror::Error;

use crate::board::BoardState;
use crate::config::ConfigError;
use crate::types::LinkId;

/// Errors produced by the simulation core.
#[derive(Error, Debug)]
pub enum SimError {
    /// The submitted topology is invalid (bad link index, arity mismatch,
    /// unknown component type). Raised once, at build time.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// An operation was called in a lifecycle state that does not allow it.
    #[error("cannot {operation} while board is {state}")]
    InvalidState {
        /// The operation that was attempted
        operation: &'static str,
        /// The state the board was in
        state: BoardState,
    },

    /// A link index outside the table bounds was accessed.
    #[error("link index {index} out of range (table holds {len} links)")]
    OutOfRange {
        /// The offending index
        index: LinkId,
        /// The table size
        len: usize,
    },

    /// A configuration loading error (IO, parse, validation).
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
