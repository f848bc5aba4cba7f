//! Error types for the engine.
//!
//! Every user-facing failure leaves the [`Board`](crate::board::Board)
//! untouched. `InternalInvariantViolation` marks a programming error in the
//! engine or a caller skipping the documented preconditions.

use derive_more::{Display, Error};

use crate::core::SquareId;

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum QtttError {
    /// The move cannot be played in the current position.
    #[display("invalid move: {reason}")]
    InvalidMove {
        /// Why the move was refused.
        reason: String,
    },

    /// A collapse choice was given while no collapse is pending.
    #[display("no collapse is pending")]
    NoPendingCollapse,

    /// The chosen square is not one of the pending move's two squares.
    #[display("cannot collapse onto {square}: choose {} or {}", options[0], options[1])]
    InvalidCollapseChoice {
        /// The square that was chosen.
        square: SquareId,
        /// The two squares of the pending move.
        options: [SquareId; 2],
    },

    /// More entries were requested for undo than history holds.
    #[display("cannot undo {requested} step(s): only {available} recorded")]
    UndoOutOfRange {
        /// Number of steps requested.
        requested: usize,
        /// Number of steps available.
        available: usize,
    },

    /// An engine invariant does not hold.
    #[display("internal invariant violated: {detail}")]
    InternalInvariantViolation {
        /// Description of the broken invariant.
        detail: String,
    },

    /// The board configuration is unusable.
    #[display("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },

    /// Text input could not be understood.
    #[display("cannot parse '{input}': {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// What was expected.
        reason: String,
    },
}

impl QtttError {
    /// Creates an `InvalidMove` error.
    pub fn invalid_move(reason: impl Into<String>) -> Self {
        Self::InvalidMove {
            reason: reason.into(),
        }
    }

    /// Creates an `InternalInvariantViolation` error.
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InternalInvariantViolation {
            detail: detail.into(),
        }
    }

    /// Creates a `Parse` error.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from bad user input rather than an engine bug.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::InternalInvariantViolation { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QtttError>;
