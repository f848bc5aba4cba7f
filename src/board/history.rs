//! Undo history.
//!
//! One entry per successful mutating call: a placed move or a resolved
//! collapse. Entries are deltas, not snapshots; each carries just enough to
//! put the board back exactly as it was.

use crate::core::{MoveNumber, Player, QuantumMarks, SquareId};
use crate::graph::Edge;
use crate::rules::Outcome;

/// Turn bookkeeping captured before each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnState {
    /// Player to place next.
    pub turn: Player,
    /// Move awaiting a collapse choice.
    pub pending: Option<MoveNumber>,
    /// Result of the game so far.
    pub outcome: Option<Outcome>,
}

/// A reversible record.
#[derive(Clone, Debug)]
pub enum HistoryEntry {
    /// A move was placed. Undo removes it and its two quantum marks.
    Placed {
        /// The move's number; it is always the last move when undone.
        number: MoveNumber,
        /// State before the move.
        prior: TurnState,
    },

    /// A pending move was collapsed. Undo makes the component quantum again
    /// and leaves the move pending.
    Collapsed {
        /// Square the closing move was fixed to.
        choice: SquareId,
        /// Every square that became classical, with the quantum marks it
        /// held before.
        resolved: Vec<(SquareId, QuantumMarks)>,
        /// Graph edges removed by the collapse.
        edges: Vec<Edge>,
        /// State before the collapse.
        prior: TurnState,
    },
}

impl HistoryEntry {
    /// State before this entry was applied.
    #[must_use]
    pub fn prior(&self) -> &TurnState {
        match self {
            HistoryEntry::Placed { prior, .. } | HistoryEntry::Collapsed { prior, .. } => prior,
        }
    }
}

/// Stack of reversible records, newest last.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Take the newest entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// The newest entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of entries that can be undone.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing can be undone.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
