//! Collapse resolution.
//!
//! When a move closes a cycle, the opponent picks which of its two squares
//! the closing mark lands on. Everything else follows:
//!
//! 1. The chosen square becomes classical with the closing move's mark.
//! 2. Every other move touching a classical square can no longer live there
//!    and is forced onto its other end.
//! 3. Repeat breadth-first until the whole component is classical.
//!
//! The component is a tree plus the closing edge, so it has exactly as many
//! edges as squares and every square receives exactly one mark. Any other
//! shape means the caller broke the contract.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

use super::entanglement::{Edge, EntanglementGraph};
use crate::core::{Mark, SquareId};
use crate::error::{QtttError, Result};

/// Outcome of propagating a collapse choice through one component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Classical mark for every square of the component, in the order the
    /// propagation reached them. The chosen square comes first.
    pub assignments: Vec<(SquareId, Mark)>,

    /// All edges of the component, to be detached from the graph.
    pub edges: Vec<Edge>,
}

impl Resolution {
    /// The mark assigned to `square`, if it was part of the component.
    #[must_use]
    pub fn mark_for(&self, square: SquareId) -> Option<Mark> {
        self.assignments
            .iter()
            .find(|(s, _)| *s == square)
            .map(|(_, m)| *m)
    }

    /// Number of squares resolved.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check if nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl EntanglementGraph {
    /// Compute the collapse seeded by placing `closing` on `choice`.
    ///
    /// Pure: the graph is not modified. Apply the result with
    /// [`EntanglementGraph::detach`] on `resolution.edges`.
    ///
    /// # Errors
    ///
    /// Returns `InternalInvariantViolation` if `closing` is not a live edge,
    /// `choice` is not one of its ends, or its component does not contain
    /// exactly one cycle.
    #[instrument(level = "debug", skip(self), fields(number = closing.number.raw()))]
    pub fn resolve(&self, closing: &Edge, choice: SquareId) -> Result<Resolution> {
        if !closing.ends.contains(&choice) {
            return Err(QtttError::invariant(format!(
                "collapse square {choice} is not an end of move {}",
                closing.number
            )));
        }
        let live = closing
            .ends
            .iter()
            .all(|&end| self.edges_at(end).iter().any(|e| e.number == closing.number));
        if !live {
            return Err(QtttError::invariant(format!(
                "move {} is not a live edge of the entanglement graph",
                closing.number
            )));
        }

        let (squares, edges) = self.component(choice);
        if edges.len() != squares.len() {
            return Err(QtttError::invariant(format!(
                "component of {choice} has {} squares and {} moves; expected exactly one cycle",
                squares.len(),
                edges.len()
            )));
        }

        let mut assigned: FxHashMap<SquareId, Mark> = FxHashMap::default();
        let mut placed = FxHashSet::default();
        let mut order = Vec::with_capacity(squares.len());
        let mut queue = VecDeque::new();

        placed.insert(closing.number);
        queue.push_back((choice, *closing));

        while let Some((square, edge)) = queue.pop_front() {
            let mark = edge.mark();
            if let Some(previous) = assigned.insert(square, mark) {
                return Err(QtttError::invariant(format!(
                    "square {square} forced to both {} and {}",
                    previous.number, mark.number
                )));
            }
            debug!(%square, number = mark.number.raw(), "square collapsed");
            order.push((square, mark));

            for other in self.edges_at(square) {
                if placed.insert(other.number) {
                    queue.push_back((other.other(square), *other));
                }
            }
        }

        if order.len() != squares.len() || placed.len() != edges.len() {
            return Err(QtttError::invariant(format!(
                "collapse from {choice} reached {} of {} squares",
                order.len(),
                squares.len()
            )));
        }

        Ok(Resolution {
            assignments: order,
            edges,
        })
    }
}
