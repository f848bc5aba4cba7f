//! Adjacency structure over squares with moves as edges.
//!
//! Only *live* quantum moves are edges: once a collapse fixes a component,
//! its edges are detached and the graph is a forest again.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::core::{Mark, Move, MoveNumber, Player, SquareId};

/// A move seen as a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Move that created the edge.
    pub number: MoveNumber,
    /// Owner of the move.
    pub player: Player,
    /// The two squares it links.
    pub ends: [SquareId; 2],
}

impl Edge {
    /// The mark this edge leaves on whichever end it collapses to.
    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark::new(self.player, self.number)
    }

    /// The end opposite `from`. `from` must be one of the ends.
    #[must_use]
    pub fn other(&self, from: SquareId) -> SquareId {
        debug_assert!(self.ends.contains(&from), "{from} is not an end of move {}", self.number);
        if self.ends[0] == from {
            self.ends[1]
        } else {
            self.ends[0]
        }
    }
}

impl From<&Move> for Edge {
    fn from(mv: &Move) -> Self {
        Self {
            number: mv.number(),
            player: mv.player(),
            ends: mv.squares(),
        }
    }
}

/// Edges incident to one square.
pub(crate) type Incident = SmallVec<[Edge; 4]>;

/// The entanglement graph.
///
/// ## Usage
///
/// ```
/// use quantum_ttt::core::{Move, MoveNumber, Player, SquareId};
/// use quantum_ttt::graph::EntanglementGraph;
///
/// let a1 = SquareId::new(0, 0);
/// let b2 = SquareId::new(1, 1);
/// let c3 = SquareId::new(2, 2);
///
/// let mut graph = EntanglementGraph::new();
/// let first = Move::new(MoveNumber::new(1), Player::First, a1, b2).unwrap();
/// let second = Move::new(MoveNumber::new(2), Player::Second, b2, c3).unwrap();
/// assert!(!graph.insert(&first));
/// assert!(!graph.insert(&second));
///
/// // a1 and c3 are now linked through b2
/// assert!(graph.is_connected(a1, c3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EntanglementGraph {
    adjacency: FxHashMap<SquareId, Incident>,
    edge_count: usize,
}

impl EntanglementGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of squares with at least one live edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if the square has any live edge.
    #[must_use]
    pub fn contains(&self, square: SquareId) -> bool {
        self.adjacency.contains_key(&square)
    }

    /// Live edges touching a square.
    #[must_use]
    pub fn edges_at(&self, square: SquareId) -> &[Edge] {
        self.adjacency.get(&square).map_or(&[][..], |v| v.as_slice())
    }

    /// Check whether a path of live edges joins `from` and `to`.
    #[must_use]
    pub fn is_connected(&self, from: SquareId, to: SquareId) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        if from == to {
            return true;
        }

        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(from);
        queue.push_back(from);

        while let Some(square) = queue.pop_front() {
            for edge in self.edges_at(square) {
                let next = edge.other(square);
                if next == to {
                    return true;
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Add a move as an edge.
    ///
    /// Returns `true` if its ends were already connected, i.e. the new edge
    /// closes a cycle. The cycle test runs before the edge is added.
    pub fn insert(&mut self, mv: &Move) -> bool {
        let edge = Edge::from(mv);
        let closes_cycle = self.is_connected(edge.ends[0], edge.ends[1]);
        self.attach(std::slice::from_ref(&edge));
        closes_cycle
    }

    /// Remove the edge of move `number`, if live.
    pub fn remove(&mut self, number: MoveNumber) -> Option<Edge> {
        let edge = self
            .adjacency
            .values()
            .flat_map(|edges| edges.iter())
            .find(|e| e.number == number)
            .copied()?;
        self.detach(std::slice::from_ref(&edge));
        Some(edge)
    }

    /// Re-add edges, e.g. those detached by a collapse being undone.
    pub fn attach(&mut self, edges: &[Edge]) {
        for edge in edges {
            for end in edge.ends {
                self.adjacency.entry(end).or_default().push(*edge);
            }
            self.edge_count += 1;
        }
    }

    /// Drop edges from the graph. Squares left without edges disappear.
    pub fn detach(&mut self, edges: &[Edge]) {
        for edge in edges {
            let mut found = false;
            for end in edge.ends {
                if let Some(incident) = self.adjacency.get_mut(&end) {
                    let before = incident.len();
                    incident.retain(|e| e.number != edge.number);
                    found |= incident.len() != before;
                    if incident.is_empty() {
                        self.adjacency.remove(&end);
                    }
                }
            }
            if found {
                self.edge_count -= 1;
            }
        }
    }

    /// Squares and edges of the connected component containing `start`.
    ///
    /// Squares come out in breadth-first order from `start`; edges in the
    /// order they were first reached.
    #[must_use]
    pub fn component(&self, start: SquareId) -> (Vec<SquareId>, Vec<Edge>) {
        let mut squares = Vec::new();
        let mut edges = Vec::new();
        if !self.contains(start) {
            return (squares, edges);
        }

        let mut seen_squares = FxHashSet::default();
        let mut seen_edges = FxHashSet::default();
        let mut queue = VecDeque::new();
        seen_squares.insert(start);
        queue.push_back(start);

        while let Some(square) = queue.pop_front() {
            squares.push(square);
            for edge in self.edges_at(square) {
                if seen_edges.insert(edge.number) {
                    edges.push(*edge);
                }
                let next = edge.other(square);
                if seen_squares.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        (squares, edges)
    }

    /// Check the forest invariant: no component holds a cycle.
    #[must_use]
    pub fn is_forest(&self) -> bool {
        let mut seen = FxHashSet::default();
        let mut starts: Vec<_> = self.adjacency.keys().copied().collect();
        starts.sort_unstable();
        for start in starts {
            if seen.contains(&start) {
                continue;
            }
            let (squares, edges) = self.component(start);
            if edges.len() >= squares.len() {
                return false;
            }
            seen.extend(squares);
        }
        true
    }
}
