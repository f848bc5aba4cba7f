//! Move representation.
//!
//! A move places one quantum mark on **two** distinct squares at once.
//! Moves are numbered from 1 in push order; the number identifies the move
//! everywhere else in the engine (quantum marks, graph edges, history).
//!
//! `MoveInput` is what callers hand to [`Board::push`](crate::board::Board::push):
//! either a placement or a single-square collapse choice.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::player::Player;
use super::square::SquareId;
use crate::error::{QtttError, Result};

/// 1-based move sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoveNumber(pub u32);

impl MoveNumber {
    /// Create a new move number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the raw number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index of this move among its owner's moves (1 for X1/O1, 2 for X2/O2...).
    ///
    /// ```
    /// use quantum_ttt::core::MoveNumber;
    ///
    /// assert_eq!(MoveNumber::new(1).per_player_index(), 1);
    /// assert_eq!(MoveNumber::new(2).per_player_index(), 1);
    /// assert_eq!(MoveNumber::new(5).per_player_index(), 3);
    /// ```
    #[must_use]
    pub const fn per_player_index(self) -> u32 {
        (self.0 + 1) / 2
    }
}

impl std::fmt::Display for MoveNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One turn's placement: who played, when, and which two squares it spans.
///
/// Identity is the move number: two `Move`s are equal iff their numbers are.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Move {
    number: MoveNumber,
    player: Player,
    squares: [SquareId; 2],
}

impl Move {
    /// Create a move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if both squares are the same.
    pub fn new(number: MoveNumber, player: Player, first: SquareId, second: SquareId) -> Result<Self> {
        if first == second {
            return Err(QtttError::invalid_move(format!(
                "a move needs two different squares, got {first} twice"
            )));
        }
        Ok(Self {
            number,
            player,
            squares: [first, second],
        })
    }

    /// The move's sequence number.
    #[must_use]
    pub const fn number(&self) -> MoveNumber {
        self.number
    }

    /// The player who made the move.
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// The two squares, in the order they were given.
    #[must_use]
    pub const fn squares(&self) -> [SquareId; 2] {
        self.squares
    }

    /// Check whether the move has a mark on `square`.
    #[must_use]
    pub fn touches(&self, square: SquareId) -> bool {
        self.squares.contains(&square)
    }

    /// The square at the other end of the move, if `square` is one end.
    #[must_use]
    pub fn other(&self, square: SquareId) -> Option<SquareId> {
        match self.squares {
            [a, b] if a == square => Some(b),
            [a, b] if b == square => Some(a),
            _ => None,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {},{}", self.number, self.player, self.squares[0], self.squares[1])
    }
}

/// Input accepted by [`Board::push`](crate::board::Board::push).
///
/// The parsing layer decides which variant a piece of text is; the board
/// never inspects strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveInput {
    /// Place the current player's quantum mark on two squares.
    TwoSquareMove(SquareId, SquareId),
    /// Resolve the pending collapse onto one square.
    SingleSquareChoice(SquareId),
}
