//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Quantum Tic-Tac-Toe is strictly a two-player game. The first player owns
//! every odd-numbered move, the second player every even-numbered one.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::moves::MoveNumber;

/// One of the two players.
///
/// Which character each player writes on the board is configured through
/// [`Symbols`](super::Symbols); the engine itself only tracks seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, owns odd move numbers.
    First,
    /// Moves second, owns even move numbers.
    Second,
}

impl Player {
    /// Both players in seating order.
    pub const BOTH: [Player; 2] = [Player::First, Player::Second];

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// The player who owns the given move number.
    ///
    /// ```
    /// use quantum_ttt::core::{MoveNumber, Player};
    ///
    /// assert_eq!(Player::for_move(MoveNumber::new(1)), Player::First);
    /// assert_eq!(Player::for_move(MoveNumber::new(4)), Player::Second);
    /// ```
    #[must_use]
    pub const fn for_move(number: MoveNumber) -> Self {
        if number.raw() % 2 == 1 {
            Player::First
        } else {
            Player::Second
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use quantum_ttt::core::{Player, PlayerPair};
///
/// let mut counts: PlayerPair<u32> = PlayerPair::default();
/// counts[Player::Second] += 2;
/// assert_eq!(counts[Player::First], 0);
/// assert_eq!(counts[Player::Second], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from the first and second player's values.
    pub const fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a pair with values from a factory function.
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self::new(factory(Player::First), factory(Player::Second))
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
