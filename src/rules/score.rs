//! Derived score summary.

use serde::{Deserialize, Serialize};

use super::outcome::{completed_lines, Outcome};
use crate::board::Board;
use crate::core::{Player, PlayerPair};

/// Read-only summary of a position, recomputed on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Classical squares held by each player.
    pub classical: PlayerPair<usize>,
    /// Completed lines held by each player.
    pub lines: PlayerPair<usize>,
    /// The game result, if decided.
    pub outcome: Option<Outcome>,
}

impl Score {
    /// Summarise a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        let mut classical = PlayerPair::default();
        for mark in board.squares().iter().filter_map(|s| s.classical()) {
            classical[mark.player] += 1;
        }
        let mut lines = PlayerPair::default();
        for line in completed_lines(board) {
            lines[line.player] += 1;
        }
        Self {
            classical,
            lines,
            outcome: board.winner(),
        }
    }

    /// Single-number form: `None` while the game runs, `0` for a draw,
    /// otherwise the winner's completed-line count, positive for the first
    /// player and negative for the second.
    ///
    /// ```
    /// use quantum_ttt::board::Board;
    ///
    /// let board = Board::default();
    /// assert_eq!(board.score().signed(), None);
    /// ```
    #[must_use]
    pub fn signed(&self) -> Option<i32> {
        self.outcome.map(|outcome| match outcome {
            Outcome::Draw => 0,
            Outcome::Winner(player) => {
                let count = self.lines[player].max(1) as i32;
                match player {
                    Player::First => count,
                    Player::Second => -count,
                }
            }
        })
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.signed() {
            None => write!(f, "-"),
            Some(0) => write!(f, "0"),
            Some(value) => write!(f, "{value:+}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_values() {
        let mut score = Score {
            classical: PlayerPair::new(3, 3),
            lines: PlayerPair::new(2, 1),
            outcome: None,
        };
        assert_eq!(score.signed(), None);
        assert_eq!(score.to_string(), "-");

        score.outcome = Some(Outcome::Winner(Player::First));
        assert_eq!(score.signed(), Some(2));
        assert_eq!(score.to_string(), "+2");

        score.outcome = Some(Outcome::Winner(Player::Second));
        assert_eq!(score.signed(), Some(-1));

        score.outcome = Some(Outcome::Draw);
        assert_eq!(score.signed(), Some(0));
        assert_eq!(score.to_string(), "0");
    }
}
