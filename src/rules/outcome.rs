//! Win and draw determination.
//!
//! A line is complete when every square on it is classical and owned by the
//! same player. If a single collapse completes lines for both players, each
//! player is dated by the highest move number on any of their completed
//! lines and the earlier date wins. Equal dates draw.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::lines::Line;
use crate::board::Board;
use crate::core::{MoveNumber, Player, PlayerPair};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }

    /// The winning player, if there is one.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(p) => Some(*p),
            Outcome::Draw => None,
        }
    }
}

/// A fully classical line owned by one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedLine {
    /// Owner of every mark on the line.
    pub player: Player,
    /// The line's squares.
    pub squares: Line,
    /// Highest move number among the line's marks.
    pub latest: MoveNumber,
}

/// All completed lines on the board, in [`Lines`](super::Lines) order.
#[must_use]
pub fn completed_lines(board: &Board) -> Vec<CompletedLine> {
    board
        .groups()
        .filter_map(|squares| {
            let mut owner = None;
            let mut latest = MoveNumber::new(0);
            for &id in &squares {
                let mark = board.square(id)?.classical()?;
                match owner {
                    None => owner = Some(mark.player),
                    Some(p) if p != mark.player => return None,
                    Some(_) => {}
                }
                latest = latest.max(mark.number);
            }
            owner.map(|player| CompletedLine {
                player,
                squares,
                latest,
            })
        })
        .collect()
}

/// Decide the winner from a set of completed lines.
///
/// Returns `None` when no line is complete.
#[must_use]
pub fn decide(lines: &[CompletedLine]) -> Option<Outcome> {
    let mut latest: PlayerPair<Option<MoveNumber>> = PlayerPair::default();
    for line in lines {
        let slot = &mut latest[line.player];
        *slot = Some(slot.map_or(line.latest, |current| current.max(line.latest)));
    }

    match (latest[Player::First], latest[Player::Second]) {
        (None, None) => None,
        (Some(_), None) => Some(Outcome::Winner(Player::First)),
        (None, Some(_)) => Some(Outcome::Winner(Player::Second)),
        (Some(first), Some(second)) => Some(match first.cmp(&second) {
            Ordering::Less => Outcome::Winner(Player::First),
            Ordering::Greater => Outcome::Winner(Player::Second),
            Ordering::Equal => Outcome::Draw,
        }),
    }
}

/// Evaluate the board after a collapse.
///
/// A completed line decides the game. Otherwise the game is drawn once
/// fewer than two squares remain open, since no move can be placed.
#[must_use]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    decide(&completed_lines(board)).or_else(|| {
        let open = board.squares().iter().filter(|s| !s.is_classical()).count();
        (open < 2).then_some(Outcome::Draw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SquareId;

    fn line(player: Player, latest: u32) -> CompletedLine {
        CompletedLine {
            player,
            squares: Line::from_slice(&[SquareId::new(0, 0)]),
            latest: MoveNumber::new(latest),
        }
    }

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(Player::Second);
        assert!(!result.is_winner(Player::First));
        assert!(result.is_winner(Player::Second));
        assert_eq!(result.winner(), Some(Player::Second));

        assert!(!Outcome::Draw.is_winner(Player::First));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_decide_no_lines() {
        assert_eq!(decide(&[]), None);
    }

    #[test]
    fn test_decide_single_player() {
        assert_eq!(
            decide(&[line(Player::Second, 6)]),
            Some(Outcome::Winner(Player::Second))
        );
        assert_eq!(
            decide(&[line(Player::First, 5), line(Player::First, 9)]),
            Some(Outcome::Winner(Player::First))
        );
    }

    #[test]
    fn test_decide_tie_break_smaller_maximum_wins() {
        let lines = [line(Player::First, 7), line(Player::Second, 6)];
        assert_eq!(decide(&lines), Some(Outcome::Winner(Player::Second)));

        let lines = [line(Player::First, 5), line(Player::Second, 6)];
        assert_eq!(decide(&lines), Some(Outcome::Winner(Player::First)));
    }

    #[test]
    fn test_decide_tie_break_uses_latest_move_over_all_lines() {
        // First has lines dated 9 and 3, Second one dated 4
        let lines = [
            line(Player::First, 9),
            line(Player::Second, 4),
            line(Player::First, 3),
        ];
        assert_eq!(decide(&lines), Some(Outcome::Winner(Player::Second)));
    }

    #[test]
    fn test_decide_equal_maxima_draw() {
        let lines = [line(Player::First, 8), line(Player::Second, 8)];
        assert_eq!(decide(&lines), Some(Outcome::Draw));
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::Winner(Player::First)).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Winner(Player::First));
    }
}
