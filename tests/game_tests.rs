//! Win, draw and score integration tests.
//!
//! Each game is written out move by move; collapse choices are single
//! squares, exactly as a player would type them.

use quantum_ttt::board::Board;
use quantum_ttt::core::{BoardConfig, Player};
use quantum_ttt::error::QtttError;
use quantum_ttt::interface::Command;
use quantum_ttt::rules::{completed_lines, Outcome};

/// Play a script of text commands; every line must be a valid move or choice.
fn script(board: &mut Board, lines: &[&str]) {
    for line in lines {
        match Command::parse(line, board.size()).unwrap() {
            Command::Input(input) => {
                board
                    .push(input)
                    .unwrap_or_else(|e| panic!("'{line}' rejected: {e}"));
            }
            other => panic!("'{line}' is not a move: {other:?}"),
        }
    }
}

/// X1 a1-a2, O2 b1-c1, X3 a2-a3, O4 b2-c2, X5 a3-a1 closes column a.
const COLUMN_A: [&str; 5] = ["a1-a2", "b1-c1", "a2-a3", "b2-c2", "a3-a1"];

/// Two parallel chains joined into one loop by the sixth move.
const TWO_COLUMNS: [&str; 6] = ["a1-a2", "b1-b2", "a2-a3", "b2-b3", "a3-b3", "b1-a1"];

// =============================================================================
// Single Winner Tests
// =============================================================================

/// Test that a collapse completing one player's line ends the game.
#[test]
fn test_column_win_either_choice() {
    for choice in ["a1", "a3"] {
        let mut board = Board::default();
        script(&mut board, &COLUMN_A);
        assert_eq!(board.chooser(), Some(Player::Second));
        script(&mut board, &[choice]);

        assert_eq!(board.winner(), Some(Outcome::Winner(Player::First)));
        assert!(board.is_game_over());
        assert_eq!(board.score().signed(), Some(1));
        assert_eq!(board.score().to_string(), "+1");
        assert!(board.status().contains("has won"));
    }
}

/// Test that nothing is accepted after the game ends.
#[test]
fn test_game_over_rejects_input() {
    let mut board = Board::default();
    script(&mut board, &COLUMN_A);
    script(&mut board, &["a1"]);

    let before = board.clone();
    let err = board.place(board.turn(), "b3".parse().unwrap(), "c3".parse().unwrap());
    assert!(matches!(err, Err(QtttError::InvalidMove { .. })));
    assert!(board.legal_placements().is_empty());
    assert_eq!(board, before);
}

// =============================================================================
// Simultaneous Line Tests
// =============================================================================

/// Test that the line finished by the earlier move wins.
#[test]
fn test_simultaneous_lines_earlier_line_wins() {
    let mut board = Board::default();
    script(&mut board, &TWO_COLUMNS);
    script(&mut board, &["b1"]);

    let lines = completed_lines(&board);
    assert_eq!(lines.len(), 2);
    let first = lines.iter().find(|l| l.player == Player::First).unwrap();
    let second = lines.iter().find(|l| l.player == Player::Second).unwrap();
    assert_eq!(first.latest.raw(), 5);
    assert_eq!(second.latest.raw(), 6);

    assert_eq!(board.winner(), Some(Outcome::Winner(Player::First)));
    let score = board.score();
    assert_eq!(score.lines[Player::First], 1);
    assert_eq!(score.lines[Player::Second], 1);
    assert_eq!(score.signed(), Some(1));
}

/// Test that the other choice for the same loop completes no line.
#[test]
fn test_same_loop_other_choice_continues() {
    let mut board = Board::default();
    script(&mut board, &TWO_COLUMNS);
    script(&mut board, &["a1"]);

    assert!(completed_lines(&board).is_empty());
    assert!(!board.is_game_over());
    assert_eq!(board.turn(), Player::First);
    assert_eq!(board.classical_count(), 6);
}

/// Test the tie-break on a 2x2 board, where both diagonals complete at once.
#[test]
fn test_small_board_diagonals() {
    let mut board = Board::new(2).unwrap();
    script(&mut board, &["a1-b1", "a1-b1", "a1"]);
    assert!(!board.is_game_over());
    script(&mut board, &["a2-b2", "a2-b2", "b2"]);

    // X holds a2 (3) and b1 (1), O holds a1 (2) and b2 (4)
    assert_eq!(completed_lines(&board).len(), 2);
    assert_eq!(board.winner(), Some(Outcome::Winner(Player::First)));
}

// =============================================================================
// Draw Tests
// =============================================================================

/// Test that a fully classical board without a line is drawn.
#[test]
fn test_full_board_draw() {
    let mut board = Board::default();
    script(&mut board, &["a3-b3", "a3-b3", "b3"]);
    script(&mut board, &["c3-c2", "c3-c2", "c2"]);
    script(&mut board, &["a2-b2", "a2-b2", "b2"]);
    script(&mut board, &["b1-c1", "a1-b1", "c1-a1"]);
    assert_eq!(board.chooser(), Some(Player::Second));
    script(&mut board, &["c1"]);

    assert_eq!(board.classical_count(), 9);
    assert_eq!(board.winner(), Some(Outcome::Draw));
    assert!(board.is_game_over());
    assert_eq!(board.score().signed(), Some(0));
    assert_eq!(board.status(), "The game is drawn.");
}

/// Test that one open square left with no line is a draw.
#[test]
fn test_single_open_square_draw() {
    let mut board = Board::default();
    script(&mut board, &["a3-b3", "a3-b3", "b3"]);
    script(&mut board, &["c3-c2", "c3-c2", "c2"]);
    script(&mut board, &["a2-b2", "a2-b2", "b2"]);
    script(&mut board, &["b1-c1", "c1-b1", "c1"]);

    assert_eq!(board.classical_count(), 8);
    assert_eq!(board.winner(), Some(Outcome::Draw));
}

/// Test that the same position with the other choice completes column b.
#[test]
fn test_last_collapse_can_still_win() {
    let mut board = Board::default();
    script(&mut board, &["a3-b3", "a3-b3", "b3"]);
    script(&mut board, &["c3-c2", "c3-c2", "c2"]);
    script(&mut board, &["a2-b2", "a2-b2", "b2"]);
    script(&mut board, &["b1-c1", "c1-b1", "b1"]);

    assert_eq!(board.winner(), Some(Outcome::Winner(Player::Second)));
    assert_eq!(board.score().signed(), Some(-1));
}

// =============================================================================
// Configuration Tests
// =============================================================================

/// Test that custom symbols show up in status and rendering.
#[test]
fn test_custom_symbols() {
    let config = BoardConfig::new().with_size(4).with_symbols('A', 'B');
    let mut board = Board::with_config(config).unwrap();
    assert_eq!(board.status(), "'A' to play.");

    script(&mut board, &["d4-a1"]);
    assert_eq!(board.status(), "'B' to play.");
    let text = board.to_string();
    assert!(text.contains("A1"));
    assert!(text.lines().any(|l| l.ends_with("| 4")));
}

/// Test that bad configurations are refused.
#[test]
fn test_invalid_configuration() {
    let same = BoardConfig::new().with_symbols('X', 'X');
    assert!(matches!(
        Board::with_config(same),
        Err(QtttError::InvalidConfig { .. })
    ));
    assert!(Board::new(27).is_err());
}
