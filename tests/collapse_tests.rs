//! Cycle detection and collapse integration tests.
//!
//! These tests drive a board through short games and check when a move
//! becomes pending and how a collapse choice spreads through the component.

use quantum_ttt::board::{Board, PushOutcome};
use quantum_ttt::core::{Mark, MoveInput, MoveNumber, Player, SquareId};
use quantum_ttt::error::QtttError;
use quantum_ttt::graph::Edge;

fn sq(text: &str) -> SquareId {
    text.parse().unwrap()
}

fn play(board: &mut Board, a: &str, b: &str) -> PushOutcome {
    board
        .push(MoveInput::TwoSquareMove(sq(a), sq(b)))
        .unwrap_or_else(|e| panic!("{a}-{b} rejected: {e}"))
}

fn classical(board: &Board, square: &str) -> Option<Mark> {
    board.square(sq(square)).unwrap().classical()
}

fn mark(player: Player, number: u32) -> Mark {
    Mark::new(player, MoveNumber::new(number))
}

/// X a1-b2, O a2-b1, X b2-a2, O b1-a1: the last move closes the loop.
fn four_square_cycle() -> Board {
    let mut board = Board::default();
    play(&mut board, "a1", "b2");
    play(&mut board, "a2", "b1");
    play(&mut board, "b2", "a2");
    let outcome = play(&mut board, "b1", "a1");
    assert!(outcome.collapse_pending());
    board
}

// =============================================================================
// Cycle Detection Tests
// =============================================================================

/// Test that disjoint and tree-shaped moves never pend.
#[test]
fn test_moves_into_separate_components_do_not_pend() {
    let mut board = Board::default();
    // the fourth move touches c1 for the first time, so no loop forms
    for (a, b) in [("a1", "b2"), ("a2", "b1"), ("a2", "c3"), ("b2", "c1")] {
        assert!(!play(&mut board, a, b).collapse_pending());
    }
    assert!(board.pending_collapse().is_none());
    assert_eq!(board.turn(), Player::First);
    assert_eq!(board.graph().edge_count(), 4);
    assert!(board.graph().is_forest());
}

/// Test that repeating a pair of squares closes a two-square cycle.
#[test]
fn test_same_pair_twice_pends() {
    let mut board = Board::default();
    play(&mut board, "c1", "c3");
    let outcome = play(&mut board, "c3", "c1");
    assert_eq!(
        outcome,
        PushOutcome::Placed {
            number: MoveNumber::new(2),
            collapse_pending: true
        }
    );
    assert_eq!(board.pending_collapse().unwrap().player(), Player::Second);
    assert_eq!(board.chooser(), Some(Player::First));
}

/// Test that the turn stays with the mover until the collapse is chosen.
#[test]
fn test_pending_move_keeps_turn() {
    let board = four_square_cycle();
    assert_eq!(board.turn(), Player::Second);
    assert_eq!(board.chooser(), Some(Player::First));
    assert_eq!(board.collapse_options(), Some([sq("b1"), sq("a1")]));
}

// =============================================================================
// Propagation Tests
// =============================================================================

/// Test the whole chain reaction when the closing mark lands on a1.
#[test]
fn test_collapse_on_a1() {
    let mut board = four_square_cycle();
    let collapse = board.collapse_choice(sq("a1")).unwrap();

    assert_eq!(collapse.number, MoveNumber::new(4));
    assert_eq!(collapse.resolution.assignments[0], (sq("a1"), mark(Player::Second, 4)));
    assert_eq!(classical(&board, "a1"), Some(mark(Player::Second, 4)));
    assert_eq!(classical(&board, "b2"), Some(mark(Player::First, 1)));
    assert_eq!(classical(&board, "a2"), Some(mark(Player::First, 3)));
    assert_eq!(classical(&board, "b1"), Some(mark(Player::Second, 2)));

    assert!(collapse.outcome.is_none());
    assert_eq!(board.turn(), Player::First);
    assert_eq!(board.graph().edge_count(), 0);
}

/// Test the opposite choice sends every mark the other way.
#[test]
fn test_collapse_on_b1() {
    let mut board = four_square_cycle();
    board.collapse_choice(sq("b1")).unwrap();

    assert_eq!(classical(&board, "b1"), Some(mark(Player::Second, 4)));
    assert_eq!(classical(&board, "a2"), Some(mark(Player::Second, 2)));
    assert_eq!(classical(&board, "b2"), Some(mark(Player::First, 3)));
    assert_eq!(classical(&board, "a1"), Some(mark(Player::First, 1)));
}

/// Test that moves hanging off the cycle collapse with it.
#[test]
fn test_tree_branches_collapse_with_cycle() {
    let mut board = Board::default();
    play(&mut board, "a1", "b1");
    play(&mut board, "b1", "c1"); // branch to c1
    play(&mut board, "b1", "b2");
    play(&mut board, "b2", "c3"); // branch to c3
    play(&mut board, "a2", "c2"); // separate component
    assert!(play(&mut board, "b2", "a1").collapse_pending());

    let collapse = board.collapse_choice(sq("b2")).unwrap();
    assert_eq!(collapse.resolution.len(), 5);
    for square in ["a1", "b1", "c1", "b2", "c3"] {
        assert!(classical(&board, square).is_some(), "{square} should be classical");
    }
    // untouched component keeps its quantum marks
    assert!(classical(&board, "a2").is_none());
    assert_eq!(board.square(sq("c2")).unwrap().quantum_marks().len(), 1);
    assert_eq!(board.graph().edge_count(), 1);

    assert_eq!(classical(&board, "b2"), Some(mark(Player::Second, 6)));
    assert_eq!(classical(&board, "c3"), Some(mark(Player::Second, 4)));
    assert_eq!(classical(&board, "b1"), Some(mark(Player::First, 3)));
    assert_eq!(classical(&board, "c1"), Some(mark(Player::Second, 2)));
    assert_eq!(classical(&board, "a1"), Some(mark(Player::First, 1)));
}

/// Test that propagation is a pure function of graph and choice.
#[test]
fn test_resolution_is_deterministic() {
    let board = four_square_cycle();
    let pending = *board.pending_collapse().unwrap();
    let closing = Edge::from(&pending);

    let first = board.graph().resolve(&closing, sq("a1")).unwrap();
    let second = board.graph().resolve(&closing, sq("a1")).unwrap();
    assert_eq!(first, second);

    let mut left = board.clone();
    let mut right = board.clone();
    left.collapse_choice(sq("a1")).unwrap();
    right.collapse_choice(sq("a1")).unwrap();
    assert_eq!(left, right);
}

// =============================================================================
// Choice Validation Tests
// =============================================================================

/// Test that only the pending move's squares are accepted.
#[test]
fn test_choice_must_be_pending_square() {
    let mut board = four_square_cycle();
    let before = board.clone();

    let err = board.collapse_choice(sq("b2")).unwrap_err();
    assert_eq!(
        err,
        QtttError::InvalidCollapseChoice {
            square: sq("b2"),
            options: [sq("b1"), sq("a1")],
        }
    );
    assert_eq!(board, before);
    assert_eq!(board.graph().edge_count(), 4);
}

/// Test that a single-square input without a pending move is refused.
#[test]
fn test_choice_without_pending_move() {
    let mut board = Board::default();
    play(&mut board, "a1", "b2");
    let err = board
        .push(MoveInput::SingleSquareChoice(sq("a1")))
        .unwrap_err();
    assert_eq!(err, QtttError::NoPendingCollapse);
    assert_eq!(board.moves().len(), 1);
}

/// Test that collapsed squares cannot take new marks.
#[test]
fn test_collapsed_square_is_closed() {
    let mut board = four_square_cycle();
    board.collapse_choice(sq("a1")).unwrap();

    let before = board.clone();
    let err = board
        .push(MoveInput::TwoSquareMove(sq("c1"), sq("b1")))
        .unwrap_err();
    assert!(matches!(err, QtttError::InvalidMove { .. }));
    assert_eq!(board, before);
    assert_eq!(board.legal_placements().len(), 10);
}
