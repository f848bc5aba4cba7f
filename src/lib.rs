//! # quantum-ttt
//!
//! A Quantum Tic-Tac-Toe engine.
//!
//! Each move places one quantum mark on two squares at once. Moves link
//! squares into an entanglement graph; a move that closes a cycle must be
//! collapsed by the opponent, turning its whole component classical. Lines
//! of classical marks win.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing calls**: every mutating call validates and computes
//!    before its first write. A rejected move leaves the board untouched.
//!
//! 2. **Incremental graph**: the entanglement graph is an adjacency map kept
//!    in step with the board, so cycle detection and collapse never rebuild
//!    it from the squares.
//!
//! 3. **Delta history**: undo replays per-call inverses instead of storing
//!    snapshots.
//!
//! ## Modules
//!
//! - `core`: players, squares, marks, moves, configuration
//! - `graph`: entanglement graph, cycle detection, collapse propagation
//! - `rules`: winning lines, win/draw determination, score
//! - `board`: the game state machine and its undo history
//! - `interface`: text commands, rendering, help
//!
//! ## Example
//!
//! ```
//! use quantum_ttt::board::Board;
//! use quantum_ttt::interface::Command;
//!
//! let mut board = Board::default();
//! for line in ["a1-b2", "b2,a1", "a1"] {
//!     if let Command::Input(input) = Command::parse(line, board.size()).unwrap() {
//!         board.push(input).unwrap();
//!     }
//! }
//! assert_eq!(board.classical_count(), 2);
//! println!("{board}");
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod graph;
pub mod interface;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, Collapse, PushOutcome};

pub use crate::core::{
    BoardConfig, Mark, Move, MoveInput, MoveNumber, Player, PlayerPair, Square, SquareId, Symbols,
};

pub use crate::error::{QtttError, Result};

pub use crate::graph::{Edge, EntanglementGraph, Resolution};

pub use crate::interface::Command;

pub use crate::rules::{Outcome, Score};
