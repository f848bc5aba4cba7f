//! The game board and its undo history.
//!
//! - `Board`: owns squares, moves, the entanglement graph and turn state
//! - `History`: per-call deltas consumed by `Board::undo`

pub mod history;
pub mod state;

pub use history::{History, HistoryEntry, TurnState};
pub use state::{Board, Collapse, PushOutcome};
