//! Core data model: players, squares, moves, configuration.
//!
//! These types carry no game logic beyond their own invariants. The board
//! and the entanglement graph are built on top of them.

pub mod config;
pub mod moves;
pub mod player;
pub mod square;

pub use config::{BoardConfig, Symbols, DEFAULT_SIZE};
pub use moves::{Move, MoveInput, MoveNumber};
pub use player::{Player, PlayerPair};
pub use square::{Mark, QuantumMarks, Square, SquareId, MAX_SIZE};
