//! Game rules evaluated over a board.
//!
//! - `Lines`: every row, column and diagonal
//! - `evaluate`: win/draw determination with the tie-break
//! - `Score`: derived summary
//!
//! The board calls into these after each collapse; nothing here mutates.

pub mod lines;
pub mod outcome;
pub mod score;

pub use lines::{Line, Lines};
pub use outcome::{completed_lines, decide, evaluate, CompletedLine, Outcome};
pub use score::Score;
