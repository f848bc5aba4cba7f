//! Text interface over the board.
//!
//! - `Command`: one parsed line of user input
//! - `Display for Board`: the grid with marks, labels and a status line
//! - `help`: command summary and rules

pub mod help;
pub mod input;
pub mod render;

pub use help::{help, COMMANDS, RULES};
pub use input::Command;
