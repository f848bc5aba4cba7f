//! Help and rules text.

use crate::board::Board;

/// Summary of the interactive commands.
pub const COMMANDS: &str = "\
Commands:
  a1-b2        place a quantum mark on two squares (any separator, or none)
  a1           choose where a pending move collapses
  u, u<n>      undo the last step, or the last n steps
  ?            show this summary
  r            show the rules
  q, x, exit   quit the game";

/// The rules of the game.
pub const RULES: &str = "\
Quantum Tic-Tac-Toe

Players take turns. A move puts one quantum mark of yours on two different
squares at once. Squares may hold any number of quantum marks but no
classical one. Each mark carries its move number so you can tell which two
squares belong together.

When the two squares you pick are already linked through other quantum
marks, your move closes a cycle and the marks in it must collapse. Your
opponent chooses on which of your two squares your mark becomes classical,
entering that single square. Every other quantum mark on that square is then
forced onto its other square, and so on until the whole linked group is
classical.

After a collapse, a row, column or diagonal of one player's classical marks
wins. If both players completed lines in the same collapse, compare the
newest mark on each player's lines: the older one wins, and the same move on
both sides is a draw. When no line is completed and fewer than two free
squares remain, the game is drawn.";

/// Help text for `topic`: the rules for anything starting with `r`, the
/// command summary otherwise.
#[must_use]
pub fn help(topic: &str) -> &'static str {
    match topic.trim_start().chars().next() {
        Some('r' | 'R') => RULES,
        _ => COMMANDS,
    }
}

impl Board {
    /// Help text for `topic`. See [`help`].
    #[must_use]
    pub fn help(topic: &str) -> &'static str {
        help(topic)
    }
}
