//! Text rendering of a board.
//!
//! ```text
//! Board after move 2 (score: -)
//! +-----+-----+-----+
//! |     |     |     |
//! |     |     |     | 3
//! +-----+-----+-----+
//! |     | O1  |     |
//! |     | X1  |     | 2
//! +-----+-----+-----+
//! | O1  |     |     |
//! | X1  |     |     | 1
//! +-----+-----+-----+
//!    a     b     c
//! 'X' chooses where O1 collapses: a1 or b2?
//! ```
//!
//! Quantum marks are written as the player's symbol plus the mark's index
//! among that player's moves. Cells grow to a square block big enough for
//! the fullest cell, filled row by row starting in the middle row.

use std::fmt;

use crate::board::Board;
use crate::core::{Mark, SquareId};
use crate::rules::Outcome;

/// Cell geometry shared by every row of one rendering.
struct Layout {
    height: usize,
    width: usize,
}

impl Layout {
    fn of(board: &Board) -> Self {
        let fullest = board
            .squares()
            .iter()
            .map(|s| s.quantum_marks().len())
            .max()
            .unwrap_or(0);
        let mut height = 1;
        while height * height < fullest {
            height += 1;
        }
        let label = board
            .squares()
            .iter()
            .flat_map(|s| s.quantum_marks().iter().map(|&m| board.mark_label(m).len()))
            .max()
            .unwrap_or(0)
            .max(2);
        Self {
            height,
            width: height * (label + 1) - 1,
        }
    }

    fn separator(&self, size: u8) -> String {
        let bar = "-".repeat(self.width);
        let mut line = String::from("+");
        for _ in 0..size {
            line.push_str(&bar);
            line.push('+');
        }
        line
    }

    fn cell(&self, board: &Board, id: SquareId) -> Vec<String> {
        let mut lines = vec![String::new(); self.height];
        let Some(square) = board.square(id) else {
            return lines;
        };
        if let Some(mark) = square.classical() {
            lines[self.height / 2].push(board.symbol(mark.player));
            return lines;
        }
        let mut row = self.height / 2;
        for &mark in square.quantum_marks() {
            let line = &mut lines[row];
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&board.mark_label(mark));
            row = (row + 1) % self.height;
        }
        lines
    }
}

impl Board {
    /// A quantum mark as shown on the board, e.g. `X2` for the first
    /// player's second move.
    #[must_use]
    pub fn mark_label(&self, mark: Mark) -> String {
        format!("{}{}", self.symbol(mark.player), mark.number.per_player_index())
    }

    /// One line describing the state of play.
    #[must_use]
    pub fn status(&self) -> String {
        if let Some(outcome) = self.winner() {
            return match outcome {
                Outcome::Draw => "The game is drawn.".to_string(),
                Outcome::Winner(player) => format!("'{}' has won.", self.symbol(player)),
            };
        }
        if let Some(pending) = self.pending_collapse() {
            let [a, b] = pending.squares();
            let chooser = pending.player().opponent();
            return format!(
                "'{}' chooses where {} collapses: {a} or {b}?",
                self.symbol(chooser),
                self.mark_label(Mark::new(pending.player(), pending.number()))
            );
        }
        format!("'{}' to play.", self.symbol(self.turn()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = Layout::of(self);
        let size = self.size();
        let separator = layout.separator(size);
        let width = layout.width;

        writeln!(f, "Board after move {} (score: {})", self.moves().len(), self.score())?;
        writeln!(f, "{separator}")?;
        for row in (0..size).rev() {
            let cells: Vec<_> = (0..size)
                .map(|col| layout.cell(self, SquareId::new(row, col)))
                .collect();
            for line in 0..layout.height {
                for cell in &cells {
                    write!(f, "|{:^width$}", cell[line])?;
                }
                write!(f, "|")?;
                if line == layout.height / 2 {
                    write!(f, " {}", u32::from(row) + 1)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "{separator}")?;
        }
        for col in 0..size {
            write!(f, " {:^width$}", (b'a' + col) as char)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.status())
    }
}
