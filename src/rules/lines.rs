//! Winning lines of an n×n board.
//!
//! Lines come out as: main diagonal, anti-diagonal, every column, every
//! row. Completed lines are reported in the same order.

use smallvec::SmallVec;
use std::iter::FusedIterator;

use crate::core::SquareId;

/// The squares of one line. Boards up to 8×8 stay on the stack.
pub type Line = SmallVec<[SquareId; 8]>;

/// Restartable iterator over all `2 + 2n` lines of a board.
///
/// Clone it to iterate again from the same point.
///
/// ```
/// use quantum_ttt::rules::Lines;
///
/// let lines = Lines::new(3);
/// assert_eq!(lines.len(), 8);
/// let first: Vec<String> = lines.clone().next().unwrap().iter().map(|s| s.to_string()).collect();
/// assert_eq!(first, ["a1", "b2", "c3"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lines {
    size: u8,
    next: usize,
}

impl Lines {
    /// Iterate over the lines of a `size`×`size` board.
    #[must_use]
    pub const fn new(size: u8) -> Self {
        Self { size, next: 0 }
    }

    /// Total number of lines on a `size`×`size` board.
    #[must_use]
    pub const fn count_for(size: u8) -> usize {
        2 + 2 * size as usize
    }

    fn line(&self, index: usize) -> Line {
        let n = self.size;
        match index {
            0 => (0..n).map(|k| SquareId::new(k, k)).collect(),
            1 => (0..n).map(|k| SquareId::new(n - 1 - k, k)).collect(),
            i if i < 2 + n as usize => {
                let col = (i - 2) as u8;
                (0..n).map(|row| SquareId::new(row, col)).collect()
            }
            i => {
                let row = (i - 2 - n as usize) as u8;
                (0..n).map(|col| SquareId::new(row, col)).collect()
            }
        }
    }
}

impl Iterator for Lines {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= Self::count_for(self.size) {
            return None;
        }
        let line = self.line(self.next);
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Self::count_for(self.size).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines {}

impl FusedIterator for Lines {}
