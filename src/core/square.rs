//! Squares and the marks placed on them.
//!
//! ## Square identifiers
//!
//! A `SquareId` is a (row, column) pair, both 0-based. Its text form is the
//! column letter followed by the 1-based row number: row 0, column 0 is `a1`,
//! row 2, column 1 is `b3`.
//!
//! ## Marks
//!
//! A square collects quantum marks in the order they are placed. Once a
//! collapse reaches it, the square holds exactly one classical mark and no
//! quantum marks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::moves::MoveNumber;
use super::player::Player;
use crate::error::QtttError;

/// Largest supported board edge: one column per letter `a`..`z`.
pub const MAX_SIZE: u8 = 26;

/// Identity of a square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquareId {
    /// 0-based row, row 0 printed as `1`.
    pub row: u8,
    /// 0-based column, column 0 printed as `a`.
    pub col: u8,
}

impl SquareId {
    /// Create a square identifier from 0-based coordinates.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size.
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Inverse of [`SquareId::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: u8) -> Self {
        let size = size as usize;
        Self::new((index / size) as u8, (index % size) as u8)
    }

    /// Check whether the square lies on a board of the given size.
    #[must_use]
    pub const fn is_on_board(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// The column letter (`a` for column 0), or `None` past column `z`.
    #[must_use]
    pub const fn col_label(self) -> Option<char> {
        if self.col < MAX_SIZE {
            Some((b'a' + self.col) as char)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SquareId {
    /// `a1` form; ids no board can hold print as raw `(row,col)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.col_label() {
            Some(letter) if self.row < MAX_SIZE => write!(f, "{letter}{}", u32::from(self.row) + 1),
            _ => write!(f, "({},{})", self.row, self.col),
        }
    }
}

impl FromStr for SquareId {
    type Err = QtttError;

    /// Parse `a1`-style text. Board bounds are not checked here.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        let col = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_lowercase() as u8 - b'a',
            _ => return Err(QtttError::parse(text, "a square starts with a column letter")),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QtttError::parse(text, "a square is a column letter followed by a row number"));
        }
        let row: u32 = digits
            .parse()
            .map_err(|_| QtttError::parse(text, "row number out of range"))?;
        if row == 0 || row > u32::from(MAX_SIZE) {
            return Err(QtttError::parse(text, format!("row must be between 1 and {MAX_SIZE}")));
        }
        Ok(Self::new((row - 1) as u8, col))
    }
}

/// A mark left by a move: whose it is and which move placed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    /// Owner of the mark.
    pub player: Player,
    /// The move that placed it.
    pub number: MoveNumber,
}

impl Mark {
    /// Create a mark.
    #[must_use]
    pub const fn new(player: Player, number: MoveNumber) -> Self {
        Self { player, number }
    }
}

/// Quantum marks on one square. Most squares hold a handful.
pub type QuantumMarks = SmallVec<[Mark; 4]>;

/// A cell of the board with its marks.
///
/// Equality compares identity only, like the engine's other id-keyed types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Square {
    id: SquareId,
    quantum: QuantumMarks,
    classical: Option<Mark>,
}

impl Square {
    /// Create an empty square.
    #[must_use]
    pub fn new(id: SquareId) -> Self {
        Self {
            id,
            quantum: SmallVec::new(),
            classical: None,
        }
    }

    /// The square's identity.
    #[must_use]
    pub const fn id(&self) -> SquareId {
        self.id
    }

    /// Quantum marks in placement order.
    #[must_use]
    pub fn quantum_marks(&self) -> &[Mark] {
        &self.quantum
    }

    /// The classical mark, once the square has collapsed.
    #[must_use]
    pub const fn classical(&self) -> Option<Mark> {
        self.classical
    }

    /// Check if the square has collapsed.
    #[must_use]
    pub const fn is_classical(&self) -> bool {
        self.classical.is_some()
    }

    /// Check if nothing has been placed here yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classical.is_none() && self.quantum.is_empty()
    }

    /// Compare full contents, not just identity.
    #[must_use]
    pub fn same_contents(&self, other: &Self) -> bool {
        self.id == other.id && self.quantum == other.quantum && self.classical == other.classical
    }

    pub(crate) fn add_quantum(&mut self, mark: Mark) {
        debug_assert!(self.classical.is_none(), "quantum mark on classical square {}", self.id);
        self.quantum.push(mark);
    }

    /// Remove the quantum mark of `number`, returning whether it was present.
    pub(crate) fn remove_quantum(&mut self, number: MoveNumber) -> bool {
        match self.quantum.iter().rposition(|m| m.number == number) {
            Some(pos) => {
                self.quantum.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Fix the square to `mark`, returning the quantum marks it held.
    pub(crate) fn collapse(&mut self, mark: Mark) -> QuantumMarks {
        self.classical = Some(mark);
        std::mem::take(&mut self.quantum)
    }

    /// Undo a collapse.
    pub(crate) fn restore(&mut self, quantum: QuantumMarks) {
        self.classical = None;
        self.quantum = quantum;
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Square {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_id_display_and_parse() {
        let id = SquareId::new(2, 1);
        assert_eq!(id.to_string(), "b3");
        assert_eq!("b3".parse::<SquareId>().unwrap(), id);
        assert_eq!(" C1 ".parse::<SquareId>().unwrap(), SquareId::new(0, 2));
        assert_eq!("z26".parse::<SquareId>().unwrap(), SquareId::new(25, 25));
    }

    #[test]
    fn test_square_id_display_past_last_column() {
        assert_eq!(SquareId::new(0, 25).col_label(), Some('z'));
        assert_eq!(SquareId::new(0, 26).col_label(), None);
        assert_eq!(SquareId::new(0, 200).to_string(), "(0,200)");
        assert_eq!(SquareId::new(255, 255).to_string(), "(255,255)");
        assert_eq!(SquareId::new(30, 1).to_string(), "(30,1)");
    }

    #[test]
    fn test_square_id_parse_errors() {
        for bad in ["", "1a", "a", "a0", "a27", "ab", "a1b", "-1"] {
            assert!(bad.parse::<SquareId>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_square_id_index_round_trip() {
        for index in 0..16 {
            let id = SquareId::from_index(index, 4);
            assert_eq!(id.index(4), index);
            assert!(id.is_on_board(4));
        }
        assert!(!SquareId::new(3, 0).is_on_board(3));
    }

    #[test]
    fn test_square_collapse_and_restore() {
        let mut square = Square::new(SquareId::new(0, 0));
        assert!(square.is_empty());

        square.add_quantum(Mark::new(Player::First, MoveNumber::new(1)));
        square.add_quantum(Mark::new(Player::Second, MoveNumber::new(2)));
        assert_eq!(square.quantum_marks().len(), 2);

        let prior = square.collapse(Mark::new(Player::Second, MoveNumber::new(2)));
        assert!(square.is_classical());
        assert!(square.quantum_marks().is_empty());
        assert_eq!(prior.len(), 2);

        square.restore(prior);
        assert!(!square.is_classical());
        assert_eq!(square.quantum_marks()[0].number, MoveNumber::new(1));
        assert_eq!(square.quantum_marks()[1].number, MoveNumber::new(2));
    }

    #[test]
    fn test_square_remove_quantum() {
        let mut square = Square::new(SquareId::new(1, 1));
        square.add_quantum(Mark::new(Player::First, MoveNumber::new(1)));
        square.add_quantum(Mark::new(Player::First, MoveNumber::new(3)));

        assert!(square.remove_quantum(MoveNumber::new(3)));
        assert!(!square.remove_quantum(MoveNumber::new(3)));
        assert_eq!(square.quantum_marks().len(), 1);
    }

    #[test]
    fn test_square_equality_is_by_id() {
        let mut a = Square::new(SquareId::new(0, 1));
        let b = Square::new(SquareId::new(0, 1));
        a.add_quantum(Mark::new(Player::First, MoveNumber::new(1)));
        assert_eq!(a, b);
        assert!(!a.same_contents(&b));
    }
}
