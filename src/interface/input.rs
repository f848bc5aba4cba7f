//! Text commands.
//!
//! One line of user input becomes one [`Command`]. Square text is read as a
//! column letter followed by a 1-based row number (`a1`, `c10`), case
//! insensitive. Two squares may be separated by anything or nothing:
//! `a1,c3`, `a1-c3`, `a1 c3` and `a1c3` all mean the same move.
//!
//! When the text starts with a letter and a digit and the letter names a
//! column of the board, it is read as squares. Otherwise the first letter
//! selects a command, so `u2` is "undo two steps" on a 3×3 board but the
//! square `u2` on a 26×26 one.

use crate::core::{MoveInput, SquareId};
use crate::error::{QtttError, Result};

/// A parsed line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the command summary.
    Help,
    /// Show the rules.
    Rules,
    /// Undo this many steps.
    Undo(usize),
    /// Leave the game.
    Quit,
    /// A move or a collapse choice for the board.
    Input(MoveInput),
}

impl Command {
    /// Parse one line of input for a `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns `Parse` naming the offending text.
    ///
    /// ```
    /// use quantum_ttt::core::{MoveInput, SquareId};
    /// use quantum_ttt::interface::Command;
    ///
    /// let a1 = SquareId::new(0, 0);
    /// let c3 = SquareId::new(2, 2);
    /// assert_eq!(
    ///     Command::parse("A1-c3", 3).unwrap(),
    ///     Command::Input(MoveInput::TwoSquareMove(a1, c3))
    /// );
    /// assert_eq!(Command::parse("u2", 3).unwrap(), Command::Undo(2));
    /// ```
    pub fn parse(text: &str, size: u8) -> Result<Self> {
        let line = text.trim().to_ascii_lowercase();
        if starts_with_square(&line, size) {
            return parse_input(&line, size);
        }

        match line.as_bytes().first() {
            None | Some(b'?' | b'h') => Ok(Command::Help),
            Some(b'r') => Ok(Command::Rules),
            Some(b'u') => parse_undo(&line),
            Some(b'q' | b'x') => Ok(Command::Quit),
            Some(_) if line == "exit" => Ok(Command::Quit),
            Some(_) => Err(QtttError::parse(
                text.trim(),
                "expected one or two squares, or a command ('?' for help)",
            )),
        }
    }
}

fn starts_with_square(line: &str, size: u8) -> bool {
    match line.as_bytes() {
        [letter, digit, ..] => {
            letter.is_ascii_lowercase() && digit.is_ascii_digit() && letter - b'a' < size
        }
        _ => false,
    }
}

fn parse_undo(line: &str) -> Result<Command> {
    let rest = line.strip_prefix("undo").unwrap_or(&line[1..]).trim();
    if rest.is_empty() {
        return Ok(Command::Undo(1));
    }
    rest.parse()
        .map(Command::Undo)
        .map_err(|_| QtttError::parse(line, "undo takes a number of steps"))
}

fn parse_input(line: &str, size: u8) -> Result<Command> {
    let squares = scan_squares(line)?;
    for square in &squares {
        if !square.is_on_board(size) {
            return Err(QtttError::parse(
                line,
                format!("{square} is not on the {size}x{size} board"),
            ));
        }
    }
    match squares.as_slice() {
        [choice] => Ok(Command::Input(MoveInput::SingleSquareChoice(*choice))),
        [first, second] => Ok(Command::Input(MoveInput::TwoSquareMove(*first, *second))),
        _ => Err(QtttError::parse(line, "expected one or two squares")),
    }
}

/// Split `line` into squares, skipping any separator characters.
fn scan_squares(line: &str) -> Result<Vec<SquareId>> {
    let bytes = line.as_bytes();
    let mut squares = Vec::with_capacity(2);
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            squares.push(line[start..i].parse()?);
        } else if bytes[i].is_ascii_digit() {
            return Err(QtttError::parse(line, "row number without a column letter"));
        } else {
            i += 1;
        }
    }
    Ok(squares)
}
