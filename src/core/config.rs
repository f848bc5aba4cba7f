//! Board configuration.
//!
//! Games are configured once, at creation:
//! - `size`: edge length of the square board (default 3)
//! - `Symbols`: the characters the two players write (default `X` and `O`)
//!
//! Neither can change after the board exists.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::square::MAX_SIZE;
use crate::error::{QtttError, Result};

/// Default board edge length.
pub const DEFAULT_SIZE: u8 = 3;

/// The characters used for each player's marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbols {
    first: char,
    second: char,
}

impl Symbols {
    /// Create a symbol pair.
    #[must_use]
    pub const fn new(first: char, second: char) -> Self {
        Self { first, second }
    }

    /// The symbol a player writes.
    #[must_use]
    pub const fn symbol(&self, player: Player) -> char {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// The player writing `symbol`, if any.
    #[must_use]
    pub fn player_of(&self, symbol: char) -> Option<Player> {
        Player::BOTH.into_iter().find(|&p| self.symbol(p) == symbol)
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

impl std::fmt::Display for Symbols {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Complete board configuration.
///
/// ```
/// use quantum_ttt::core::BoardConfig;
///
/// let config = BoardConfig::new().with_size(4).with_symbols('A', 'B');
/// assert!(config.validate().is_ok());
/// assert_eq!(config.size, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows and columns.
    pub size: u8,

    /// Player symbols.
    pub symbols: Symbols,
}

impl BoardConfig {
    /// Create the default configuration (3x3, `X` and `O`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            symbols: Symbols::default(),
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    /// Set the player symbols.
    #[must_use]
    pub fn with_symbols(mut self, first: char, second: char) -> Self {
        self.symbols = Symbols::new(first, second);
        self
    }

    /// Check that the configuration describes a playable board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the size is outside `2..=26` or both
    /// players would share a symbol.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_SIZE).contains(&self.size) {
            return Err(QtttError::InvalidConfig {
                reason: format!("size must be between 2 and {MAX_SIZE}, got {}", self.size),
            });
        }
        let symbols = self.symbols;
        if symbols.symbol(Player::First) == symbols.symbol(Player::Second) {
            return Err(QtttError::InvalidConfig {
                reason: format!("players need different symbols, both use '{}'", symbols.first),
            });
        }
        if symbols.first.is_whitespace() || symbols.second.is_whitespace() {
            return Err(QtttError::InvalidConfig {
                reason: "symbols must be visible characters".to_string(),
            });
        }
        Ok(())
    }

    /// Total number of squares.
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.size as usize * self.size as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 3);
        assert_eq!(config.symbols.symbol(Player::First), 'X');
        assert_eq!(config.symbols.symbol(Player::Second), 'O');
        assert_eq!(config.square_count(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::new().with_size(5).with_symbols('#', '@');
        assert_eq!(config.size, 5);
        assert_eq!(config.symbols.to_string(), "#@");
        assert_eq!(config.symbols.player_of('@'), Some(Player::Second));
        assert_eq!(config.symbols.player_of('X'), None);
    }

    #[test]
    fn test_config_rejects_bad_size() {
        for size in [0, 1, 27, 200] {
            let err = BoardConfig::new().with_size(size).validate().unwrap_err();
            assert!(matches!(err, QtttError::InvalidConfig { .. }));
        }
        assert!(BoardConfig::new().with_size(26).validate().is_ok());
    }

    #[test]
    fn test_config_rejects_shared_symbol() {
        let err = BoardConfig::new().with_symbols('X', 'X').validate().unwrap_err();
        assert!(err.to_string().contains("different symbols"));
    }

    #[test]
    fn test_config_serialization() {
        let config = BoardConfig::new().with_size(4);
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
