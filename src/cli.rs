//! Command-line interface for the `qttt` binary.

use anyhow::{bail, Result};
use clap::Parser;
use quantum_ttt::core::{BoardConfig, DEFAULT_SIZE};

/// Quantum Tic-Tac-Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "qttt")]
#[command(about = "Play Quantum Tic-Tac-Toe against a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of rows and columns
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: u8,

    /// The two player symbols, first player first
    #[arg(long, default_value = "XO")]
    pub symbols: String,

    /// Commands to play before reading from stdin (e.g. "a1-b2")
    #[arg(short, long, num_args = 1..)]
    pub queue: Vec<String>,
}

impl Cli {
    /// Board configuration from the flags.
    pub fn config(&self) -> Result<BoardConfig> {
        let mut chars = self.symbols.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("--symbols takes exactly two characters, got '{}'", self.symbols);
        };
        let config = BoardConfig::new()
            .with_size(self.size)
            .with_symbols(first, second);
        config.validate()?;
        Ok(config)
    }
}
