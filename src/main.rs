//! `qttt`: play Quantum Tic-Tac-Toe in the terminal.
//!
//! Two players share one terminal. Queued commands from `--queue` are
//! played first, then commands are read from stdin, one per line.

#![warn(missing_docs)]

mod cli;

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use quantum_ttt::board::Board;
use quantum_ttt::interface::{Command, COMMANDS, RULES};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Your choice ('?' for help): ";

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = cli.config()?;
    let mut board = Board::with_config(config)?;
    info!(size = config.size, symbols = %config.symbols, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session {
        queue: cli.queue.into(),
        input: stdin.lock(),
        out: stdout.lock(),
    };
    session.play(&mut board)
}

/// Where commands come from and where the board goes.
struct Session<R, W> {
    queue: VecDeque<String>,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Run the game loop until the game ends, input runs out, or a player
    /// quits.
    fn play(&mut self, board: &mut Board) -> Result<()> {
        writeln!(self.out, "Welcome to Quantum Tic-Tac-Toe! Enter '?' for help, 'r' for the rules.")?;
        while !board.is_game_over() {
            writeln!(self.out, "{board}")?;
            let Some(line) = self.next_line(PROMPT)? else {
                break;
            };
            match Command::parse(&line, board.size()) {
                Ok(Command::Help) => writeln!(self.out, "{COMMANDS}")?,
                Ok(Command::Rules) => writeln!(self.out, "{RULES}")?,
                Ok(Command::Quit) => {
                    if self.confirm_quit()? {
                        break;
                    }
                }
                Ok(Command::Undo(steps)) => {
                    if let Err(err) = board.undo(steps) {
                        writeln!(self.out, "Error: {err}")?;
                    }
                }
                Ok(Command::Input(input)) => {
                    if let Err(err) = board.push(input) {
                        if !err.is_user_error() {
                            error!(%err, "engine refused a move");
                        }
                        writeln!(self.out, "Error: {err}")?;
                    }
                }
                Err(err) => writeln!(self.out, "Error: {err}")?,
            }
        }
        writeln!(self.out, "{board}")?;
        writeln!(self.out, "Bye! Thanks for playing.")?;
        Ok(())
    }

    /// The next queued command, else the next line of input.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if let Some(line) = self.queue.pop_front() {
            writeln!(self.out, "{prompt}{line}")?;
            return Ok(Some(line));
        }
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn confirm_quit(&mut self) -> Result<bool> {
        let answer = self.next_line("Are you sure you want to quit? (y/n) ")?;
        Ok(answer.map_or(true, |a| a.trim().to_ascii_lowercase().starts_with('y')))
    }
}
