//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a jump-to-any-move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe in the terminal with time-travel history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a script of moves and print the resulting game
    Replay {
        /// Moves separated by spaces or commas: `0`-`8` plays a cell,
        /// `@N` jumps to history entry N
        script: String,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,
    },
}
