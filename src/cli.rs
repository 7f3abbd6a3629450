//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe::{Difficulty, GameMode};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Path to game configuration file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Who plays O (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Computer difficulty: easy, medium or hard (overrides config)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Name of the X player
        #[arg(long)]
        name: Option<String>,

        /// Name of the O player (second human or computer)
        #[arg(long)]
        opponent: Option<String>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the computer play itself and tally the results
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty of the X side
        #[arg(short, long, default_value = "easy")]
        x: Difficulty,

        /// Difficulty of the O side
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
