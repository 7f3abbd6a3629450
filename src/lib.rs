//! Tic-tac-toe for the terminal, against a friend or the computer.
//!
//! # Architecture
//!
//! - **Engine** (`tictactoe_engine`): board, rules and computer move selection
//! - **Session**: names, game mode and difficulty wrapped around one board
//! - **Config**: TOML settings with command-line overrides
//! - **Terminal**: line-based front end driving a session
//! - **Self-play**: computer-vs-computer batches for comparing tiers
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tictactoe::{Difficulty, GameConfig, GameMode, GameSession};
//!
//! let config = GameConfig::default()
//!     .with_mode(GameMode::PlayerVsComputer)
//!     .with_difficulty(Difficulty::Hard);
//! let mut session = GameSession::new(&config);
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//!
//! session.play(4)?;
//! let reply = session.computer_move(&mut rng)?;
//! assert!(session.is_active());
//! assert_eq!(session.status(), "Player 1's turn (X)");
//! # let _ = reply;
//! # Ok::<(), tictactoe::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod selfplay;
mod session;
pub mod terminal;

pub use config::{
    ConfigError, DEFAULT_COMPUTER_NAME, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, GameConfig,
};
pub use selfplay::Tally;
pub use session::{Cue, GameMode, GameSession, MoveReport, SessionError};

// Crate-level exports - engine types
pub use tictactoe_engine::{
    AiError, AiSelector, Board, Difficulty, MoveError, Outcome, Player, Position, Square,
};
