//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything about the game that is not presentation:
//!
//! - **Board**: nine squares, move validation, win and draw detection
//! - **Rules**: the eight winning lines and the full-board check
//! - **AI**: a stateless move chooser with three difficulty tiers
//!
//! The caller owns the [`Board`], applies human moves through
//! [`Board::place`], inspects [`Board::outcome`] after every move, and asks
//! [`AiSelector`] for a square when it is the computer's turn.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_engine::{AiSelector, Board, Difficulty, Outcome, Player};
//!
//! let mut board = Board::new();
//! board.place(4, Player::X)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let reply = AiSelector::new().choose_move(&board, Difficulty::Hard, &mut rng)?;
//! board.place(reply.to_index(), Player::O)?;
//!
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod error;
mod position;
pub mod rules;
mod types;

pub use ai::{AiSelector, Difficulty};
pub use error::{AiError, BoardParseError, MoveError};
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};
