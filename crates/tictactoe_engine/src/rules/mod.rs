//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the AI can evaluate simulated boards the same way the game does.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
