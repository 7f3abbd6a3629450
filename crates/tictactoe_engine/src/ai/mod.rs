//! Computer move selection.
//!
//! The selector keeps no state between requests: each choice is a function
//! of the board, the difficulty tier, and an injected random source. Only the
//! Easy and Medium tiers consume randomness.

pub mod heuristic;
pub mod minimax;
pub mod random;

use crate::{AiError, Board, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Move-selection policy of the computer player.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    #[default]
    Easy,
    /// Win if possible, else block, else random.
    Medium,
    /// Exact minimax; never loses.
    Hard,
}

/// Stateless computer player.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiSelector;

impl AiSelector {
    /// Creates a selector.
    pub fn new() -> Self {
        Self
    }

    /// Chooses a square for O, the computer's side.
    ///
    /// # Errors
    ///
    /// [`AiError::NoLegalMoves`] on a full board and [`AiError::GameOver`]
    /// when the board already has a winner.
    #[instrument(skip(self, board, rng), fields(board = ?board.squares()))]
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Position, AiError> {
        self.choose_move_for(board, difficulty, Player::O, rng)
    }

    /// Chooses a square for `player` using the same policies.
    #[instrument(skip(self, board, rng))]
    pub fn choose_move_for<R: Rng + ?Sized>(
        &self,
        board: &Board,
        difficulty: Difficulty,
        player: Player,
        rng: &mut R,
    ) -> Result<Position, AiError> {
        if board.empty_cells().next().is_none() {
            return Err(AiError::NoLegalMoves);
        }
        let outcome = board.outcome();
        if outcome.is_over() {
            return Err(AiError::GameOver(outcome));
        }

        let choice = match difficulty {
            Difficulty::Easy => random::pick(board, rng),
            Difficulty::Medium => heuristic::pick(board, player, rng),
            Difficulty::Hard => minimax::best_move(board, player),
        };

        let position = choice.ok_or(AiError::NoLegalMoves)?;
        debug!(%difficulty, %player, %position, "AI chose position");
        Ok(position)
    }
}
