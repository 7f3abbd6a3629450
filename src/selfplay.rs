//! Computer-vs-computer games for comparing difficulty tiers.

use crate::session::SessionError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{AiSelector, Board, Difficulty, Outcome, Player};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays one game to completion, X moving first.
pub fn play_game<R: Rng + ?Sized>(
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<Board, SessionError> {
    let ai = AiSelector::new();
    let mut board = Board::new();
    while !board.outcome().is_over() {
        let player = board.to_move();
        let difficulty = match player {
            Player::X => x,
            Player::O => o,
        };
        let position = ai.choose_move_for(&board, difficulty, player, rng)?;
        board.place(position.to_index(), player)?;
    }
    Ok(board)
}

/// Plays `games` games and tallies the outcomes.
#[instrument(skip(rng))]
pub fn run<R: Rng + ?Sized>(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<Tally, SessionError> {
    let mut tally = Tally::default();
    for game in 0..games {
        let board = play_game(x, o, rng)?;
        debug!(game, outcome = %board.outcome(), "Self-play game finished");
        tally.record(board.outcome());
    }
    info!(%tally, "Self-play complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tally_counts_every_game() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let tally = run(20, Difficulty::Easy, Difficulty::Medium, &mut rng).unwrap();
        assert_eq!(tally.games, 20);
        assert_eq!(tally.x_wins + tally.o_wins + tally.draws, 20);
    }

    #[test]
    fn test_hard_against_hard_always_draws() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let tally = run(2, Difficulty::Hard, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(tally.draws, 2);
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let tally = run(10, Difficulty::Easy, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(tally.x_wins, 0);
    }
}
