//! Easy tier: a uniformly random empty square.

use crate::{Board, Position};
use rand::Rng;
use rand::seq::IteratorRandom;

/// Picks any empty square with equal probability.
pub fn pick<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_cells().choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_only_picks_empty_squares() {
        let board: Board = "XOX .O. XOX".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let pos = pick(&board, &mut rng).unwrap();
            assert!(matches!(pos, Position::MiddleLeft | Position::MiddleRight));
        }
    }

    #[test]
    fn test_reaches_every_empty_square() {
        let board = Board::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[pick(&board, &mut rng).unwrap().to_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_full_board_has_no_pick() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(pick(&board, &mut rng), None);
    }
}
