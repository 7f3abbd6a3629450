//! Medium tier: win if possible, otherwise block, otherwise play randomly.

use super::random;
use crate::{Board, Player, Position};
use rand::Rng;

/// First empty square (in index order) that completes a line for `player`.
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    board
        .empty_cells()
        .find(|&pos| board.with_mark(pos, player).winner() == Some(player))
}

/// Greedy one-ply choice for `player`.
pub fn pick<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<Position> {
    winning_move(board, player)
        .or_else(|| winning_move(board, player.opponent()))
        .or_else(|| random::pick(board, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_finds_winning_square() {
        let board: Board = "OO. XX. ...".parse().unwrap();
        assert_eq!(winning_move(&board, Player::O), Some(Position::TopRight));
        assert_eq!(winning_move(&board, Player::X), Some(Position::MiddleRight));
    }

    #[test]
    fn test_win_preferred_over_block() {
        // O can win at 2 or block X's row at 5.
        let board: Board = "OO. XX. ...".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let choice = pick(&board, Player::O, &mut rng);
        assert_eq!(choice, Some(Position::TopRight));
        assert_ne!(choice, Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board: Board = "XX. O.. ...".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(pick(&board, Player::O, &mut rng), Some(Position::TopRight));
        }
    }

    #[test]
    fn test_falls_back_to_random() {
        let board: Board = "X.. ... ...".parse().unwrap();
        assert_eq!(winning_move(&board, Player::O), None);
        assert_eq!(winning_move(&board, Player::X), None);

        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let pos = pick(&board, Player::O, &mut rng).unwrap();
        assert!(board.is_empty(pos.to_index()));
    }
}
