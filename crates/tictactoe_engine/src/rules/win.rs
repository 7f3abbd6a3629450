//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};

/// The eight lines whose uniform occupation wins the game.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Called on every node of the minimax search, so it
/// carries no span.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|[a, b, c]| {
        let sq = squares[a.to_index()];
        let player = sq.player()?;
        (sq == squares[b.to_index()] && sq == squares[c.to_index()]).then_some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXX OO. ...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&board("XO. XO. .O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&board("O.X .OX X.O")), Some(Player::O));
        assert_eq!(check_winner(&board("O.X OX. X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX. O.. ...")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board("XOX OXO OXO")), None);
    }
}
