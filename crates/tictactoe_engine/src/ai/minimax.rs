//! Hard tier: exhaustive minimax over the remaining game tree.
//!
//! The tree has at most 9! leaves, so the search is exact and unpruned.
//! Every node works on its own copy of the board; the caller's board is
//! never touched.

use crate::{Board, Player, Position};

/// Value of a decided position for the side the search plays.
const WIN: i8 = 1;
const LOSS: i8 = -1;
const DRAW: i8 = 0;

/// Exact game value of `board` from `me`'s point of view with `to_move` to play.
///
/// `+1` means `me` can force a win, `-1` that the opponent can, `0` a draw.
/// Depth is not considered: a slow win scores the same as a fast one.
pub fn score(board: &Board, me: Player, to_move: Player) -> i8 {
    match board.winner() {
        Some(winner) if winner == me => return WIN,
        Some(_) => return LOSS,
        None => {}
    }
    if board.is_full() {
        return DRAW;
    }

    let children = board
        .empty_cells()
        .map(|pos| score(&board.with_mark(pos, to_move), me, to_move.opponent()));

    if to_move == me {
        children.max().unwrap_or(DRAW)
    } else {
        children.min().unwrap_or(DRAW)
    }
}

/// Every empty square paired with the value of playing it as `me`.
pub fn evaluate_moves(board: &Board, me: Player) -> Vec<(Position, i8)> {
    board
        .empty_cells()
        .map(|pos| (pos, score(&board.with_mark(pos, me), me, me.opponent())))
        .collect()
}

/// First square, in index order, achieving the best value for `me`.
pub fn best_move(board: &Board, me: Player) -> Option<Position> {
    let mut best: Option<(Position, i8)> = None;
    for (pos, value) in evaluate_moves(board, me) {
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }
    best.map(|(pos, _)| pos)
}
