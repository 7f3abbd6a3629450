//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, MoveError};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer's side).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// Player completed a line.
    Winner(Player),
    /// Board is full with no line completed.
    Draw,
}

impl Outcome {
    /// Returns true once the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is the only game state: whose turn it is and whether the game
/// is still running are derived from the squares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past 8 and
    /// [`MoveError::SquareOccupied`] if the square is taken. The board is
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Rejected move outside the board");
            return Err(MoveError::OutOfBounds(index));
        };

        if !self.is_empty(index) {
            warn!(%position, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(position));
        }

        self.squares[index] = Square::Occupied(player);
        Ok(())
    }

    /// Returns a copy of the board with `player` at `position`, without validation.
    pub(crate) fn with_mark(&self, position: Position, player: Player) -> Board {
        let mut next = *self;
        next.squares[position.to_index()] = Square::Occupied(player);
        next
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the player holding any complete line.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Derives the game outcome. A win takes precedence over a full board.
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Winner(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Empty squares in index order, recomputed from the current state.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(pos.to_index()))
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Player whose turn it is, by parity (X always moves first).
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Checks that X has made as many moves as O, or one more.
    pub fn is_consistent(&self) -> bool {
        let x_count = self.count(Player::X);
        let o_count = self.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }
}

impl std::fmt::Display for Board {
    /// Renders three rows such as `X|2|O`, showing empty squares by their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares from `X`, `O` and an empty marker (`.`, `_`, `-`).
    ///
    /// Whitespace, `|` and `/` are ignored so rows can be laid out freely.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'X' | 'x' => cells.push(Square::Occupied(Player::X)),
                'O' | 'o' => cells.push(Square::Occupied(Player::O)),
                '.' | '_' | '-' => cells.push(Square::Empty),
                '|' | '/' => {}
                c if c.is_whitespace() => {}
                other => return Err(BoardParseError::InvalidCharacter(other)),
            }
        }

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}
