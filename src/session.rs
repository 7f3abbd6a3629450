//! Game session: one board plus the mode, names and difficulty around it.
//!
//! The session holds no turn or activity flags. Whose turn it is and whether
//! the game is still running are always read back from the board.

use crate::config::{
    DEFAULT_COMPUTER_NAME, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, GameConfig,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{
    AiError, AiSelector, Board, Difficulty, MoveError, Outcome, Player, Position,
};
use tracing::{debug, info, instrument, warn};

/// Who plays the O side.
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
    clap::ValueEnum,
    strum::Display,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    #[value(name = "pvp")]
    #[strum(to_string = "Player vs Player")]
    PlayerVsPlayer,

    /// A human plays X against the computer.
    #[serde(rename = "pvc")]
    #[value(name = "pvc")]
    #[strum(to_string = "Player vs Computer")]
    PlayerVsComputer,
}

impl GameMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsComputer,
            GameMode::PlayerVsComputer => GameMode::PlayerVsPlayer,
        }
    }
}

/// Feedback the front end plays after an action (the game's sound effects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Cue {
    /// A mark was placed and the game goes on.
    Click,
    /// A mark completed a line.
    Win,
    /// A mark filled the board.
    Draw,
    /// The game mode changed.
    ModeSwitch,
}

/// A move that was applied to the session's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Side that moved.
    pub player: Player,
    /// Square that was marked.
    pub position: Position,
    /// Board outcome after the move.
    pub outcome: Outcome,
}

impl MoveReport {
    /// Cue matching the move's effect on the game.
    pub fn cue(&self) -> Cue {
        match self.outcome {
            Outcome::InProgress => Cue::Click,
            Outcome::Winner(_) => Cue::Win,
            Outcome::Draw => Cue::Draw,
        }
    }
}

/// Error from a session action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The board refused the move.
    #[display("{}", _0)]
    #[from]
    InvalidMove(MoveError),

    /// The computer had no legal move.
    #[display("{}", _0)]
    #[from]
    InvalidState(AiError),

    /// The game is decided; restart first.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),

    /// The action belongs to the other side.
    #[display("It's {}'s turn", _0)]
    NotYourTurn(String),

    /// A computer move was requested in a two-human game.
    #[display("No computer player in {} mode", _0)]
    NoComputer(GameMode),
}

impl std::error::Error for SessionError {}

/// A running game between two named sides.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    difficulty: Difficulty,
    player1_name: String,
    player2_name: String,
    computer_name: String,
    ai: AiSelector,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        info!(
            mode = %config.mode(),
            difficulty = %config.difficulty(),
            "Creating new game session"
        );
        Self {
            board: Board::new(),
            mode: *config.mode(),
            difficulty: *config.difficulty(),
            player1_name: keep_or_replace(DEFAULT_PLAYER1_NAME, config.player1_name()),
            player2_name: keep_or_replace(DEFAULT_PLAYER2_NAME, config.player2_name()),
            computer_name: keep_or_replace(DEFAULT_COMPUTER_NAME, config.computer_name()),
            ai: AiSelector::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the board outcome.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// True while moves can still be made.
    pub fn is_active(&self) -> bool {
        !self.outcome().is_over()
    }

    /// Side to move, by parity.
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    /// Display name of the side playing `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match (player, self.mode) {
            (Player::X, _) => &self.player1_name,
            (Player::O, GameMode::PlayerVsPlayer) => &self.player2_name,
            (Player::O, GameMode::PlayerVsComputer) => &self.computer_name,
        }
    }

    /// True when the front end should ask the computer to move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
            && self.is_active()
            && self.to_move() == Player::O
    }

    /// Status line: whose turn it is, who won, or a draw.
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => {
                let player = self.to_move();
                format!("{}'s turn ({})", self.name_of(player), player)
            }
            Outcome::Winner(player) => format!("{} wins!", self.name_of(player)),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }

    /// Applies a human move at `index` for the side to move.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] once the game is decided,
    /// [`SessionError::NotYourTurn`] while the computer is to move, and
    /// [`SessionError::InvalidMove`] for an occupied or out-of-range square.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, index: usize) -> Result<MoveReport, SessionError> {
        let outcome = self.outcome();
        if outcome.is_over() {
            warn!(%outcome, "Move rejected, game is over");
            return Err(SessionError::GameOver(outcome));
        }
        if self.is_computer_turn() {
            warn!("Move rejected, computer is to move");
            return Err(SessionError::NotYourTurn(self.computer_name.clone()));
        }

        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let player = self.to_move();
        self.board.place(position.to_index(), player)?;
        Ok(self.report(position, player))
    }

    /// Lets the computer make O's move.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoComputer`] in a two-human game,
    /// [`SessionError::GameOver`] once decided, and
    /// [`SessionError::NotYourTurn`] while X is to move.
    #[instrument(skip(self, rng), fields(difficulty = %self.difficulty))]
    pub fn computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<MoveReport, SessionError> {
        if self.mode != GameMode::PlayerVsComputer {
            return Err(SessionError::NoComputer(self.mode));
        }
        let outcome = self.outcome();
        if outcome.is_over() {
            return Err(SessionError::GameOver(outcome));
        }
        if self.to_move() != Player::O {
            return Err(SessionError::NotYourTurn(self.player1_name.clone()));
        }

        let position = self.ai.choose_move(&self.board, self.difficulty, rng)?;
        self.board.place(position.to_index(), Player::O)?;
        Ok(self.report(position, Player::O))
    }

    fn report(&self, position: Position, player: Player) -> MoveReport {
        let outcome = self.outcome();
        debug!(%player, %position, %outcome, "Move applied");
        if outcome.is_over() {
            info!(%outcome, status = %self.status(), "Game finished");
        }
        MoveReport {
            player,
            position,
            outcome,
        }
    }

    /// Clears the board for a new game with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board = Board::new();
    }

    /// Switches between player-vs-player and player-vs-computer, then restarts.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) -> Cue {
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "Mode switched");
        self.restart();
        Cue::ModeSwitch
    }

    /// Changes the computer difficulty. Restarts a player-vs-computer game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.mode == GameMode::PlayerVsComputer {
            self.restart();
        }
    }

    /// Renames the side playing `player` in the current mode.
    ///
    /// Blank names are ignored and the current name is kept.
    #[instrument(skip(self))]
    pub fn rename(&mut self, player: Player, name: &str) {
        let slot = match (player, self.mode) {
            (Player::X, _) => &mut self.player1_name,
            (Player::O, GameMode::PlayerVsPlayer) => &mut self.player2_name,
            (Player::O, GameMode::PlayerVsComputer) => &mut self.computer_name,
        };
        *slot = keep_or_replace(slot, name);
    }
}

fn keep_or_replace(current: &str, candidate: &str) -> String {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        current.to_string()
    } else {
        candidate.to_string()
    }
}
