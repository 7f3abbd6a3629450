//! Line-oriented terminal front end.
//!
//! Reads one command per line, applies it to a [`GameSession`], lets the
//! computer answer when it is O's turn, and redraws the board.

use crate::session::{Cue, GameSession, MoveReport};
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{Difficulty, Player, Position};
use tracing::{debug, instrument};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mark a square, 0-based.
    Place(usize),
    /// Start a new game.
    Restart,
    /// Switch between player-vs-player and player-vs-computer.
    ToggleMode,
    /// Change the computer difficulty.
    SetDifficulty(Difficulty),
    /// Rename the side playing the given mark.
    Rename(Player, String),
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Nothing recognizable was typed.
    #[display("Unknown command {:?}, type h for help", _0)]
    Unknown(String),

    /// A square number outside 1-9.
    #[display("Squares are numbered 1-9, got {}", _0)]
    BadSquare(usize),

    /// A difficulty name that is not easy, medium or hard.
    #[display("Difficulty must be easy, medium or hard, got {:?}", _0)]
    BadDifficulty(String),

    /// A rename without a mark and a name.
    #[display("Usage: name x|o <name>")]
    BadRename,
}

impl std::error::Error for CommandError {}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();

        if let Ok(square) = word.parse::<usize>() {
            return match square {
                1..=9 => Ok(Command::Place(square - 1)),
                _ => Err(CommandError::BadSquare(square)),
            };
        }

        match word.to_ascii_lowercase().as_str() {
            "r" | "restart" => Ok(Command::Restart),
            "m" | "mode" => Ok(Command::ToggleMode),
            "d" | "difficulty" => rest
                .parse()
                .map(Command::SetDifficulty)
                .map_err(|_| CommandError::BadDifficulty(rest.to_string())),
            "n" | "name" => {
                let (mark, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::BadRename)?;
                let player = match mark {
                    "x" | "X" => Player::X,
                    "o" | "O" => Player::O,
                    _ => return Err(CommandError::BadRename),
                };
                Ok(Command::Rename(player, name.trim().to_string()))
            }
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Position::from_label(s)
                .map(|position| Command::Place(position.to_index()))
                .ok_or_else(|| CommandError::Unknown(s.to_string())),
        }
    }
}

const HELP: &str = "\
Commands:
  1-9              mark that square
  top-left ...     mark a square by name (center, bottom right, ...)
  r                restart
  m                switch player-vs-player / player-vs-computer
  d easy|medium|hard   set computer difficulty
  n x|o <name>     rename a player
  q                quit";

/// Runs the game loop until `quit` or end of input.
#[instrument(skip_all, fields(mode = %session.mode()))]
pub fn run<I, W, R>(
    session: &mut GameSession,
    rng: &mut R,
    input: I,
    out: &mut W,
) -> anyhow::Result<()>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    writeln!(out, "{} ({})", session.mode(), session.difficulty())?;
    render(session, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => apply(session, command, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        }

        while session.is_computer_turn() {
            let report = session.computer_move(rng)?;
            writeln!(out, "{} plays {}", session.name_of(report.player), report.position)?;
            cue(report.cue());
        }

        render(session, out)?;
    }

    Ok(())
}

fn apply<W: Write>(
    session: &mut GameSession,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Place(index) => match session.play(index) {
            Ok(report) => log_move(&report),
            Err(e) => writeln!(out, "{}", e)?,
        },
        Command::Restart => session.restart(),
        Command::ToggleMode => {
            cue(session.toggle_mode());
            writeln!(out, "Mode: {}", session.mode())?;
        }
        Command::SetDifficulty(difficulty) => {
            session.set_difficulty(difficulty);
            writeln!(out, "Difficulty: {}", difficulty)?;
        }
        Command::Rename(player, name) => session.rename(player, &name),
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

fn log_move(report: &MoveReport) {
    debug!(player = %report.player, position = %report.position, "Human move");
    cue(report.cue());
}

fn cue(cue: Cue) {
    debug!(%cue, "Cue");
}

fn render<W: Write>(session: &GameSession, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.board())?;
    writeln!(out)?;
    writeln!(out, "{}", session.status())?;
    if !session.is_active() {
        writeln!(out, "Type r to play again.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_squares() {
        assert_eq!("5".parse::<Command>(), Ok(Command::Place(4)));
        assert_eq!(" 1 ".parse::<Command>(), Ok(Command::Place(0)));
        assert_eq!("0".parse::<Command>(), Err(CommandError::BadSquare(0)));
        assert_eq!("10".parse::<Command>(), Err(CommandError::BadSquare(10)));
    }

    #[test]
    fn test_parse_square_labels() {
        assert_eq!("center".parse::<Command>(), Ok(Command::Place(4)));
        assert_eq!("Top left".parse::<Command>(), Ok(Command::Place(0)));
        assert_eq!("bottom-right".parse::<Command>(), Ok(Command::Place(8)));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("r".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("Mode".parse::<Command>(), Ok(Command::ToggleMode));
        assert_eq!("d hard".parse::<Command>(), Ok(Command::SetDifficulty(Difficulty::Hard)));
        assert_eq!(
            "name o Deep Thought".parse::<Command>(),
            Ok(Command::Rename(Player::O, "Deep Thought".to_string()))
        );
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("d brutal".parse::<Command>(), Err(CommandError::BadDifficulty(_))));
        assert_eq!("name z Bob".parse::<Command>(), Err(CommandError::BadRename));
        assert!(matches!("jump".parse::<Command>(), Err(CommandError::Unknown(_))));
    }
}
