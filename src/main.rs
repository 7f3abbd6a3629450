//! tictactoe - terminal tic-tac-toe

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tictactoe::{Difficulty, GameConfig, GameMode, GameSession};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            mode,
            difficulty,
            name,
            opponent,
            seed,
        } => run_play(&config, mode, difficulty, name, opponent, seed),
        Command::Selfplay {
            games,
            x,
            o,
            seed,
            json,
        } => run_selfplay(games, x, o, seed, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    name: Option<String>,
    opponent: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(name) = name {
        config = config.with_player1_name(name);
    }
    if let Some(opponent) = opponent {
        config = config.with_opponent_name(opponent);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut rng = seeded_rng(*config.seed());
    let mut session = GameSession::new(&config);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    tictactoe::terminal::run(&mut session, &mut rng, stdin.lock(), &mut stdout)?;

    info!("Goodbye");
    Ok(())
}

/// Run a computer-vs-computer batch
#[instrument]
fn run_selfplay(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let tally = tictactoe::selfplay::run(games, x, o, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("X ({}) vs O ({}): {}", x, o, tally);
    }
    Ok(())
}

/// Builds the game RNG, logging the seed so a game can be replayed.
fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "Seeding random source");
    ChaCha8Rng::seed_from_u64(seed)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictactoe=debug,tictactoe_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
