//! Gomoku - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gomoku::{
    GameConfig, GameResult, Orchestrator, RandomStrategy, ScoreRecord, ScoreRepository, ScoreSink,
};
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
            rows,
            cols,
            name,
            db_path,
            seed,
            manual_start,
        } => {
            let mut config = GameConfig::load_or_default(&config)?;
            if let Some(rows) = rows {
                config = config.with_rows(rows);
            }
            if let Some(cols) = cols {
                config = config.with_cols(cols);
            }
            if let Some(name) = name {
                config = config.with_player_name(name);
            }
            if let Some(db_path) = db_path {
                config = config.with_db_path(db_path);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if manual_start {
                config = config.with_auto_first_move(false);
            }
            run_play(config.normalized())
        }
        Command::Scores {
            config,
            db_path,
            limit,
            recent,
            player,
            json,
        } => {
            let config = GameConfig::load_or_default(&config)?;
            let db_path = db_path.unwrap_or_else(|| config.db_path().clone());
            run_scores(&db_path, limit, recent, player.as_deref(), json)
        }
    }
}

/// Play one game on the terminal
#[instrument(skip_all, fields(player = %config.player_name(), rows = config.rows(), cols = config.cols()))]
fn run_play(config: GameConfig) -> Result<()> {
    let mut scores = ScoreRepository::open(config.db_path())
        .with_context(|| format!("opening score database '{}'", config.db_path()))?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let opponent = RandomStrategy::new(*config.seed());

    let mut game = Orchestrator::new(&config, opponent, stdin, stdout)?;
    let result = game.run(&mut scores)?;

    match &result {
        GameResult::Won { winner, moves, .. } => info!(%winner, moves, "Game won"),
        GameResult::Draw { moves } => info!(moves, "Game drawn"),
        GameResult::Abandoned => info!("Game abandoned"),
    }
    Ok(())
}

/// Print the leaderboard, recent results, or one player's history
#[instrument]
fn run_scores(
    db_path: &str,
    limit: usize,
    recent: bool,
    player: Option<&str>,
    json: bool,
) -> Result<()> {
    let scores = ScoreRepository::open(db_path)
        .with_context(|| format!("opening score database '{}'", db_path))?;

    if let Some(player) = player {
        let records = scores.player_history(player)?;
        print_records(&format!("Results for {}:", player), &records, json)?;
    } else if recent {
        let records = scores.recent(limit)?;
        print_records("Recent results:", &records, json)?;
    } else {
        let entries = scores.leaderboard(limit)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            println!("High scores:");
            for entry in &entries {
                println!("{}: {}", entry.player_name(), entry.wins());
            }
        }
    }
    Ok(())
}

fn print_records(heading: &str, records: &[ScoreRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    println!("{}", heading);
    for record in records {
        println!(
            "{}  {}: {}",
            record.recorded_at().format("%Y-%m-%d %H:%M:%S"),
            record.player_name(),
            record.outcome()
        );
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
