//! Gomoku - four in a row against a random opponent.
//!
//! This crate wraps the [`gomoku_board`] rules engine with everything needed
//! to play it from a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML game settings ([`GameConfig`])
//! - **Players**: computer move strategies ([`MoveStrategy`])
//! - **Game**: the text turn loop ([`Orchestrator`])
//! - **Db**: finished-game outcomes ([`ScoreSink`], SQLite or in memory)
//!
//! # Example
//!
//! ```no_run
//! use gomoku::{GameConfig, MemoryScores, Orchestrator, RandomStrategy};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let stdin = std::io::stdin().lock();
//! let mut game = Orchestrator::new(&config, RandomStrategy::new(None), stdin, std::io::stdout())?;
//! let result = game.run(&mut MemoryScores::new())?;
//! println!("{result:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod game;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_PLAYER_NAME, GameConfig};

// Crate-level exports - Persistence
pub use db::{
    DbError, GameOutcome, LeaderboardEntry, MemoryScores, NewScore, ScoreRecord, ScoreRepository,
    ScoreSink,
};

// Crate-level exports - Game loop
pub use game::{Command, GameResult, InputError, Orchestrator, Participant, parse_command};

// Crate-level exports - Strategies
pub use players::{FirstAvailable, MoveStrategy, RandomStrategy};

// Crate-level exports - Board engine
pub use gomoku_board::{
    Board, BoardError, Cell, Coord, CoordParseError, Mark, PlaceError, WIN_LENGTH,
};
