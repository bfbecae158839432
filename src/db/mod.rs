//! Score persistence: finished-game outcomes keyed by player name.

mod error;
mod memory;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use memory::MemoryScores;
pub use models::{GameOutcome, LeaderboardEntry, NewScore, ScoreRecord};
pub use repository::ScoreRepository;

/// Destination for finished-game outcomes.
///
/// The game loop reports one event per player when a game ends; the board
/// engine never talks to a sink directly.
pub trait ScoreSink {
    /// Appends an outcome for `player_name`, timestamped now.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the outcome cannot be stored.
    fn record(&mut self, player_name: &str, outcome: GameOutcome) -> Result<(), DbError>;

    /// Players ranked by wins, most first, ties broken by name.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the records cannot be read.
    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError>;

    /// Most recent outcome records first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the records cannot be read.
    fn recent(&self, limit: usize) -> Result<Vec<ScoreRecord>, DbError>;
}
