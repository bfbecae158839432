//! In-memory score sink.

use tracing::{debug, instrument};

use crate::db::{DbError, GameOutcome, LeaderboardEntry, ScoreRecord, ScoreSink};

/// Score sink kept in a vector; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryScores {
    records: Vec<ScoreRecord>,
}

impl MemoryScores {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }
}

impl ScoreSink for MemoryScores {
    #[instrument(skip(self))]
    fn record(&mut self, player_name: &str, outcome: GameOutcome) -> Result<(), DbError> {
        let id = i32::try_from(self.records.len() + 1)
            .map_err(|_| DbError::new("Too many records for an in-memory store"))?;
        debug!(id, "Recording outcome in memory");
        self.records.push(ScoreRecord::new(
            id,
            player_name.to_string(),
            outcome,
            chrono::Utc::now().naive_utc(),
        ));
        Ok(())
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        let winners = self
            .records
            .iter()
            .filter(|r| r.outcome() == GameOutcome::Win.as_ref())
            .map(|r| r.player_name().clone());
        Ok(LeaderboardEntry::rank(winners, limit))
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScoreRecord>, DbError> {
        Ok(self.records.iter().rev().take(limit).cloned().collect())
    }
}
