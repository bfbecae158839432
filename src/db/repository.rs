//! SQLite repository for game outcomes.

use std::path::Path;

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, GameOutcome, LeaderboardEntry, NewScore, ScoreRecord, ScoreSink, schema};

/// Embedded schema migrations, applied on [`ScoreRepository::open`].
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for score operations.
///
/// Holds only the database path; each operation opens its own connection.
#[derive(Debug, Clone)]
pub struct ScoreRepository {
    db_path: String,
}

impl ScoreRepository {
    /// Opens the database at `db_path`, creating the file, its parent
    /// directory and the schema as needed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the directory cannot be created, the database
    /// cannot be opened, or migrations fail.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, DbError> {
        let db_path = db_path.as_ref().to_string();
        info!(path = %db_path, "Opening ScoreRepository");

        if let Some(parent) = Path::new(&db_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            debug!(dir = %parent.display(), "Creating database directory");
            std::fs::create_dir_all(parent)?;
        }

        let repo = Self { db_path };
        let mut conn = repo.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Failed to apply migrations: {}", e)))?
            .len();
        info!(applied, "Schema ready");
        Ok(repo)
    }

    /// Path of the underlying database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Records one outcome for a player.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn record_outcome(
        &self,
        player_name: &str,
        outcome: GameOutcome,
    ) -> Result<ScoreRecord, DbError> {
        debug!("Recording outcome");
        let mut conn = self.connection()?;

        let new_score = NewScore::new(player_name.to_string(), outcome.to_string());
        let record = diesel::insert_into(schema::scores::table)
            .values(&new_score)
            .returning(ScoreRecord::as_returning())
            .get_result(&mut conn)?;

        info!(
            record_id = record.id(),
            player = %record.player_name(),
            outcome = %record.outcome(),
            "Outcome recorded"
        );
        Ok(record)
    }

    /// Gets the most recent records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn recent_records(&self, limit: usize) -> Result<Vec<ScoreRecord>, DbError> {
        let mut conn = self.connection()?;

        let records = schema::scores::table
            .order((schema::scores::recorded_at.desc(), schema::scores::id.desc()))
            .limit(to_sql_limit(limit))
            .select(ScoreRecord::as_select())
            .load(&mut conn)?;

        debug!(count = records.len(), "Recent records loaded");
        Ok(records)
    }

    /// Gets every record for one player, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn player_history(&self, player_name: &str) -> Result<Vec<ScoreRecord>, DbError> {
        let mut conn = self.connection()?;

        let records = schema::scores::table
            .filter(schema::scores::player_name.eq(player_name))
            .order((schema::scores::recorded_at.desc(), schema::scores::id.desc()))
            .select(ScoreRecord::as_select())
            .load(&mut conn)?;

        info!(player = %player_name, count = records.len(), "Player history loaded");
        Ok(records)
    }

    /// Ranks players by number of wins.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn top_winners(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        let mut conn = self.connection()?;

        let winners = schema::scores::table
            .filter(schema::scores::outcome.eq(GameOutcome::Win.as_ref()))
            .select(schema::scores::player_name)
            .load::<String>(&mut conn)?;

        let ranked = LeaderboardEntry::rank(winners, limit);
        debug!(players = ranked.len(), "Leaderboard computed");
        Ok(ranked)
    }
}

fn to_sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

impl ScoreSink for ScoreRepository {
    fn record(&mut self, player_name: &str, outcome: GameOutcome) -> Result<(), DbError> {
        self.record_outcome(player_name, outcome).map(|_| ())
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, DbError> {
        self.top_winners(limit)
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScoreRecord>, DbError> {
        self.recent_records(limit)
    }
}
