//! Database models and domain types.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::{DbError, schema};

/// Finished-game outcome from one player's perspective.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameOutcome {
    /// Player completed a run.
    Win,
    /// Opponent completed a run.
    Loss,
    /// Board filled or no legal move remained.
    Draw,
}

impl GameOutcome {
    /// Parses outcome from the string stored in the database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the string is not a valid outcome value.
    #[instrument(skip(s), fields(s = %s))]
    pub fn from_db_string(s: &str) -> Result<Self, DbError> {
        s.parse()
            .map_err(|_| DbError::new(format!("Invalid outcome: '{}'", s)))
    }
}

/// Stored outcome record.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Getters, Serialize)]
#[diesel(table_name = schema::scores)]
pub struct ScoreRecord {
    id: i32,
    player_name: String,
    outcome: String,
    recorded_at: NaiveDateTime,
}

impl ScoreRecord {
    pub(crate) fn new(
        id: i32,
        player_name: String,
        outcome: GameOutcome,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            player_name,
            outcome: outcome.to_string(),
            recorded_at,
        }
    }

    /// Parses the stored outcome string into a [`GameOutcome`].
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn parse_outcome(&self) -> Result<GameOutcome, DbError> {
        GameOutcome::from_db_string(&self.outcome)
    }
}

/// Insertable outcome record; the timestamp is filled in by the database.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::scores)]
pub struct NewScore {
    player_name: String,
    outcome: String,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, new)]
pub struct LeaderboardEntry {
    player_name: String,
    wins: u64,
}

impl LeaderboardEntry {
    /// Counts wins per name and ranks them: most wins first, then by name.
    pub(crate) fn rank<I>(winners: I, limit: usize) -> Vec<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for name in winners {
            *counts.entry(name).or_default() += 1;
        }

        let mut entries: Vec<Self> = counts
            .into_iter()
            .map(|(player_name, wins)| Self::new(player_name, wins))
            .collect();
        // BTreeMap yields names in order; a stable sort keeps it within ties.
        entries.sort_by(|a, b| b.wins.cmp(&a.wins));
        entries.truncate(limit);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_db_strings() {
        assert_eq!(GameOutcome::Win.to_string(), "win");
        assert_eq!(GameOutcome::Loss.as_ref(), "loss");
        assert_eq!(GameOutcome::from_db_string("draw").unwrap(), GameOutcome::Draw);
        assert!(GameOutcome::from_db_string("forfeit").is_err());
    }

    #[test]
    fn test_rank_orders_by_wins_then_name() {
        let winners = ["bob", "alice", "carol", "bob", "carol", "dave"]
            .into_iter()
            .map(String::from);
        let ranked = LeaderboardEntry::rank(winners, 3);
        assert_eq!(
            ranked,
            vec![
                LeaderboardEntry::new("bob".into(), 2),
                LeaderboardEntry::new("carol".into(), 2),
                LeaderboardEntry::new("alice".into(), 1),
            ]
        );
    }
}
