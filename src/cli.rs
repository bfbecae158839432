//! Command-line interface for gomoku.

use clap::{Parser, Subcommand};

/// Gomoku - four in a row against a random opponent
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Four-in-a-row Gomoku in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the computer on stdin/stdout
    Play {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "gomoku.toml")]
        config: std::path::PathBuf,

        /// Board rows (5-25)
        #[arg(long)]
        rows: Option<usize>,

        /// Board columns (5-25, not more than rows)
        #[arg(long)]
        cols: Option<usize>,

        /// Your name for the score table
        #[arg(short, long)]
        name: Option<String>,

        /// Path to the score database (created if it doesn't exist)
        #[arg(long)]
        db_path: Option<String>,

        /// Seed for the computer's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Choose the opening stone yourself instead of auto-placing it
        #[arg(long)]
        manual_start: bool,
    },

    /// Show the high score table
    Scores {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "gomoku.toml")]
        config: std::path::PathBuf,

        /// Path to the score database
        #[arg(long)]
        db_path: Option<String>,

        /// Maximum number of rows to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// List the most recent results instead of the leaderboard
        #[arg(long)]
        recent: bool,

        /// List every result for one player instead of the leaderboard
        #[arg(long, conflicts_with = "recent")]
        player: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_player_flag() {
        let cli = Cli::try_parse_from(["gomoku", "scores", "--player", "Alice", "--json"])
            .expect("valid arguments");
        match cli.command {
            Command::Scores {
                player, recent, json, ..
            } => {
                assert_eq!(player.as_deref(), Some("Alice"));
                assert!(!recent);
                assert!(json);
            }
            other => panic!("expected scores, got {:?}", other),
        }
    }

    #[test]
    fn test_scores_player_conflicts_with_recent() {
        let result = Cli::try_parse_from(["gomoku", "scores", "--player", "Alice", "--recent"]);
        assert!(result.is_err());
    }
}
