//! Text-mode game session between a human and the computer.

mod input;
mod orchestrator;

pub use input::{Command, InputError, parse_command};
pub use orchestrator::Orchestrator;

use derive_getters::Getters;
use derive_new::new;
use gomoku_board::Mark;
use serde::Serialize;

/// A named side in the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, new)]
pub struct Participant {
    /// Name recorded in the score table.
    name: String,
    /// Mark placed on the board.
    mark: Mark,
}

/// How a game session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameResult {
    /// A player completed a run.
    Won {
        /// Winner's name.
        winner: String,
        /// Winner's mark.
        mark: Mark,
        /// Stones on the board when the game ended.
        moves: usize,
    },
    /// Board full, or the side to move had no legal move.
    Draw {
        /// Stones on the board when the game ended.
        moves: usize,
    },
    /// The human quit or input ended; nothing is recorded.
    Abandoned,
}
