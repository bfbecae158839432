//! Uniformly random opponent.

use super::MoveStrategy;
use gomoku_board::{Board, Coord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl MoveStrategy for RandomStrategy {
    #[instrument(skip_all, fields(stones = board.stone_count()))]
    fn choose_move(&mut self, board: &Board) -> Option<Coord> {
        let moves = board.valid_moves();
        let choice = moves.choose(&mut self.rng).copied();
        debug!(candidates = moves.len(), choice = ?choice, "Random move chosen");
        choice
    }
}
