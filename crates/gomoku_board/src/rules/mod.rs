//! Game rules for Gomoku.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! grid storage so each can be tested on its own.

pub mod draw;
pub mod placement;
pub mod win;

pub use draw::is_full;
pub use placement::{center_cells, has_neighbor};
pub use win::{completes_run, run_length};
