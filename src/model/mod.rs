//! # Player Model
//!
//! Node and statistics types for the similarity graph, plus the archetype
//! score formula. These types cross every boundary: ingestion ↔ graph ↔ user.
//!
//! Design rule: this module is pure data, no I/O, no logging, no graph state.

pub mod player;
pub mod stats;
pub mod score;

pub use player::{Player, PlayerInfo, Era};
pub use stats::{StatLine, REQUIRED_STATS};
pub use score::ScoreBreakdown;
