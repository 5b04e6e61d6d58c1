//! # archetype-graph: Player Similarity Graph
//!
//! An undirected graph of basketball players in which two players are
//! adjacent when their archetype scores are nearly equal.
//!
//! ## Design Principles
//!
//! 1. **Arena-owned nodes**: `SimilarityGraph` owns every `Player`; edges are name sets
//! 2. **Derived score**: the archetype score is never set, only computed from stats
//! 3. **Once-only statistics**: the first ingestion pass wins
//! 4. **Ingestion is external**: the core only sees the logical records in `ingest`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use archetype_graph::{Era, SimilarityGraph};
//!
//! # fn example(values: Vec<f64>, headers: Vec<String>) -> archetype_graph::Result<()> {
//! let mut graph = SimilarityGraph::new();
//! graph.add_node("Nikola Jokic", "C", Era::Modern);
//! graph.set_statistics_for("Nikola Jokic", &values, &headers)?;
//! graph.set_physicals_for("Nikola Jokic", 83, 284)?;
//! graph.connect_graph()?;
//!
//! for name in graph.neighbors_of("Nikola Jokic")? {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod ingest;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Player, PlayerInfo, Era, StatLine, ScoreBreakdown,
    REQUIRED_STATS,
};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::{SimilarityGraph, GraphConfig, DEFAULT_TOLERANCE};

// ============================================================================
// Re-exports: Ingestion interface
// ============================================================================

pub use ingest::{PlayerRecord, StatRecord, PhysicalRecord, Snapshot};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Malformed statistics input: {values} values but {headers} headers")]
    MalformedStatistics { values: usize, headers: usize },

    #[error("Statistics not set for player: {0}")]
    StatisticsNotSet(String),

    #[error("Incomplete statistics for {player}: missing '{key}'")]
    IncompleteStatistics { player: String, key: String },

    #[error("Invalid physicals for {player}: height must be positive, got {height}")]
    InvalidPhysicals { player: String, height: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
