//! # Similarity Graph
//!
//! Undirected graph of players keyed by name. The graph is the only owner
//! of `Player` nodes; an edge is the pair of neighbor-set entries on its two
//! endpoints, so adjacency is always mutual.
//!
//! ## Lifecycle
//!
//! ```text
//! add_node → set_statistics_for / set_physicals_for → connect_graph
//!                                                      ├─ compute_all_scores
//!                                                      └─ all-pairs |Δscore| < tolerance
//! ```

pub mod config;

use hashbrown::{HashMap, HashSet};
use tracing::{debug, info, trace};

use crate::model::*;
use crate::{Error, Result};

pub use config::{GraphConfig, DEFAULT_TOLERANCE};

// ============================================================================
// SimilarityGraph
// ============================================================================

/// Arena of players connected by archetype score proximity.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    players: HashMap<String, Player>,
    config: GraphConfig,
}

impl SimilarityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { players: HashMap::new(), config })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Insert a player with no stats, physicals or edges.
    ///
    /// Returns false and leaves the existing player untouched if the name is taken.
    pub fn add_node(&mut self, name: &str, position: &str, era: Era) -> bool {
        if self.players.contains_key(name) {
            trace!(player = name, "add_node: already present");
            return false;
        }
        debug!(player = name, position, %era, "add_node");
        self.players.insert(name.to_string(), Player::new(name, position, era));
        true
    }

    /// Like `add_node`, but a reused name is an error.
    pub fn try_add_node(&mut self, name: &str, position: &str, era: Era) -> Result<()> {
        if self.add_node(name, position, era) {
            Ok(())
        } else {
            Err(Error::DuplicateKey(name.to_string()))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player(&self, name: &str) -> Result<&Player> {
        self.players.get(name)
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    fn player_mut(&mut self, name: &str) -> Result<&mut Player> {
        self.players.get_mut(name)
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn all_vertex_names(&self) -> HashSet<&str> {
        self.players.keys().map(String::as_str).collect()
    }

    pub fn get_info(&self, name: &str) -> Result<PlayerInfo> {
        Ok(self.player(name)?.info())
    }

    /// Stat line of a player, `None` if it has not been supplied yet.
    pub fn get_statistics(&self, name: &str) -> Result<Option<&StatLine>> {
        Ok(self.player(name)?.stats())
    }

    // ========================================================================
    // Enrichment
    // ========================================================================

    /// Set a player's statistics once. Returns `Ok(false)` when the player
    /// already had statistics and this update was dropped.
    pub fn set_statistics_for(
        &mut self,
        name: &str,
        values: &[f64],
        headers: &[String],
    ) -> Result<bool> {
        let applied = self.player_mut(name)?.set_stats(values, headers)?;
        if !applied {
            debug!(player = name, "statistics already set, update ignored");
        }
        Ok(applied)
    }

    pub fn set_physicals_for(&mut self, name: &str, height: u32, weight: u32) -> Result<()> {
        self.player_mut(name)?.set_physicals(height, weight)
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Connect two distinct players. Both neighbor sets are updated, or
    /// neither is when a name is unknown.
    ///
    /// Returns false if the edge already existed.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        debug_assert_ne!(a, b, "self-loops are not allowed");
        if !self.players.contains_key(a) {
            return Err(Error::UnknownVertex(a.to_string()));
        }
        if !self.players.contains_key(b) {
            return Err(Error::UnknownVertex(b.to_string()));
        }

        let inserted = self.player_mut(a)?.add_neighbor(b);
        self.player_mut(b)?.add_neighbor(a);
        Ok(inserted)
    }

    /// False when either name is absent.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.players.get(a), self.players.contains_key(b)) {
            (Some(player), true) => player.is_adjacent(b),
            _ => false,
        }
    }

    pub fn neighbors_of(&self, name: &str) -> Result<&HashSet<String>> {
        Ok(self.player(name)?.neighbors())
    }

    pub fn edge_count(&self) -> usize {
        self.players.values().map(|p| p.neighbors().len()).sum::<usize>() / 2
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Recompute the archetype score of every player.
    ///
    /// Scores are stored only once every player has scored; on error no
    /// player's score changes.
    pub fn compute_all_scores(&mut self) -> Result<()> {
        let scores = self.players.iter()
            .map(|(name, player)| Ok((name.clone(), player.score_breakdown()?.total())))
            .collect::<Result<Vec<(String, f64)>>>()?;

        for (name, score) in scores {
            self.player_mut(&name)?.store_score(score);
        }
        Ok(())
    }

    /// Score every player, then connect each unordered pair whose scores
    /// differ by less than the configured tolerance.
    ///
    /// Compares all pairs, O(n²). Re-running only re-derives the same edges.
    /// Returns the number of edges that were not already present.
    pub fn connect_graph(&mut self) -> Result<usize> {
        self.compute_all_scores()?;

        // Snapshot the vertex set before inserting any edges.
        let mut scored: Vec<(String, f64)> = self.players.values()
            .filter_map(|p| p.score().map(|s| (p.name().to_string(), s)))
            .collect();
        scored.sort_by(|x, y| x.0.cmp(&y.0));

        let mut comparisons = 0usize;
        let mut inserted = 0usize;
        for (i, (p, score_p)) in scored.iter().enumerate() {
            for (q, score_q) in &scored[i + 1..] {
                comparisons += 1;
                if self.config.within_tolerance(*score_p, *score_q) && self.add_edge(p, q)? {
                    inserted += 1;
                }
            }
        }

        info!(
            vertices = scored.len(),
            comparisons,
            inserted,
            edges = self.edge_count(),
            tolerance = self.config.tolerance,
            "connect_graph complete"
        );
        Ok(inserted)
    }
}

// ============================================================================
// Tests
// ============================================================================
