//! Player: a node in the similarity graph.

use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::score::ScoreBreakdown;
use super::stats::{zip_stat_line, StatLine};
use crate::{Error, Result};

/// Where a player's statistics were drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    /// Current-season data.
    Modern,
    /// Averages over a historical multi-season career.
    Traditional,
}

impl Era {
    pub fn from_modern(modern: bool) -> Self {
        if modern { Era::Modern } else { Era::Traditional }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Modern => "modern",
            Era::Traditional => "traditional",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A basketball player and the attributes the archetype score needs.
///
/// Neighbors are stored by name; the owning graph resolves them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    name: String,
    position: String,
    era: Era,
    /// Inches.
    height: Option<u32>,
    /// Pounds.
    weight: Option<u32>,
    stats: Option<StatLine>,
    score: Option<f64>,
    neighbors: HashSet<String>,
}

/// Identity and physical attributes of a player, without stats or edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub position: String,
    pub era: Era,
    pub height: Option<u32>,
    pub weight: Option<u32>,
}

impl Player {
    pub fn new(name: impl Into<String>, position: impl Into<String>, era: Era) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            era,
            height: None,
            weight: None,
            stats: None,
            score: None,
            neighbors: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub fn stats(&self) -> Option<&StatLine> {
        self.stats.as_ref()
    }

    /// Last computed archetype score, `None` until `compute_score` succeeds.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn neighbors(&self) -> &HashSet<String> {
        &self.neighbors
    }

    pub fn info(&self) -> PlayerInfo {
        PlayerInfo {
            name: self.name.clone(),
            position: self.position.clone(),
            era: self.era,
            height: self.height,
            weight: self.weight,
        }
    }

    /// Populate the statistics mapping from parallel value/header slices.
    ///
    /// Statistics can be set once. Later calls leave the first stat line in
    /// place and return `Ok(false)`. Mismatched lengths are rejected even
    /// when the stats are already set.
    pub fn set_stats(&mut self, values: &[f64], headers: &[String]) -> Result<bool> {
        let line = zip_stat_line(values, headers)?;
        if self.stats.is_some() {
            return Ok(false);
        }
        self.stats = Some(line);
        Ok(true)
    }

    /// Overwrite height and weight. A zero height is rejected and the
    /// previous physicals are kept.
    pub fn set_physicals(&mut self, height: u32, weight: u32) -> Result<()> {
        if height == 0 {
            return Err(Error::InvalidPhysicals { player: self.name.clone(), height });
        }
        self.height = Some(height);
        self.weight = Some(weight);
        Ok(())
    }

    /// Sub-scores for the current stats and physicals.
    pub fn score_breakdown(&self) -> Result<ScoreBreakdown> {
        let stats = self.stats.as_ref()
            .ok_or_else(|| Error::StatisticsNotSet(self.name.clone()))?;
        ScoreBreakdown::compute(&self.name, stats, self.height, self.weight)
    }

    /// Recompute the archetype score from scratch and store it.
    pub fn compute_score(&mut self) -> Result<f64> {
        let score = self.score_breakdown()?.total();
        self.score = Some(score);
        Ok(score)
    }

    pub(crate) fn store_score(&mut self, score: f64) {
        self.score = Some(score);
    }

    /// Returns false if the neighbor was already present.
    pub(crate) fn add_neighbor(&mut self, name: &str) -> bool {
        self.neighbors.insert(name.to_string())
    }

    pub fn is_adjacent(&self, name: &str) -> bool {
        self.neighbors.contains(name)
    }
}
