//! Configuration for graph construction.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Score difference below which two players are connected.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Settings for `SimilarityGraph::connect_graph`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Strict upper bound on `|score(p) - score(q)|` for an edge (default: 0.5)
    pub tolerance: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE }
    }
}

impl GraphConfig {
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        let config = Self { tolerance };
        config.validate()?;
        Ok(config)
    }

    /// Tolerance must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::Config(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Whether two scores are close enough to connect.
    pub fn within_tolerance(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.tolerance
    }
}
