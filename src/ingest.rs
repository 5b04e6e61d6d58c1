//! Ingestion interface: the cleaned records an external ETL step hands
//! to the graph.
//!
//! Reading source files, filtering positions, averaging seasons and
//! normalising names all happen upstream. This module only defines the
//! logical records and replays them into a `SimilarityGraph`:
//!
//! ```text
//! PlayerRecord*  → add_node
//! StatRecord*    → set_statistics_for   (first record per player wins)
//! PhysicalRecord → set_physicals_for    (names not in the graph are skipped)
//!                → connect_graph
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::graph::{GraphConfig, SimilarityGraph};
use crate::model::Era;
use crate::Result;

/// Identity of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub position: String,
    /// True for current-season rows, false for historical averages.
    #[serde(default = "default_modern")]
    pub modern: bool,
}

fn default_modern() -> bool {
    true
}

/// One player's stat values with their column headers, in matching order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub name: String,
    pub values: Vec<f64>,
    pub headers: Vec<String>,
}

/// Height in inches and weight in pounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalRecord {
    pub name: String,
    pub height: u32,
    pub weight: u32,
}

/// A fixed batch of records from which one graph is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub players: Vec<PlayerRecord>,
    pub statistics: Vec<StatRecord>,
    pub physicals: Vec<PhysicalRecord>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Populate a graph from the records without connecting it.
    ///
    /// Stat records for unknown players are an error; physical records for
    /// unknown players are skipped, since the physical source covers far
    /// more players than any one graph holds.
    pub fn populate(&self, graph: &mut SimilarityGraph) -> Result<()> {
        for record in &self.players {
            graph.add_node(&record.name, &record.position, Era::from_modern(record.modern));
        }

        for record in &self.statistics {
            graph.set_statistics_for(&record.name, &record.values, &record.headers)?;
        }

        let mut skipped = 0usize;
        for record in &self.physicals {
            if graph.contains(&record.name) {
                graph.set_physicals_for(&record.name, record.height, record.weight)?;
            } else {
                debug!(player = %record.name, "no vertex for physical record");
                skipped += 1;
            }
        }

        info!(
            players = graph.len(),
            statistics = self.statistics.len(),
            physicals = self.physicals.len() - skipped,
            skipped,
            "snapshot loaded"
        );
        Ok(())
    }

    /// Build and connect a graph in one pass.
    pub fn build(&self, config: GraphConfig) -> Result<SimilarityGraph> {
        let mut graph = SimilarityGraph::with_config(config)?;
        self.populate(&mut graph)?;
        graph.connect_graph()?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_json_defaults() {
        let snap = Snapshot::from_json(
            r#"{"players": [{"name": "Ada", "position": "C"}]}"#,
        ).unwrap();
        assert_eq!(snap.players.len(), 1);
        assert!(snap.players[0].modern);
        assert!(snap.statistics.is_empty());
        assert!(snap.physicals.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Snapshot::from_json("[1, 2"), Err(Error::Json(_))));
    }

    #[test]
    fn test_populate_skips_unknown_physicals() {
        let snap = Snapshot {
            players: vec![PlayerRecord {
                name: "Ada".into(),
                position: "C".into(),
                modern: false,
            }],
            statistics: vec![],
            physicals: vec![
                PhysicalRecord { name: "Ada".into(), height: 84, weight: 250 },
                PhysicalRecord { name: "Nobody".into(), height: 70, weight: 180 },
            ],
        };

        let mut graph = SimilarityGraph::new();
        snap.populate(&mut graph).unwrap();

        let info = graph.get_info("Ada").unwrap();
        assert_eq!(info.era, Era::Traditional);
        assert_eq!((info.height, info.weight), (Some(84), Some(250)));
        assert!(!graph.contains("Nobody"));
    }

    #[test]
    fn test_populate_rejects_stats_for_unknown_player() {
        let snap = Snapshot {
            statistics: vec![StatRecord {
                name: "Nobody".into(),
                values: vec![1.0],
                headers: vec!["PTS".into()],
            }],
            ..Snapshot::default()
        };
        let mut graph = SimilarityGraph::new();
        assert!(matches!(snap.populate(&mut graph), Err(Error::UnknownVertex(_))));
    }
}
