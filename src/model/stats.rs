//! StatLine: the per-player statistics mapping.

use hashbrown::HashMap;

use crate::{Error, Result};

/// Map of stat names (e.g. `"BLK%"`) to per-game or advanced values.
pub type StatLine = HashMap<String, f64>;

/// Every key the archetype score reads. Any ingestion layer feeding the graph
/// must supply all of these for each player before scores are computed.
pub const REQUIRED_STATS: [&str; 17] = [
    "BLK", "BLK%", "DRB", "DRB%", "STL", "STL%", "PF",
    "PTS", "ORB", "ORB%", "TOV", "TOV%",
    "3PA", "AST", "PER", "WS", "FT",
];

/// Build a stat line from parallel value/header slices.
///
/// When a header repeats, the first occurrence wins.
pub fn zip_stat_line(values: &[f64], headers: &[String]) -> Result<StatLine> {
    if values.len() != headers.len() {
        return Err(Error::MalformedStatistics {
            values: values.len(),
            headers: headers.len(),
        });
    }

    let mut line = StatLine::with_capacity(headers.len());
    for (header, value) in headers.iter().zip(values) {
        line.entry(header.clone()).or_insert(*value);
    }
    Ok(line)
}

/// Look up a required stat, naming the player when it is absent.
pub(crate) fn require(line: &StatLine, player: &str, key: &str) -> Result<f64> {
    line.get(key).copied().ok_or_else(|| Error::IncompleteStatistics {
        player: player.to_string(),
        key: key.to_string(),
    })
}
