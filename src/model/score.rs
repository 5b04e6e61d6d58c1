//! Archetype score: collapses a statistical profile onto one
//! "traditional big man" axis.
//!
//! Each sub-score is a linear combination of raw stats, tuned so that a
//! typical traditional center lands around 10:
//!
//! ```text
//! defense        = (BLK + BLK%) + (DRB + DRB%)/10 + (STL + STL%) - PF
//! offense        = (PTS + (ORB + ORB%)/10) - (TOV*10 - TOV%)
//! traditionality = 9 - 3PA + (3 - AST)
//! misc           = PER/3 + WS/10
//! physicality    = FT * (weight / height)      only with both physicals
//! ```

use serde::{Deserialize, Serialize};

use super::stats::{require, StatLine};
use crate::{Error, Result};

/// Weights when physicality is known: traditionality, physicality, offense, defense, misc.
const WEIGHTS_FULL: [f64; 5] = [0.3, 0.3, 0.2, 0.15, 0.05];

/// Weights without physicality: traditionality, offense, defense, misc.
const WEIGHTS_FALLBACK: [f64; 4] = [0.4, 0.35, 0.2, 0.05];

/// The sub-scores behind a player's archetype score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub defense: f64,
    pub offense: f64,
    pub traditionality: f64,
    pub misc: f64,
    /// `None` when height or weight is unknown.
    pub physicality: Option<f64>,
}

impl ScoreBreakdown {
    /// Compute every sub-score from a stat line and optional physicals.
    ///
    /// `player` only labels errors. A zero height with a known weight is
    /// rejected rather than scored.
    pub fn compute(
        player: &str,
        stats: &StatLine,
        height: Option<u32>,
        weight: Option<u32>,
    ) -> Result<Self> {
        let s = |key: &str| require(stats, player, key);

        let defense = (s("BLK")? + s("BLK%")?)
            + (s("DRB")? + s("DRB%")?) / 10.0
            + (s("STL")? + s("STL%")?)
            - s("PF")?;

        let offense = (s("PTS")? + (s("ORB")? + s("ORB%")?) / 10.0)
            - (s("TOV")? * 10.0 - s("TOV%")?);

        // Low when a player shoots a lot of threes or passes more than a post player.
        let traditionality = 9.0 - s("3PA")? + (3.0 - s("AST")?);

        let misc = s("PER")? / 3.0 + s("WS")? / 10.0;

        let ft = s("FT")?;
        let physicality = match (height, weight) {
            (Some(0), Some(_)) => {
                return Err(Error::InvalidPhysicals { player: player.to_string(), height: 0 });
            }
            (Some(h), Some(w)) => Some(ft * (f64::from(w) / f64::from(h))),
            _ => None,
        };

        Ok(Self { defense, offense, traditionality, misc, physicality })
    }

    /// Weighted total. Without physicality its 0.3 weight is spread over the
    /// other terms so the result stays on the same scale.
    pub fn total(&self) -> f64 {
        match self.physicality {
            Some(physicality) => {
                let [t, p, o, d, m] = WEIGHTS_FULL;
                t * self.traditionality
                    + p * physicality
                    + o * self.offense
                    + d * self.defense
                    + m * self.misc
            }
            None => {
                let [t, o, d, m] = WEIGHTS_FALLBACK;
                t * self.traditionality + o * self.offense + d * self.defense + m * self.misc
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn fixture() -> StatLine {
        [
            ("BLK", 1.0), ("BLK%", 3.0), ("DRB", 6.0), ("DRB%", 20.0),
            ("STL", 0.5), ("STL%", 1.0), ("PF", 2.5), ("PTS", 15.0),
            ("ORB", 2.0), ("ORB%", 8.0), ("TOV", 1.5), ("TOV%", 10.0),
            ("3PA", 1.0), ("AST", 2.0), ("PER", 18.0), ("WS", 5.0), ("FT", 0.75),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    #[test]
    fn test_sub_scores() {
        let b = ScoreBreakdown::compute("Ada", &fixture(), None, None).unwrap();
        assert!((b.defense - 5.6).abs() < EPS);
        assert!((b.offense - 11.0).abs() < EPS);
        assert!((b.traditionality - 9.0).abs() < EPS);
        assert!((b.misc - 6.5).abs() < EPS);
        assert_eq!(b.physicality, None);
    }

    #[test]
    fn test_fallback_total() {
        let b = ScoreBreakdown::compute("Ada", &fixture(), None, None).unwrap();
        assert!((b.total() - 8.895).abs() < EPS, "got {}", b.total());
    }

    #[test]
    fn test_full_total_with_physicals() {
        let b = ScoreBreakdown::compute("Ada", &fixture(), Some(80), Some(240)).unwrap();
        assert!((b.physicality.unwrap() - 2.25).abs() < EPS);
        assert!((b.total() - 6.74).abs() < EPS, "got {}", b.total());
    }

    #[test]
    fn test_partial_physicals_fall_back() {
        let only_height = ScoreBreakdown::compute("Ada", &fixture(), Some(80), None).unwrap();
        let only_weight = ScoreBreakdown::compute("Ada", &fixture(), None, Some(240)).unwrap();
        assert_eq!(only_height.physicality, None);
        assert_eq!(only_weight.physicality, None);
        assert!((only_height.total() - 8.895).abs() < EPS);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = ScoreBreakdown::compute("Ada", &fixture(), Some(0), Some(240)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPhysicals { ref player, height: 0 } if player == "Ada"
        ));
    }

    #[test]
    fn test_missing_key_is_surfaced() {
        let mut stats = fixture();
        stats.remove("WS");
        let err = ScoreBreakdown::compute("Ada", &stats, None, None).unwrap_err();
        assert!(matches!(err, Error::IncompleteStatistics { ref key, .. } if key == "WS"));
    }

    #[test]
    fn test_ft_required_even_without_physicals() {
        let mut stats = fixture();
        stats.remove("FT");
        assert!(ScoreBreakdown::compute("Ada", &stats, None, None).is_err());
        assert!(ScoreBreakdown::compute("Ada", &stats, Some(80), Some(240)).is_err());
    }
}
