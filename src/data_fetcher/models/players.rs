use serde::{Deserialize, Serialize};

/// Player object nested in a roster entry's `playerPoolEntry`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EspnPlayer {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: u32,
    #[serde(default)]
    pub stats: Vec<PlayerStat>,
}

/// One stat line. `statSourceId` 0 is actual, 1 is projected.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlayerStat {
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: u32,
    #[serde(rename = "statSourceId")]
    pub stat_source_id: u8,
    #[serde(rename = "statSplitTypeId", default)]
    pub stat_split_type_id: u8,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: Option<f64>,
}

impl EspnPlayer {
    /// Applied fantasy total for a scoring period and stat source, if ESPN reported one.
    pub fn applied_total(&self, scoring_period: u32, stat_source_id: u8) -> Option<f64> {
        self.stats
            .iter()
            .find(|s| s.scoring_period_id == scoring_period && s.stat_source_id == stat_source_id)
            .and_then(|s| s.applied_total)
    }
}
