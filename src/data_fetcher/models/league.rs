use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// League metadata returned by the `mTeam`/`mSettings`/`mStatus` views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueResponse {
    pub id: u64,
    #[serde(rename = "seasonId")]
    pub season_id: i32,
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: u32,
    #[serde(default)]
    pub status: LeagueStatus,
    #[serde(default)]
    pub teams: Vec<LeagueTeam>,
    #[serde(default)]
    pub settings: Option<LeagueSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueStatus {
    #[serde(rename = "currentMatchupPeriod", default)]
    pub current_matchup_period: u32,
    #[serde(rename = "finalScoringPeriod", default)]
    pub final_scoring_period: u32,
    #[serde(rename = "latestScoringPeriod", default)]
    pub latest_scoring_period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSettings {
    pub name: String,
    #[serde(rename = "scheduleSettings", default)]
    pub schedule_settings: ScheduleSettings,
}

/// Matchup period id (as a string key) → the scoring periods it spans.
/// Playoff rounds can cover more than one week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(rename = "matchupPeriods", default)]
    pub matchup_periods: HashMap<String, Vec<u32>>,
}

/// A fantasy team. Newer seasons carry `name`, older ones `location` + `nickname`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueTeam {
    pub id: u32,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl LeagueTeam {
    /// Display name with fallback to `location nickname`, then `Team <id>`.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_string();
        }

        let joined = [self.location.as_deref(), self.nickname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            format!("Team {}", self.id)
        } else {
            joined
        }
    }
}
