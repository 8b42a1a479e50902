use super::players::EspnPlayer;
use serde::{Deserialize, Serialize};

/// Response of the `mMatchupScore`/`mScoreboard` views filtered to one matchup period.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BoxScoreResponse {
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: u32,
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: u32,
    #[serde(default)]
    pub home: Option<ScheduleSide>,
    /// Missing when the home team has no opponent this week.
    #[serde(default)]
    pub away: Option<ScheduleSide>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSide {
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
    #[serde(rename = "rosterForCurrentScoringPeriod", default)]
    pub roster_for_current_scoring_period: Option<Roster>,
    #[serde(rename = "rosterForMatchupPeriod", default)]
    pub roster_for_matchup_period: Option<Roster>,
}

impl ScheduleSide {
    /// Roster entries for the requested week. ESPN sends one of the two roster keys
    /// depending on whether the period is current or historical.
    pub fn roster_entries(&self) -> &[RosterEntry] {
        self.roster_for_current_scoring_period
            .as_ref()
            .or(self.roster_for_matchup_period.as_ref())
            .map(|roster| roster.entries.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "lineupSlotId")]
    pub lineup_slot_id: u32,
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPoolEntry {
    pub player: EspnPlayer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bye_item_has_no_away_side() {
        let json = r#"{
            "schedule": [
                {"id": 10, "matchupPeriodId": 2, "home": {"teamId": 4, "totalPoints": 0.0}}
            ]
        }"#;

        let response: BoxScoreResponse = serde_json::from_str(json).unwrap();
        let item = &response.schedule[0];
        assert!(item.away.is_none());
        let home = item.home.as_ref().unwrap();
        assert_eq!(home.team_id, 4);
        assert!(home.roster_entries().is_empty());
    }

    #[test]
    fn test_roster_entries_prefers_current_period() {
        let json = r#"{
            "teamId": 1,
            "totalPoints": 101.2,
            "rosterForMatchupPeriod": {"entries": []},
            "rosterForCurrentScoringPeriod": {"entries": [
                {"lineupSlotId": 0, "playerId": 7, "playerPoolEntry": {"player": {"id": 7, "fullName": "QB One", "defaultPositionId": 1}}}
            ]}
        }"#;

        let side: ScheduleSide = serde_json::from_str(json).unwrap();
        assert_eq!(side.roster_entries().len(), 1);
        assert_eq!(side.roster_entries()[0].player_pool_entry.player.full_name, "QB One");
    }

    #[test]
    fn test_roster_entries_falls_back_to_matchup_period() {
        let json = r#"{
            "teamId": 3,
            "rosterForMatchupPeriod": {"entries": [
                {"lineupSlotId": 20, "playerPoolEntry": {"player": {"id": 8, "fullName": "Bench Guy", "defaultPositionId": 3}}}
            ]}
        }"#;

        let side: ScheduleSide = serde_json::from_str(json).unwrap();
        assert_eq!(side.roster_entries().len(), 1);
        assert_eq!(side.roster_entries()[0].lineup_slot_id, 20);
    }
}
