//! Converts ESPN wire responses into the domain types the lineup core works on.
//!
//! This is the boundary where team ids become [`Participant`]s, so nothing
//! downstream ever branches on the "no opponent" id.

use super::positions::{lineup_slot_label, pro_position_label};
use crate::constants::espn::{NO_OPPONENT_TEAM_ID, STAT_SOURCE_ACTUAL, STAT_SOURCE_PROJECTED};
use crate::data_fetcher::models::{
    BoxScoreResponse, LeagueResponse, Matchup, Participant, PlayerEntry, ScheduleSide, TeamLookup,
    TeamRecord,
};
use tracing::{debug, warn};

/// Builds the team id → name lookup from league metadata.
pub fn team_lookup_from(league: &LeagueResponse) -> TeamLookup {
    TeamLookup::new(league.teams.iter().map(|team| TeamRecord {
        id: team.id,
        name: team.display_name(),
        abbrev: team.abbrev.clone().unwrap_or_default(),
    }))
}

/// The league's current week: its scoring period capped at the final one, never below 1.
pub fn current_week(league: &LeagueResponse) -> u32 {
    let scoring_period = league.scoring_period_id.max(1);
    let final_period = league.status.final_scoring_period;
    if final_period > 0 {
        scoring_period.min(final_period)
    } else {
        scoring_period
    }
}

/// The matchup period containing `week`. Leagues without a schedule map
/// (or weeks missing from it) use the week number itself.
pub fn matchup_period_for_week(league: &LeagueResponse, week: u32) -> u32 {
    let Some(settings) = &league.settings else {
        return week;
    };
    settings
        .schedule_settings
        .matchup_periods
        .iter()
        .filter(|(_, weeks)| weeks.contains(&week))
        .filter_map(|(period, _)| period.parse::<u32>().ok())
        .min()
        .unwrap_or(week)
}

/// Resolves one side of a schedule item. A missing side, the no-opponent id and
/// ids absent from the lookup all become [`Participant::NoOpponent`].
pub fn resolve_participant(side: Option<&ScheduleSide>, teams: &TeamLookup) -> Participant {
    let Some(side) = side else {
        return Participant::NoOpponent;
    };
    if side.team_id == NO_OPPONENT_TEAM_ID {
        return Participant::NoOpponent;
    }
    match teams.name(side.team_id) {
        Some(name) => Participant::Team(name.to_string()),
        None => {
            warn!("Team id {} missing from league teams", side.team_id);
            Participant::NoOpponent
        }
    }
}

/// Converts a side's roster into lineup entries for the given week.
pub fn process_roster(side: Option<&ScheduleSide>, week: u32) -> Vec<PlayerEntry> {
    let Some(side) = side else {
        return Vec::new();
    };

    side.roster_entries()
        .iter()
        .map(|entry| {
            let player = &entry.player_pool_entry.player;
            PlayerEntry {
                name: player.full_name.clone(),
                slot: lineup_slot_label(entry.lineup_slot_id),
                position: pro_position_label(player.default_position_id),
                points: player.applied_total(week, STAT_SOURCE_ACTUAL),
                projected_points: player.applied_total(week, STAT_SOURCE_PROJECTED),
            }
        })
        .collect()
}

/// Converts a box score response into the week's matchups, keeping source order.
///
/// Schedule items are selected by `matchup_period`; player stats by the scoring `week`.
pub fn process_box_scores(
    response: &BoxScoreResponse,
    teams: &TeamLookup,
    matchup_period: u32,
    week: u32,
) -> Vec<Matchup> {
    let matchups: Vec<Matchup> = response
        .schedule
        .iter()
        .filter(|item| item.matchup_period_id == matchup_period)
        .map(|item| Matchup {
            home: resolve_participant(item.home.as_ref(), teams),
            away: resolve_participant(item.away.as_ref(), teams),
            home_lineup: process_roster(item.home.as_ref(), week),
            away_lineup: process_roster(item.away.as_ref(), week),
        })
        .collect();

    debug!(
        "Processed {} matchups for week {} (matchup period {}) from {} schedule items",
        matchups.len(),
        week,
        matchup_period,
        response.schedule.len()
    );

    matchups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{
        EspnPlayer, LeagueSettings, LeagueStatus, LeagueTeam, PlayerPoolEntry, PlayerStat, Roster,
        RosterEntry, ScheduleItem, ScheduleSettings,
    };
    use std::collections::HashMap;

    fn league(scoring_period: u32, final_period: u32) -> LeagueResponse {
        LeagueResponse {
            id: 1,
            season_id: 2024,
            scoring_period_id: scoring_period,
            status: LeagueStatus {
                current_matchup_period: scoring_period,
                final_scoring_period: final_period,
                latest_scoring_period: scoring_period,
            },
            teams: vec![
                LeagueTeam {
                    id: 1,
                    abbrev: Some("FOO".to_string()),
                    name: Some("Foo".to_string()),
                    location: None,
                    nickname: None,
                },
                LeagueTeam {
                    id: 2,
                    abbrev: Some("BAR".to_string()),
                    name: Some("Bar".to_string()),
                    location: None,
                    nickname: None,
                },
            ],
            settings: None,
        }
    }

    fn entry(slot_id: u32, name: &str, position_id: u32, stats: Vec<PlayerStat>) -> RosterEntry {
        RosterEntry {
            lineup_slot_id: slot_id,
            player_id: 0,
            player_pool_entry: PlayerPoolEntry {
                player: EspnPlayer {
                    id: 0,
                    full_name: name.to_string(),
                    default_position_id: position_id,
                    stats,
                },
            },
        }
    }

    fn stat(week: u32, source: u8, total: f64) -> PlayerStat {
        PlayerStat {
            scoring_period_id: week,
            stat_source_id: source,
            stat_split_type_id: 1,
            applied_total: Some(total),
        }
    }

    fn side(team_id: u32, entries: Vec<RosterEntry>) -> ScheduleSide {
        ScheduleSide {
            team_id,
            total_points: 0.0,
            roster_for_current_scoring_period: Some(Roster { entries }),
            roster_for_matchup_period: None,
        }
    }

    #[test]
    fn test_current_week_is_capped() {
        assert_eq!(current_week(&league(5, 17)), 5);
        assert_eq!(current_week(&league(19, 17)), 17);
        assert_eq!(current_week(&league(0, 17)), 1);
        assert_eq!(current_week(&league(4, 0)), 4);
    }

    #[test]
    fn test_resolve_participant_variants() {
        let teams = team_lookup_from(&league(1, 17));
        assert_eq!(
            resolve_participant(Some(&side(1, vec![])), &teams),
            Participant::Team("Foo".to_string())
        );
        assert_eq!(resolve_participant(None, &teams), Participant::NoOpponent);
        assert_eq!(
            resolve_participant(Some(&side(0, vec![])), &teams),
            Participant::NoOpponent
        );
        assert_eq!(
            resolve_participant(Some(&side(77, vec![])), &teams),
            Participant::NoOpponent
        );
    }

    #[test]
    fn test_process_roster_picks_week_stats() {
        let home = side(
            1,
            vec![
                entry(0, "QB One", 1, vec![stat(3, 0, 20.5), stat(3, 1, 18.0), stat(2, 0, 99.0)]),
                entry(20, "Bench WR", 3, vec![stat(3, 1, 4.0)]),
            ],
        );

        let lineup = process_roster(Some(&home), 3);
        assert_eq!(
            lineup,
            vec![
                PlayerEntry::new("QB One", "QB", "QB", Some(20.5), Some(18.0)),
                PlayerEntry::new("Bench WR", "BE", "WR", None, Some(4.0)),
            ]
        );
    }

    #[test]
    fn test_process_box_scores_filters_period_and_handles_bye() {
        let teams = team_lookup_from(&league(3, 17));
        let response = BoxScoreResponse {
            schedule: vec![
                ScheduleItem {
                    id: 1,
                    matchup_period_id: 2,
                    home: Some(side(1, vec![])),
                    away: Some(side(2, vec![])),
                },
                ScheduleItem {
                    id: 2,
                    matchup_period_id: 3,
                    home: Some(side(2, vec![entry(17, "Kicker", 5, vec![])])),
                    away: None,
                },
            ],
        };

        let matchups = process_box_scores(&response, &teams, 3, 3);
        assert_eq!(matchups.len(), 1);
        assert_eq!(matchups[0].home, Participant::Team("Bar".to_string()));
        assert_eq!(matchups[0].away, Participant::NoOpponent);
        assert_eq!(matchups[0].home_lineup.len(), 1);
        assert!(matchups[0].away_lineup.is_empty());
    }

    fn with_playoff_schedule(mut league: LeagueResponse) -> LeagueResponse {
        let matchup_periods: HashMap<String, Vec<u32>> = (1..=14)
            .map(|week| (week.to_string(), vec![week]))
            .chain([("15".to_string(), vec![15, 16]), ("16".to_string(), vec![17])])
            .collect();
        league.settings = Some(LeagueSettings {
            name: "Playoffs".to_string(),
            schedule_settings: ScheduleSettings { matchup_periods },
        });
        league
    }

    #[test]
    fn test_matchup_period_for_week() {
        let league = with_playoff_schedule(league(16, 17));
        assert_eq!(matchup_period_for_week(&league, 3), 3);
        assert_eq!(matchup_period_for_week(&league, 15), 15);
        assert_eq!(matchup_period_for_week(&league, 16), 15);
        assert_eq!(matchup_period_for_week(&league, 17), 16);
        // Not in the map, or no settings at all
        assert_eq!(matchup_period_for_week(&league, 18), 18);
        assert_eq!(matchup_period_for_week(&self::league(16, 17), 16), 16);
    }

    /// Second week of a two-week round still finds the round's matchup
    #[test]
    fn test_process_box_scores_second_week_of_round() {
        let league = with_playoff_schedule(league(16, 17));
        let teams = team_lookup_from(&league);
        let week = current_week(&league);
        let response = BoxScoreResponse {
            schedule: vec![ScheduleItem {
                id: 90,
                matchup_period_id: 15,
                home: Some(side(1, vec![entry(0, "QB", 1, vec![stat(15, 0, 30.0), stat(16, 0, 12.0)])])),
                away: Some(side(2, vec![])),
            }],
        };

        let matchups = process_box_scores(&response, &teams, matchup_period_for_week(&league, week), week);
        assert_eq!(week, 16);
        assert_eq!(matchups.len(), 1);
        assert_eq!(matchups[0].home, Participant::Team("Foo".to_string()));
        assert_eq!(matchups[0].home_lineup[0].points, Some(12.0));
    }
}
