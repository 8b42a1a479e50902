use crate::data_fetcher::models::{Matchup, PlayerEntry};
use tracing::debug;

/// A week's scheduled matchup where both sides are real teams.
#[derive(Debug, Clone, PartialEq)]
pub struct PredefinedMatchup<'a> {
    /// `"<home> vs <away>"`
    pub label: String,
    pub home_name: &'a str,
    pub away_name: &'a str,
    pub matchup: &'a Matchup,
}

/// How the two displayed lineups are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Index into [`predefined_matchups`] for the week.
    Predefined(usize),
    /// Any two teams, each looked up independently.
    Custom { home: String, away: String },
}

/// Two team names with the lineups to display for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatchup<'a> {
    pub home_name: &'a str,
    pub away_name: &'a str,
    pub home_lineup: &'a [PlayerEntry],
    pub away_lineup: &'a [PlayerEntry],
}

/// Lists the week's matchups with a team on both sides, in source order.
///
/// Byes (no opponent on either side) are left out.
pub fn predefined_matchups(matchups: &[Matchup]) -> Vec<PredefinedMatchup<'_>> {
    matchups
        .iter()
        .filter_map(|matchup| {
            let home_name = matchup.home.name()?;
            let away_name = matchup.away.name()?;
            Some(PredefinedMatchup {
                label: format!("{home_name} vs {away_name}"),
                home_name,
                away_name,
                matchup,
            })
        })
        .collect()
}

/// Returns the first matchup that has `team_name` on either side.
pub fn find_team_matchup<'a>(matchups: &'a [Matchup], team_name: &str) -> Option<&'a Matchup> {
    matchups
        .iter()
        .find(|matchup| matchup.home.is_team(team_name) || matchup.away.is_team(team_name))
}

/// The lineup a team fielded this week. A team without a matchup gets an empty lineup.
pub fn lineup_for_team<'a>(matchups: &'a [Matchup], team_name: &str) -> &'a [PlayerEntry] {
    match find_team_matchup(matchups, team_name) {
        Some(matchup) if matchup.home.is_team(team_name) => &matchup.home_lineup,
        Some(matchup) => &matchup.away_lineup,
        None => {
            debug!("No matchup found for team '{team_name}', using empty lineup");
            &[]
        }
    }
}

/// Resolves a selection into the two lineups to show.
///
/// Returns `None` only for a predefined index past the end of the list.
/// Custom selections always resolve; a team on bye shows an empty lineup.
pub fn resolve<'a>(
    matchups: &'a [Matchup],
    mode: &'a SelectionMode,
) -> Option<ResolvedMatchup<'a>> {
    match mode {
        SelectionMode::Predefined(index) => {
            let selected = predefined_matchups(matchups).into_iter().nth(*index)?;
            Some(ResolvedMatchup {
                home_name: selected.home_name,
                away_name: selected.away_name,
                home_lineup: &selected.matchup.home_lineup,
                away_lineup: &selected.matchup.away_lineup,
            })
        }
        SelectionMode::Custom { home, away } => Some(ResolvedMatchup {
            home_name: home,
            away_name: away,
            home_lineup: lineup_for_team(matchups, home),
            away_lineup: lineup_for_team(matchups, away),
        }),
    }
}
