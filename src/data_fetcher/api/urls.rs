//! URL building utilities for API endpoints

use crate::constants::espn::{BOX_SCORE_VIEWS, LEAGUE_VIEWS};

/// Builds the base URL of a league for one season.
///
/// # Example
/// ```
/// use ffl_lineups::data_fetcher::api::build_league_base_url;
///
/// let url = build_league_base_url("https://api.example.com", 2024, 336358);
/// assert_eq!(url, "https://api.example.com/apis/v3/games/ffl/seasons/2024/segments/0/leagues/336358");
/// ```
pub fn build_league_base_url(api_domain: &str, season: i32, league_id: u64) -> String {
    let api_domain = api_domain.trim_end_matches('/');
    format!("{api_domain}/apis/v3/games/ffl/seasons/{season}/segments/0/leagues/{league_id}")
}

/// Builds the league metadata URL (teams, settings, status).
///
/// # Example
/// ```
/// use ffl_lineups::data_fetcher::api::build_league_info_url;
///
/// let url = build_league_info_url("https://api.example.com", 2024, 1);
/// assert!(url.ends_with("/leagues/1?view=mTeam&view=mSettings&view=mStatus"));
/// ```
pub fn build_league_info_url(api_domain: &str, season: i32, league_id: u64) -> String {
    format!(
        "{}?{}",
        build_league_base_url(api_domain, season, league_id),
        view_query(LEAGUE_VIEWS)
    )
}

/// Builds the box score URL for a week.
///
/// # Example
/// ```
/// use ffl_lineups::data_fetcher::api::build_box_score_url;
///
/// let url = build_box_score_url("https://api.example.com", 2024, 1, 7);
/// assert!(url.ends_with("?view=mMatchupScore&view=mScoreboard&scoringPeriodId=7"));
/// ```
pub fn build_box_score_url(api_domain: &str, season: i32, league_id: u64, week: u32) -> String {
    format!(
        "{}?{}&scoringPeriodId={week}",
        build_league_base_url(api_domain, season, league_id),
        view_query(BOX_SCORE_VIEWS)
    )
}

/// Builds the `x-fantasy-filter` header value restricting the schedule to one matchup period.
///
/// # Example
/// ```
/// use ffl_lineups::data_fetcher::api::build_schedule_filter;
///
/// assert_eq!(
///     build_schedule_filter(3),
///     r#"{"schedule":{"filterMatchupPeriodIds":{"value":[3]}}}"#
/// );
/// ```
pub fn build_schedule_filter(matchup_period: u32) -> String {
    serde_json::json!({
        "schedule": { "filterMatchupPeriodIds": { "value": [matchup_period] } }
    })
    .to_string()
}

fn view_query(views: &[&str]) -> String {
    views
        .iter()
        .map(|view| format!("view={view}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        assert_eq!(
            build_league_base_url("http://localhost:8080/", 2023, 5),
            "http://localhost:8080/apis/v3/games/ffl/seasons/2023/segments/0/leagues/5"
        );
    }

    #[test]
    fn test_league_info_url() {
        assert_eq!(
            build_league_info_url("https://x.test", 2024, 42),
            "https://x.test/apis/v3/games/ffl/seasons/2024/segments/0/leagues/42?view=mTeam&view=mSettings&view=mStatus"
        );
    }

    #[test]
    fn test_box_score_url() {
        assert_eq!(
            build_box_score_url("https://x.test", 2024, 42, 11),
            "https://x.test/apis/v3/games/ffl/seasons/2024/segments/0/leagues/42?view=mMatchupScore&view=mScoreboard&scoringPeriodId=11"
        );
    }
}
