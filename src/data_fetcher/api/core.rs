use crate::config::Config;
use crate::constants::espn::FILTER_HEADER;
use crate::data_fetcher::models::{BoxScoreResponse, LeagueResponse, WeekData};
use crate::data_fetcher::processors::{
    current_week, matchup_period_for_week, process_box_scores, team_lookup_from,
};
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_box_score_url, build_league_info_url, build_schedule_filter};

/// Request headers shared by every league call: the private league cookie when configured.
fn auth_headers(config: &Config) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = config.auth_cookie() {
        let value = HeaderValue::from_str(&cookie).map_err(|_| {
            AppError::config_error("espn_s2 or swid contains characters not allowed in a cookie")
        })?;
        headers.insert(COOKIE, value);
    }
    Ok(headers)
}

/// Fetches league metadata: teams, status and settings.
#[instrument(skip(client, config), fields(league_id = config.league_id))]
pub async fn fetch_league(
    client: &Client,
    config: &Config,
    season: i32,
) -> Result<LeagueResponse, AppError> {
    let url = build_league_info_url(&config.api_domain, season, config.league_id);
    fetch(client, &url, auth_headers(config)?).await
}

/// Fetches box scores (matchups with rosters) for one week.
///
/// The schedule is filtered by `matchup_period`; rosters carry stats for the scoring `week`.
#[instrument(skip(client, config), fields(league_id = config.league_id))]
pub async fn fetch_box_scores(
    client: &Client,
    config: &Config,
    season: i32,
    week: u32,
    matchup_period: u32,
) -> Result<BoxScoreResponse, AppError> {
    let url = build_box_score_url(&config.api_domain, season, config.league_id, week);
    let mut headers = auth_headers(config)?;
    let filter = HeaderValue::from_str(&build_schedule_filter(matchup_period))
        .map_err(|e| AppError::config_error(format!("Invalid schedule filter: {e}")))?;
    headers.insert(HeaderName::from_static(FILTER_HEADER), filter);
    fetch(client, &url, headers).await
}

/// Runs one fetch cycle with an existing client: league metadata, then the week's box scores.
///
/// `week` defaults to the league's current week. A week outside `1..=current`
/// fails before the box score request.
pub async fn fetch_week_data_with_client(
    client: &Client,
    config: &Config,
    week: Option<u32>,
) -> Result<WeekData, AppError> {
    let season = config.effective_season();
    let league = fetch_league(client, config, season).await?;
    let max_week = current_week(&league);
    let week = week.unwrap_or(max_week);

    if week == 0 || week > max_week {
        return Err(AppError::week_out_of_range(week, max_week));
    }

    let teams = team_lookup_from(&league);
    let matchup_period = matchup_period_for_week(&league, week);
    let box_scores = fetch_box_scores(client, config, season, week, matchup_period).await?;
    let matchups = process_box_scores(&box_scores, &teams, matchup_period, week);

    info!(
        "Loaded week {}/{} of season {}: {} teams, {} matchups",
        week,
        max_week,
        season,
        teams.len(),
        matchups.len()
    );

    Ok(WeekData {
        league_name: league.settings.map(|settings| settings.name),
        season,
        week,
        max_week,
        teams,
        matchups,
    })
}

/// Runs one fetch cycle for a week, building an HTTP client from the config.
///
/// # Example
/// ```rust,no_run
/// use ffl_lineups::config::Config;
/// use ffl_lineups::data_fetcher::api::fetch_week_data;
///
/// # async fn example() -> Result<(), ffl_lineups::AppError> {
/// let config = Config::load().await?;
/// let week = fetch_week_data(&config, Some(3)).await?;
/// println!("{} matchups in week {}", week.matchups.len(), week.week);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_week_data(config: &Config, week: Option<u32>) -> Result<WeekData, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    fetch_week_data_with_client(&client, config, week).await
}
