//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and API identifiers used across
//! the crate.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default ESPN fantasy read API domain
pub const DEFAULT_API_DOMAIN: &str = "https://lm-api-reads.fantasy.espn.com";

/// Application directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "ffl_lineups";

/// Default log file name
pub const LOG_FILE_NAME: &str = "ffl_lineups.log";

/// ESPN fantasy football API identifiers
pub mod espn {
    /// Views requested for league metadata (teams, status, settings)
    pub const LEAGUE_VIEWS: &[&str] = &["mTeam", "mSettings", "mStatus"];

    /// Views requested for weekly box scores
    pub const BOX_SCORE_VIEWS: &[&str] = &["mMatchupScore", "mScoreboard"];

    /// Header carrying the JSON schedule filter
    pub const FILTER_HEADER: &str = "x-fantasy-filter";

    /// `statSourceId` for actual scored points
    pub const STAT_SOURCE_ACTUAL: u8 = 0;

    /// `statSourceId` for projected points
    pub const STAT_SOURCE_PROJECTED: u8 = 1;

    /// Team id the API uses for "no opponent"
    pub const NO_OPPONENT_TEAM_ID: u32 = 0;

    /// Month (1-based) before which the default season is the previous year
    pub const SEASON_START_MONTH: u32 = 8;
}

/// Lineup table labels
pub mod lineup {
    /// Slot label of the trailing totals row
    pub const TOTAL_LABEL: &str = "TOTAL";

    /// Display label for bench slots
    pub const BENCH_LABEL: &str = "BE";
}

/// UI layout constants
pub mod ui {
    /// Width of the slot column
    pub const SLOT_WIDTH: usize = 9;

    /// Width of the player name column
    pub const PLAYER_WIDTH: usize = 20;

    /// Width of each points column
    pub const POINTS_WIDTH: usize = 7;

    /// Gap between the two side-by-side tables
    pub const COLUMN_GAP: usize = 4;

    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width used when rendering outside of a terminal (once mode)
    pub const NONINTERACTIVE_WIDTH: u16 = 100;

    /// Polling interval for keyboard events in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 100;
}
