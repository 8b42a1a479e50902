use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render once and exit)
/// - a listing is requested (--list-teams, --list-matchups)
/// - config operations are requested
/// - --debug mode is enabled
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.list_teams
        || args.list_matchups
        || is_config_update(args)
        || args.list_config
        || args.debug
}

/// True when any persistent config setting is being changed
pub fn is_config_update(args: &Args) -> bool {
    args.new_league_id.is_some()
        || args.new_season.is_some()
        || args.new_espn_s2.is_some()
        || args.new_swid.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Fantasy football lineup viewer for ESPN leagues
///
/// Shows two teams' weekly lineups side by side: slot, player, actual and
/// projected points, with a TOTAL row for each team.
///
/// In interactive mode (default):
/// - Use arrow keys (←/→) to switch matchups, or the home team in custom mode
/// - Use ↑/↓ to switch the away team in custom mode
/// - Use Shift+←/→ to change week
/// - Press 'm' to toggle between scheduled matchups and a custom pairing
/// - Press 'r' to refetch the week
/// - Press 'q' to quit
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the lineups once and exit. Useful for scripts; output stays in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Disable colors in --once output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Week (scoring period) to show. Defaults to the league's current week.
    #[arg(short = 'w', long = "week", help_heading = "Selection")]
    pub week: Option<u32>,

    /// Scheduled matchup to show, 1-based in schedule order.
    #[arg(
        short = 'm',
        long = "matchup",
        help_heading = "Selection",
        conflicts_with_all = ["home", "away"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub matchup: Option<u32>,

    /// Home team for a custom pairing (name or abbreviation, case-insensitive).
    #[arg(long = "home", help_heading = "Selection", requires = "away")]
    pub home: Option<String>,

    /// Away team for a custom pairing (name or abbreviation, case-insensitive).
    #[arg(long = "away", help_heading = "Selection", requires = "home")]
    pub away: Option<String>,

    /// List the league's teams and exit.
    #[arg(long = "list-teams", help_heading = "Selection")]
    pub list_teams: bool,

    /// List the week's scheduled matchups and exit.
    #[arg(long = "list-matchups", help_heading = "Selection")]
    pub list_matchups: bool,

    /// Set the ESPN league id in config.
    #[arg(long = "set-league-id", help_heading = "Configuration", value_name = "ID")]
    pub new_league_id: Option<u64>,

    /// Set the season year in config. Without it the season follows today's date.
    #[arg(long = "set-season", help_heading = "Configuration", value_name = "YEAR")]
    pub new_season: Option<i32>,

    /// Set the espn_s2 cookie for a private league.
    #[arg(long = "set-espn-s2", help_heading = "Configuration", value_name = "COOKIE")]
    pub new_espn_s2: Option<String>,

    /// Set the SWID cookie for a private league.
    #[arg(long = "set-swid", help_heading = "Configuration", value_name = "SWID")]
    pub new_swid: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(
        long = "clear-log-file",
        help_heading = "Configuration",
        conflicts_with = "new_log_file_path"
    )]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: the terminal is not switched to raw mode or the alternate
    /// screen, and logs are also written to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
