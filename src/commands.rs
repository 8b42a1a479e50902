use crate::cli::Args;
use crate::config::Config;
use crate::constants::ui::NONINTERACTIVE_WIDTH;
use crate::data_fetcher::{WeekData, fetch_week_data};
use crate::error::AppError;
use crate::matchup::{SelectionMode, predefined_matchups};
use crate::ui::MatchupPage;
use crossterm::{execute, terminal::SetTitle};
use std::io::{Write, stdout};
use std::path::Path;

const WINDOW_TITLE: &str = "FFL LINEUPS";

/// Validates command line argument combinations clap cannot express.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.week == Some(0) {
        return Err(AppError::config_error("Week numbers start at 1"));
    }
    if (args.list_teams || args.list_matchups) && args.once {
        return Err(AppError::config_error(
            "Listing options cannot be combined with --once",
        ));
    }
    if args.new_espn_s2.is_some() != args.new_swid.is_some() {
        return Err(AppError::config_error(
            "--set-espn-s2 and --set-swid must be given together",
        ));
    }
    Ok(())
}

/// Turns the selection arguments into a mode, checked against the fetched week.
///
/// Team names are matched case-insensitively; an unknown name is an error here,
/// unlike in the selector itself where a missing team just shows an empty lineup.
pub fn resolve_selection(args: &Args, data: &WeekData) -> Result<SelectionMode, AppError> {
    if let (Some(home), Some(away)) = (&args.home, &args.away) {
        let home = data
            .teams
            .find_name(home)
            .ok_or_else(|| AppError::unknown_team(home))?;
        let away = data
            .teams
            .find_name(away)
            .ok_or_else(|| AppError::unknown_team(away))?;
        return Ok(SelectionMode::Custom {
            home: home.to_string(),
            away: away.to_string(),
        });
    }

    let index = args.matchup.unwrap_or(1).saturating_sub(1) as usize;
    let available = predefined_matchups(&data.matchups).len();
    // Default selection on an empty week shows the "no matchups" page instead of failing
    if index >= available && (args.matchup.is_some() || available > 0) {
        return Err(AppError::matchup_not_found(index + 1, data.week, available));
    }
    Ok(SelectionMode::Predefined(index))
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(WINDOW_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Applies the configuration setters from the arguments to a config.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(league_id) = args.new_league_id {
        config.league_id = league_id;
    }
    if let Some(season) = args.new_season {
        config.season = Some(season);
    }
    if let Some(espn_s2) = &args.new_espn_s2 {
        config.espn_s2 = Some(espn_s2.clone());
    }
    if let Some(swid) = &args.new_swid {
        config.swid = Some(swid.clone());
    }
    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }
}

/// Handles configuration update commands (--set-*, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save().await?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");
    Ok(())
}

/// Handles --list-teams: every team name with its abbreviation, alphabetically.
pub async fn handle_list_teams_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let data = fetch_week_data(config, args.week).await?;
    let mut out = stdout();
    write_team_list(&mut out, &data)?;
    Ok(())
}

pub fn write_team_list(out: &mut impl Write, data: &WeekData) -> Result<(), AppError> {
    writeln!(out, "Teams ({}):", data.teams.len())?;
    for team in data.teams.sorted_records() {
        writeln!(out, "  {:<30} {}", team.name, team.abbrev)?;
    }
    Ok(())
}

/// Handles --list-matchups: the week's scheduled matchups, numbered for --matchup.
pub async fn handle_list_matchups_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let data = fetch_week_data(config, args.week).await?;
    let mut out = stdout();
    write_matchup_list(&mut out, &data)?;
    Ok(())
}

pub fn write_matchup_list(out: &mut impl Write, data: &WeekData) -> Result<(), AppError> {
    let matchups = predefined_matchups(&data.matchups);
    writeln!(out, "Week {}/{} matchups:", data.week, data.max_week)?;
    if matchups.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (i, matchup) in matchups.iter().enumerate() {
        writeln!(out, "  {:>2}. {}", i + 1, matchup.label)?;
    }
    Ok(())
}

/// Renders the page for --once output.
pub fn render_once(page: &MatchupPage, plain: bool) -> String {
    let width = NONINTERACTIVE_WIDTH as usize;
    if plain {
        page.to_plain_string(width)
    } else {
        page.to_colored_string(width)
    }
}

/// Handles the --once command: one fetch cycle, one page to stdout.
///
/// Fetch failures print an error page; selection errors are returned.
pub async fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    if !args.plain {
        execute!(stdout(), SetTitle(WINDOW_TITLE))?;
    }

    let page = match fetch_week_data(config, args.week).await {
        Ok(data) => {
            let mode = resolve_selection(args, &data)?;
            MatchupPage::for_week(&data, &mode)
        }
        Err(e @ AppError::WeekOutOfRange { .. }) => return Err(e),
        Err(e) => {
            tracing::error!("Fetch failed in once mode: {e}");
            MatchupPage::error(&e, args.week, None)
        }
    };

    let mut out = stdout();
    write!(out, "{}", render_once(&page, args.plain))?;
    out.flush()?;
    Ok(())
}
