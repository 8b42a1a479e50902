//! Main interactive loop: one fetch cycle per week change or refresh, local
//! re-rendering for every other key.

use super::input_handler::action_for_key;
use super::state::{Effect, ViewState};
use super::terminal_manager::TerminalManager;
use crate::config::Config;
use crate::constants::ui::POLL_INTERVAL_MS;
use crate::data_fetcher::{WeekData, fetch_week_data_with_client};
use crate::error::AppError;
use crate::ui::page::{MatchupPage, footer_hints};
use crossterm::event::{self, Event};
use reqwest::Client;
use std::io::Stdout;
use std::time::Duration;

/// Runs one fetch cycle for the state's week and records the outcome.
async fn run_fetch_cycle(
    client: &Client,
    config: &Config,
    state: &mut ViewState,
) -> Result<WeekData, AppError> {
    tracing::debug!("Fetching week {:?}", state.week());
    let result = fetch_week_data_with_client(client, config, state.week()).await;
    match &result {
        Ok(data) => state.on_week_loaded(data),
        Err(e) => {
            tracing::error!("Fetch cycle failed for week {:?}: {}", state.week(), e);
            if e.is_retryable() {
                tracing::warn!("Error is transient, press r to retry");
            }
        }
    }
    result
}

/// Builds the page for the latest cycle outcome and selection.
fn build_page(cycle: &Result<WeekData, AppError>, state: &ViewState) -> MatchupPage {
    match cycle {
        Ok(data) => MatchupPage::for_week(data, &state.selection(data))
            .with_footer(footer_hints(state.is_custom(), false)),
        Err(e) => MatchupPage::error(e, state.week(), state.max_week())
            .with_footer(footer_hints(state.is_custom(), true)),
    }
}

async fn event_loop(
    client: &Client,
    config: &Config,
    state: &mut ViewState,
    initial: Result<WeekData, AppError>,
    stdout: &mut Stdout,
) -> Result<(), AppError> {
    let poll_interval = Duration::from_millis(POLL_INTERVAL_MS);
    let mut cycle = initial;
    let mut needs_fetch = false;
    let mut needs_render = true;

    loop {
        if needs_fetch {
            MatchupPage::loading(state.week(), state.max_week()).render_buffered(stdout)?;
            cycle = run_fetch_cycle(client, config, state).await;
            needs_fetch = false;
            needs_render = true;
        }

        if needs_render {
            build_page(&cycle, state).render_buffered(stdout)?;
            needs_render = false;
        }

        if !event::poll(poll_interval)? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                let action = action_for_key(&key_event);
                match state.apply(action, cycle.as_ref().ok()) {
                    Effect::Quit => {
                        tracing::info!("Quit requested");
                        return Ok(());
                    }
                    Effect::Refetch => needs_fetch = true,
                    Effect::Render => needs_render = true,
                    Effect::None => {}
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {width}x{height}");
                needs_render = true;
            }
            _ => {}
        }
    }
}

/// Runs the interactive viewer until the user quits.
///
/// `initial` is the outcome of the first fetch cycle, already run by the
/// caller so that selection arguments could be checked against it.
pub async fn run_interactive_ui(
    client: &Client,
    config: &Config,
    mut state: ViewState,
    initial: Result<WeekData, AppError>,
    debug_mode: bool,
) -> Result<(), AppError> {
    let terminal = TerminalManager::new(debug_mode);
    let mut stdout = terminal.setup_terminal()?;

    let result = event_loop(client, config, &mut state, initial, &mut stdout).await;

    // Restore the terminal even when the loop failed
    terminal.cleanup_terminal(stdout)?;
    result
}
