use crate::cli::Args;
use crate::commands::resolve_selection;
use crate::config::Config;
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::data_fetcher::fetch_week_data_with_client;
use crate::error::AppError;
use crate::ui::{self, ViewState};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;

/// Run the interactive application flow.
///
/// - Runs the first fetch cycle so selection arguments can be checked
///   before the terminal switches to raw mode
/// - Hands the outcome to the interactive UI
///
/// A failed first fetch is shown as an error page with a retry hint. A week
/// outside the league's range and an unknown team or matchup are returned.
pub async fn run_interactive(args: &Args, config: &Config) -> Result<(), AppError> {
    execute!(stdout(), SetTitle("FFL LINEUPS"))?;

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let initial = fetch_week_data_with_client(&client, config, args.week).await;

    let state = match &initial {
        Ok(data) => {
            let mode = resolve_selection(args, data)?;
            ViewState::from_selection(&mode, data)
        }
        Err(AppError::WeekOutOfRange { week, max_week }) => {
            return Err(AppError::week_out_of_range(*week, *max_week));
        }
        Err(e) => {
            tracing::error!("Initial fetch failed: {e}");
            ViewState::new(args.week)
        }
    };

    ui::run_interactive_ui(&client, config, state, initial, args.debug).await
}
