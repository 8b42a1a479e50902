// src/main.rs
use clap::Parser;
use ffl_lineups::app;
use ffl_lineups::cli::{Args, is_config_update};
use ffl_lineups::commands::{
    handle_config_update_command, handle_list_config_command, handle_list_matchups_command,
    handle_list_teams_command, handle_once_command, validate_args,
};
use ffl_lineups::config::Config;
use ffl_lineups::error::AppError;
use ffl_lineups::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // The guard flushes buffered log lines when main returns
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration operations run without a league fetch
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.list_teams {
        return handle_list_teams_command(&args, &config).await;
    }

    if args.list_matchups {
        return handle_list_matchups_command(&args, &config).await;
    }

    if args.once {
        return handle_once_command(&args, &config).await;
    }

    app::run_interactive(&args, &config).await
}
