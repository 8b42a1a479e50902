use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "ffl_lineups=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into its directory and file name.
pub fn resolve_log_location(custom_path: Option<&str>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Whether logs should also go to stdout. Interactive and plain --once runs keep stdout clean.
pub fn logs_to_stdout(args: &Args) -> bool {
    crate::cli::is_noninteractive_mode(args) && (!args.once || args.debug)
}

/// Sets up logging configuration for the application.
///
/// - Interactive mode and `--once` without debug: file only
/// - Other non-interactive modes: stdout and file
/// - Daily rolling file appender, log directory created on demand
///
/// Returns the log file path and the guard that must stay alive for the
/// duration of the program so buffered lines get flushed.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Only read the file here; loading would prompt when it does not exist yet
    let config_path = Config::get_config_path();
    let config_log_path = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path)
            .await
            .ok()
            .and_then(|config| config.log_file_path)
    } else {
        std::env::var("FFL_LOG_FILE").ok()
    };

    let custom_log_path = args.log_file.as_deref().or(config_log_path.as_deref());
    let (log_dir, log_file_name) = resolve_log_location(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);
    let init_result = if logs_to_stdout(args) {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .try_init()
    } else {
        registry.try_init()
    };
    init_result.map_err(|e| AppError::log_setup_error(format!("Failed to set up logging: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
