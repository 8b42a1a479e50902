use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - League id must be non-zero
/// - API domain must be a valid URL or domain name
/// - `espn_s2` and `swid` must be set together (private leagues need both)
/// - Season, if set, must be a plausible year
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.league_id == 0 {
        return Err(AppError::config_error("League id cannot be zero"));
    }

    validate_api_domain(&config.api_domain)?;

    match (&config.espn_s2, &config.swid) {
        (Some(s2), Some(swid)) if s2.trim().is_empty() || swid.trim().is_empty() => {
            return Err(AppError::config_error(
                "espn_s2 and swid cannot be empty strings",
            ));
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(AppError::config_error(
                "espn_s2 and swid must be configured together",
            ));
        }
        _ => {}
    }

    if let Some(season) = config.season
        && !(2000..=2100).contains(&season)
    {
        return Err(AppError::config_error(format!(
            "Season {season} is not a valid year"
        )));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_api_domain(api_domain: &str) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://")
        && !api_domain.starts_with("https://")
        && !api_domain.contains('.')
        && !api_domain.starts_with("localhost")
    {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    Ok(())
}
