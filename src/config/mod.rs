use crate::constants::{DEFAULT_API_DOMAIN, DEFAULT_HTTP_TIMEOUT_SECONDS, LOG_FILE_NAME, espn};
use crate::error::AppError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_league_id;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// ESPN fantasy API domain. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// ESPN league id (the `leagueId` query parameter of the league page).
    pub league_id: u64,
    /// Season year. Derived from today's date when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    /// `espn_s2` cookie for private leagues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub espn_s2: Option<String>,
    /// `SWID` cookie for private leagues, including the braces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swid: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_domain() -> String {
    DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            league_id: 0,
            season: None,
            espn_s2: None,
            swid: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

/// Returns the fantasy season a date belongs to.
///
/// The NFL season starts in September, so dates before August still belong
/// to the previous year's season.
pub fn season_for_date(date: NaiveDate) -> i32 {
    if date.month() < espn::SEASON_START_MONTH {
        date.year() - 1
    } else {
        date.year()
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for the league id and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `FFL_API_DOMAIN` - Override API domain
    /// - `FFL_LEAGUE_ID` - Override league id
    /// - `FFL_SEASON` - Override season year
    /// - `FFL_ESPN_S2` / `FFL_SWID` - Override private league cookies
    /// - `FFL_LOG_FILE` - Override log file path
    /// - `FFL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var("FFL_LEAGUE_ID").is_ok() {
            // Filled in by the overrides below
            Config::default()
        } else {
            let league_id = prompt_for_league_id().await?;
            let config = Config {
                league_id,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides from a key lookup (the process environment in production).
    ///
    /// Unparseable numeric values are reported instead of silently ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_domain) = lookup("FFL_API_DOMAIN") {
            self.api_domain = api_domain;
        }

        if let Some(league_id) = lookup("FFL_LEAGUE_ID") {
            self.league_id = league_id.trim().parse().map_err(|_| {
                AppError::config_error(format!("FFL_LEAGUE_ID is not a number: '{league_id}'"))
            })?;
        }

        if let Some(season) = lookup("FFL_SEASON") {
            self.season = Some(season.trim().parse().map_err(|_| {
                AppError::config_error(format!("FFL_SEASON is not a year: '{season}'"))
            })?);
        }

        if let Some(espn_s2) = lookup("FFL_ESPN_S2") {
            self.espn_s2 = Some(espn_s2);
        }

        if let Some(swid) = lookup("FFL_SWID") {
            self.swid = Some(normalize_swid(&swid));
        }

        if let Some(log_file_path) = lookup("FFL_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup("FFL_HTTP_TIMEOUT") {
            self.http_timeout_seconds = timeout.trim().parse().map_err(|_| {
                AppError::config_error(format!("FFL_HTTP_TIMEOUT is not a number of seconds: '{timeout}'"))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Season to query: the configured one, or the one today falls in.
    pub fn effective_season(&self) -> i32 {
        self.season
            .unwrap_or_else(|| season_for_date(Local::now().date_naive()))
    }

    /// Returns the `Cookie` header value for private leagues, if both cookies are set.
    pub fn auth_cookie(&self) -> Option<String> {
        match (&self.espn_s2, &self.swid) {
            (Some(espn_s2), Some(swid)) => Some(format!("espn_s2={espn_s2}; SWID={swid}")),
            _ => None,
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout. Cookies are masked.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("League / Season:");
            match config.season {
                Some(season) => println!("{} / {season}", config.league_id),
                None => println!(
                    "{} / {} (from current date)",
                    config.league_id,
                    config.effective_season()
                ),
            }
            println!("────────────────────────────────────");
            println!("Private League Cookies:");
            println!("espn_s2: {}", mask_secret(config.espn_s2.as_deref()));
            println!("SWID:    {}", mask_secret(config.swid.as_deref()));
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if needed, ensures the API domain has an
    /// https:// prefix and wraps the SWID in braces.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            swid: self.swid.as_deref().map(normalize_swid),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// ESPN sends the SWID cookie wrapped in braces; users often paste it without them.
pub fn normalize_swid(swid: &str) -> String {
    let trimmed = swid.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        trimmed.to_string()
    } else {
        format!("{{{}}}", trimmed.trim_matches(|c| c == '{' || c == '}'))
    }
}

fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        None => "(not set)".to_string(),
        Some(value) => {
            let visible: String = value.chars().take(4).collect();
            format!("{visible}…")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
league_id = 336358
season = 2024
espn_s2 = "AEBxyz"
swid = "{1234-ABCD}"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.league_id, 336358);
        assert_eq!(config.season, Some(2024));
        assert_eq!(config.api_domain, DEFAULT_API_DOMAIN);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(
            config.auth_cookie().as_deref(),
            Some("espn_s2=AEBxyz; SWID={1234-ABCD}")
        );
    }

    #[tokio::test]
    async fn test_config_missing_league_id_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "season = 2024\n").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_save_normalizes_domain_and_swid() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "http://api.example.com".to_string(),
            league_id: 42,
            espn_s2: Some("AEB".to_string()),
            swid: Some("1234-ABCD".to_string()),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_domain, "https://api.example.com");
        assert_eq!(loaded.swid.as_deref(), Some("{1234-ABCD}"));
        assert_eq!(loaded.league_id, 42);
        assert_eq!(loaded.season, None);
    }

    #[tokio::test]
    async fn test_config_save_omits_unset_optionals() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config = Config {
            league_id: 7,
            ..Config::default()
        };
        config
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("league_id = 7"));
        assert!(!content.contains("espn_s2"));
        assert!(!content.contains("log_file_path"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config {
            league_id: 1,
            ..Config::default()
        };
        config
            .apply_overrides(lookup_from(&[
                ("FFL_LEAGUE_ID", "998877"),
                ("FFL_SEASON", "2023"),
                ("FFL_ESPN_S2", "AEBenv"),
                ("FFL_SWID", "ABCD"),
                ("FFL_HTTP_TIMEOUT", "5"),
            ]))
            .unwrap();

        assert_eq!(config.league_id, 998877);
        assert_eq!(config.season, Some(2023));
        assert_eq!(config.espn_s2.as_deref(), Some("AEBenv"));
        assert_eq!(config.swid.as_deref(), Some("{ABCD}"));
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.api_domain, DEFAULT_API_DOMAIN);
    }

    #[test]
    fn test_apply_overrides_rejects_bad_numbers() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("FFL_LEAGUE_ID", "abc")]));
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = config.apply_overrides(lookup_from(&[("FFL_SEASON", "next")]));
        assert!(matches!(result, Err(AppError::Config(_))));

        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("FFL_HTTP_TIMEOUT", "30s")]));
        assert!(matches!(result, Err(AppError::Config(ref msg)) if msg.contains("FFL_HTTP_TIMEOUT")));
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[test]
    #[serial]
    fn test_apply_overrides_from_process_environment() {
        unsafe {
            std::env::set_var("FFL_API_DOMAIN", "https://env.example.com");
            std::env::set_var("FFL_LOG_FILE", "/env/log/path.log");
        }

        let mut config = Config {
            league_id: 5,
            ..Config::default()
        };
        config
            .apply_overrides(|key| std::env::var(key).ok())
            .unwrap();

        unsafe {
            std::env::remove_var("FFL_API_DOMAIN");
            std::env::remove_var("FFL_LOG_FILE");
        }

        assert_eq!(config.api_domain, "https://env.example.com");
        assert_eq!(config.log_file_path.as_deref(), Some("/env/log/path.log"));
    }

    #[test]
    fn test_season_for_date() {
        let september = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
        let january = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let august = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(season_for_date(september), 2024);
        assert_eq!(season_for_date(january), 2024);
        assert_eq!(season_for_date(august), 2025);
    }

    #[test]
    fn test_effective_season_prefers_configured_value() {
        let config = Config {
            league_id: 1,
            season: Some(2019),
            ..Config::default()
        };
        assert_eq!(config.effective_season(), 2019);
    }

    #[test]
    fn test_auth_cookie_requires_both_parts() {
        let config = Config {
            espn_s2: Some("AEB".to_string()),
            ..Config::default()
        };
        assert_eq!(config.auth_cookie(), None);
    }

    #[test]
    fn test_normalize_swid_and_mask() {
        assert_eq!(normalize_swid("{ABC}"), "{ABC}");
        assert_eq!(normalize_swid(" ABC "), "{ABC}");
        assert_eq!(normalize_swid("{ABC"), "{ABC}");
        assert_eq!(mask_secret(None), "(not set)");
        assert_eq!(mask_secret(Some("AEBsecretvalue")), "AEBs…");
    }
}
