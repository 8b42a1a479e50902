//! Fantasy Football Lineup Viewer Library
//!
//! Fetches a week of an ESPN fantasy football league and shows two teams'
//! lineups side by side: slot, player, actual and projected points, and a
//! TOTAL row per team.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ffl_lineups::config::Config;
//! use ffl_lineups::data_fetcher::fetch_week_data;
//! use ffl_lineups::error::AppError;
//! use ffl_lineups::matchup::{SelectionMode, resolve};
//! use ffl_lineups::lineup::format_lineup;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let week = fetch_week_data(&config, None).await?;
//!
//!     let mode = SelectionMode::Predefined(0);
//!     if let Some(selected) = resolve(&week.matchups, &mode) {
//!         let table = format_lineup(selected.home_lineup);
//!         for row in table.rows() {
//!             println!("{:<9} {:<20} {:>7} {:>7}", row.slot, row.player, row.actual, row.projected);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod lineup;
pub mod logging;
pub mod matchup;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{Matchup, Participant, PlayerEntry, WeekData, fetch_week_data};
pub use error::AppError;
pub use lineup::{LineupRow, LineupTable, format_lineup};
pub use matchup::{SelectionMode, predefined_matchups, resolve};
pub use ui::MatchupPage;
