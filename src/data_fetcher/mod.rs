pub mod api;
pub mod models;
pub mod processors;

pub use api::{fetch_week_data, fetch_week_data_with_client};
pub use models::{Matchup, Participant, PlayerEntry, TeamLookup, TeamRecord, WeekData};
