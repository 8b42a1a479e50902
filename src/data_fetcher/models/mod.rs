pub mod common;
pub mod league;
pub mod players;
pub mod schedule;

pub use common::{Matchup, Participant, PlayerEntry, TeamLookup, TeamRecord, WeekData};
pub use league::{LeagueResponse, LeagueSettings, LeagueStatus, LeagueTeam, ScheduleSettings};
pub use players::{EspnPlayer, PlayerStat};
pub use schedule::{BoxScoreResponse, PlayerPoolEntry, Roster, RosterEntry, ScheduleItem, ScheduleSide};
