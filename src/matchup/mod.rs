//! Matchup selection: predefined pairings for a week, or a custom pairing of any two teams.

pub mod selector;

pub use selector::{
    PredefinedMatchup, ResolvedMatchup, SelectionMode, find_team_matchup, lineup_for_team,
    predefined_matchups, resolve,
};
