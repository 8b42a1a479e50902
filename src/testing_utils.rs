use crate::data_fetcher::models::{
    Matchup, Participant, PlayerEntry, TeamLookup, TeamRecord, WeekData,
};

/// Test utilities for creating lineup and matchup fixtures
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a player entry
    pub fn player(
        name: &str,
        slot: &str,
        position: &str,
        points: Option<f64>,
        projected_points: Option<f64>,
    ) -> PlayerEntry {
        PlayerEntry::new(name, slot, position, points, projected_points)
    }

    /// Creates a full starting lineup plus two bench players, in roster order
    pub fn create_sample_lineup() -> Vec<PlayerEntry> {
        vec![
            Self::player("Patrick Mahomes", "QB", "QB", Some(24.36), Some(21.0)),
            Self::player("Bijan Robinson", "RB", "RB", Some(18.2), Some(16.4)),
            Self::player("Kyren Williams", "RB", "RB", Some(11.0), Some(14.1)),
            Self::player("CeeDee Lamb", "WR", "WR", Some(9.5), Some(17.3)),
            Self::player("Puka Nacua", "WR", "WR", None, Some(15.2)),
            Self::player("Sam LaPorta", "TE", "TE", Some(6.1), Some(10.0)),
            Self::player("James Cook", "RB/WR/TE", "RB", Some(12.4), Some(11.8)),
            Self::player("Ravens D/ST", "D/ST", "D/ST", Some(7.0), Some(6.5)),
            Self::player("Justin Tucker", "K", "K", Some(9.0), Some(8.2)),
            Self::player("Tank Dell", "BE", "WR", Some(3.3), Some(9.9)),
            Self::player("Zach Ertz", "BE", "TE", None, None),
        ]
    }

    /// Creates a matchup between two teams
    pub fn create_matchup(
        home: &str,
        away: &str,
        home_lineup: Vec<PlayerEntry>,
        away_lineup: Vec<PlayerEntry>,
    ) -> Matchup {
        Matchup {
            home: Participant::Team(home.to_string()),
            away: Participant::Team(away.to_string()),
            home_lineup,
            away_lineup,
        }
    }

    /// Creates a schedule entry where the team has no opponent
    pub fn create_bye(team: &str) -> Matchup {
        Matchup {
            home: Participant::Team(team.to_string()),
            away: Participant::NoOpponent,
            home_lineup: Vec::new(),
            away_lineup: Vec::new(),
        }
    }

    /// Starts building a week of data
    pub fn week(week: u32, max_week: u32) -> WeekDataBuilder {
        WeekDataBuilder {
            week,
            max_week,
            team_names: Vec::new(),
            matchups: Vec::new(),
        }
    }
}

/// Builds `WeekData` from matchups; teams are registered in the order they appear.
pub struct WeekDataBuilder {
    week: u32,
    max_week: u32,
    team_names: Vec<String>,
    matchups: Vec<Matchup>,
}

impl WeekDataBuilder {
    fn register(&mut self, name: &str) {
        if !self.team_names.iter().any(|n| n == name) {
            self.team_names.push(name.to_string());
        }
    }

    pub fn matchup(
        mut self,
        home: &str,
        away: &str,
        home_lineup: Vec<PlayerEntry>,
        away_lineup: Vec<PlayerEntry>,
    ) -> Self {
        self.register(home);
        self.register(away);
        self.matchups.push(TestDataBuilder::create_matchup(
            home,
            away,
            home_lineup,
            away_lineup,
        ));
        self
    }

    pub fn bye(mut self, team: &str) -> Self {
        self.register(team);
        self.matchups.push(TestDataBuilder::create_bye(team));
        self
    }

    pub fn build(self) -> WeekData {
        let teams = TeamLookup::new(self.team_names.iter().enumerate().map(|(i, name)| {
            TeamRecord {
                id: i as u32 + 1,
                name: name.clone(),
                abbrev: name.chars().take(3).collect::<String>().to_uppercase(),
            }
        }));

        WeekData {
            league_name: Some("Test League".to_string()),
            season: 2024,
            week: self.week,
            max_week: self.max_week,
            teams,
            matchups: self.matchups,
        }
    }
}
