use std::collections::BTreeMap;

/// One player's assignment within a team's lineup for a week.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntry {
    pub name: String,
    /// Roster slot label as the source reports it (e.g. `RB/WR/TE`, `BE`).
    pub slot: String,
    /// The player's real position, used to tell bench rows apart.
    pub position: String,
    pub points: Option<f64>,
    pub projected_points: Option<f64>,
}

impl PlayerEntry {
    pub fn new(
        name: impl Into<String>,
        slot: impl Into<String>,
        position: impl Into<String>,
        points: Option<f64>,
        projected_points: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            slot: slot.into(),
            position: position.into(),
            points,
            projected_points,
        }
    }
}

/// A matchup participant, resolved once at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Participant {
    Team(String),
    NoOpponent,
}

impl Participant {
    pub fn name(&self) -> Option<&str> {
        match self {
            Participant::Team(name) => Some(name),
            Participant::NoOpponent => None,
        }
    }

    pub fn is_team(&self, team_name: &str) -> bool {
        self.name() == Some(team_name)
    }
}

/// Two participants and their lineups for one week.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub home: Participant,
    pub away: Participant,
    pub home_lineup: Vec<PlayerEntry>,
    pub away_lineup: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: u32,
    pub name: String,
    pub abbrev: String,
}

/// Team id → team lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLookup {
    teams: BTreeMap<u32, TeamRecord>,
}

impl TeamLookup {
    pub fn new(records: impl IntoIterator<Item = TeamRecord>) -> Self {
        Self {
            teams: records.into_iter().map(|team| (team.id, team)).collect(),
        }
    }

    pub fn name(&self, team_id: u32) -> Option<&str> {
        self.teams.get(&team_id).map(|team| team.name.as_str())
    }

    pub fn get(&self, team_id: u32) -> Option<&TeamRecord> {
        self.teams.get(&team_id)
    }

    /// All teams ordered by name.
    pub fn sorted_records(&self) -> Vec<&TeamRecord> {
        let mut records: Vec<&TeamRecord> = self.teams.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    /// All team names in alphabetical order, as offered for custom pairing.
    pub fn sorted_names(&self) -> Vec<&str> {
        self.sorted_records()
            .into_iter()
            .map(|team| team.name.as_str())
            .collect()
    }

    /// Finds the canonical team name for user input, ignoring case and surrounding spaces.
    pub fn find_name(&self, input: &str) -> Option<&str> {
        let wanted = input.trim();
        self.teams
            .values()
            .find(|team| team.name.eq_ignore_ascii_case(wanted))
            .or_else(|| {
                self.teams
                    .values()
                    .find(|team| !team.abbrev.is_empty() && team.abbrev.eq_ignore_ascii_case(wanted))
            })
            .map(|team| team.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Everything one fetch cycle produces for a week.
#[derive(Debug, Clone)]
pub struct WeekData {
    pub league_name: Option<String>,
    pub season: i32,
    pub week: u32,
    /// Latest selectable week (the league's current week).
    pub max_week: u32,
    pub teams: TeamLookup,
    pub matchups: Vec<Matchup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> TeamLookup {
        TeamLookup::new([
            TeamRecord {
                id: 2,
                name: "Zebra Zone".to_string(),
                abbrev: "ZZ".to_string(),
            },
            TeamRecord {
                id: 1,
                name: "Alpha Dogs".to_string(),
                abbrev: "AD".to_string(),
            },
        ])
    }

    #[test]
    fn test_participant_name() {
        assert_eq!(Participant::Team("Foo".to_string()).name(), Some("Foo"));
        assert_eq!(Participant::NoOpponent.name(), None);
        assert!(Participant::Team("Foo".to_string()).is_team("Foo"));
        assert!(!Participant::NoOpponent.is_team(""));
    }

    #[test]
    fn test_team_lookup() {
        let teams = lookup();
        assert_eq!(teams.name(1), Some("Alpha Dogs"));
        assert_eq!(teams.name(0), None);
        assert_eq!(teams.sorted_names(), vec!["Alpha Dogs", "Zebra Zone"]);
        assert_eq!(teams.len(), 2);
    }

    #[test]
    fn test_find_name_matches_case_and_abbrev() {
        let teams = lookup();
        assert_eq!(teams.find_name("alpha dogs"), Some("Alpha Dogs"));
        assert_eq!(teams.find_name(" zz "), Some("Zebra Zone"));
        assert_eq!(teams.find_name("Gamma"), None);
    }
}
