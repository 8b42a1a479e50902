//! Selection state for the interactive viewer.
//!
//! Holds what the user is looking at (week, mode, matchup and team cursors)
//! and turns key actions into the next step of the loop.

use super::input_handler::Action;
use crate::data_fetcher::models::WeekData;
use crate::matchup::{SelectionMode, predefined_matchups};
use tracing::debug;

/// What the loop must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Selection changed; re-run selection and formatting on the fetched week.
    Render,
    /// Week changed or refresh requested; run a new fetch cycle.
    Refetch,
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Requested week; `None` means the league's current week.
    week: Option<u32>,
    /// Latest selectable week, known after the first successful fetch.
    max_week: Option<u32>,
    custom: bool,
    /// Whether the team cursors hold a custom pairing yet.
    custom_seeded: bool,
    matchup_index: usize,
    home_index: usize,
    away_index: usize,
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

impl ViewState {
    pub fn new(week: Option<u32>) -> Self {
        Self {
            week,
            ..Self::default()
        }
    }

    /// Starts from a selection already resolved against a fetched week.
    pub fn from_selection(mode: &SelectionMode, data: &WeekData) -> Self {
        let mut state = Self::new(Some(data.week));
        state.max_week = Some(data.max_week);
        match mode {
            SelectionMode::Predefined(index) => state.matchup_index = *index,
            SelectionMode::Custom { home, away } => {
                let names = data.teams.sorted_names();
                state.custom = true;
                state.custom_seeded = true;
                state.home_index = names.iter().position(|n| n == home).unwrap_or(0);
                state.away_index = names.iter().position(|n| n == away).unwrap_or(0);
            }
        }
        state
    }

    pub fn week(&self) -> Option<u32> {
        self.week
    }

    pub fn max_week(&self) -> Option<u32> {
        self.max_week
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    /// First custom page pairs the first two sorted teams.
    fn seed_custom_cursors(&mut self, team_count: usize) {
        if self.custom_seeded || team_count == 0 {
            return;
        }
        self.home_index = 0;
        self.away_index = usize::from(team_count >= 2);
        self.custom_seeded = true;
    }

    /// Records a completed fetch and keeps cursors inside the new week's lists.
    pub fn on_week_loaded(&mut self, data: &WeekData) {
        self.week = Some(data.week);
        self.max_week = Some(data.max_week);

        let matchup_count = predefined_matchups(&data.matchups).len();
        if self.matchup_index >= matchup_count {
            self.matchup_index = 0;
        }
        let team_count = data.teams.len();
        if self.home_index >= team_count {
            self.home_index = 0;
        }
        if self.away_index >= team_count {
            self.away_index = 0;
        }
        if self.custom {
            self.seed_custom_cursors(team_count);
        }
    }

    /// The selection to display for a fetched week.
    pub fn selection(&self, data: &WeekData) -> SelectionMode {
        let names = data.teams.sorted_names();
        if self.custom && !names.is_empty() {
            SelectionMode::Custom {
                home: names[self.home_index % names.len()].to_string(),
                away: names[self.away_index % names.len()].to_string(),
            }
        } else {
            SelectionMode::Predefined(self.matchup_index)
        }
    }

    fn change_week(&mut self, forward: bool) -> Effect {
        let (Some(week), Some(max_week)) = (self.week, self.max_week) else {
            return Effect::None;
        };
        let next = if forward {
            (week < max_week).then_some(week + 1)
        } else {
            (week > 1).then(|| week - 1)
        };
        match next {
            Some(next) => {
                debug!("Week navigation: {week} -> {next}");
                self.week = Some(next);
                Effect::Refetch
            }
            None => Effect::None,
        }
    }

    /// Applies a key action. `data` is the currently fetched week, if any.
    pub fn apply(&mut self, action: Action, data: Option<&WeekData>) -> Effect {
        match action {
            Action::Quit => Effect::Quit,
            Action::Refresh => Effect::Refetch,
            Action::PreviousWeek => self.change_week(false),
            Action::NextWeek => self.change_week(true),
            Action::ToggleMode => {
                self.custom = !self.custom;
                if self.custom
                    && let Some(data) = data
                {
                    self.seed_custom_cursors(data.teams.len());
                }
                Effect::Render
            }
            Action::Previous | Action::Next | Action::PreviousAway | Action::NextAway => {
                let Some(data) = data else {
                    return Effect::None;
                };
                let forward = matches!(action, Action::Next | Action::NextAway);
                let team_count = data.teams.len();

                match (self.custom, action) {
                    (false, Action::Previous | Action::Next) => {
                        let count = predefined_matchups(&data.matchups).len();
                        if count < 2 {
                            return Effect::None;
                        }
                        self.matchup_index = step(self.matchup_index, count, forward);
                    }
                    (true, Action::Previous | Action::Next) if team_count > 0 => {
                        self.home_index = step(self.home_index, team_count, forward);
                    }
                    (true, Action::PreviousAway | Action::NextAway) if team_count > 0 => {
                        self.away_index = step(self.away_index, team_count, forward);
                    }
                    _ => return Effect::None,
                }
                Effect::Render
            }
            Action::Ignored => Effect::None,
        }
    }
}
