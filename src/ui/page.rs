// src/ui/page.rs - The matchup page: header, heading, two lineup tables and footer

use super::colors::*;
use super::table::{LineKind, TableLine, render_table, table_width};
use crate::constants::ui::{COLUMN_GAP, CONTENT_MARGIN};
use crate::data_fetcher::models::WeekData;
use crate::error::AppError;
use crate::lineup::format_lineup;
use crate::matchup::{SelectionMode, predefined_matchups, resolve};
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};

const TITLE: &str = "FFL LINEUPS";
const TITLE_WIDTH: usize = 20;

/// Visual role of a piece of page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Title,
    HeaderBar,
    Subheader,
    Heading,
    TeamName,
    ColumnHeader,
    Text,
    Total,
    Error,
    Footer,
    Plain,
}

impl Style {
    fn ansi_prefix(self) -> Option<String> {
        let fg = |color| format!("\x1b[38;5;{}m", get_ansi_code(color, 231));
        match self {
            Style::Title => Some(format!(
                "\x1b[48;5;{}m\x1b[38;5;{}m",
                get_ansi_code(title_bg(), 46),
                get_ansi_code(header_fg(), 21)
            )),
            Style::HeaderBar | Style::Footer => Some(format!(
                "\x1b[48;5;{}m\x1b[38;5;231m",
                get_ansi_code(header_bg(), 21)
            )),
            Style::Subheader => Some(fg(subheader_fg())),
            Style::Heading | Style::TeamName => Some(fg(heading_fg())),
            Style::ColumnHeader => Some(fg(column_header_fg())),
            Style::Text => Some(fg(text_fg())),
            Style::Total => Some(fg(total_fg())),
            Style::Error => Some(fg(error_fg())),
            Style::Plain => None,
        }
    }
}

impl From<LineKind> for Style {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::TeamName => Style::TeamName,
            LineKind::ColumnHeader => Style::ColumnHeader,
            LineKind::Player => Style::Text,
            LineKind::Total => Style::Total,
            LineKind::Blank => Style::Plain,
        }
    }
}

/// One screen line made of styled segments.
pub type PageLine = Vec<(Style, String)>;

#[derive(Debug, Clone, PartialEq)]
enum PageBody {
    Lineups {
        home: Vec<TableLine>,
        away: Vec<TableLine>,
    },
    Message(String),
    Error(Vec<String>),
}

/// A renderable page for one state of the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupPage {
    header_text: String,
    subheader: String,
    subheader_right: String,
    heading: Option<String>,
    body: PageBody,
    footer: Option<String>,
}

/// Minimum width that fits both tables next to each other.
pub fn two_column_width() -> usize {
    CONTENT_MARGIN * 2 + table_width() * 2 + COLUMN_GAP
}

/// Key hints for the interactive footer.
pub fn footer_hints(custom_mode: bool, has_error: bool) -> &'static str {
    match (has_error, custom_mode) {
        (true, _) => "q=Quit r=Retry Shift+←→=Week m=Mode",
        (false, true) => "q=Quit ←→=Home ↑↓=Away Shift+←→=Week m=Mode r=Refresh",
        (false, false) => "q=Quit ←→=Matchup Shift+←→=Week m=Mode r=Refresh",
    }
}

fn week_label(week: Option<u32>, max_week: Option<u32>) -> String {
    match (week, max_week) {
        (Some(week), Some(max)) => format!("WEEK {week}/{max}"),
        (Some(week), None) => format!("WEEK {week}"),
        _ => "WEEK -".to_string(),
    }
}

impl MatchupPage {
    /// Builds the page for a selection within a fetched week.
    ///
    /// A predefined index without a matchup gives a message page rather than an error.
    pub fn for_week(data: &WeekData, mode: &SelectionMode) -> Self {
        let predefined_count = predefined_matchups(&data.matchups).len();
        let subheader = match mode {
            SelectionMode::Predefined(index) if predefined_count > 0 => {
                format!("MATCHUP {}/{}", index + 1, predefined_count)
            }
            SelectionMode::Predefined(_) => "MATCHUPS".to_string(),
            SelectionMode::Custom { .. } => "CUSTOM PAIRING".to_string(),
        };
        let subheader_right = match &data.league_name {
            Some(name) => format!("{name} {}", data.season),
            None => data.season.to_string(),
        };

        let (heading, body) = match resolve(&data.matchups, mode) {
            Some(selected) => (
                Some(format!("{} vs {}", selected.home_name, selected.away_name)),
                PageBody::Lineups {
                    home: render_table(selected.home_name, &format_lineup(selected.home_lineup)),
                    away: render_table(selected.away_name, &format_lineup(selected.away_lineup)),
                },
            ),
            None if predefined_count == 0 => (
                None,
                PageBody::Message(format!("No matchups scheduled for week {}", data.week)),
            ),
            None => (
                None,
                PageBody::Message(format!("Matchup not found for week {}", data.week)),
            ),
        };

        Self {
            header_text: week_label(Some(data.week), Some(data.max_week)),
            subheader,
            subheader_right,
            heading,
            body,
            footer: None,
        }
    }

    /// Page shown while a fetch cycle runs.
    pub fn loading(week: Option<u32>, max_week: Option<u32>) -> Self {
        Self {
            header_text: week_label(week, max_week),
            subheader: "LOADING".to_string(),
            subheader_right: String::new(),
            heading: None,
            body: PageBody::Message("Fetching league data...".to_string()),
            footer: None,
        }
    }

    /// Page shown when a fetch cycle fails.
    pub fn error(error: &AppError, week: Option<u32>, max_week: Option<u32>) -> Self {
        let mut lines = vec!["Could not load lineups:".to_string(), error.to_string()];
        if matches!(error, AppError::ApiUnauthorized { .. }) {
            lines.push("Private leagues need espn_s2 and swid, see --set-espn-s2 and --set-swid".to_string());
        }
        Self {
            header_text: week_label(week, max_week),
            subheader: "ERROR".to_string(),
            subheader_right: String::new(),
            heading: None,
            body: PageBody::Error(lines),
            footer: None,
        }
    }

    pub fn with_footer(mut self, hints: impl Into<String>) -> Self {
        self.footer = Some(hints.into());
        self
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, PageBody::Error(_))
    }

    fn margin() -> (Style, String) {
        (Style::Plain, " ".repeat(CONTENT_MARGIN))
    }

    /// Lays the page out for a terminal `width` columns wide, footer excluded.
    pub fn layout(&self, width: usize) -> Vec<PageLine> {
        let right_width = width.saturating_sub(TITLE_WIDTH);
        let mut lines: Vec<PageLine> = vec![
            vec![
                (Style::Title, format!("{:<width$}", TITLE, width = TITLE_WIDTH)),
                (Style::HeaderBar, format!("{:>right_width$}", self.header_text)),
            ],
            vec![
                (Style::Subheader, format!("{:<width$}", self.subheader, width = TITLE_WIDTH)),
                (Style::Subheader, format!("{:>right_width$}", self.subheader_right)),
            ],
            Vec::new(),
        ];

        if let Some(heading) = &self.heading {
            lines.push(vec![Self::margin(), (Style::Heading, heading.clone())]);
            lines.push(Vec::new());
        }

        match &self.body {
            PageBody::Lineups { home, away } if width >= two_column_width() => {
                let rows = home.len().max(away.len());
                for i in 0..rows {
                    let left = home.get(i).cloned().unwrap_or_else(TableLine::blank);
                    let right = away.get(i).cloned().unwrap_or_else(TableLine::blank);
                    lines.push(vec![
                        Self::margin(),
                        (left.kind.into(), left.text),
                        (Style::Plain, " ".repeat(COLUMN_GAP)),
                        (right.kind.into(), right.text),
                    ]);
                }
            }
            PageBody::Lineups { home, away } => {
                for line in home {
                    lines.push(vec![Self::margin(), (line.kind.into(), line.text.clone())]);
                }
                lines.push(Vec::new());
                for line in away {
                    lines.push(vec![Self::margin(), (line.kind.into(), line.text.clone())]);
                }
            }
            PageBody::Message(message) => {
                lines.push(vec![Self::margin(), (Style::Text, message.clone())]);
            }
            PageBody::Error(messages) => {
                for message in messages {
                    lines.push(vec![Self::margin(), (Style::Error, message.clone())]);
                }
            }
        }

        lines
    }

    fn footer_line(&self, width: usize) -> Option<PageLine> {
        self.footer
            .as_ref()
            .map(|hints| vec![(Style::Footer, format!("{hints:^width$}"))])
    }

    /// Plain text rendering without escape codes. Trailing spaces are trimmed.
    pub fn to_plain_string(&self, width: usize) -> String {
        let mut out = String::new();
        for line in self.layout(width).iter().chain(self.footer_line(width).iter()) {
            let text: String = line.iter().map(|(_, text)| text.as_str()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }

    /// Colored rendering for sequential output (once mode).
    pub fn to_colored_string(&self, width: usize) -> String {
        let mut out = String::new();
        for line in self.layout(width).iter().chain(self.footer_line(width).iter()) {
            push_styled(&mut out, line);
            out.push('\n');
        }
        out
    }

    /// Renders the page to the terminal in one write, footer pinned to the last row.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        execute!(stdout, crossterm::cursor::Hide)?;
        let (width, height) = crossterm::terminal::size()?;
        let (width, height) = (width as usize, height as usize);

        let mut buffer = String::with_capacity(width * height * 2);
        buffer.push_str("\x1b[H"); // Move to home position
        buffer.push_str("\x1b[0J"); // Clear from cursor down

        let body = self.layout(width);
        let footer_row = height.max(body.len() + 2);
        for (index, line) in body.iter().enumerate() {
            buffer.push_str(&format!("\x1b[{};1H", index + 1));
            push_styled(&mut buffer, line);
        }
        if let Some(footer) = self.footer_line(width) {
            buffer.push_str(&format!("\x1b[{footer_row};1H"));
            push_styled(&mut buffer, &footer);
        }

        execute!(stdout, Print(buffer))?;
        execute!(stdout, crossterm::cursor::Show)?;
        stdout.flush()?;
        Ok(())
    }
}

fn push_styled(buffer: &mut String, line: &PageLine) {
    for (style, text) in line {
        match style.ansi_prefix() {
            Some(prefix) => {
                buffer.push_str(&prefix);
                buffer.push_str(text);
                buffer.push_str("\x1b[0m");
            }
            None => buffer.push_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ui::NONINTERACTIVE_WIDTH;
    use crate::testing_utils::TestDataBuilder;

    fn week_data() -> WeekData {
        TestDataBuilder::week(3, 14)
            .matchup(
                "Foo",
                "Bar",
                vec![TestDataBuilder::player("Josh Allen", "QB", "QB", Some(20.5), Some(18.0))],
                vec![TestDataBuilder::player("Jalen Hurts", "QB", "QB", Some(14.0), Some(19.1))],
            )
            .bye("Baz")
            .build()
    }

    #[test]
    fn test_predefined_page_side_by_side() {
        let data = week_data();
        let page = MatchupPage::for_week(&data, &SelectionMode::Predefined(0));
        assert_eq!(page.heading(), Some("Foo vs Bar"));

        let text = page.to_plain_string(NONINTERACTIVE_WIDTH as usize);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("FFL LINEUPS"));
        assert!(lines[0].ends_with("WEEK 3/14"));
        assert!(lines[1].starts_with("MATCHUP 1/1"));
        assert!(lines[1].ends_with("Test League 2024"));
        assert_eq!(lines[3].trim(), "Foo vs Bar");

        let qb_line = lines.iter().find(|l| l.contains("Josh Allen")).unwrap();
        assert!(qb_line.contains("Jalen Hurts"));
        let total_line = lines.iter().find(|l| l.trim_start().starts_with("TOTAL")).unwrap();
        assert!(total_line.contains("20.50"));
        assert!(total_line.contains("19.10"));
    }

    #[test]
    fn test_narrow_terminal_stacks_tables() {
        let data = week_data();
        let page = MatchupPage::for_week(&data, &SelectionMode::Predefined(0));
        let text = page.to_plain_string(60);

        let josh = text.lines().position(|l| l.contains("Josh Allen")).unwrap();
        let jalen = text.lines().position(|l| l.contains("Jalen Hurts")).unwrap();
        assert!(jalen > josh);
        assert!(!text.lines().any(|l| l.contains("Josh Allen") && l.contains("Jalen Hurts")));
    }

    #[test]
    fn test_custom_page_with_bye_team() {
        let data = week_data();
        let mode = SelectionMode::Custom {
            home: "Foo".to_string(),
            away: "Baz".to_string(),
        };
        let page = MatchupPage::for_week(&data, &mode);
        let text = page.to_plain_string(60);

        assert!(text.contains("CUSTOM PAIRING"));
        assert_eq!(page.heading(), Some("Foo vs Baz"));
        let totals: Vec<&str> = text
            .lines()
            .filter(|l| l.trim_start().starts_with("TOTAL"))
            .collect();
        assert_eq!(totals.len(), 2);
        assert!(totals[1].ends_with("0.00    0.00"));
    }

    #[test]
    fn test_week_without_matchups_shows_message() {
        let data = TestDataBuilder::week(1, 1).bye("Solo").build();
        let page = MatchupPage::for_week(&data, &SelectionMode::Predefined(0));
        assert!(page.heading().is_none());
        assert!(page.to_plain_string(80).contains("No matchups scheduled for week 1"));
    }

    #[test]
    fn test_error_page_and_footer() {
        let error = AppError::api_unauthorized(401, "https://x.test/leagues/1");
        let page = MatchupPage::error(&error, Some(2), Some(5)).with_footer(footer_hints(false, true));
        assert!(page.is_error());

        let text = page.to_plain_string(80);
        assert!(text.contains("Could not load lineups:"));
        assert!(text.contains("espn_s2"));
        assert!(text.lines().last().unwrap().contains("r=Retry"));
    }

    #[test]
    fn test_colored_output_highlights_total() {
        let data = week_data();
        let page = MatchupPage::for_week(&data, &SelectionMode::Predefined(0));
        let colored = page.to_colored_string(NONINTERACTIVE_WIDTH as usize);
        assert!(colored.contains("\x1b[38;5;226mTOTAL"));
        assert!(colored.contains("\x1b[0m"));
        assert!(!page.to_plain_string(100).contains('\x1b'));
    }

    #[test]
    fn test_two_column_width_fits_noninteractive_width() {
        assert!(two_column_width() <= NONINTERACTIVE_WIDTH as usize);
    }
}
