//! Fixed-width text rendering of lineup tables.
//!
//! Widths are measured in terminal columns, so player names with wide or
//! combining characters still line up.

use crate::constants::ui::{PLAYER_WIDTH, POINTS_WIDTH, SLOT_WIDTH};
use crate::lineup::{LineupRow, LineupTable};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What a rendered table line is, so the page can color it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    TeamName,
    ColumnHeader,
    Player,
    Total,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLine {
    pub kind: LineKind,
    pub text: String,
}

impl TableLine {
    fn new(kind: LineKind, text: String) -> Self {
        Self { kind, text }
    }

    pub fn blank() -> Self {
        Self::new(LineKind::Blank, " ".repeat(table_width()))
    }
}

/// Width of one rendered table in terminal columns.
pub fn table_width() -> usize {
    SLOT_WIDTH + 1 + PLAYER_WIDTH + 1 + POINTS_WIDTH + 1 + POINTS_WIDTH
}

/// Truncates `text` to at most `width` columns, marking a cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

/// Left-aligns `text` in exactly `width` columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{fitted}{}", " ".repeat(padding))
}

/// Right-aligns `text` in exactly `width` columns.
pub fn pad_left(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{}{fitted}", " ".repeat(padding))
}

fn format_row(slot: &str, player: &str, actual: &str, projected: &str) -> String {
    format!(
        "{} {} {} {}",
        pad_right(slot, SLOT_WIDTH),
        pad_right(player, PLAYER_WIDTH),
        pad_left(actual, POINTS_WIDTH),
        pad_left(projected, POINTS_WIDTH)
    )
}

fn row_line(kind: LineKind, row: &LineupRow) -> TableLine {
    TableLine::new(
        kind,
        format_row(&row.slot, &row.player, &row.actual, &row.projected),
    )
}

/// Renders a team's table: name line, column headers, players and TOTAL.
pub fn render_table(team_name: &str, table: &LineupTable) -> Vec<TableLine> {
    let mut lines = Vec::with_capacity(table.len() + 2);
    lines.push(TableLine::new(
        LineKind::TeamName,
        pad_right(team_name, table_width()),
    ));
    lines.push(TableLine::new(
        LineKind::ColumnHeader,
        format_row("SLOT", "PLAYER", "ACT", "PROJ"),
    ));
    lines.extend(
        table
            .player_rows()
            .iter()
            .map(|row| row_line(LineKind::Player, row)),
    );
    lines.push(row_line(LineKind::Total, table.total_row()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::PlayerEntry;
    use crate::lineup::format_lineup;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Short", 10), "Short");
        assert_eq!(truncate_to_width("Christian McCaffrey", 10), "Christian…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide characters take two columns each
        assert_eq!(truncate_to_width("日本語チーム", 5), "日本…");
    }

    #[test]
    fn test_padding_uses_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("1.00", 7), "   1.00");
        assert_eq!(pad_right("日本", 6).width(), 6);
        assert_eq!(pad_right("Amon-Ra St. Brown Jr.", 8).width(), 8);
    }

    #[test]
    fn test_render_table_layout() {
        let entries = vec![
            PlayerEntry::new("Josh Allen", "QB", "QB", Some(20.5), Some(18.0)),
            PlayerEntry::new("Bench Guy", "BE", "D/ST", None, None),
        ];
        let lines = render_table("Foo Fighters", &format_lineup(&entries));

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].kind, LineKind::TeamName);
        assert_eq!(lines[1].kind, LineKind::ColumnHeader);
        assert!(lines[1].text.starts_with("SLOT"));
        assert!(lines[2].text.starts_with("QB        Josh Allen"));
        assert!(lines[2].text.ends_with("  20.50   18.00"));
        assert!(lines[3].text.starts_with("BE (D/ST) Bench Guy"));
        assert_eq!(lines[4].kind, LineKind::Total);
        assert!(lines[4].text.starts_with("TOTAL"));
        assert!(lines[4].text.ends_with("  20.50   18.00"));
        assert!(lines.iter().all(|line| line.text.width() == table_width()));
    }

    #[test]
    fn test_render_empty_table() {
        let lines = render_table("Bye Team", &format_lineup(&[]));
        assert_eq!(lines.len(), 3);
        assert!(lines[2].text.ends_with("   0.00    0.00"));
    }
}
