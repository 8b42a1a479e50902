use super::slot::Slot;
use crate::constants::lineup::TOTAL_LABEL;
use crate::data_fetcher::models::PlayerEntry;

/// One display row. Numeric cells are already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupRow {
    pub slot: String,
    pub player: String,
    pub actual: String,
    pub projected: String,
}

/// Sorted lineup rows followed by the TOTAL row.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupTable {
    rows: Vec<LineupRow>,
    total_actual: f64,
    total_projected: f64,
}

impl LineupTable {
    /// All rows, the TOTAL row last.
    pub fn rows(&self) -> &[LineupRow] {
        &self.rows
    }

    /// Rows without the trailing TOTAL row.
    pub fn player_rows(&self) -> &[LineupRow] {
        &self.rows[..self.rows.len() - 1]
    }

    pub fn total_row(&self) -> &LineupRow {
        &self.rows[self.rows.len() - 1]
    }

    /// Unrounded sum of actual points.
    pub fn total_actual(&self) -> f64 {
        self.total_actual
    }

    /// Unrounded sum of projected points.
    pub fn total_projected(&self) -> f64 {
        self.total_projected
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A table always has its TOTAL row, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats points with exactly two decimals.
pub fn format_points(points: f64) -> String {
    format!("{points:.2}")
}

/// Builds the display table for a lineup.
///
/// Rows are stably sorted by normalized slot rank, missing scores count as
/// zero and the TOTAL row sums the unrounded values.
pub fn format_lineup(entries: &[PlayerEntry]) -> LineupTable {
    let mut ranked: Vec<(usize, LineupRow, f64, f64)> = entries
        .iter()
        .map(|entry| {
            let slot = Slot::parse(&entry.slot);
            let actual = entry.points.unwrap_or(0.0);
            let projected = entry.projected_points.unwrap_or(0.0);
            let row = LineupRow {
                slot: slot.display_label(&entry.position),
                player: entry.name.clone(),
                actual: format_points(actual),
                projected: format_points(projected),
            };
            (slot.rank(), row, actual, projected)
        })
        .collect();

    // sort_by_key is stable: equal ranks keep input order
    ranked.sort_by_key(|(rank, ..)| *rank);

    let total_actual: f64 = ranked.iter().map(|(_, _, actual, _)| actual).sum();
    let total_projected: f64 = ranked.iter().map(|(_, _, _, projected)| projected).sum();

    let mut rows: Vec<LineupRow> = ranked.into_iter().map(|(_, row, ..)| row).collect();
    rows.push(LineupRow {
        slot: TOTAL_LABEL.to_string(),
        player: String::new(),
        actual: format_points(total_actual),
        projected: format_points(total_projected),
    });

    LineupTable {
        rows,
        total_actual,
        total_projected,
    }
}
