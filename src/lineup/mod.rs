//! Lineup formatting: turns a team's weekly player entries into a display table.

pub mod formatter;
pub mod slot;

pub use formatter::{LineupRow, LineupTable, format_lineup, format_points};
pub use slot::{SLOT_ORDER, Slot};
