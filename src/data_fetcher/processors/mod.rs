pub mod box_scores;
pub mod positions;

pub use box_scores::{
    current_week, matchup_period_for_week, process_box_scores, process_roster, resolve_participant, team_lookup_from,
};
pub use positions::{lineup_slot_label, pro_position_label};
