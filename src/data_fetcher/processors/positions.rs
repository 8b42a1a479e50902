//! ESPN numeric id → label tables.

/// Maps an ESPN `lineupSlotId` to its slot label.
///
/// Unknown ids come back as the id itself so the lineup still renders
/// (unrecognized slots sort last).
pub fn lineup_slot_label(slot_id: u32) -> String {
    let label = match slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        20 => "BE",
        21 => "IR",
        23 => "RB/WR/TE",
        24 => "ER",
        25 => "Rookie",
        other => return other.to_string(),
    };
    label.to_string()
}

/// Maps an ESPN `defaultPositionId` to the player's real position.
pub fn pro_position_label(position_id: u32) -> String {
    let label = match position_id {
        1 => "QB",
        2 => "RB",
        3 => "WR",
        4 => "TE",
        5 => "K",
        7 => "P",
        9 => "DT",
        10 => "DE",
        11 => "LB",
        12 => "CB",
        13 => "S",
        14 => "HC",
        16 => "D/ST",
        _ => "?",
    };
    label.to_string()
}
