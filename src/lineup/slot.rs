use crate::constants::lineup::BENCH_LABEL;
use std::fmt;

/// Display order of the known slots. Anything else ranks after these.
pub const SLOT_ORDER: [Slot; 8] = [
    Slot::Qb,
    Slot::Rb,
    Slot::Wr,
    Slot::Te,
    Slot::Flex,
    Slot::Dst,
    Slot::K,
    Slot::Bench,
];

/// A normalized roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    Qb,
    Rb,
    Wr,
    Te,
    Flex,
    Dst,
    K,
    Bench,
    /// Any label outside the ranked set, kept verbatim.
    Other(String),
}

impl Slot {
    /// Normalizes a source slot label: `RB/WR/TE` becomes FLEX and `BENCH` becomes BE.
    pub fn parse(label: &str) -> Self {
        match label {
            "QB" => Slot::Qb,
            "RB" => Slot::Rb,
            "WR" => Slot::Wr,
            "TE" => Slot::Te,
            "FLEX" | "RB/WR/TE" => Slot::Flex,
            "D/ST" => Slot::Dst,
            "K" => Slot::K,
            "BE" | "BENCH" => Slot::Bench,
            other => Slot::Other(other.to_string()),
        }
    }

    /// Position in [`SLOT_ORDER`]; unknown slots share the rank after the last known one.
    pub fn rank(&self) -> usize {
        SLOT_ORDER
            .iter()
            .position(|slot| slot == self)
            .unwrap_or(SLOT_ORDER.len())
    }

    pub fn label(&self) -> &str {
        match self {
            Slot::Qb => "QB",
            Slot::Rb => "RB",
            Slot::Wr => "WR",
            Slot::Te => "TE",
            Slot::Flex => "FLEX",
            Slot::Dst => "D/ST",
            Slot::K => "K",
            Slot::Bench => BENCH_LABEL,
            Slot::Other(label) => label,
        }
    }

    /// Label shown in the table. Bench rows carry the player's position, e.g. `BE (RB)`.
    pub fn display_label(&self, position: &str) -> String {
        match self {
            Slot::Bench => format!("{BENCH_LABEL} ({position})"),
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
