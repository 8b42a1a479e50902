use ffl_lineups::lineup::{Slot, format_lineup};
use ffl_lineups::testing_utils::TestDataBuilder;

/// QB, flex and a bench receiver with one missing score
#[test]
fn test_end_to_end_example() {
    let entries = vec![
        TestDataBuilder::player("A", "QB", "QB", Some(20.5), Some(18.0)),
        TestDataBuilder::player("B", "RB/WR/TE", "RB", None, Some(9.2)),
        TestDataBuilder::player("C", "BENCH", "WR", Some(5.0), Some(4.0)),
    ];

    let table = format_lineup(&entries);
    let rows: Vec<(&str, &str, &str, &str)> = table
        .rows()
        .iter()
        .map(|r| {
            (
                r.slot.as_str(),
                r.player.as_str(),
                r.actual.as_str(),
                r.projected.as_str(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("QB", "A", "20.50", "18.00"),
            ("FLEX", "B", "0.00", "9.20"),
            ("BE (WR)", "C", "5.00", "4.00"),
            ("TOTAL", "", "25.50", "31.20"),
        ]
    );
}

/// Row count, ordering and totals over a full roster
#[test]
fn test_full_roster_properties() {
    let mut entries = TestDataBuilder::create_sample_lineup();
    // Shuffle the input so sorting has something to do
    entries.reverse();
    entries.push(TestDataBuilder::player("Injured", "IR", "RB", None, None));

    let table = format_lineup(&entries);
    assert_eq!(table.len(), entries.len() + 1);
    assert_eq!(table.total_row().slot, "TOTAL");
    assert!(table.total_row().player.is_empty());

    let ranks: Vec<usize> = table
        .player_rows()
        .iter()
        .map(|row| {
            let label = row.slot.split(' ').next().unwrap_or_default();
            Slot::parse(label).rank()
        })
        .collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(table.player_rows().last().unwrap().slot, "IR");

    let expected_actual: f64 = entries.iter().map(|e| e.points.unwrap_or(0.0)).sum();
    let expected_projected: f64 = entries
        .iter()
        .map(|e| e.projected_points.unwrap_or(0.0))
        .sum();
    assert!((table.total_actual() - expected_actual).abs() < 1e-9);
    assert!((table.total_projected() - expected_projected).abs() < 1e-9);
    assert_eq!(table.total_row().actual, format!("{expected_actual:.2}"));
}

/// Bench rows name the player's position
#[test]
fn test_bench_rows_carry_position() {
    let table = format_lineup(&TestDataBuilder::create_sample_lineup());
    let bench: Vec<&str> = table
        .player_rows()
        .iter()
        .filter(|row| row.slot.starts_with("BE"))
        .map(|row| row.slot.as_str())
        .collect();
    assert_eq!(bench, vec!["BE (WR)", "BE (TE)"]);
}

/// Rows sharing a slot keep their roster order
#[test]
fn test_same_slot_keeps_relative_order() {
    let table = format_lineup(&TestDataBuilder::create_sample_lineup());
    let rbs: Vec<&str> = table
        .player_rows()
        .iter()
        .filter(|row| row.slot == "RB")
        .map(|row| row.player.as_str())
        .collect();
    assert_eq!(rbs, vec!["Bijan Robinson", "Kyren Williams"]);
}

#[test]
fn test_two_decimal_formatting() {
    let table = format_lineup(&[TestDataBuilder::player(
        "Kicker",
        "K",
        "K",
        Some(12.3),
        Some(7.0),
    )]);
    assert_eq!(table.player_rows()[0].actual, "12.30");
    assert_eq!(table.player_rows()[0].projected, "7.00");
}

#[test]
fn test_empty_lineup() {
    let table = format_lineup(&[]);
    assert_eq!(table.len(), 1);
    let total = table.total_row();
    assert_eq!(
        (total.slot.as_str(), total.player.as_str(), total.actual.as_str(), total.projected.as_str()),
        ("TOTAL", "", "0.00", "0.00")
    );
}
