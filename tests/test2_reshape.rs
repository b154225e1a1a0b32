use rusty_pong::model::{MatchResult, SET_SLOTS, sheet_header};
use rusty_pong::score::{count_sets_won, reshape_rows};
use rusty_pong::storage::SheetRows;

mod common;

fn sheet_of(rows: Vec<Vec<String>>) -> SheetRows {
    SheetRows {
        header: sheet_header(),
        rows,
    }
}

#[test]
fn pairs_consecutive_rows_into_matches() {
    let out = reshape_rows(&sheet_of(common::sample_rows()));
    assert_eq!(out.matches.len(), 4);

    let first = &out.matches[0];
    assert_eq!(first.number, 1);
    assert_eq!(first.date.to_string(), "2024-03-01");
    assert_eq!(first.court_label(), "Garage");
    assert_eq!(first.row_span, (2, 3));
    assert_eq!(first.remarks(), "revanche");

    // The second line inherits date and court from the first.
    assert_eq!(first.lines[1].date, first.date);
    assert_eq!(first.lines[1].court.as_deref(), Some("Garage"));

    assert_eq!(out.matches[1].row_span, (4, 5));
    assert_eq!(out.matches[3].number, 4);
}

#[test]
fn sets_won_follows_elementwise_comparison() {
    // A=[11,5,11,11], B=[5,11,6,6]: A wins sets 1, 3, 4.
    let out = reshape_rows(&sheet_of(common::sample_rows()));
    let m = &out.matches[0];
    assert_eq!(m.lines[0].sets_won, 3);
    assert_eq!(m.lines[1].sets_won, 1);
    assert_eq!(m.lines[0].result, MatchResult::Win);
    assert_eq!(m.lines[1].result, MatchResult::Loss);
    assert!(!m.tied);

    for m in &out.matches {
        let total: u32 = m.lines.iter().map(|l| l.sets_won).sum();
        assert!(total as usize <= SET_SLOTS);
    }
}

#[test]
fn tied_set_counts_mark_both_lines_as_losses() {
    // [11,9,11,7,0] vs [9,11,9,11,0] is 2-2 over four real sets.
    let (a, b) = count_sets_won(&[11, 9, 11, 7, 0], &[9, 11, 9, 11, 0]);
    assert_eq!((a, b), (2, 2));

    let out = reshape_rows(&sheet_of(common::sample_rows()));
    let tie = &out.matches[3];
    assert!(tie.tied);
    assert_eq!(tie.lines[0].result, MatchResult::Loss);
    assert_eq!(tie.lines[1].result, MatchResult::Loss);
    assert!(
        out.warnings.iter().any(|w| w.contains("tied set counts")),
        "expected a tie warning, got {:?}",
        out.warnings
    );
}

#[test]
fn unpaired_trailing_row_gets_a_placeholder_opponent() {
    let mut rows = common::sample_rows();
    rows.push(common::row(
        "2025-02-01",
        "Garage",
        "Antoine",
        ["11", "11", "11", "", ""],
        "3",
        "",
    ));
    let out = reshape_rows(&sheet_of(rows));

    assert_eq!(out.matches.len(), 5);
    let last = &out.matches[4];
    assert_eq!(last.lines[1].player, "");
    assert_eq!(last.lines[1].set_scores, vec![0; SET_SLOTS]);
    assert_eq!(last.lines[0].result, MatchResult::Win);
    // Both indices point at the only physical row.
    assert_eq!(last.row_span, (10, 10));
    assert!(out.warnings.iter().any(|w| w.contains("no paired opponent")));
}

#[test]
fn malformed_cells_coerce_without_dropping_rows() {
    let rows = vec![
        common::row(
            "2024-06-01",
            "Garage",
            "Antoine",
            ["11", "abc", "-3", "", ""],
            "1",
            "",
        ),
        common::row("", "", "Clément", ["5", "11", "11", "", ""], "2", ""),
    ];
    let out = reshape_rows(&sheet_of(rows));

    assert_eq!(out.matches.len(), 1);
    let m = &out.matches[0];
    // "abc" and "-3" both coerce to 0.
    assert_eq!(m.lines[0].set_scores, vec![11, 0, 0, 0, 0]);
    assert_eq!(m.lines[0].sets_won, 1);
    assert_eq!(m.lines[1].sets_won, 2);
    let coercions = out
        .warnings
        .iter()
        .filter(|w| w.contains("coerced to 0"))
        .count();
    assert_eq!(coercions, 2);
}

#[test]
fn stored_total_divergence_is_flagged_not_overwritten() {
    let rows = vec![
        common::row(
            "2024-06-01",
            "Garage",
            "Antoine",
            ["11", "11", "", "", ""],
            "5",
            "",
        ),
        common::row("", "", "Clément", ["5", "5", "", "", ""], "0", ""),
    ];
    let out = reshape_rows(&sheet_of(rows));

    let m = &out.matches[0];
    assert_eq!(m.lines[0].sets_won, 2);
    assert!(
        out.warnings
            .iter()
            .any(|w| w.contains("stored Total 5") && w.contains("computed sets won 2"))
    );
}
