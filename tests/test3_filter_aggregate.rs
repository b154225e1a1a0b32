use rusty_pong::model::sheet_header;
use rusty_pong::score::{
    MatchFilter, available_courts, available_years, cumulative_series, filter_matches,
    reshape_rows, win_tally,
};
use rusty_pong::storage::SheetRows;

mod common;

fn sample_matches() -> Vec<rusty_pong::model::Match> {
    let sheet = SheetRows {
        header: sheet_header(),
        rows: common::sample_rows(),
    };
    reshape_rows(&sheet).matches
}

#[test]
fn filter_restricts_sorts_and_renumbers() {
    let matches = sample_matches();
    let filter = MatchFilter::new([2024], ["Garage".to_string()]);
    let filtered = filter_matches(&matches, &filter);

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].number, 1);
    assert_eq!(filtered[0].date.to_string(), "2024-03-01");
    assert_eq!(filtered[1].number, 2);
    assert_eq!(filtered[1].date.to_string(), "2024-03-08");
    // Row spans still point at the original sheet rows.
    assert_eq!(filtered[1].row_span, (4, 5));
}

#[test]
fn filter_is_idempotent() {
    let matches = sample_matches();
    let filter = MatchFilter::new([2024], ["Garage".to_string(), "Club".to_string()]);

    let once = filter_matches(&matches, &filter);
    let twice = filter_matches(&once, &filter);

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.number, b.number);
        assert_eq!(a.date, b.date);
        assert_eq!(a.row_span, b.row_span);
    }
}

#[test]
fn empty_selection_on_a_dimension_excludes_everything() {
    let matches = sample_matches();

    let no_years = MatchFilter::new([], ["Garage".to_string(), "Club".to_string()]);
    assert!(filter_matches(&matches, &no_years).is_empty());

    let no_courts = MatchFilter::new([2024, 2025], []);
    assert!(filter_matches(&matches, &no_courts).is_empty());

    // "No filter" is the explicit full set.
    let all = MatchFilter::all_of(&matches);
    assert_eq!(filter_matches(&matches, &all).len(), matches.len());
}

#[test]
fn available_dimensions_cover_the_whole_sheet() {
    let matches = sample_matches();
    assert_eq!(available_years(&matches), vec![2024, 2025]);
    assert_eq!(
        available_courts(&matches),
        vec!["Club".to_string(), "Garage".to_string()]
    );
}

#[test]
fn win_tally_counts_wins_and_keeps_zero_win_players() {
    let matches = sample_matches();
    let tally = win_tally(&matches);

    assert_eq!(tally.len(), 2);
    assert_eq!(tally[0].player, "Antoine");
    assert_eq!(tally[0].wins, 2);
    assert_eq!(tally[0].scoreboard_position_name, "CHAMPION");
    assert_eq!(tally[1].player, "Clément");
    assert_eq!(tally[1].wins, 1);
    assert_eq!(tally[1].scoreboard_position_name, "RUNNER-UP");

    // A player who never wins still appears, at zero.
    let filter = MatchFilter::new([2024], ["Club".to_string()]);
    let club_only = filter_matches(&matches, &filter);
    let tally = win_tally(&club_only);
    assert_eq!(tally.len(), 2);
    assert_eq!(tally[1].player, "Clément");
    assert_eq!(tally[1].wins, 0);
}

#[test]
fn cumulative_series_is_strictly_increasing_per_player() {
    let matches = sample_matches();
    let series = cumulative_series(&matches);

    let antoine: Vec<_> = series.iter().filter(|p| p.player == "Antoine").collect();
    assert_eq!(antoine.len(), 2);
    assert_eq!(antoine[0].match_number, 1);
    assert_eq!(antoine[0].running_wins, 1);
    assert_eq!(antoine[1].match_number, 3);
    assert_eq!(antoine[1].running_wins, 2);

    let clement: Vec<_> = series.iter().filter(|p| p.player == "Clément").collect();
    assert_eq!(clement.len(), 1);
    assert_eq!(clement[0].match_number, 2);
    assert_eq!(clement[0].running_wins, 1);

    // The tie at match 4 contributes no point for anyone.
    assert!(series.iter().all(|p| p.match_number != 4));

    // Running counts match the win tally at the end of the sequence.
    for entry in win_tally(&matches) {
        let last = series
            .iter()
            .filter(|p| p.player == entry.player)
            .next_back()
            .map_or(0, |p| p.running_wins);
        assert_eq!(last, entry.wins);
    }
}
