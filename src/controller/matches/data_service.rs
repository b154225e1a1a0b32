use log::warn;

use crate::error::CoreError;
use crate::model::{Match, MatchPageData};
use crate::score::{
    MatchFilter, available_courts, available_years, cumulative_series, filter_matches,
    reshape_rows, win_tally,
};
use crate::storage::SheetStore;

/// What the user asked to see. `None` on a dimension means "everything
/// available"; an explicit empty list excludes everything on that dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub years: Option<Vec<i32>>,
    pub courts: Option<Vec<String>>,
}

fn build_filter(selection: &FilterSelection, matches: &[Match]) -> MatchFilter {
    let full = MatchFilter::all_of(matches);
    MatchFilter {
        years: selection
            .years
            .as_ref()
            .map_or(full.years, |ys| ys.iter().copied().collect()),
        courts: selection
            .courts
            .as_ref()
            .map_or(full.courts, |cs| cs.iter().cloned().collect()),
    }
}

/// One full page render: re-reads the sheet, reshapes, filters, aggregates.
///
/// # Errors
///
/// Will return `Err` if the sheet store call fails.
pub async fn get_data_for_matches_page(
    store: &dyn SheetStore,
    selection: &FilterSelection,
) -> Result<MatchPageData, CoreError> {
    let sheet = store.read_all().await.map_err(CoreError::Store)?;
    let reshaped = reshape_rows(&sheet);
    for w in &reshaped.warnings {
        warn!("{w}");
    }

    let filter = build_filter(selection, &reshaped.matches);
    let matches = filter_matches(&reshaped.matches, &filter);

    Ok(MatchPageData {
        tally: win_tally(&matches),
        series: cumulative_series(&matches),
        available_years: available_years(&reshaped.matches),
        available_courts: available_courts(&reshaped.matches),
        matches,
        warnings: reshaped.warnings,
    })
}

/// The filtered, renumbered view a delete request must be resolved against.
///
/// # Errors
///
/// Will return `Err` if the sheet store call fails.
pub async fn current_view(
    store: &dyn SheetStore,
    selection: &FilterSelection,
) -> Result<Vec<Match>, CoreError> {
    let sheet = store.read_all().await.map_err(CoreError::Store)?;
    let reshaped = reshape_rows(&sheet);
    let filter = build_filter(selection, &reshaped.matches);
    Ok(filter_matches(&reshaped.matches, &filter))
}
