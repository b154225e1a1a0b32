use ahash::AHashSet;
use chrono::Datelike;

use crate::model::Match;

/// Year/court restriction over the reshaped match list.
///
/// An empty set on either dimension excludes everything on that dimension, so
/// "no filter" callers must pass the full available set (see [`MatchFilter::all_of`]).
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub years: AHashSet<i32>,
    pub courts: AHashSet<String>,
}

impl MatchFilter {
    #[must_use]
    pub fn new(years: impl IntoIterator<Item = i32>, courts: impl IntoIterator<Item = String>) -> Self {
        Self {
            years: years.into_iter().collect(),
            courts: courts.into_iter().collect(),
        }
    }

    /// The filter that keeps every given match.
    #[must_use]
    pub fn all_of(matches: &[Match]) -> Self {
        Self {
            years: matches.iter().map(|m| m.date.year()).collect(),
            courts: matches.iter().map(|m| m.court_label().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn keeps(&self, m: &Match) -> bool {
        self.years.contains(&m.date.year()) && self.courts.contains(m.court_label())
    }
}

/// Applies the filter, re-sorts by date ascending (stable, so same-day
/// matches keep their sheet order) and renumbers the survivors 1..N.
#[must_use]
pub fn filter_matches(matches: &[Match], filter: &MatchFilter) -> Vec<Match> {
    let mut kept: Vec<Match> = matches.iter().filter(|m| filter.keeps(m)).cloned().collect();
    kept.sort_by_key(|m| m.date);
    for (i, m) in kept.iter_mut().enumerate() {
        m.number = i + 1;
    }
    kept
}

/// Distinct years present across the given matches, ascending.
#[must_use]
pub fn available_years(matches: &[Match]) -> Vec<i32> {
    let mut years: Vec<i32> = matches
        .iter()
        .map(|m| m.date.year())
        .collect::<AHashSet<_>>()
        .into_iter()
        .collect();
    years.sort_unstable();
    years
}

/// Distinct court labels present across the given matches, ascending. A
/// missing court shows up as the empty label.
#[must_use]
pub fn available_courts(matches: &[Match]) -> Vec<String> {
    let mut courts: Vec<String> = matches
        .iter()
        .map(|m| m.court_label().to_string())
        .collect::<AHashSet<_>>()
        .into_iter()
        .collect();
    courts.sort_unstable();
    courts
}
