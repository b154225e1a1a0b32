use chrono::NaiveDate;

use crate::error::CoreError;
use crate::model::{COL_COUNT, Match, MatchResult, PlayerLine, SET_SLOTS};
use crate::score::reshape::count_sets_won;
use crate::storage::{RawRow, SheetStore};

/// Validated form input for one new match.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub date: NaiveDate,
    pub court: Option<String>,
    pub player_a: String,
    pub player_b: String,
    pub scores_a: Vec<u32>,
    pub scores_b: Vec<u32>,
    pub remarks: Option<String>,
}

fn pad_scores(scores: &[u32]) -> [u32; SET_SLOTS] {
    let mut padded = [0u32; SET_SLOTS];
    padded[..scores.len()].copy_from_slice(scores);
    padded
}

fn build_row(
    date: &str,
    court: &str,
    player: &str,
    scores: &[u32; SET_SLOTS],
    total: u32,
    remarks: &str,
) -> RawRow {
    let mut row = Vec::with_capacity(COL_COUNT);
    row.push(date.to_string());
    row.push(court.to_string());
    row.push(player.to_string());
    for s in scores {
        row.push(if *s == 0 { String::new() } else { s.to_string() });
    }
    row.push(total.to_string());
    row.push(remarks.to_string());
    row
}

fn validate(input: &NewMatch) -> Result<(), CoreError> {
    if input.player_a.trim().is_empty() && input.player_b.trim().is_empty() {
        return Err(CoreError::Validation(
            "at least one player name is required".to_string(),
        ));
    }
    if input.scores_a.len() != input.scores_b.len() {
        return Err(CoreError::Validation(format!(
            "score lists differ in length ({} vs {})",
            input.scores_a.len(),
            input.scores_b.len()
        )));
    }
    if input.scores_a.len() > SET_SLOTS {
        return Err(CoreError::Validation(format!(
            "at most {SET_SLOTS} sets per match"
        )));
    }
    Ok(())
}

/// Validates the input, derives both lines and appends them to the sheet as
/// one atomic two-row write. The first row carries date/court/remarks, the
/// second leaves them blank.
pub async fn add_match(
    store: &dyn SheetStore,
    input: &NewMatch,
) -> Result<(PlayerLine, PlayerLine), CoreError> {
    validate(input)?;

    let scores_a = pad_scores(&input.scores_a);
    let scores_b = pad_scores(&input.scores_b);
    let (a_won, b_won) = count_sets_won(&scores_a, &scores_b);
    let tied = a_won == b_won;

    let date_cell = input.date.format("%Y-%m-%d").to_string();
    let court = input.court.as_deref().unwrap_or("");
    let remarks = input.remarks.as_deref().unwrap_or("");

    let rows = vec![
        build_row(&date_cell, court, &input.player_a, &scores_a, a_won, remarks),
        build_row("", "", &input.player_b, &scores_b, b_won, ""),
    ];
    store.append_rows(rows).await.map_err(CoreError::Store)?;

    let line = |player: &str, scores: [u32; SET_SLOTS], sets_won: u32, opponent_won: u32, remarks: Option<String>| {
        PlayerLine {
            date: input.date,
            court: input.court.clone(),
            player: player.to_string(),
            set_scores: scores.to_vec(),
            sets_won,
            result: if !tied && sets_won > opponent_won {
                MatchResult::Win
            } else {
                MatchResult::Loss
            },
            remarks,
        }
    };

    Ok((
        line(&input.player_a, scores_a, a_won, b_won, input.remarks.clone()),
        line(&input.player_b, scores_b, b_won, a_won, None),
    ))
}

/// Deletes the two sheet rows behind `match_number`, resolved against the
/// same filtered view the caller was shown. Deletes the higher index first so
/// the second delete is not shifted by the first.
///
/// A stale view is an accepted hazard: another writer between render and
/// delete can shift rows under us, and nothing here detects that.
pub async fn delete_match(
    store: &dyn SheetStore,
    match_number: usize,
    view: &[Match],
) -> Result<(), CoreError> {
    let m = view
        .iter()
        .find(|m| m.number == match_number)
        .ok_or_else(|| {
            CoreError::NotFound(format!("match {match_number} is not in the current view"))
        })?;

    let (lo, hi) = m.row_span;
    store.delete_row(hi).await.map_err(CoreError::Store)?;
    if lo != hi {
        store.delete_row(lo).await.map_err(CoreError::Store)?;
    }
    Ok(())
}
