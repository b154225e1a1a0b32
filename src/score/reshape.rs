use chrono::NaiveDate;

use crate::model::{
    COL_COURT, COL_DATE, COL_PLAYER, COL_REMARKS, COL_SET1, COL_TOTAL, Match, MatchResult,
    PlayerLine, SET_SLOTS, cell,
};
use crate::storage::SheetRows;

/// Reshaped matches plus every non-fatal anomaly hit along the way. Rows are
/// never dropped: malformed cells coerce to defaults and get a warning.
#[derive(Debug)]
pub struct ReshapeOutput {
    pub matches: Vec<Match>,
    pub warnings: Vec<String>,
}

struct ParsedRow {
    date: Option<NaiveDate>,
    court: Option<String>,
    player: String,
    scores: [u32; SET_SLOTS],
    stored_total: Option<u32>,
    remarks: Option<String>,
}

fn opt(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn parse_row(row: &[String], sheet_index: usize, warnings: &mut Vec<String>) -> ParsedRow {
    let date_cell = cell(row, COL_DATE);
    let date = if date_cell.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(date_cell, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                warnings.push(format!("row {sheet_index}: unparsable date '{date_cell}'"));
                None
            }
        }
    };

    let mut scores = [0u32; SET_SLOTS];
    for (slot, score) in scores.iter_mut().enumerate() {
        let raw = cell(row, COL_SET1 + slot);
        if raw.is_empty() {
            continue;
        }
        match raw.parse::<u32>() {
            Ok(v) => *score = v,
            Err(_) => {
                warnings.push(format!(
                    "row {sheet_index}: non-numeric score '{raw}' in Set {}, coerced to 0",
                    slot + 1
                ));
            }
        }
    }

    let total_cell = cell(row, COL_TOTAL);
    let stored_total = if total_cell.is_empty() {
        None
    } else {
        match total_cell.parse::<u32>() {
            Ok(v) => Some(v),
            Err(_) => {
                warnings.push(format!(
                    "row {sheet_index}: non-numeric Total '{total_cell}' ignored"
                ));
                None
            }
        }
    };

    ParsedRow {
        date,
        court: opt(cell(row, COL_COURT)),
        player: cell(row, COL_PLAYER).to_string(),
        scores,
        stored_total,
        remarks: opt(cell(row, COL_REMARKS)),
    }
}

/// Element-wise set comparison: a slot counts for whichever side scored
/// strictly higher in it.
#[must_use]
pub fn count_sets_won(scores_a: &[u32], scores_b: &[u32]) -> (u32, u32) {
    let mut a_won = 0;
    let mut b_won = 0;
    for (a, b) in scores_a.iter().zip(scores_b.iter()) {
        if a > b {
            a_won += 1;
        } else if b > a {
            b_won += 1;
        }
    }
    (a_won, b_won)
}

/// Pairs consecutive data rows into matches: rows 2i and 2i+1 (0-based over
/// the data rows) become match i+1. An unpaired trailing row gets a
/// placeholder opponent with an empty name and all-zero scores.
#[must_use]
pub fn reshape_rows(sheet: &SheetRows) -> ReshapeOutput {
    let mut warnings = Vec::new();
    let mut matches = Vec::new();

    for (pair_idx, chunk) in sheet.rows.chunks(2).enumerate() {
        let first_index = 2 + pair_idx * 2;
        let number = pair_idx + 1;

        let a = parse_row(&chunk[0], first_index, &mut warnings);
        let (b, second_index) = if let Some(second) = chunk.get(1) {
            (
                parse_row(second, first_index + 1, &mut warnings),
                first_index + 1,
            )
        } else {
            warnings.push(format!(
                "row {first_index} has no paired opponent row; padded with a placeholder line"
            ));
            (
                ParsedRow {
                    date: None,
                    court: None,
                    player: String::new(),
                    scores: [0; SET_SLOTS],
                    stored_total: None,
                    remarks: None,
                },
                first_index,
            )
        };

        // The second line of a pair omits date/court and inherits the first's.
        let date = match a.date.or(b.date) {
            Some(d) => d,
            None => {
                warnings.push(format!("match {number} has no parsable date"));
                NaiveDate::MIN
            }
        };
        let court = a.court.clone().or_else(|| b.court.clone());

        let (a_won, b_won) = count_sets_won(&a.scores, &b.scores);
        let tied = a_won == b_won;
        if tied && (a_won > 0 || b_won > 0) {
            warnings.push(format!(
                "match {number} ({} vs {}) ended with tied set counts; both lines recorded as losses",
                a.player, b.player
            ));
        }

        for (parsed, computed) in [(&a, a_won), (&b, b_won)] {
            match parsed.stored_total {
                Some(stored) if stored != computed => {
                    warnings.push(format!(
                        "match {number}: stored Total {stored} for {} disagrees with computed sets won {computed}",
                        parsed.player
                    ));
                }
                _ => {}
            }
        }

        let result_a = if !tied && a_won > b_won {
            MatchResult::Win
        } else {
            MatchResult::Loss
        };
        let result_b = if !tied && b_won > a_won {
            MatchResult::Win
        } else {
            MatchResult::Loss
        };

        let line = |parsed: &ParsedRow, sets_won: u32, result: MatchResult| PlayerLine {
            date,
            court: court.clone(),
            player: parsed.player.clone(),
            set_scores: parsed.scores.to_vec(),
            sets_won,
            result,
            remarks: parsed.remarks.clone(),
        };

        let lines = [line(&a, a_won, result_a), line(&b, b_won, result_b)];
        matches.push(Match {
            number,
            date,
            court,
            lines,
            row_span: (first_index, second_index),
            tied,
        });
    }

    ReshapeOutput { matches, warnings }
}
