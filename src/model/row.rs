//! Column layout of the sheet, inherited from the original tracker
//! spreadsheet (hence the French column names).

/// Number of set slots per line. Unused slots stay 0.
pub const SET_SLOTS: usize = 5;

pub const COL_DATE: usize = 0;
pub const COL_COURT: usize = 1;
pub const COL_PLAYER: usize = 2;
pub const COL_SET1: usize = 3;
pub const COL_TOTAL: usize = COL_SET1 + SET_SLOTS;
pub const COL_REMARKS: usize = COL_TOTAL + 1;
pub const COL_COUNT: usize = COL_REMARKS + 1;

pub const SHEET_COLUMNS: [&str; COL_COUNT] = [
    "Date", "Terrain", "Joueur", "Set 1", "Set 2", "Set 3", "Set 4", "Set 5", "Total", "Remarques",
];

#[must_use]
pub fn sheet_header() -> Vec<String> {
    SHEET_COLUMNS.iter().map(|c| (*c).to_string()).collect()
}

/// Fetches a cell, treating short rows as trailing blanks.
#[must_use]
pub fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map_or("", |c| c.trim())
}
