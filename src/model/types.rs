use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchResult::Win => "WIN",
            MatchResult::Loss => "LOSS",
        };
        write!(f, "{s}")
    }
}

/// One player's row within a match.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerLine {
    pub date: NaiveDate,
    pub court: Option<String>,
    pub player: String,
    pub set_scores: Vec<u32>,
    /// Count of set slots where this line's score beats the opponent's.
    pub sets_won: u32,
    pub result: MatchResult,
    pub remarks: Option<String>,
}

/// One contest between two players, reshaped from two consecutive sheet rows.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Match {
    /// 1-based display number within the view this match belongs to.
    pub number: usize,
    pub date: NaiveDate,
    pub court: Option<String>,
    pub lines: [PlayerLine; 2],
    /// Sheet row indices (1-based, header-inclusive) backing this match.
    /// Equal indices mean an unpaired trailing row padded with a placeholder.
    pub row_span: (usize, usize),
    /// Both lines won the same number of sets; both are recorded as losses.
    pub tied: bool,
}

impl Match {
    #[must_use]
    pub fn court_label(&self) -> &str {
        self.court.as_deref().unwrap_or("")
    }

    /// The remarks of whichever line carries them.
    #[must_use]
    pub fn remarks(&self) -> &str {
        self.lines
            .iter()
            .find_map(|l| l.remarks.as_deref())
            .unwrap_or("")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WinTallyEntry {
    pub player: String,
    pub wins: usize,
    pub scoreboard_position: usize,
    pub scoreboard_position_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CumulativePoint {
    pub match_number: usize,
    pub player: String,
    pub running_wins: usize,
}

/// Everything the matches page needs for one render.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchPageData {
    pub tally: Vec<WinTallyEntry>,
    pub matches: Vec<Match>,
    pub series: Vec<CumulativePoint>,
    pub available_years: Vec<i32>,
    pub available_courts: Vec<String>,
    pub warnings: Vec<String>,
}
