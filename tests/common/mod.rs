use rusty_pong::model::sheet_header;
use rusty_pong::storage::MemorySheet;

pub fn row(
    date: &str,
    court: &str,
    player: &str,
    scores: [&str; 5],
    total: &str,
    remarks: &str,
) -> Vec<String> {
    let mut cells = vec![date.to_string(), court.to_string(), player.to_string()];
    cells.extend(scores.iter().map(|s| (*s).to_string()));
    cells.push(total.to_string());
    cells.push(remarks.to_string());
    cells
}

/// Four matches across two years and two courts:
/// 1. 2024-03-01 Garage: Antoine 3-1 Clément
/// 2. 2024-03-08 Garage: Clément 2-1 Antoine
/// 3. 2024-05-02 Club:   Antoine 2-0 Clément
/// 4. 2025-01-15 Garage: 2-2 tie (both recorded as losses)
pub fn sample_rows() -> Vec<Vec<String>> {
    vec![
        row(
            "2024-03-01",
            "Garage",
            "Antoine",
            ["11", "5", "11", "11", ""],
            "3",
            "revanche",
        ),
        row("", "", "Clément", ["5", "11", "6", "6", ""], "1", ""),
        row(
            "2024-03-08",
            "Garage",
            "Antoine",
            ["9", "5", "11", "", ""],
            "1",
            "",
        ),
        row("", "", "Clément", ["11", "11", "6", "", ""], "2", ""),
        row(
            "2024-05-02",
            "Club",
            "Antoine",
            ["11", "11", "", "", ""],
            "2",
            "",
        ),
        row("", "", "Clément", ["3", "9", "", "", ""], "0", ""),
        row(
            "2025-01-15",
            "Garage",
            "Antoine",
            ["11", "9", "11", "7", ""],
            "2",
            "",
        ),
        row("", "", "Clément", ["9", "11", "9", "11", ""], "2", ""),
    ]
}

pub fn sample_sheet() -> MemorySheet {
    MemorySheet::with_rows(sheet_header(), sample_rows())
}
