use ahash::AHashMap;

use crate::model::{CumulativePoint, Match, MatchResult, WinTallyEntry};

fn position_name(position: usize) -> String {
    match position {
        0 => "CHAMPION".to_string(),
        1 => "RUNNER-UP".to_string(),
        _ => "CHASING".to_string(),
    }
}

/// Win count per player over the given (already filtered) matches. Every
/// player appearing in at least one line shows up, zero-win players included.
/// Placeholder lines with an empty name are skipped.
#[must_use]
pub fn win_tally(matches: &[Match]) -> Vec<WinTallyEntry> {
    let mut wins: AHashMap<String, usize> = AHashMap::new();
    let mut player_order: Vec<String> = Vec::new();

    for m in matches {
        for line in &m.lines {
            if line.player.is_empty() {
                continue;
            }
            if !player_order.contains(&line.player) {
                player_order.push(line.player.clone());
            }
            let entry = wins.entry(line.player.clone()).or_insert(0);
            if line.result == MatchResult::Win {
                *entry += 1;
            }
        }
    }

    let mut tally: Vec<WinTallyEntry> = player_order
        .into_iter()
        .map(|player| {
            let wins = wins.get(&player).copied().unwrap_or(0);
            WinTallyEntry {
                player,
                wins,
                scoreboard_position: 0,
                scoreboard_position_name: String::new(),
            }
        })
        .collect();

    tally.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.player.cmp(&b.player)));
    for (i, entry) in tally.iter_mut().enumerate() {
        entry.scoreboard_position = i;
        entry.scoreboard_position_name = position_name(i);
    }

    tally
}

/// Running win count per player, one point per win, in match-number order.
/// Counts start at 1 for a player's first win and never reset.
#[must_use]
pub fn cumulative_series(matches: &[Match]) -> Vec<CumulativePoint> {
    let mut running: AHashMap<String, usize> = AHashMap::new();
    let mut series = Vec::new();

    for m in matches {
        for line in &m.lines {
            if line.result != MatchResult::Win || line.player.is_empty() {
                continue;
            }
            let count = running.entry(line.player.clone()).or_insert(0);
            *count += 1;
            series.push(CumulativePoint {
                match_number: m.number,
                player: line.player.clone(),
                running_wins: *count,
            });
        }
    }

    series
}
