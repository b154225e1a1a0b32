use maud::{Markup, html};

use crate::model::MatchPageData;

struct PlayerEvolution {
    player: String,
    /// (match_number, running_wins) per recorded win.
    points: Vec<(usize, usize)>,
    total: usize,
}

fn preprocess_evolution(data: &MatchPageData) -> Vec<PlayerEvolution> {
    data.tally
        .iter()
        .map(|entry| {
            let points: Vec<(usize, usize)> = data
                .series
                .iter()
                .filter(|p| p.player == entry.player)
                .map(|p| (p.match_number, p.running_wins))
                .collect();
            PlayerEvolution {
                player: entry.player.clone(),
                total: points.last().map_or(0, |p| p.1),
                points,
            }
        })
        .collect()
}

/// Win-evolution bars: one row per player, one segment per recorded win, bar
/// width proportional to the running count.
#[must_use]
pub fn render_win_evolution(data: &MatchPageData) -> Markup {
    let evolutions = preprocess_evolution(data);
    let max_wins = evolutions.iter().map(|e| e.total).max().unwrap_or(0);

    html! {
        @if max_wins > 0 {
            h3 class="playerbars" { "Win Evolution" }
            div class="player-bar-container" {
                @for (idx, evolution) in evolutions.iter().enumerate() {
                    div class=(format!("bar-row {}", if idx % 2 == 0 { "even" } else { "odd" })) {
                        div class="player-label" {
                            span class="player-name" {
                                (format!("{:<12}: {:<3}", evolution.player, evolution.total))
                            }
                        }
                        div class="progress-bar" {
                            @let width = (evolution.total as f32) / (max_wins as f32) * 100.0;
                            div class="win-bar" style=(format!("width: {width:.1}%;")) {}
                        }
                        div class="win-points" {
                            @for (match_number, running) in &evolution.points {
                                span class="win-point" title=(format!("match {match_number}")) {
                                    (running)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
