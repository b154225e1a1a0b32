use maud::{Markup, html};

use crate::model::MatchPageData;

#[must_use]
pub fn render_scoreboard(data: &MatchPageData) -> Markup {
    html! {
        @if !data.tally.is_empty() {
            div class="metric-row" {
                @for entry in &data.tally {
                    div class="metric-card" {
                        span class="metric-label" { (format!("Victoires de {}", entry.player)) }
                        span class="metric-value" { (entry.wins) }
                    }
                }
            }

            h3 { "Scoreboard" }

            table class="styled-table" {
                thead {
                    tr {
                        th { "PLACE" }
                        th { "PLAYER" }
                        th { "WINS" }
                    }
                }
                tbody {
                    @for entry in &data.tally {
                        tr {
                            td { (entry.scoreboard_position_name) }
                            td { (entry.player) }
                            td { (entry.wins) }
                        }
                    }
                }
            }
        }
        @else {
            p class="empty-note" { "No matches recorded yet." }
        }
    }
}
