use maud::{Markup, html};

use crate::model::{MatchPageData, MatchResult, SET_SLOTS};

/// Match history, two rows per match like the sheet itself, with a delete
/// control that carries the filter the view was rendered from.
#[must_use]
pub fn render_history(
    data: &MatchPageData,
    years_param: Option<&str>,
    courts_param: Option<&str>,
) -> Markup {
    html! {
        h3 { "Historique des matchs" }
        @if data.matches.is_empty() {
            p class="empty-note" { "No matches in the current view." }
        }
        @else {
            table class="styled-table history-table" {
                thead {
                    tr {
                        th { "#" }
                        th { "Date" }
                        th { "Terrain" }
                        th { "Joueur" }
                        @for slot in 1..=SET_SLOTS {
                            th { (format!("Set {slot}")) }
                        }
                        th { "Total" }
                        th { "Résultat" }
                        th { "Remarques" }
                        th { }
                    }
                }
                tbody {
                    @for m in &data.matches {
                        @for (line_idx, line) in m.lines.iter().enumerate() {
                            tr class=(if line.result == MatchResult::Win { "line-win" } else { "line-loss" }) {
                                @if line_idx == 0 {
                                    td rowspan="2" { (m.number) }
                                    td rowspan="2" { (m.date.format("%Y-%m-%d")) }
                                    td rowspan="2" { (m.court_label()) }
                                }
                                td { (line.player) }
                                @for score in &line.set_scores {
                                    td { @if *score > 0 { (score) } }
                                }
                                td { (line.sets_won) }
                                td {
                                    (line.result)
                                    @if m.tied { span class="tied-note" { " (tied)" } }
                                }
                                @if line_idx == 0 {
                                    td rowspan="2" { (m.remarks()) }
                                    td rowspan="2" {
                                        form method="post" action="/matches/delete" {
                                            input type="hidden" name="match_number" value=(m.number);
                                            @if let Some(years) = years_param {
                                                input type="hidden" name="years" value=(years);
                                            }
                                            @if let Some(courts) = courts_param {
                                                input type="hidden" name="courts" value=(courts);
                                            }
                                            button type="submit" class="delete-button" { "Supprimer" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
