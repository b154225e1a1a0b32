use maud::{Markup, html};

use crate::controller::matches::{FilterSelection, NO_COURT_LABEL};
use crate::model::{MatchPageData, SET_SLOTS};

fn court_display(court: &str) -> &str {
    if court.is_empty() { NO_COURT_LABEL } else { court }
}

fn year_checked(selection: &FilterSelection, year: i32) -> bool {
    selection.years.as_ref().is_none_or(|ys| ys.contains(&year))
}

fn court_checked(selection: &FilterSelection, court: &str) -> bool {
    selection
        .courts
        .as_ref()
        .is_none_or(|cs| cs.iter().any(|c| c == court))
}

/// Year/court filter, resubmitted as a plain GET so the page URL stays
/// shareable. Checked boxes are gathered into comma lists by a small inline
/// script on submit.
#[must_use]
pub fn render_filter_form(data: &MatchPageData, selection: &FilterSelection) -> Markup {
    html! {
        form id="filter-form" method="get" action="/" class="filter-form" {
            fieldset {
                legend { "Années" }
                @for year in &data.available_years {
                    label {
                        input type="checkbox" class="year-box" value=(year) checked[year_checked(selection, *year)];
                        (year)
                    }
                }
            }
            fieldset {
                legend { "Terrains" }
                @for court in &data.available_courts {
                    label {
                        input type="checkbox" class="court-box" value=(court_display(court)) checked[court_checked(selection, court)];
                        (court_display(court))
                    }
                }
            }
            input type="hidden" name="years" id="years-input";
            input type="hidden" name="courts" id="courts-input";
            button type="submit" { "Filtrer" }
        }
        script {
            (maud::PreEscaped(r#"
            document.getElementById('filter-form').addEventListener('submit', function () {
                var join = function (cls) {
                    return Array.from(document.querySelectorAll('.' + cls + ':checked'))
                        .map(function (b) { return b.value; }).join(',');
                };
                document.getElementById('years-input').value = join('year-box');
                document.getElementById('courts-input').value = join('court-box');
            });
            "#))
        }
    }
}

#[must_use]
pub fn render_add_match_form() -> Markup {
    html! {
        h3 { "Ajouter un match" }
        form method="post" action="/matches/add" class="add-match-form" {
            div class="form-row" {
                label { "Date" input type="date" name="date" required; }
                label { "Terrain" input type="text" name="court"; }
            }
            div class="form-row" {
                label { "Joueur A" input type="text" name="player_a"; }
                @for slot in 1..=SET_SLOTS {
                    input type="number" min="0" name=(format!("set_a{slot}")) placeholder=(format!("Set {slot}"));
                }
            }
            div class="form-row" {
                label { "Joueur B" input type="text" name="player_b"; }
                @for slot in 1..=SET_SLOTS {
                    input type="number" min="0" name=(format!("set_b{slot}")) placeholder=(format!("Set {slot}"));
                }
            }
            div class="form-row" {
                label { "Remarques" input type="text" name="remarks"; }
            }
            button type="submit" { "Ajouter" }
        }
    }
}
