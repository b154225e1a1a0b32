use maud::{Markup, html};

use super::chart::render_win_evolution;
use super::forms::{render_add_match_form, render_filter_form};
use super::history::render_history;
use super::scoreboard::render_scoreboard;
use crate::controller::matches::{FilterSelection, NO_COURT_LABEL};
use crate::model::MatchPageData;

fn encode_years(selection: &FilterSelection) -> Option<String> {
    selection.years.as_ref().map(|ys| {
        ys.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    })
}

fn encode_courts(selection: &FilterSelection) -> Option<String> {
    selection.courts.as_ref().map(|cs| {
        cs.iter()
            .map(|c| {
                if c.is_empty() {
                    NO_COURT_LABEL.to_string()
                } else {
                    c.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    })
}

#[must_use]
pub fn render_matches_template(data: &MatchPageData, selection: &FilterSelection) -> Markup {
    let years_param = encode_years(selection);
    let courts_param = encode_courts(selection);

    html! {
        div class="matches-page" {
            (render_scoreboard(data))
            (render_win_evolution(data))
            (render_filter_form(data, selection))
            (render_history(data, years_param.as_deref(), courts_param.as_deref()))
            (render_add_match_form())
            @if !data.warnings.is_empty() {
                div class="sheet-warnings" {
                    h4 { "Sheet warnings" }
                    ul {
                        @for w in &data.warnings {
                            li { (w) }
                        }
                    }
                }
            }
        }
    }
}
