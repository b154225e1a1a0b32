use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

use super::data_service::{FilterSelection, current_view, get_data_for_matches_page};
use crate::error::CoreError;
use crate::model::SET_SLOTS;
use crate::score::{NewMatch, add_match, delete_match};
use crate::storage::SheetStore;
use crate::view::matches::render_matches_template;

/// Form value standing in for the blank court label, since an empty
/// parameter already means "empty selection".
pub const NO_COURT_LABEL: &str = "(no court)";

fn decode_court(raw: &str) -> String {
    if raw == NO_COURT_LABEL {
        String::new()
    } else {
        raw.to_string()
    }
}

/// Parses a `years`/`courts` style parameter: absent or `all` selects the
/// full available set, an empty value selects nothing, otherwise the value is
/// a comma-separated list.
///
/// `all` is a reserved keyword, so a court literally named "all" cannot be
/// selected on its own; rename the court in the sheet if that ever comes up.
fn parse_list(raw: Option<&String>) -> Option<Vec<String>> {
    match raw.map(|s| s.trim()) {
        None | Some("all") => None,
        Some("") => Some(Vec::new()),
        Some(list) => Some(list.split(',').map(|s| s.trim().to_string()).collect()),
    }
}

fn parse_selection(query: &HashMap<String, String>) -> Result<FilterSelection, String> {
    let years = match parse_list(query.get("years")) {
        None => None,
        Some(raw) => {
            let mut years = Vec::with_capacity(raw.len());
            for y in raw {
                years.push(
                    y.parse::<i32>()
                        .map_err(|_| format!("invalid year '{y}'"))?,
                );
            }
            Some(years)
        }
    };
    let courts = parse_list(query.get("courts"))
        .map(|raw| raw.iter().map(|c| decode_court(c)).collect());
    Ok(FilterSelection { years, courts })
}

pub async fn matches(
    query: web::Query<HashMap<String, String>>,
    store: Data<dyn SheetStore>,
) -> impl Responder {
    let selection = match parse_selection(&query) {
        Ok(sel) => sel,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({"error": e}));
        }
    };

    let json = matches!(query.get("json").map(String::as_str), Some("1" | "true"));

    match get_data_for_matches_page(store.get_ref(), &selection).await {
        Ok(data) => {
            if json {
                HttpResponse::Ok().json(data)
            } else {
                let markup = render_matches_template(&data, &selection);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

#[derive(Deserialize, Debug)]
pub struct AddMatchForm {
    pub date: String,
    #[serde(default)]
    pub court: String,
    pub player_a: String,
    pub player_b: String,
    #[serde(default)]
    pub set_a1: String,
    #[serde(default)]
    pub set_a2: String,
    #[serde(default)]
    pub set_a3: String,
    #[serde(default)]
    pub set_a4: String,
    #[serde(default)]
    pub set_a5: String,
    #[serde(default)]
    pub set_b1: String,
    #[serde(default)]
    pub set_b2: String,
    #[serde(default)]
    pub set_b3: String,
    #[serde(default)]
    pub set_b4: String,
    #[serde(default)]
    pub set_b5: String,
    #[serde(default)]
    pub remarks: String,
}

fn parse_scores(cells: [&str; SET_SLOTS], side: &str) -> Result<Vec<u32>, CoreError> {
    let mut scores = Vec::with_capacity(SET_SLOTS);
    for (slot, raw) in cells.iter().enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            scores.push(0);
            continue;
        }
        scores.push(raw.parse::<u32>().map_err(|_| {
            CoreError::Validation(format!(
                "set {} for player {side} must be a non-negative integer, got '{raw}'",
                slot + 1
            ))
        })?);
    }
    Ok(scores)
}

fn new_match_from_form(form: &AddMatchForm) -> Result<NewMatch, CoreError> {
    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::Validation(format!("invalid date '{}': {e}", form.date)))?;
    let court = form.court.trim();
    let remarks = form.remarks.trim();

    Ok(NewMatch {
        date,
        court: (!court.is_empty()).then(|| court.to_string()),
        player_a: form.player_a.trim().to_string(),
        player_b: form.player_b.trim().to_string(),
        scores_a: parse_scores(
            [
                form.set_a1.as_str(),
                form.set_a2.as_str(),
                form.set_a3.as_str(),
                form.set_a4.as_str(),
                form.set_a5.as_str(),
            ],
            "A",
        )?,
        scores_b: parse_scores(
            [
                form.set_b1.as_str(),
                form.set_b2.as_str(),
                form.set_b3.as_str(),
                form.set_b4.as_str(),
                form.set_b5.as_str(),
            ],
            "B",
        )?,
        remarks: (!remarks.is_empty()).then(|| remarks.to_string()),
    })
}

pub async fn add(form: web::Form<AddMatchForm>, store: Data<dyn SheetStore>) -> impl Responder {
    let input = match new_match_from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
        }
    };

    match add_match(store.get_ref(), &input).await {
        Ok(_) => HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish(),
        Err(e @ CoreError::Validation(_)) => {
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

#[derive(Deserialize, Debug)]
pub struct DeleteMatchForm {
    pub match_number: String,
    #[serde(default)]
    pub years: Option<String>,
    #[serde(default)]
    pub courts: Option<String>,
}

pub async fn delete(form: web::Form<DeleteMatchForm>, store: Data<dyn SheetStore>) -> impl Responder {
    let match_number: usize = match form.match_number.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "match_number must be a positive integer"}));
        }
    };

    // Rebuild the same filtered view the form was rendered from.
    let mut query = HashMap::new();
    if let Some(years) = &form.years {
        query.insert("years".to_string(), years.clone());
    }
    if let Some(courts) = &form.courts {
        query.insert("courts".to_string(), courts.clone());
    }
    let selection = match parse_selection(&query) {
        Ok(sel) => sel,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({"error": e}));
        }
    };

    let view = match current_view(store.get_ref(), &selection).await {
        Ok(view) => view,
        Err(e) => {
            return HttpResponse::InternalServerError().json(json!({"error": e.to_string()}));
        }
    };

    match delete_match(store.get_ref(), match_number, &view).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish(),
        Err(e @ CoreError::NotFound(_)) => {
            HttpResponse::NotFound().json(json!({"error": e.to_string()}))
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}
