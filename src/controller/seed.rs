use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::score::{NewMatch, add_match};
use crate::storage::SheetStore;

/// format we expect is this:
/// [{ "date": "YYYY-MM-DD", "court": "value", "player_a": "Name", "player_b": "Name",
///    "scores_a": [<int>, ...], "scores_b": [<int>, ...], "remarks": "value" }, ...]
#[derive(Deserialize, Debug)]
pub struct SeedMatch {
    pub date: chrono::NaiveDate,
    #[serde(default)]
    pub court: Option<String>,
    pub player_a: String,
    pub player_b: String,
    pub scores_a: Vec<u32>,
    pub scores_b: Vec<u32>,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Loads seed matches into an empty sheet. A sheet that already has rows is
/// left alone so a restart never duplicates data.
///
/// # Errors
///
/// Will return `Err` if the json is malformed, a seed entry fails
/// validation, or the store write fails.
pub async fn seed_sheet(store: &dyn SheetStore, json: &Value) -> Result<usize, CoreError> {
    let existing = store.read_all().await.map_err(CoreError::Store)?;
    if !existing.rows.is_empty() {
        info!(
            "sheet already has {} rows, skipping seed",
            existing.rows.len()
        );
        return Ok(0);
    }

    let entries: Vec<SeedMatch> = serde_json::from_value(json.clone())?;
    let count = entries.len();

    for entry in entries {
        let input = NewMatch {
            date: entry.date,
            court: entry.court,
            player_a: entry.player_a,
            player_b: entry.player_b,
            scores_a: entry.scores_a,
            scores_b: entry.scores_b,
            remarks: entry.remarks,
        };
        add_match(store, &input).await?;
    }

    info!("seeded {count} matches");
    Ok(count)
}
