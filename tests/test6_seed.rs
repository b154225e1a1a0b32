use serde_json::json;

use rusty_pong::controller::seed::seed_sheet;
use rusty_pong::model::sheet_header;
use rusty_pong::score::reshape_rows;
use rusty_pong::storage::{MemorySheet, SheetStore};

mod common;

#[tokio::test]
async fn seed_fills_an_empty_sheet() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemorySheet::new(sheet_header());
    let seed = json!([
        {
            "date": "2024-03-01",
            "court": "Garage",
            "player_a": "Antoine",
            "player_b": "Clément",
            "scores_a": [11, 5, 11, 11],
            "scores_b": [5, 11, 6, 6],
            "remarks": "revanche"
        },
        {
            "date": "2024-03-08",
            "player_a": "Antoine",
            "player_b": "Clément",
            "scores_a": [9, 5, 11],
            "scores_b": [11, 11, 6]
        }
    ]);

    let count = seed_sheet(&store, &seed).await?;
    assert_eq!(count, 2);

    let out = reshape_rows(&store.read_all().await?);
    assert_eq!(out.matches.len(), 2);
    assert_eq!(out.matches[0].remarks(), "revanche");
    assert_eq!(out.matches[1].court_label(), "");
    Ok(())
}

#[tokio::test]
async fn seed_skips_a_sheet_that_already_has_rows() -> Result<(), Box<dyn std::error::Error>> {
    let store = common::sample_sheet();
    let seed = json!([
        {
            "date": "2030-01-01",
            "player_a": "X",
            "player_b": "Y",
            "scores_a": [11],
            "scores_b": [5]
        }
    ]);

    let count = seed_sheet(&store, &seed).await?;
    assert_eq!(count, 0);
    assert_eq!(store.read_all().await?.rows.len(), 8);
    Ok(())
}
