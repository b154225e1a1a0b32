use clap::{Parser, ValueEnum};
use serde_json::Value;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// Volatile in-memory sheet, handy with --seed-json.
    Memory,
    /// Sheet persisted in a local sqlite file.
    Sqlite,
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sheet store backend: memory or sqlite
    #[arg(short = 's', long, value_name = "STORE", default_value = "sqlite")]
    pub store: StoreKind,

    /// For sqlite, the sheet filename.
    #[arg(short = 'n', long, value_name = "SHEET_NAME", default_value = "pong.db")]
    pub sheet_name: String,

    /// If specified, this json is loaded into an empty sheet on startup.
    #[arg(
        long,
        value_name = "SEED_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub seed_json: Option<Value>,
}
