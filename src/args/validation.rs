use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a json array
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    if !json.is_array() {
        return Err(format!("'{file}' must be a json array of match records."));
    }
    Ok(json)
}
