use std::fs;
use std::path::Path;

use linebreak_core::DensePairTable;
use log::debug;

use crate::error::{TailoringError, TailoringResult};
use crate::model::TailoringFile;

pub fn parse_tailoring_toml(contents: &str) -> TailoringResult<TailoringFile> {
    Ok(toml::from_str(contents)?)
}

pub fn parse_tailoring_json(contents: &str) -> TailoringResult<TailoringFile> {
    Ok(serde_json::from_str(contents)?)
}

/// Reads a tailoring file, choosing the format from the file extension.
pub fn load_tailoring(path: &Path) -> TailoringResult<TailoringFile> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let contents = fs::read_to_string(path)?;
    debug!("loading tailoring from {}", path.display());
    match extension.as_str() {
        "toml" => parse_tailoring_toml(&contents),
        "json" => parse_tailoring_json(&contents),
        _ => Err(TailoringError::UnsupportedFormat(path.display().to_string())),
    }
}

pub fn load_table(path: &Path) -> TailoringResult<DensePairTable> {
    load_tailoring(path)?.build()
}

pub fn tailoring_to_toml(file: &TailoringFile) -> TailoringResult<String> {
    Ok(toml::to_string(file)?)
}

pub fn tailoring_to_json(file: &TailoringFile) -> TailoringResult<String> {
    Ok(serde_json::to_string_pretty(file)?)
}
