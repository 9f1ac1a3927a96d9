use std::io::Write;
use std::path::PathBuf;

use linebreak_core::{ClassResolver, DefaultResolver, raw_class};
use serde::Serialize;
use thiserror::Error;

use crate::config::{OutputFormat, load_config_or_default};
use crate::error::CliError;

#[derive(Debug, Error)]
pub enum ClassifyCommandError {
    #[error("config error: {0}")]
    Config(#[from] CliError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub text: String,
    pub format: Option<OutputFormat>,
    pub config_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ClassRecord {
    code_point: String,
    raw: &'static str,
    resolved: &'static str,
    name: &'static str,
}

pub fn run_classify(
    options: &ClassifyOptions,
    out: &mut impl Write,
) -> Result<(), ClassifyCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let records = classify(&options.text);
    match options.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            for record in &records {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    record.code_point, record.raw, record.resolved, record.name
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn classify(text: &str) -> Vec<ClassRecord> {
    text.chars()
        .map(|ch| {
            let resolved = DefaultResolver.resolve(ch);
            ClassRecord {
                code_point: format!("U+{:04X}", ch as u32),
                raw: raw_class(ch).code(),
                resolved: resolved.code(),
                name: resolved.name(),
            }
        })
        .collect()
}
