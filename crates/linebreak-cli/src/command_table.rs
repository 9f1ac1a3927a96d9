use std::io::Write;
use std::path::PathBuf;

use linebreak_tailoring::{
    TableExport, TailoringError, TailoringFile, tailoring_to_json, tailoring_to_toml,
};
use thiserror::Error;

use crate::config::{OutputFormat, load_config_or_default};
use crate::error::CliError;
use crate::tables::active_table;

#[derive(Debug, Error)]
pub enum TableCommandError {
    #[error("config error: {0}")]
    Config(#[from] CliError),
    #[error(transparent)]
    Tailoring(#[from] TailoringError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub tailoring: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// Print the table as tailoring rules relative to UAX #14, as TOML or JSON.
    pub rules: bool,
    pub config_path: PathBuf,
}

pub fn run_table(options: &TableOptions, out: &mut impl Write) -> Result<(), TableCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let table = active_table(&config, &options.config_path, options.tailoring.as_deref())?;
    let format = options.format.unwrap_or(config.format);
    if options.rules {
        let file = TailoringFile::from_table(&table);
        match format {
            OutputFormat::Text => out.write_all(tailoring_to_toml(&file)?.as_bytes())?,
            OutputFormat::Json => {
                out.write_all(tailoring_to_json(&file)?.as_bytes())?;
                writeln!(out)?;
            }
        }
        return Ok(());
    }
    let export = TableExport::from_table(&table);
    match format {
        OutputFormat::Text => out.write_all(export.to_grid().as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &export)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
