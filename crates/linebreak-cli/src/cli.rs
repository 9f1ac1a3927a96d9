use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::command_classify::{ClassifyCommandError, ClassifyOptions, run_classify};
use crate::command_scan::{ScanCommandError, ScanInput, ScanOptions, run_scan};
use crate::command_table::{TableCommandError, TableOptions, run_table};
use crate::config::{DEFAULT_CONFIG_PATH, OutputFormat};

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Scan(#[from] ScanCommandError),
    #[error(transparent)]
    Classify(#[from] ClassifyCommandError),
    #[error(transparent)]
    Table(#[from] TableCommandError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn run() -> Result<(), CliAppError> {
    let mut args = std::env::args().skip(1);
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command.as_str() {
        "scan" => {
            let options = parse_scan_options(args.collect())?;
            run_scan(&options, &mut out)?;
        }
        "classify" => {
            let options = parse_classify_options(args.collect())?;
            run_classify(&options, &mut out)?;
        }
        "table" => {
            let options = parse_table_options(args.collect())?;
            run_table(&options, &mut out)?;
        }
        _ => return Err(CliAppError::Usage(usage())),
    }
    out.flush()?;
    Ok(())
}

fn parse_scan_options(args: Vec<String>) -> Result<ScanOptions, CliAppError> {
    let mut input = None;
    let mut tailoring = None;
    let mut format = None;
    let mut all = false;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--text" => input = Some(ScanInput::Text(next_value("--text", &mut iter)?)),
            "--file" => {
                input = Some(ScanInput::File(PathBuf::from(next_value("--file", &mut iter)?)))
            }
            "--tailoring" => {
                tailoring = Some(PathBuf::from(next_value("--tailoring", &mut iter)?))
            }
            "--format" => format = Some(parse_format(&next_value("--format", &mut iter)?)?),
            "--all" => all = true,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let input = input.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(ScanOptions {
        input,
        tailoring,
        format,
        all,
        config_path,
    })
}

fn parse_classify_options(args: Vec<String>) -> Result<ClassifyOptions, CliAppError> {
    let mut text = None;
    let mut format = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--text" => text = Some(next_value("--text", &mut iter)?),
            "--format" => format = Some(parse_format(&next_value("--format", &mut iter)?)?),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let text = text.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(ClassifyOptions {
        text,
        format,
        config_path,
    })
}

fn parse_table_options(args: Vec<String>) -> Result<TableOptions, CliAppError> {
    let mut tailoring = None;
    let mut format = None;
    let mut rules = false;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tailoring" => {
                tailoring = Some(PathBuf::from(next_value("--tailoring", &mut iter)?))
            }
            "--format" => format = Some(parse_format(&next_value("--format", &mut iter)?)?),
            "--rules" => rules = true,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(TableOptions {
        tailoring,
        format,
        rules,
        config_path,
    })
}

fn parse_format(value: &str) -> Result<OutputFormat, CliAppError> {
    value
        .parse::<OutputFormat>()
        .map_err(|err| CliAppError::Usage(format!("{err}\n\n{}", usage())))
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: linebreak scan (--text <text> | --file <path>) [--tailoring <path>] [--format text|json] [--all] [--config <path>]\n       linebreak classify --text <text> [--format text|json] [--config <path>]\n       linebreak table [--tailoring <path>] [--format text|json] [--rules] [--config <path>]".to_string()
}
