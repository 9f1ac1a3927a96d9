use std::fs;
use std::io::Write;
use std::path::PathBuf;

use linebreak_core::{DensePairTable, Scanner};
use linebreak_tailoring::TailoringError;
use serde::Serialize;
use thiserror::Error;

use crate::config::{OutputFormat, load_config_or_default};
use crate::error::CliError;
use crate::tables::active_table;

#[derive(Debug, Error)]
pub enum ScanCommandError {
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
pub enum ScanInput {
    Text(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub input: ScanInput,
    pub tailoring: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub all: bool,
    pub config_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ScanRecord {
    position: usize,
    offset: usize,
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_point: Option<String>,
    end: bool,
}

impl ScanRecord {
    fn to_line(&self) -> String {
        let target = self.code_point.as_deref().unwrap_or("end");
        format!("{}\t{}\t{}\t{}", self.position, self.offset, self.action, target)
    }
}

pub fn run_scan(options: &ScanOptions, out: &mut impl Write) -> Result<(), ScanCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let table = active_table(&config, &options.config_path, options.tailoring.as_deref())?;
    let text = match &options.input {
        ScanInput::Text(text) => text.clone(),
        ScanInput::File(path) => fs::read_to_string(path)?,
    };
    let records = scan_records(&text, table, options.all || config.show_prohibited);
    match options.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            for record in &records {
                writeln!(out, "{}", record.to_line())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn scan_records(text: &str, table: DensePairTable, all: bool) -> Vec<ScanRecord> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    Scanner::new(text.chars())
        .with_table(table)
        .filter(|brk| all || brk.action.is_break())
        .map(|brk| {
            let current = chars.get(brk.position).copied();
            ScanRecord {
                position: brk.position,
                offset: current.map(|(offset, _)| offset).unwrap_or(text.len()),
                action: brk.action.name(),
                code_point: current.map(|(_, ch)| format!("U+{:04X}", ch as u32)),
                end: brk.is_end(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ScanInput, ScanOptions, run_scan, scan_records};
    use crate::config::OutputFormat;
    use linebreak_core::DensePairTable;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("linebreak_{name}_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn options(root: &Path, input: ScanInput) -> ScanOptions {
        ScanOptions {
            input,
            tailoring: None,
            format: None,
            all: false,
            config_path: root.join("linebreak.toml"),
        }
    }

    #[test]
    fn records_every_position_when_asked() {
        let records = scan_records("a b", DensePairTable::uax14(), true);
        let actions: Vec<&str> = records.iter().map(|record| record.action).collect();
        assert_eq!(actions, vec!["prohibited", "prohibited", "indirect", "mandatory"]);
        assert!(records[3].end);
        assert_eq!(records[3].code_point, None);
    }

    #[test]
    fn text_output_lists_breaks() {
        let root = temp_dir("scan_text");
        let mut out = Vec::new();
        run_scan(&options(&root, ScanInput::Text("a b".to_string())), &mut out).expect("run");
        let output = String::from_utf8(out).expect("utf8");
        assert_eq!(output, "2\t2\tindirect\tU+0062\n3\t3\tmandatory\tend\n");
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn json_output_uses_byte_offsets() {
        let root = temp_dir("scan_json");
        let input = root.join("input.txt");
        fs::write(&input, "中文").expect("write");
        let mut opts = options(&root, ScanInput::File(input));
        opts.format = Some(OutputFormat::Json);
        let mut out = Vec::new();
        run_scan(&opts, &mut out).expect("run");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        let records = value.as_array().expect("array");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["position"], 1);
        assert_eq!(records[0]["offset"], 3);
        assert_eq!(records[0]["action"], "direct");
        assert_eq!(records[1]["end"], true);
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn config_can_show_prohibited_positions() {
        let root = temp_dir("scan_config");
        fs::write(root.join("linebreak.toml"), "show_prohibited = true\n").expect("write");
        let mut out = Vec::new();
        run_scan(&options(&root, ScanInput::Text("ab".to_string())), &mut out).expect("run");
        let output = String::from_utf8(out).expect("utf8");
        assert_eq!(output.lines().count(), 3);
        fs::remove_dir_all(&root).ok();
    }
}
