use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_CONFIG_PATH: &str = "linebreak.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::UnknownFormat(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Tailoring file, relative to the config file.
    #[serde(default)]
    pub tailoring: Option<String>,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub show_prohibited: bool,
}

impl CliConfig {
    pub fn tailoring_path(&self, config_path: &Path) -> Option<PathBuf> {
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        self.tailoring.as_ref().map(|path| base_dir.join(path))
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}
