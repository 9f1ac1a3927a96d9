use std::path::Path;

use linebreak_core::DensePairTable;
use linebreak_tailoring::{TailoringResult, load_table};
use log::info;

use crate::config::CliConfig;

/// Table for a command: the explicit tailoring file, else the one named in the
/// config, else the UAX #14 example table.
pub fn active_table(
    config: &CliConfig,
    config_path: &Path,
    tailoring: Option<&Path>,
) -> TailoringResult<DensePairTable> {
    let path = match tailoring {
        Some(path) => Some(path.to_path_buf()),
        None => config.tailoring_path(config_path),
    };
    match path {
        Some(path) => {
            info!("using tailoring {}", path.display());
            load_table(&path)
        }
        None => Ok(DensePairTable::uax14()),
    }
}
