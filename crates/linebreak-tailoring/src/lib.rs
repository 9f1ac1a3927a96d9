#![forbid(unsafe_code)]

mod error;
mod export;
mod loader;
mod model;

pub use crate::error::{TailoringError, TailoringResult};
pub use crate::export::TableExport;
pub use crate::loader::{
    load_table, load_tailoring, parse_tailoring_json, parse_tailoring_toml, tailoring_to_json,
    tailoring_to_toml,
};
pub use crate::model::{BaseTable, ClassSelector, PairRule, TAILORING_SCHEMA, TailoringFile};
