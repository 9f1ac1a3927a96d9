use linebreak_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailoringError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("pair table error: {0}")]
    Table(#[from] CoreError),
    #[error("unsupported tailoring schema {0}")]
    UnsupportedSchema(u32),
    #[error("unsupported tailoring file format: {0}")]
    UnsupportedFormat(String),
    #[error("unknown break class {0}")]
    UnknownClass(String),
    #[error("break class {0} is resolved outside the pair table")]
    ClassOutsideTable(String),
    #[error("unknown break action {0}")]
    UnknownAction(String),
}

pub type TailoringResult<T> = Result<T, TailoringError>;
