use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    Unsupported(&'static str),
    InvalidInput(&'static str),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Unsupported(message) => write!(f, "unsupported: {message}"),
            CoreError::InvalidInput(message) => write!(f, "invalid input: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
