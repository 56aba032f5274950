use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Encoding: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FilterError::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
