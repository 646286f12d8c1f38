use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordGridError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Unsupported Language: '{0}' (expected one of: en, de)")]
    UnsupportedLanguage(String),
}

pub type WgResult<T> = Result<T, WordGridError>;
