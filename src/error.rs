use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeepError {
    #[error("Unknown output format: '{0}' (expected text, json, csv or source)")]
    UnknownFormat(String),

    #[error("File Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WAV Error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Invalid preview settings: {0}")]
    InvalidPreview(String),
}

pub type Result<T> = std::result::Result<T, BeepError>;
