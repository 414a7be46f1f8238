use thiserror::Error;

/// Library-level error type.
/// The binary wraps these in `anyhow` with command context.
#[derive(Debug, Error)]
pub enum CareerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Resume rendering failed: {0}")]
    Render(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Unknown stream '{0}' (expected Science, Commerce, Arts or Other)")]
    UnknownStream(String),

    #[error("Unknown science focus '{0}' (expected Medical or Non-Medical)")]
    UnknownFocus(String),
}

pub type Result<T> = std::result::Result<T, CareerError>;
