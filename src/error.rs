use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoenndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HoenndexError>;
