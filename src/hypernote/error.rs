use thiserror::Error;

#[derive(Error, Debug)]
pub enum HypernoteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid notes: {0}")]
    InvalidNotes(String),
}

pub type Result<T> = std::result::Result<T, HypernoteError>;
