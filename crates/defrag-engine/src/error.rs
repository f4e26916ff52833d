use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompactorError {
    #[error("Invalid input: expected a decimal digit at position {position}, found {found:?}")]
    InvalidInput { position: usize, found: char },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CompactorError>;
