use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
