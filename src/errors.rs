// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParlorError {
    #[error("config error: {0}")]
    Config(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ParlorError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ParlorError::Config(msg.into())
    }

    pub fn clipboard_error(msg: impl Into<String>) -> Self {
        ParlorError::Clipboard(msg.into())
    }
}

pub type ParlorResult<T> = Result<T, ParlorError>;
