use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    #[error("invalid meal slot '{0}' (expected breakfast, lunch or dinner)")]
    InvalidSlot(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
