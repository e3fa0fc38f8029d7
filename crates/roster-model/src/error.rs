use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// The input was not a flat mapping of field names to scalars.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
