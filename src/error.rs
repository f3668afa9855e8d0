use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing field in serverinfo response: {path}")]
    MissingField { path: String },

    #[error("Field is not a metric value: {path}")]
    InvalidValue { path: String },

    #[error("Unparsable Nextcloud version: {0:?}")]
    InvalidVersion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PluginError>;
