use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token exchange failed: {0}")]
    Token(String),

    #[error("push rejected by provider (errcode {code}): {message}")]
    Push { code: i64, message: String },

    #[error("no quote within length limit after {attempts} attempts")]
    QuoteUnavailable { attempts: u32 },

    #[error("unexpected weather payload: {0}")]
    Weather(String),
}

pub type Result<T> = std::result::Result<T, Error>;
