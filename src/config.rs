//! Configuration loading and validation.
//!
//! Settings come from an optional TOML file (recipients, endpoints, retry
//! tuning, logging); the WeChat credentials come only from the environment
//! so they never land in a checked-in file.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub push: PushConfig,
    pub endpoints: EndpointConfig,
    pub quote: QuoteOptions,
    pub logging: LoggingConfig,
}

/// Recipients and template settings for the push itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// Recipient open-ids, notified sequentially.
    pub recipients: Vec<String>,
    /// Template id registered with the official account.
    pub template_id: String,
    /// Landing URL attached to context-variant messages.
    pub callback_url: String,
    /// Top bar color for the full daily variant.
    pub top_color: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            recipients: Vec::new(),
            template_id: String::new(),
            callback_url: "http://101.43.138.173:8090/".into(),
            top_color: "#FF0000".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub wechat_base: String,
    pub quote_url: String,
    pub weather_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            wechat_base: "https://api.weixin.qq.com".into(),
            quote_url: "https://api.shadiao.pro/chp".into(),
            weather_url: "http://t.weather.itboy.net/api/weather/city/101010100".into(),
        }
    }
}

/// Tuning for the bounded quote-retry loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuoteOptions {
    /// Longest acceptable quote, in characters.
    pub max_len: usize,
    /// Upper bound on fetch attempts before giving up.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub retry_delay_ms: u64,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            max_len: 20,
            max_attempts: 8,
            retry_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: the tool runs fine on defaults plus
    /// environment credentials, with recipients given on the command line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.endpoints.wechat_base.is_empty() {
            return Err(ConfigError::MissingField {
                field: "endpoints.wechat_base",
            });
        }
        if self.endpoints.quote_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "endpoints.quote_url",
            });
        }
        if self.endpoints.weather_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "endpoints.weather_url",
            });
        }
        if self.quote.max_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quote.max_len",
                reason: "must be at least 1".into(),
            });
        }
        if self.quote.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quote.max_attempts",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// WeChat app credentials, sourced from the environment only.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_id: String,
    pub secret: String,
}

impl Credentials {
    /// Read `WECHAT_APP_ID` / `WECHAT_APP_SECRET`.
    ///
    /// An unset or empty variable is an explicit configuration error, never
    /// a silently malformed request URL downstream.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        let app_id = std::env::var("WECHAT_APP_ID")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "WECHAT_APP_ID",
            })?;
        let secret = std::env::var("WECHAT_APP_SECRET")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "WECHAT_APP_SECRET",
            })?;

        Ok(Self { app_id, secret })
    }
}
