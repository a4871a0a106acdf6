//! Quote-of-the-day client.
//!
//! The upstream returns quips of arbitrary length and the template cell
//! only fits a short line, so replies over `max_len` characters are
//! discarded and refetched. The retry loop is bounded: exhausting
//! `max_attempts` yields [`Error::QuoteUnavailable`] rather than spinning
//! on a persistently long-winded upstream.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::QuoteOptions;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    data: QuoteData,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    text: String,
}

pub struct QuoteClient {
    client: Client,
    url: String,
    max_len: usize,
    max_attempts: u32,
    retry_delay: Duration,
}

impl QuoteClient {
    pub fn new(url: impl Into<String>, options: &QuoteOptions) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            max_len: options.max_len,
            max_attempts: options.max_attempts,
            retry_delay: Duration::from_millis(options.retry_delay_ms),
        }
    }

    /// Fetch a quote no longer than `max_len` characters.
    ///
    /// Length is measured in characters, not bytes: the upstream text is
    /// mostly CJK.
    pub async fn fetch(&self) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let response: QuoteResponse =
                self.client.get(&self.url).send().await?.json().await?;
            let text = response.data.text;
            let len = text.chars().count();

            if len <= self.max_len {
                debug!(attempt, len, "quote accepted");
                return Ok(text);
            }

            debug!(attempt, len, max_len = self.max_len, "quote too long, retrying");
            if attempt < self.max_attempts {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        Err(Error::QuoteUnavailable {
            attempts: self.max_attempts,
        })
    }
}
