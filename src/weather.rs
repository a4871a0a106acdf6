//! Weather snapshot client.
//!
//! Weather is decoration on the daily message, not a precondition for it:
//! any transport or shape failure degrades to an empty snapshot and the
//! send goes out without the weather fields.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Two display strings for the template: date + weekday, and the
/// condition / temperature-range / notice line. Both absent when the
/// fetch failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub now: Option<String>,
    pub summary: Option<String>,
}

impl WeatherSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.now.is_none() && self.summary.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    data: WeatherData,
}

#[derive(Debug, Deserialize)]
struct WeatherData {
    forecast: Vec<Forecast>,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    /// Date as `YYYY-MM-DD`.
    ymd: String,
    /// Localized weekday name.
    week: String,
    /// Condition, e.g. 晴 / 多云.
    #[serde(rename = "type")]
    condition: String,
    /// Formatted as `低温 -5℃`; only the second token is displayed.
    low: String,
    /// Formatted as `高温 3℃`.
    high: String,
    notice: String,
}

pub struct WeatherClient {
    client: Client,
    url: String,
}

impl WeatherClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Fetch today's forecast, degrading to an empty snapshot on failure.
    pub async fn fetch(&self) -> WeatherSnapshot {
        match self.try_fetch().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "weather fetch failed, continuing without weather");
                WeatherSnapshot::empty()
            }
        }
    }

    async fn try_fetch(&self) -> Result<WeatherSnapshot> {
        let response: WeatherResponse = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let forecast = response
            .data
            .forecast
            .into_iter()
            .next()
            .ok_or_else(|| Error::Weather("empty forecast list".into()))?;

        debug!(ymd = %forecast.ymd, condition = %forecast.condition, "weather fetched");
        Ok(format_snapshot(&forecast))
    }
}

fn format_snapshot(forecast: &Forecast) -> WeatherSnapshot {
    let now = match forecast.ymd.split('-').collect::<Vec<_>>()[..] {
        [y, m, d] => format!("{y}年{m}月{d}日 {}", forecast.week),
        _ => format!("{} {}", forecast.ymd, forecast.week),
    };
    let summary = format!(
        "{} {}-{} {}",
        forecast.condition,
        second_token(&forecast.low),
        second_token(&forecast.high),
        forecast.notice
    );

    WeatherSnapshot {
        now: Some(now),
        summary: Some(summary),
    }
}

/// `低温 -5℃` → `-5℃`; a value without the label passes through whole.
fn second_token(s: &str) -> &str {
    s.split_whitespace().nth(1).unwrap_or(s)
}
