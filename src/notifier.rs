//! Orchestration of the daily push.
//!
//! A [`Notifier`] owns the three upstream clients and composes one message
//! per recipient: weather (best effort) + quote + day counter for the
//! daily variants, or caller-supplied text for the context variant. Each
//! dispatch performs its own token exchange; recipients are processed
//! sequentially by the CLI layer.

use tracing::debug;

use crate::config::{Config, Credentials, PushConfig};
use crate::daycount;
use crate::error::Result;
use crate::quote::QuoteClient;
use crate::weather::WeatherClient;
use crate::wechat::{message, WechatClient};

pub struct Notifier {
    push: PushConfig,
    wechat: WechatClient,
    quotes: QuoteClient,
    weather: WeatherClient,
}

impl Notifier {
    pub fn new(config: &Config, credentials: Credentials) -> Self {
        Self {
            push: config.push.clone(),
            wechat: WechatClient::new(config.endpoints.wechat_base.clone(), credentials),
            quotes: QuoteClient::new(config.endpoints.quote_url.clone(), &config.quote),
            weather: WeatherClient::new(config.endpoints.weather_url.clone()),
        }
    }

    /// Send the full daily variant (weather + day count + quote).
    pub async fn send_daily(&self, recipient: &str) -> Result<String> {
        let weather = self.weather.fetch().await;
        let quote = self.quotes.fetch().await?;
        let days = daycount::days_today();
        debug!(recipient, days, weather_present = !weather.is_empty(), "daily message composed");

        let message = message::full(
            recipient,
            &self.push.template_id,
            &weather,
            days,
            &quote,
            &self.push.top_color,
        );
        self.wechat.send_template(&message).await
    }

    /// Send the two-field variant (day count + quote).
    pub async fn send_simple(&self, recipient: &str) -> Result<String> {
        let quote = self.quotes.fetch().await?;
        let days = daycount::days_today();

        let message = message::simple(recipient, &self.push.template_id, days, &quote);
        self.wechat.send_template(&message).await
    }

    /// Send free text through the context variant.
    pub async fn send_context(&self, recipient: &str, text: &str) -> Result<String> {
        let message = message::context(
            recipient,
            &self.push.template_id,
            text,
            &self.push.callback_url,
        );
        self.wechat.send_template(&message).await
    }
}
