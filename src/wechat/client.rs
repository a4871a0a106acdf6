//! Token exchange and template push against the WeChat API.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Credentials;
use crate::error::{Error, Result};

use super::message::TemplateMessage;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    errcode: Option<i64>,
    errmsg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    #[serde(default)]
    errcode: i64,
    errmsg: Option<String>,
    msgid: Option<i64>,
}

pub struct WechatClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl WechatClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Exchange the app credentials for a short-lived access token.
    ///
    /// Tokens are not cached; every dispatch performs its own exchange.
    pub async fn access_token(&self) -> Result<String> {
        let url = format!(
            "{}/cgi-bin/token?grant_type=client_credential&appid={}&secret={}",
            self.base_url, self.credentials.app_id, self.credentials.secret
        );

        debug!("requesting access token");
        let response: TokenResponse = self.client.get(&url).send().await?.json().await?;

        match response.access_token {
            Some(token) => Ok(token),
            None => Err(Error::Token(format!(
                "errcode {}: {}",
                response.errcode.unwrap_or(-1),
                response.errmsg.unwrap_or_else(|| "no access_token in response".into())
            ))),
        }
    }

    /// Send a template message: fresh token, then POST to the push endpoint.
    ///
    /// Returns the provider's message receipt id. The JSON body goes out as
    /// literal UTF-8; non-ASCII text is never escaped.
    pub async fn send_template(&self, message: &TemplateMessage) -> Result<String> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/cgi-bin/message/template/send?access_token={}",
            self.base_url, token
        );

        info!(
            touser = %message.touser,
            template_id = %message.template_id,
            fields = message.data.len(),
            "sending template message"
        );

        let response: PushResponse = self
            .client
            .post(&url)
            .json(message)
            .send()
            .await?
            .json()
            .await?;

        if response.errcode != 0 {
            return Err(Error::Push {
                code: response.errcode,
                message: response.errmsg.unwrap_or_default(),
            });
        }

        match response.msgid {
            Some(msgid) => {
                info!(msgid, "template message accepted");
                Ok(msgid.to_string())
            }
            None => Err(Error::Push {
                code: 0,
                message: "response missing msgid".into(),
            }),
        }
    }
}
