use crate::cli::{output, ConfigPathArg};
use crate::config::{Config, Credentials};
use crate::error::Result;
use crate::wechat::WechatClient;

/// Load and validate the configuration, reporting what the tool would use.
pub async fn execute_config(args: ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::section("Configuration");
    output::key_value("Recipients", config.push.recipients.len());
    output::key_value(
        "Template",
        if config.push.template_id.is_empty() {
            "(unset)"
        } else {
            config.push.template_id.as_str()
        },
    );
    output::key_value("WeChat base", &config.endpoints.wechat_base);
    output::key_value("Quote URL", &config.endpoints.quote_url);
    output::key_value("Weather URL", &config.endpoints.weather_url);
    output::key_value(
        "Quote retry",
        format!(
            "max {} chars, {} attempts, {} ms delay",
            config.quote.max_len, config.quote.max_attempts, config.quote.retry_delay_ms
        ),
    );

    match Credentials::from_env() {
        Ok(credentials) => {
            output::ok(&format!("credentials present (app id {})", mask(&credentials.app_id)));
        }
        Err(e) => output::warn(&format!("credentials not usable: {e}")),
    }

    output::ok("configuration valid");
    Ok(())
}

/// Perform a live token exchange against the configured endpoint.
pub async fn execute_token(args: ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;
    let credentials = Credentials::from_env()?;

    output::section("Token Check");
    output::key_value("App id", mask(&credentials.app_id));
    output::key_value("Endpoint", &config.endpoints.wechat_base);

    let client = WechatClient::new(config.endpoints.wechat_base.clone(), credentials);
    let token = client.access_token().await?;

    output::ok(&format!("token exchange succeeded ({} chars)", token.len()));
    Ok(())
}

fn mask(value: &str) -> String {
    if value.len() > 8 {
        format!("{}...{}", &value[..4], &value[value.len() - 2..])
    } else {
        format!("{}...", &value[..value.len().min(4)])
    }
}
