use crate::cli::send::resolve_recipients;
use crate::cli::{output, ContextArgs};
use crate::config::{Config, Credentials};
use crate::error::{ConfigError, Result};
use crate::notifier::Notifier;

/// Send caller-supplied text through the context variant.
pub async fn execute(args: ContextArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    config.logging.init();

    let credentials = Credentials::from_env()?;
    if let Some(template) = args.template {
        config.push.template_id = template;
    }
    if config.push.template_id.is_empty() {
        return Err(ConfigError::MissingField {
            field: "push.template_id",
        }
        .into());
    }
    let recipients = resolve_recipients(&args.recipients, &config.push.recipients)?;

    let notifier = Notifier::new(&config, credentials);
    for recipient in &recipients {
        match notifier.send_context(recipient, &args.text).await {
            Ok(msgid) => output::ok(&format!("{recipient}: msgid {msgid}")),
            Err(e) => output::error(&format!("{recipient}: {e}")),
        }
    }

    Ok(())
}
