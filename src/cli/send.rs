use crate::cli::{output, SendArgs};
use crate::config::{Config, Credentials};
use crate::error::{ConfigError, Result};
use crate::notifier::Notifier;

/// Send the daily (or simple) variant to each recipient in turn.
///
/// Per-recipient dispatch failures are printed and the loop continues;
/// only configuration problems abort the run.
pub async fn execute(args: SendArgs) -> Result<()> {
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
        let result = if args.simple {
            notifier.send_simple(recipient).await
        } else {
            notifier.send_daily(recipient).await
        };

        match result {
            Ok(msgid) => output::ok(&format!("{recipient}: msgid {msgid}")),
            Err(e) => output::error(&format!("{recipient}: {e}")),
        }
    }

    Ok(())
}

/// Command-line recipients win over the configured list; an empty result
/// is a configuration error.
pub(crate) fn resolve_recipients(
    from_args: &[String],
    from_config: &[String],
) -> Result<Vec<String>> {
    let recipients = if from_args.is_empty() {
        from_config.to_vec()
    } else {
        from_args.to_vec()
    };

    if recipients.is_empty() {
        return Err(ConfigError::MissingField {
            field: "push.recipients",
        }
        .into());
    }
    Ok(recipients)
}
