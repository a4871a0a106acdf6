//! Command-line interface definitions.

pub mod check;
pub mod context;
pub mod output;
pub mod send;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wxdaily - daily quote/weather template-message push for WeChat.
#[derive(Parser, Debug)]
#[command(name = "wxdaily")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send the daily message to the configured recipients
    Send(SendArgs),

    /// Send a free-text context message
    Context(ContextArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `wxdaily check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and credentials
    Config(ConfigPathArg),
    /// Perform a live access-token exchange
    Token(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `send` subcommand.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Recipient open-ids (default: the configured recipient list)
    #[arg(long = "to", value_name = "OPENID")]
    pub recipients: Vec<String>,

    /// Override the configured template id
    #[arg(long)]
    pub template: Option<String>,

    /// Send the two-field variant (day count + quote, no weather)
    #[arg(long)]
    pub simple: bool,
}

/// Arguments for the `context` subcommand.
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Free text for the message body
    pub text: String,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Recipient open-ids (default: the configured recipient list)
    #[arg(long = "to", value_name = "OPENID")]
    pub recipients: Vec<String>,

    /// Override the configured template id
    #[arg(long)]
    pub template: Option<String>,
}
