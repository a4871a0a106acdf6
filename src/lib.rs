//! wxdaily - daily template-message push for WeChat Official Accounts.
//!
//! Fetches a short quote of the day, optionally a weather snapshot, and a
//! day counter relative to a fixed anchor date, then pushes a
//! server-rendered template message to one or more recipients. Everything
//! is a single-shot HTTP call; nothing is persisted between runs.
//!
//! # Modules
//!
//! - [`cli`] - clap subcommands (`send`, `context`, `check`) and output helpers
//! - [`config`] - TOML configuration, environment credentials, logging setup
//! - [`daycount`] - elapsed days since the anchor date
//! - [`error`] - error types for the crate
//! - [`notifier`] - per-recipient orchestration of the upstream calls
//! - [`quote`] - bounded-retry quote-of-the-day client
//! - [`weather`] - degrade-and-continue weather snapshot client
//! - [`wechat`] - token exchange, message model, template push

pub mod cli;
pub mod config;
pub mod daycount;
pub mod error;
pub mod notifier;
pub mod quote;
pub mod weather;
pub mod wechat;
