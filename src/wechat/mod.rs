//! WeChat Official Account template-push API surface.

pub mod client;
pub mod message;

pub use client::WechatClient;
pub use message::{TemplateField, TemplateMessage};
