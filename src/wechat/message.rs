//! Template message model and the three message variants.
//!
//! Field names must match the placeholder schema of the remotely
//! registered template; a mismatch surfaces as a provider rejection at
//! send time, not a local error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::weather::WeatherSnapshot;

pub const COLOR_DAY_COUNT: &str = "#FF1493";
pub const COLOR_QUOTE: &str = "#FF6347";
pub const COLOR_WEATHER: &str = "#B462CC";

/// One named cell of the server-rendered template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateField {
    pub value: String,
    pub color: String,
}

/// Request body for the template-push endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMessage {
    pub touser: String,
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topcolor: Option<String>,
    pub data: BTreeMap<String, TemplateField>,
}

impl TemplateMessage {
    pub fn new(touser: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            touser: touser.into(),
            template_id: template_id.into(),
            url: None,
            topcolor: None,
            data: BTreeMap::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_top_color(mut self, color: impl Into<String>) -> Self {
        self.topcolor = Some(color.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.data.insert(
            name.into(),
            TemplateField {
                value: value.into(),
                color: color.into(),
            },
        );
        self
    }
}

/// Two-field variant: day count + quote, no weather, no top color.
pub fn simple(
    touser: &str,
    template_id: &str,
    day_count: i64,
    quote: &str,
) -> TemplateMessage {
    TemplateMessage::new(touser, template_id)
        .field("love", day_count.to_string(), COLOR_DAY_COUNT)
        .field("word", quote, COLOR_QUOTE)
}

/// Daily variant: weather, day count, and quote under a colored top bar.
///
/// An absent weather snapshot renders as empty cells; the remote template
/// decides how that displays.
pub fn full(
    touser: &str,
    template_id: &str,
    weather: &WeatherSnapshot,
    day_count: i64,
    quote: &str,
    top_color: &str,
) -> TemplateMessage {
    TemplateMessage::new(touser, template_id)
        .with_top_color(top_color)
        .field("NOW", weather.now.clone().unwrap_or_default(), COLOR_WEATHER)
        .field(
            "WHETHER",
            weather.summary.clone().unwrap_or_default(),
            COLOR_WEATHER,
        )
        .field("LOVE", day_count.to_string(), COLOR_DAY_COUNT)
        .field("WORD", quote, COLOR_QUOTE)
}

/// Free-text variant with a landing URL; skips quote, weather and day count.
pub fn context(
    touser: &str,
    template_id: &str,
    text: &str,
    callback_url: &str,
) -> TemplateMessage {
    TemplateMessage::new(touser, template_id)
        .with_url(callback_url)
        .field("context", text, COLOR_QUOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_names(message: &TemplateMessage) -> Vec<&str> {
        message.data.keys().map(String::as_str).collect()
    }

    #[test]
    fn simple_variant_has_exactly_love_and_word() {
        let message = simple("openid", "tmpl", 42, "短句");
        assert_eq!(field_names(&message), ["love", "word"]);
        assert_eq!(message.data["love"].value, "42");
        assert!(message.url.is_none());
        assert!(message.topcolor.is_none());
    }

    #[test]
    fn full_variant_has_exactly_the_four_fields() {
        let weather = WeatherSnapshot {
            now: Some("2021年01月01日 星期五".into()),
            summary: Some("晴 -5℃-3℃ 天冷注意保暖".into()),
        };
        let message = full("openid", "tmpl", &weather, 377, "短句", "#FF0000");

        assert_eq!(field_names(&message), ["LOVE", "NOW", "WHETHER", "WORD"]);
        assert_eq!(message.topcolor.as_deref(), Some("#FF0000"));
        assert_eq!(message.data["LOVE"].value, "377");
        assert_eq!(message.data["LOVE"].color, COLOR_DAY_COUNT);
    }

    #[test]
    fn full_variant_renders_missing_weather_as_empty_cells() {
        let message = full("openid", "tmpl", &WeatherSnapshot::empty(), 1, "短句", "#FF0000");
        assert_eq!(message.data["NOW"].value, "");
        assert_eq!(message.data["WHETHER"].value, "");
    }

    #[test]
    fn context_variant_carries_url_and_single_field() {
        let message = context("openid", "tmpl", "今晚早点回家", "http://example.com/");
        assert_eq!(field_names(&message), ["context"]);
        assert_eq!(message.url.as_deref(), Some("http://example.com/"));
    }

    #[test]
    fn serialization_preserves_non_ascii_literally() {
        let message = simple("openid", "tmpl", 1, "今天也想你");
        let body = serde_json::to_string(&message).expect("serialize message");

        assert!(body.contains("今天也想你"));
        assert!(!body.contains("\\u"));
    }

    #[test]
    fn absent_url_and_topcolor_are_omitted_from_the_body() {
        let message = simple("openid", "tmpl", 1, "短句");
        let body = serde_json::to_string(&message).expect("serialize message");

        assert!(!body.contains("\"url\""));
        assert!(!body.contains("\"topcolor\""));
    }
}
