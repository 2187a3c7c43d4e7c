//! Copy domain types: delivery channels, writing tones, and create-input
//! validation.
//!
//! `Channel` and `Tone` are closed sets. Requests carry them as free strings,
//! so [`CreateCopyRequest::validate`] is the single place where user input is
//! narrowed into a [`CreateCopyInput`] that the rest of the system trusts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// Delivery surface a copy is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    App,
    Line,
    Pop,
    Sns,
    Email,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::App,
        Channel::Line,
        Channel::Pop,
        Channel::Sns,
        Channel::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::App => "app",
            Channel::Line => "line",
            Channel::Pop => "pop",
            Channel::Sns => "sns",
            Channel::Email => "email",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| invalid_choice("channel", s, Channel::ALL.map(Channel::as_str)))
    }
}

impl TryFrom<String> for Channel {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Stylistic register requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Pop,
    Trust,
    Value,
    Luxury,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Pop,
        Tone::Trust,
        Tone::Value,
        Tone::Luxury,
        Tone::Casual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Pop => "pop",
            Tone::Trust => "trust",
            Tone::Value => "value",
            Tone::Luxury => "luxury",
            Tone::Casual => "casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| invalid_choice("tone", s, Tone::ALL.map(Tone::as_str)))
    }
}

impl TryFrom<String> for Tone {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn invalid_choice<const N: usize>(field: &str, value: &str, valid: [&str; N]) -> CoreError {
    CoreError::Validation(format!(
        "Invalid {field} '{value}'. Must be one of: {}",
        valid.join(", ")
    ))
}

// ---------------------------------------------------------------------------
// Create input
// ---------------------------------------------------------------------------

/// Raw body of `POST /copies`.
///
/// Every field is optional so that a missing field surfaces as a
/// [`CoreError::Validation`] rather than a deserialization rejection.
/// Unknown keys (including a client-supplied `likes`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCopyRequest {
    pub product_name: Option<String>,
    pub product_features: Option<String>,
    pub target: Option<String>,
    pub channel: Option<String>,
    pub tone: Option<String>,
    pub is_published: Option<bool>,
}

/// Validated create input. Text fields are kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCopyInput {
    pub product_name: String,
    pub product_features: String,
    pub target: String,
    pub channel: Channel,
    pub tone: Tone,
    pub is_published: bool,
}

impl CreateCopyRequest {
    /// Check required fields and narrow `channel`/`tone` into their enums.
    ///
    /// Fields are checked in wire order, so the first missing field is the
    /// one reported.
    pub fn validate(self) -> Result<CreateCopyInput, CoreError> {
        let product_name = require("productName", self.product_name)?;
        let product_features = require("productFeatures", self.product_features)?;
        let target = require("target", self.target)?;
        let channel = require("channel", self.channel)?.parse()?;
        let tone = require("tone", self.tone)?.parse()?;

        Ok(CreateCopyInput {
            product_name,
            product_features,
            target,
            channel,
            tone,
            is_published: self.is_published.unwrap_or(false),
        })
    }
}

/// A whitespace-only value counts as missing, but the original string is
/// returned untouched.
fn require(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_request() -> CreateCopyRequest {
        CreateCopyRequest {
            product_name: Some("X".to_string()),
            product_features: Some("Y".to_string()),
            target: Some("Z".to_string()),
            channel: Some("sns".to_string()),
            tone: Some("casual".to_string()),
            is_published: Some(true),
        }
    }

    #[test]
    fn channel_round_trips_through_str() {
        for channel in Channel::ALL {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), channel);
        }
    }

    #[test]
    fn tone_round_trips_through_str() {
        for tone in Tone::ALL {
            assert_eq!(tone.as_str().parse::<Tone>().unwrap(), tone);
        }
    }

    #[test]
    fn unknown_channel_lists_valid_values() {
        let err = "push".parse::<Channel>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert_eq!(msg, "Invalid channel 'push'. Must be one of: app, line, pop, sns, email");
        });
    }

    #[test]
    fn channel_parse_is_case_sensitive() {
        assert!("SNS".parse::<Channel>().is_err());
        assert!("Casual".parse::<Tone>().is_err());
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Channel::Email).unwrap(), "email");
        assert_eq!(serde_json::to_value(Tone::Luxury).unwrap(), "luxury");
    }

    #[test]
    fn validate_accepts_complete_request() {
        let input = full_request().validate().unwrap();
        assert_eq!(input.product_name, "X");
        assert_eq!(input.channel, Channel::Sns);
        assert_eq!(input.tone, Tone::Casual);
        assert!(input.is_published);
    }

    #[test]
    fn validate_defaults_is_published_to_false() {
        let req = CreateCopyRequest {
            is_published: None,
            ..full_request()
        };
        assert!(!req.validate().unwrap().is_published);
    }

    #[test]
    fn validate_reports_missing_field_by_wire_name() {
        let req = CreateCopyRequest {
            product_features: None,
            ..full_request()
        };
        assert_matches!(req.validate(), Err(CoreError::Validation(msg)) => {
            assert_eq!(msg, "productFeatures is required");
        });
    }

    #[test]
    fn validate_rejects_blank_target() {
        let req = CreateCopyRequest {
            target: Some("   ".to_string()),
            ..full_request()
        };
        assert_matches!(req.validate(), Err(CoreError::Validation(msg)) => {
            assert_eq!(msg, "target is required");
        });
    }

    #[test]
    fn validate_rejects_unknown_tone() {
        let req = CreateCopyRequest {
            tone: Some("angry".to_string()),
            ..full_request()
        };
        assert_matches!(req.validate(), Err(CoreError::Validation(msg)) => {
            assert!(msg.starts_with("Invalid tone 'angry'"));
        });
    }

    #[test]
    fn validate_keeps_surrounding_whitespace() {
        let req = CreateCopyRequest {
            product_name: Some("  Green Tea  ".to_string()),
            ..full_request()
        };
        assert_eq!(req.validate().unwrap().product_name, "  Green Tea  ");
    }

    #[test]
    fn request_ignores_unknown_keys() {
        let req: CreateCopyRequest = serde_json::from_value(serde_json::json!({
            "productName": "X",
            "likes": 42,
        }))
        .unwrap();
        assert_eq!(req.product_name.as_deref(), Some("X"));
        assert!(req.channel.is_none());
    }
}
