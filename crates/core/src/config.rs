//! Gate configuration
//!
//! The embedder hands over a JSON object; recognized keys override the
//! defaults below and anything else is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ReviewError, Result};

pub const DEFAULT_DAYS_AFTER: u32 = 10;
pub const DEFAULT_RATING: u8 = 5;
pub const DEFAULT_CAPABILITY: &str = "administrator";

pub const DEFAULT_MESSAGE: &str = "Hey! It's been a little while that you've been using this product. \
You might not realize it, but user reviews are such a great help to us. We would be so grateful if \
you could take a minute to leave a review on WordPress.org. Many thanks in advance :)";

pub const DEFAULT_LINK_LABEL: &str = "Click here to leave your review";

/// Kind of item being reviewed; selects the review path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Theme,
    Plugin,
    #[default]
    Unspecified,
}

impl From<String> for ItemType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "theme" => ItemType::Theme,
            "plugin" => ItemType::Plugin,
            _ => ItemType::Unspecified,
        }
    }
}

impl From<ItemType> for String {
    fn from(value: ItemType) -> Self {
        match value {
            ItemType::Theme => "theme".to_string(),
            ItemType::Plugin => "plugin".to_string(),
            ItemType::Unspecified => String::new(),
        }
    }
}

/// Visibility scope of the registered notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Global,
    User,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::User => "user",
        }
    }
}

/// Review prompt settings, read-only once the gate is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    pub days_after: u32,
    #[serde(rename = "type")]
    pub item_type:  ItemType,
    pub slug:       String,
    pub rating:     u8,
    pub message:    String,
    pub link_label: String,
    pub cap:        String,
    pub scope:      Scope,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            days_after: DEFAULT_DAYS_AFTER,
            item_type:  ItemType::Unspecified,
            slug:       String::new(),
            rating:     DEFAULT_RATING,
            message:    DEFAULT_MESSAGE.to_string(),
            link_label: DEFAULT_LINK_LABEL.to_string(),
            cap:        DEFAULT_CAPABILITY.to_string(),
            scope:      Scope::Global,
        }
    }
}

impl ReviewConfig {
    /// Merge a configuration map over the defaults
    ///
    /// `Value::Null` yields the defaults. Any other non-object is rejected.
    pub fn from_value(args: Value) -> Result<Self> {
        let args = match args {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => Value::Object(map),
            other => {
                return Err(ReviewError::InvalidConfig(format!(
                    "expected an object, got {}",
                    other
                )))
            },
        };

        let config: ReviewConfig =
            serde_json::from_value(args).map_err(|e| ReviewError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(ReviewError::InvalidConfig(format!(
                "rating must be between 1 and 5, got {}",
                self.rating
            )));
        }
        Ok(())
    }
}

/// Minimum host and runtime versions the gate accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub host:    String,
    pub runtime: String,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            host:    "4.2".to_string(),
            runtime: "5.5".to_string(),
        }
    }
}
