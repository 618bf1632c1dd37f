//! Profile header record

use serde::{Deserialize, Serialize};

/// Who the page belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Display name shown under the avatar
    pub name: String,

    /// Short tagline
    #[serde(default)]
    pub description: String,

    /// Avatar image URL
    pub src: String,

    /// Text shown while the avatar image is unavailable
    #[serde(default)]
    pub fallback: String,

    /// CSS colour applied to the whole header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_colour: Option<String>,
}

impl ProfileRecord {
    pub fn new(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            src: src.into(),
            fallback: String::new(),
            font_colour: None,
        }
    }
}
