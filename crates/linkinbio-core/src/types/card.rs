//! Link card records.
//!
//! Cards are tagged by their `size` field. Unknown sizes don't fail to
//! parse; they become [`CardRecord::Unsupported`] and render nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::Size;

fn default_button_text() -> String {
    "Purchase".to_string()
}

/// Compact pill link (`size: "sm"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmallCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_emoji: Option<String>,
    #[serde(default)]
    pub new_tab: bool,
}

/// Preview/purchase card (`size: "md"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_emoji: Option<String>,
    #[serde(default)]
    pub new_tab: bool,
    #[serde(default)]
    pub description: String,
    /// Amount in major units (e.g. `19.99`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// ISO 4217 code for `price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Embedded checkout URL; takes over the call-to-action when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polar_checkout_link: Option<String>,
    #[serde(default = "default_button_text")]
    pub button_text: String,
}

impl MediumCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            url: None,
            title: title.into(),
            thumbnail_image: None,
            thumbnail_emoji: None,
            new_tab: false,
            description: String::new(),
            price: None,
            currency: None,
            polar_checkout_link: None,
            button_text: default_button_text(),
        }
    }
}

impl SmallCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            url: None,
            title: title.into(),
            thumbnail_image: None,
            thumbnail_emoji: None,
            new_tab: false,
        }
    }
}

/// Thumbnail inputs of a card; empty strings count as absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThumbnailSource<'a> {
    pub image: Option<&'a str>,
    pub emoji: Option<&'a str>,
}

impl<'a> ThumbnailSource<'a> {
    pub fn new(image: Option<&'a str>, emoji: Option<&'a str>) -> Self {
        Self {
            image: image.filter(|s| !s.trim().is_empty()),
            emoji: emoji.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Where an anchor opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Blank,
    SameFrame,
}

impl LinkTarget {
    pub fn from_new_tab(new_tab: bool) -> Self {
        if new_tab {
            LinkTarget::Blank
        } else {
            LinkTarget::SameFrame
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
            LinkTarget::SameFrame => "_self",
        }
    }
}

/// A link entry on the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum CardRecord {
    Small(SmallCard),
    Medium(MediumCard),
    /// Any other `size` (or none at all)
    Unsupported { size: Option<String> },
}

impl TryFrom<Value> for CardRecord {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let size = match value.get("size") {
            Some(Value::String(size)) => Some(size.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        match size.as_deref().map(str::parse::<Size>) {
            Some(Ok(Size::Sm)) => Ok(CardRecord::Small(serde_json::from_value(value)?)),
            Some(Ok(Size::Md)) => Ok(CardRecord::Medium(serde_json::from_value(value)?)),
            _ => Ok(CardRecord::Unsupported { size }),
        }
    }
}

impl CardRecord {
    pub fn size(&self) -> Option<Size> {
        match self {
            CardRecord::Small(_) => Some(Size::Sm),
            CardRecord::Medium(_) => Some(Size::Md),
            CardRecord::Unsupported { .. } => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            CardRecord::Small(card) => Some(&card.title),
            CardRecord::Medium(card) => Some(&card.title),
            CardRecord::Unsupported { .. } => None,
        }
    }

    pub fn thumbnail(&self) -> ThumbnailSource<'_> {
        match self {
            CardRecord::Small(card) => ThumbnailSource::new(
                card.thumbnail_image.as_deref(),
                card.thumbnail_emoji.as_deref(),
            ),
            CardRecord::Medium(card) => ThumbnailSource::new(
                card.thumbnail_image.as_deref(),
                card.thumbnail_emoji.as_deref(),
            ),
            CardRecord::Unsupported { .. } => ThumbnailSource::default(),
        }
    }
}
