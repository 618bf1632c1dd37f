//! Keys into the theme tree.
//!
//! A [`Scope`] names one element of the page (category, optional card size,
//! optional sub-element, preview context). The resolver turns a scope plus
//! an [`Attribute`] into an ordered list of JSON pointers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level theme category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Links,
    Profile,
    Font,
    Container,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::Links => "links",
            Category::Profile => "profile",
            Category::Font => "font",
            Category::Container => "container",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "links" => Ok(Category::Links),
            "profile" => Ok(Category::Profile),
            "font" => Ok(Category::Font),
            "container" => Ok(Category::Container),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Card size variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    Md,
}

impl Size {
    pub fn key(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            other => Err(format!("unknown size '{}'", other)),
        }
    }
}

/// Styled sub-element within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubElement {
    ThumbnailImage,
    ThumbnailEmoji,
    Button,
    Background,
    Content,
    Avatar,
    Header,
    Body,
    /// `font.header` nested under a category (e.g. `links.font.header`)
    FontHeader,
    /// `font.body` nested under a category
    FontBody,
}

impl SubElement {
    /// Path segments below the scope, in order
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            SubElement::ThumbnailImage => &["thumbnailImage"],
            SubElement::ThumbnailEmoji => &["thumbnailEmoji"],
            SubElement::Button => &["button"],
            SubElement::Background => &["background"],
            SubElement::Content => &["content"],
            SubElement::Avatar => &["avatar"],
            SubElement::Header => &["header"],
            SubElement::Body => &["body"],
            SubElement::FontHeader => &["font", "header"],
            SubElement::FontBody => &["font", "body"],
        }
    }
}

impl FromStr for SubElement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumbnailImage" => Ok(SubElement::ThumbnailImage),
            "thumbnailEmoji" => Ok(SubElement::ThumbnailEmoji),
            "button" => Ok(SubElement::Button),
            "background" => Ok(SubElement::Background),
            "content" => Ok(SubElement::Content),
            "avatar" => Ok(SubElement::Avatar),
            "header" => Ok(SubElement::Header),
            "body" => Ok(SubElement::Body),
            "font.header" => Ok(SubElement::FontHeader),
            "font.body" => Ok(SubElement::FontBody),
            other => Err(format!("unknown element '{}'", other)),
        }
    }
}

/// Resolvable style attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Merged across every level that defines it
    ClassName,
    Width,
    Height,
    ButtonPosition,
}

impl Attribute {
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::ClassName => "className",
            Attribute::Width => "width",
            Attribute::Height => "height",
            Attribute::ButtonPosition => "buttonPosition",
        }
    }

    /// Scalars resolve first-wins; class names merge.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Attribute::ClassName)
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "className" => Ok(Attribute::ClassName),
            "width" => Ok(Attribute::Width),
            "height" => Ok(Attribute::Height),
            "buttonPosition" => Ok(Attribute::ButtonPosition),
            other => Err(format!("unknown attribute '{}'", other)),
        }
    }
}

/// Where a medium card renders its call-to-action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    /// Inside the text column
    #[default]
    Inline,
    /// Pinned after the card content
    End,
}

impl FromStr for ButtonPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(ButtonPosition::Inline),
            "end" => Ok(ButtonPosition::End),
            other => Err(format!("unknown button position '{}'", other)),
        }
    }
}

/// One element of the page, as seen by the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    pub category: Category,
    pub size: Option<Size>,
    pub element: Option<SubElement>,
    pub preview: bool,
}

impl Scope {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            size: None,
            element: None,
            preview: false,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn element(mut self, element: SubElement) -> Self {
        self.element = Some(element);
        self
    }

    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }
}
