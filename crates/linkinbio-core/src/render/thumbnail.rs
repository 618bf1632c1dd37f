//! Thumbnail selection: image, then emoji, then the placeholder logo.

use crate::theme::{ClassList, Category, Dimensions, Scope, Size, SubElement, ThemeResolver};
use crate::types::ThumbnailSource;

pub const PLACEHOLDER_IMAGE: &str = "/images/linkinbio/linkinbio-logo.png";
pub const PLACEHOLDER_ALT: &str = "Linkinbio-placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailRequest<'a> {
    pub source: ThumbnailSource<'a>,
    pub alt: &'a str,
    pub size: Size,
    /// Styling the closed preview of a medium card
    pub preview: bool,
    /// Extra classes from the caller, merged last
    pub class: Option<&'a str>,
}

impl<'a> ThumbnailRequest<'a> {
    pub fn new(source: ThumbnailSource<'a>, alt: &'a str, size: Size) -> Self {
        Self {
            source,
            alt,
            size,
            preview: false,
            class: None,
        }
    }

    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Image {
        src: String,
        alt: String,
        dimensions: Dimensions,
        class: String,
    },
    Emoji {
        emoji: String,
        class: String,
    },
    Placeholder {
        src: &'static str,
        alt: &'static str,
        dimensions: Dimensions,
        class: String,
    },
}

impl Thumbnail {
    pub fn kind(&self) -> &'static str {
        match self {
            Thumbnail::Image { .. } => "image",
            Thumbnail::Emoji { .. } => "emoji",
            Thumbnail::Placeholder { .. } => "placeholder",
        }
    }

    pub fn class(&self) -> &str {
        match self {
            Thumbnail::Image { class, .. }
            | Thumbnail::Emoji { class, .. }
            | Thumbnail::Placeholder { class, .. } => class,
        }
    }
}

pub fn resolve_thumbnail(theme: &ThemeResolver<'_>, request: ThumbnailRequest<'_>) -> Thumbnail {
    // The preview sub-scope only exists for medium cards
    let preview = request.preview && request.size == Size::Md;
    let size = request.size;
    let image_scope = Scope::new(Category::Links)
        .size(size)
        .element(SubElement::ThumbnailImage)
        .preview(preview);

    if let Some(image) = request.source.image {
        return Thumbnail::Image {
            src: image.to_string(),
            alt: request.alt.to_string(),
            dimensions: theme.dimensions(&image_scope),
            class: ClassList::new()
                .with(format!("{}-card-thumbnailImage", size))
                .with("aspect-square")
                .with_opt(theme.class_name(&image_scope))
                .with_opt(request.class)
                .merge(),
        };
    }

    if let Some(emoji) = request.source.emoji {
        let emoji_scope = Scope::new(Category::Links)
            .size(size)
            .element(SubElement::ThumbnailEmoji)
            .preview(preview);
        return Thumbnail::Emoji {
            emoji: emoji.to_string(),
            class: ClassList::new()
                .with(format!("{}-card-thumbnailEmoji", size))
                .with("size-10 text-3xl content-center aspect-square")
                .with_opt(theme.class_name(&emoji_scope))
                .with_opt(request.class)
                .merge(),
        };
    }

    Thumbnail::Placeholder {
        src: PLACEHOLDER_IMAGE,
        alt: PLACEHOLDER_ALT,
        dimensions: theme.dimensions(&image_scope),
        class: ClassList::new()
            .with(format!("{}-card-thumbnailImage", size))
            .with("text-muted-foreground bg-card")
            .with_opt(theme.class_name(&image_scope))
            .with_opt(request.class)
            .merge(),
    }
}
