use dioxus::prelude::*;
use linkinbio_core::render::Thumbnail;

/// Card thumbnail: image, emoji, or the placeholder logo
#[component]
pub fn CardThumbnail(thumbnail: Thumbnail) -> Element {
    match thumbnail {
        Thumbnail::Image {
            src,
            alt,
            dimensions,
            class,
        } => rsx! {
            img {
                class: "{class}",
                src: "{src}",
                alt: "{alt}",
                width: dimensions.width.map(|w| w.to_string()),
                height: dimensions.height.map(|h| h.to_string()),
                "sizes": "100vw",
            }
        },
        Thumbnail::Emoji { emoji, class } => rsx! {
            span { class: "{class}", "{emoji}" }
        },
        Thumbnail::Placeholder {
            src,
            alt,
            dimensions,
            class,
        } => rsx! {
            img {
                class: "{class}",
                src,
                alt,
                width: dimensions.width.map(|w| w.to_string()),
                height: dimensions.height.map(|h| h.to_string()),
            }
        },
    }
}
