//! Small Link Card
//!
//! Pill-shaped row with a thumbnail and the title. The whole row is the
//! anchor.

use dioxus::prelude::*;
use linkinbio_core::render::CompactCardView;
use linkinbio_ui::Card;

use super::CardThumbnail;

#[component]
pub fn SmallLinkCard(view: CompactCardView) -> Element {
    rsx! {
        a { href: view.href.clone(), target: view.target.as_str(),
            Card { class: view.class.clone(),
                CardThumbnail { thumbnail: view.thumbnail.clone() }
                div { class: view.title_class, "{view.title}" }
            }
        }
    }
}
