//! Medium Link Card
//!
//! A closed preview card in the list; clicking its surface opens the
//! detail card in a bottom drawer. Each wrapper owns its own open state.

use dioxus::prelude::*;
use linkinbio_core::render::{DetailCardView, MediumCardView, PreviewCardView, PreviewEvent, PreviewState};
use linkinbio_core::theme::ButtonPosition;
use linkinbio_ui::{Card, CardContent, CardTitle, Drawer, DrawerHandle, VisuallyHidden};

use super::{CallToActionLink, CardThumbnail};

/// Preview plus its detail drawer
#[component]
pub fn MediumLinkCardWrapper(view: MediumCardView) -> Element {
    let mut state = use_signal(PreviewState::default);

    let mut send = move |event: PreviewEvent| {
        if state.write().apply(event) {
            tracing::debug!(?event, open = state.peek().is_open(), "Preview state changed");
        }
    };

    rsx! {
        MediumLinkCardPreview { view: view.preview.clone(), on_event: move |event| send(event) }
        Drawer {
            open: state.read().is_open(),
            on_close: move |_| send(PreviewEvent::CloseRequested),
            class: view.drawer_class.clone(),
            DrawerHandle { on_click: move |_| send(PreviewEvent::CloseRequested) }
            VisuallyHidden { "{view.title}" }
            MediumLinkCard { view: view.detail.clone() }
        }
    }
}

/// Closed, two-column preview
#[component]
pub fn MediumLinkCardPreview(view: PreviewCardView, on_event: EventHandler<PreviewEvent>) -> Element {
    let inline = view.button_position == ButtonPosition::Inline;

    rsx! {
        Card {
            class: view.class.clone(),
            onclick: move |_| on_event.call(PreviewEvent::SurfaceClicked),
            CardContent { class: view.content_class.clone(),
                CardThumbnail { thumbnail: view.thumbnail.clone() }
                div { class: "flex-1 flex flex-col gap-2",
                    p { class: "{view.header_class}", "{view.title}" }
                    p { class: "{view.body_class}", "{view.description}" }
                    if let Some(price) = &view.price {
                        p { class: "{view.price_class}", "{price}" }
                    }
                    if inline {
                        if let Some(cta) = &view.cta {
                            CallToActionLink { cta: cta.clone() }
                        }
                    }
                }
            }
            if !inline {
                if let Some(cta) = &view.cta {
                    CallToActionLink { cta: cta.clone() }
                }
            }
        }
    }
}

/// Open detail card shown inside the drawer
#[component]
pub fn MediumLinkCard(view: DetailCardView) -> Element {
    rsx! {
        Card { class: view.class.clone(),
            CardThumbnail { thumbnail: view.thumbnail.clone() }
            CardContent { class: view.content_class.clone(),
                div { class: "space-y-4",
                    CardTitle { class: "text-2xl font-bold".to_string(), "{view.title}" }
                    if let Some(price) = &view.price {
                        p { "{price}" }
                    }
                    p { class: "{view.body_class}", "{view.description}" }
                }
                div { class: "{view.fade_class}", "aria-hidden": "true" }
                div { class: "{view.footer_class}",
                    if let Some(cta) = &view.cta {
                        CallToActionLink { cta: cta.clone() }
                    }
                }
            }
        }
    }
}
