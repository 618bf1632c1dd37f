//! Link Cards
//!
//! [`Link`] dispatches a record to its variant:
//! - `sm`: [`SmallLinkCard`], a pill whose whole row is the anchor
//! - `md`: [`MediumLinkCardWrapper`], a preview that opens a detail drawer
//! - anything else renders nothing

mod checkout_link;
mod medium_card;
mod small_card;
mod thumbnail;

use dioxus::prelude::*;
use linkinbio_core::render::{dispatch, CallToAction, CardView, CtaView, RenderContext};
use linkinbio_core::CardRecord;
use linkinbio_ui::{Button, ButtonVariant};

use crate::context::{use_currency, use_theme};

use checkout_link::CheckoutLink;
use medium_card::MediumLinkCardWrapper;
use small_card::SmallLinkCard;
use thumbnail::CardThumbnail;

/// One entry of the link list
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (i, link) in page.links.iter().enumerate() {
///         Link { key: "{i}", link: link.clone() }
///     }
/// }
/// ```
#[component]
pub fn Link(link: CardRecord) -> Element {
    let theme = use_theme();
    let currency = use_currency();
    let ctx = RenderContext {
        theme,
        currency: currency.as_ref(),
    };

    match dispatch(&link, &ctx) {
        CardView::Compact(view) => rsx! { SmallLinkCard { view } },
        CardView::Medium(view) => rsx! { MediumLinkCardWrapper { view: *view } },
        CardView::Nothing => rsx! {},
    }
}

/// Call-to-action anchor wrapping an outline button.
///
/// Clicks never reach the card surface underneath.
#[component]
fn CallToActionLink(cta: CtaView) -> Element {
    let button = rsx! {
        Button { variant: ButtonVariant::Outline, class: cta.button_class.clone(), "{cta.label}" }
    };

    match &cta.action {
        CallToAction::Checkout { href } => rsx! {
            CheckoutLink { checkout_link: href.clone(), class: cta.anchor_class.to_string(), {button} }
        },
        CallToAction::Navigate { href, target } => rsx! {
            a {
                class: cta.anchor_class,
                href: "{href}",
                target: target.as_str(),
                onclick: move |e: MouseEvent| e.stop_propagation(),
                {button}
            }
        },
    }
}
