//! Embedded checkout anchor

use dioxus::prelude::*;
use linkinbio_core::CheckoutLinkAdapter;

use crate::context::use_checkout_widget;

/// Anchor picked up by the checkout widget.
///
/// Each instance activates the widget once after it mounts; re-renders
/// don't initialize it again.
#[component]
pub fn CheckoutLink(checkout_link: String, #[props(default)] class: String, children: Element) -> Element {
    let widget = use_checkout_widget();
    let link = checkout_link.clone();
    let mut adapter = use_signal(move || CheckoutLinkAdapter::new(link, widget));

    use_effect(move || {
        adapter.with_mut(|adapter| adapter.activate());
    });

    rsx! {
        a {
            class: "{class}",
            href: "{checkout_link}",
            "data-polar-checkout": "true",
            onclick: move |e: MouseEvent| e.stop_propagation(),
            {children}
        }
    }
}
