//! Card surfaces

use dioxus::prelude::*;

use super::compose;

pub const CARD_BASE: &str = "flex flex-col gap-6 rounded-xl border bg-card text-card-foreground py-6 shadow-sm";
pub const CARD_CONTENT_BASE: &str = "px-6";
pub const CARD_TITLE_BASE: &str = "leading-none font-semibold";

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
    /// Makes the whole surface clickable
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// Rounded card surface
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         class: view.class.clone(),
///         onclick: move |_| open.set(true),
///         CardContent { class: view.content_class.clone(), "..." }
///     }
/// }
/// ```
#[component]
pub fn Card(props: CardProps) -> Element {
    let class = compose(CARD_BASE, props.class.as_deref());
    let clickable = props.onclick.is_some();

    rsx! {
        div {
            class: "{class}",
            "data-slot": "card",
            role: clickable.then_some("button"),
            onclick: move |e| {
                if let Some(handler) = &props.onclick {
                    handler.call(e);
                }
            },
            {props.children}
        }
    }
}

#[component]
pub fn CardContent(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = compose(CARD_CONTENT_BASE, class.as_deref());

    rsx! {
        div { class: "{class}", "data-slot": "card-content", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = compose(CARD_TITLE_BASE, class.as_deref());

    rsx! {
        div { class: "{class}", "data-slot": "card-title", {children} }
    }
}
