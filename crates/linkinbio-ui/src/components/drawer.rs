//! Bottom Drawer
//!
//! A sheet that slides up from the bottom of the window over a dimmed
//! overlay. The drawer does not own its open state: the parent passes
//! `open` and receives `on_close` when the user dismisses it by clicking
//! the overlay, pressing Escape, or tapping the handle.

use dioxus::prelude::*;
use linkinbio_core::render::overlay_class;

use super::compose;

pub const DRAWER_BASE: &str =
    "fixed inset-x-0 bottom-0 z-50 flex h-auto flex-col rounded-t-lg border-t bg-background outline-none";
const HANDLE_BASE: &str = "mx-auto mt-4 h-2 w-[100px] shrink-0 rounded-full bg-muted cursor-pointer";

/// Properties for the Drawer component
#[derive(Clone, PartialEq, Props)]
pub struct DrawerProps {
    /// Whether the sheet is shown
    pub open: bool,
    /// Called when the user dismisses the sheet
    pub on_close: EventHandler<()>,
    /// Classes merged over the sheet's base styling
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Modal bottom sheet
///
/// # Example
///
/// ```rust,ignore
/// let mut open = use_signal(|| false);
///
/// rsx! {
///     Drawer {
///         open: open(),
///         on_close: move |_| open.set(false),
///         DrawerHandle { on_click: move |_| open.set(false) }
///         VisuallyHidden { "Course details" }
///         "..."
///     }
/// }
/// ```
#[component]
pub fn Drawer(props: DrawerProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let class = compose(DRAWER_BASE, props.class.as_deref());
    let overlay = overlay_class(props.open);
    let on_close = props.on_close;

    rsx! {
        div {
            class: "{overlay}",
            "data-slot": "drawer-overlay",
            onclick: move |_| on_close.call(()),
        }
        div {
            class: "{class}",
            "data-slot": "drawer-content",
            role: "dialog",
            "aria-modal": "true",
            tabindex: "-1",
            onmounted: move |e| async move {
                // Focus so Escape reaches the sheet
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            {props.children}
        }
    }
}

/// Grab bar at the top of the sheet
#[component]
pub fn DrawerHandle(#[props(default)] on_click: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: HANDLE_BASE,
            "data-slot": "drawer-handle",
            "aria-hidden": "true",
            onclick: move |_| {
                if let Some(handler) = &on_click {
                    handler.call(());
                }
            },
        }
    }
}

/// Content for screen readers only
#[component]
pub fn VisuallyHidden(children: Element) -> Element {
    rsx! {
        span { class: "sr-only", {children} }
    }
}
