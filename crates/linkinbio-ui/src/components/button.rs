//! Button Component
//!
//! Two variants are enough for the page:
//! - Default: filled, used for calls-to-action
//! - Outline: bordered, transparent background

use dioxus::prelude::*;

use super::compose;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium h-9 px-4 py-2 cursor-pointer transition";

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled primary button
    #[default]
    Default,
    /// Transparent with a border
    Outline,
}

impl ButtonVariant {
    /// Returns the utility classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground",
            ButtonVariant::Outline => "border border-input bg-transparent",
        }
    }
}

/// Full class string for a button, caller classes last
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    compose(&format!("{} {}", BUTTON_BASE, variant.class()), extra)
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler; receives the raw event so callers can stop propagation
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Classes merged over the variant's
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         class: resolved_button_class,
///         onclick: move |e: MouseEvent| e.stop_propagation(),
///         "Purchase"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            onclick: move |e| {
                if let Some(handler) = &props.onclick {
                    handler.call(e);
                }
            },
            {props.children}
        }
    }
}
