//! Call-to-action resolution for medium cards.
//!
//! Checkout link first, then a plain link, otherwise no CTA at all.

use crate::types::{LinkTarget, MediumCard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallToAction {
    /// Anchor handled by the embedded checkout widget
    Checkout { href: String },
    /// Plain navigation anchor
    Navigate { href: String, target: LinkTarget },
}

impl CallToAction {
    pub fn href(&self) -> &str {
        match self {
            CallToAction::Checkout { href } | CallToAction::Navigate { href, .. } => href,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CallToAction::Checkout { .. } => "checkout",
            CallToAction::Navigate { .. } => "link",
        }
    }
}

pub fn resolve_cta(card: &MediumCard) -> Option<CallToAction> {
    let non_empty = |s: &Option<String>| s.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);

    if let Some(href) = non_empty(&card.polar_checkout_link) {
        return Some(CallToAction::Checkout { href });
    }
    non_empty(&card.url).map(|href| CallToAction::Navigate {
        href,
        target: LinkTarget::from_new_tab(card.new_tab),
    })
}
