//! Embedded checkout activation.
//!
//! The checkout widget is an optional capability handed in by the host
//! (a webview bridge on desktop, nothing at all when rendering headless).
//! Each card carrying a checkout link owns one [`CheckoutLinkAdapter`];
//! activating it calls the widget's `init` at most once, no matter how
//! many times the card re-renders. The widget finds its anchors by the
//! `data-polar-checkout` attribute.

use std::fmt;
use std::sync::Arc;

/// External embed-checkout capability
pub trait CheckoutWidget: Send + Sync {
    /// Scan the page and wire up checkout anchors.
    ///
    /// May be called once per activating card; implementations must
    /// tolerate repeated calls.
    fn init(&self);
}

/// Shared handle to an optional widget
pub type SharedCheckoutWidget = Option<Arc<dyn CheckoutWidget>>;

/// Per-card checkout activation state
pub struct CheckoutLinkAdapter {
    checkout_link: String,
    widget: SharedCheckoutWidget,
    activated: bool,
}

impl fmt::Debug for CheckoutLinkAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutLinkAdapter")
            .field("checkout_link", &self.checkout_link)
            .field("widget", &self.widget.is_some())
            .field("activated", &self.activated)
            .finish()
    }
}

impl CheckoutLinkAdapter {
    pub fn new(checkout_link: impl Into<String>, widget: SharedCheckoutWidget) -> Self {
        Self {
            checkout_link: checkout_link.into(),
            widget,
            activated: false,
        }
    }

    pub fn checkout_link(&self) -> &str {
        &self.checkout_link
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Run the mount-time side effect.
    ///
    /// Returns `true` only for the call that actually invoked the widget.
    /// Without a widget this is a silent no-op.
    pub fn activate(&mut self) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;

        match &self.widget {
            Some(widget) => {
                tracing::info!(link = %self.checkout_link, "Initializing embedded checkout");
                widget.init();
                true
            }
            None => {
                tracing::trace!(link = %self.checkout_link, "No checkout widget available");
                false
            }
        }
    }
}
