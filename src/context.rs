//! Context providers for the page.
//!
//! The theme, the checkout widget and the currency formatter are provided
//! once by [`App`](crate::app::App) and read by every card through hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let theme = use_theme();
//! let widget = use_checkout_widget();
//! ```

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use linkinbio_core::{CheckoutWidget, CurrencyFormatter, SharedCheckoutWidget, ThemeConfig, ThemeResolver};

/// Installed theme for the page
#[derive(Clone, Copy)]
pub struct ThemeContext(pub &'static ThemeConfig);

impl ThemeContext {
    /// The process theme, or an empty one when none was installed
    pub fn installed() -> Self {
        static EMPTY: OnceLock<ThemeConfig> = OnceLock::new();
        Self(ThemeConfig::installed().unwrap_or_else(|| EMPTY.get_or_init(ThemeConfig::empty)))
    }
}

/// Optional embed-checkout capability
#[derive(Clone)]
pub struct CheckoutContext(pub SharedCheckoutWidget);

/// Price formatter shared by all cards
#[derive(Clone)]
pub struct CurrencyContext(pub Arc<dyn CurrencyFormatter>);

/// Hook to resolve theme values.
pub fn use_theme() -> ThemeResolver<'static> {
    ThemeResolver::new(use_context::<ThemeContext>().0)
}

/// Hook to access the checkout widget, `None` when checkout is disabled.
pub fn use_checkout_widget() -> SharedCheckoutWidget {
    use_context::<CheckoutContext>().0
}

pub fn use_currency() -> Arc<dyn CurrencyFormatter> {
    use_context::<CurrencyContext>().0
}

/// Checkout widget backed by the webview.
///
/// The first `init` injects the checkout script; every call asks the
/// script to scan the page for `data-polar-checkout` anchors once loaded.
#[derive(Debug, Clone)]
pub struct WebviewCheckoutWidget {
    script_url: String,
}

impl WebviewCheckoutWidget {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }
}

impl CheckoutWidget for WebviewCheckoutWidget {
    fn init(&self) {
        let _ = document::eval(&checkout_init_script(&self.script_url));
    }
}

const CHECKOUT_INIT_TEMPLATE: &str = r#"(function () {
  var init = function () {
    if (window.Polar && window.Polar.EmbedCheckout) {
      window.Polar.EmbedCheckout.init();
    }
  };
  var tag = document.querySelector("script[data-linkinbio-checkout]");
  if (!tag) {
    tag = document.createElement("script");
    tag.src = __SRC__;
    tag.defer = true;
    tag.setAttribute("data-linkinbio-checkout", "");
    tag.addEventListener("load", function () {
      tag.setAttribute("data-loaded", "");
      init();
    });
    document.head.appendChild(tag);
  } else if (tag.hasAttribute("data-loaded")) {
    init();
  } else {
    tag.addEventListener("load", init);
  }
})();"#;

/// JavaScript that loads the checkout script once and initializes it
pub fn checkout_init_script(script_url: &str) -> String {
    // JSON string literals are valid JavaScript string literals
    let src = serde_json::Value::from(script_url).to_string();
    CHECKOUT_INIT_TEMPLATE.replace("__SRC__", &src)
}
