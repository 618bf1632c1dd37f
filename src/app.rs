use std::sync::Arc;

use dioxus::prelude::*;
use linkinbio_core::theme::{Category, ClassList, Scope};
use linkinbio_core::{CheckoutWidget, IsoCurrencyFormatter};

use crate::components::{Link, Profile};
use crate::context::{
    use_theme, CheckoutContext, CurrencyContext, ThemeContext, WebviewCheckoutWidget,
};
use crate::get_settings;
use crate::theme::GLOBAL_STYLES;

const PAGE_BASE: &str = "min-h-svh w-full flex flex-col gap-8 px-4 py-12";
const LINKS_BASE: &str = "flex flex-col gap-4 w-full max-w-md mx-auto";

/// Root application component.
///
/// Provides global styles, the theme, the checkout widget and the currency
/// formatter, then lays out the profile header and the links.
#[component]
pub fn App() -> Element {
    let settings = get_settings();

    use_context_provider(ThemeContext::installed);
    use_context_provider(|| {
        let widget = settings
            .and_then(|s| s.checkout_script.clone())
            .map(|url| Arc::new(WebviewCheckoutWidget::new(url)) as Arc<dyn CheckoutWidget>);
        CheckoutContext(widget)
    });
    use_context_provider(|| CurrencyContext(Arc::new(IsoCurrencyFormatter)));

    let stylesheet = settings.and_then(|s| s.stylesheet.as_deref());

    rsx! {
        style { {GLOBAL_STYLES} }
        if let Some(css) = stylesheet {
            style { {css} }
        }
        if let Some(settings) = settings {
            Page { page: settings.page.clone() }
        } else {
            main { class: PAGE_BASE, p { "No page loaded." } }
        }
    }
}

#[component]
fn Page(page: linkinbio_core::PageDocument) -> Element {
    let theme = use_theme();
    let class = ClassList::new()
        .with(PAGE_BASE)
        .with_opt(theme.class_name(&Scope::new(Category::Container)))
        .merge();

    rsx! {
        main { class: "{class}",
            Profile { profile: page.profile.clone() }
            section { class: LINKS_BASE,
                for (i, link) in page.links.iter().enumerate() {
                    Link { key: "{i}", link: link.clone() }
                }
            }
        }
    }
}
