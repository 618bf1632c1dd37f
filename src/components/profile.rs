//! Profile Header Component
//!
//! Avatar, name and tagline centred above the links.

use dioxus::prelude::*;
use linkinbio_core::render::profile_view;
use linkinbio_core::ProfileRecord;
use linkinbio_ui::Avatar;

use crate::context::use_theme;

/// Profile header
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Profile { profile: page.profile.clone() }
/// }
/// ```
#[component]
pub fn Profile(profile: ProfileRecord) -> Element {
    let theme = use_theme();
    let view = profile_view(&profile, &theme);

    rsx! {
        section { class: view.section_class, style: view.style.clone(),
            Avatar {
                src: view.avatar_src.clone(),
                alt: view.name.clone(),
                fallback: view.avatar_fallback.clone(),
                class: view.avatar_class.clone(),
            }
            p { class: "{view.name_class}", "{view.name}" }
            p { class: view.description_class, "{view.description}" }
        }
    }
}
