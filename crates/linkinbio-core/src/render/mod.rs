//! Framework-independent view models for the page.
//!
//! Everything here is pure: given records, a theme and a currency
//! formatter, it decides what renders and with which classes.

mod cards;
mod cta;
mod preview;
mod profile;
mod thumbnail;

pub use cards::{
    dispatch, overlay_class, CardView, CompactCardView, CtaView, DetailCardView, MediumCardView,
    PreviewCardView,
};
pub use cta::{resolve_cta, CallToAction};
pub use preview::{PreviewEvent, PreviewState};
pub use profile::{profile_view, ProfileView};
pub use thumbnail::{resolve_thumbnail, Thumbnail, ThumbnailRequest, PLACEHOLDER_ALT, PLACEHOLDER_IMAGE};

use crate::currency::CurrencyFormatter;
use crate::theme::{ThemeConfig, ThemeResolver};

/// Collaborators shared by every card on a page
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: ThemeResolver<'a>,
    pub currency: &'a dyn CurrencyFormatter,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a ThemeConfig, currency: &'a dyn CurrencyFormatter) -> Self {
        Self {
            theme: ThemeResolver::new(theme),
            currency,
        }
    }
}
