//! Link-in-bio Core Library
//!
//! Theme cascade, card dispatch and checkout activation for a link-in-bio
//! profile page, independent of any UI framework.
//!
//! ## Overview
//!
//! A page is a profile header plus a list of link cards. Small cards are
//! pill links; medium cards show a preview that opens into a detail
//! drawer and may carry an embedded checkout link. Every style decision
//! goes through the theme cascade.
//!
//! ## Quick Start
//!
//! ```no_run
//! use linkinbio_core::render::{dispatch, CardView, RenderContext};
//! use linkinbio_core::{IsoCurrencyFormatter, PageDocument, ThemeConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let theme = ThemeConfig::load("theme.json")?.install()?;
//!     let page = PageDocument::load("page.json")?;
//!
//!     let ctx = RenderContext::new(theme, &IsoCurrencyFormatter);
//!     for link in &page.links {
//!         match dispatch(link, &ctx) {
//!             CardView::Compact(card) => println!("pill: {}", card.title),
//!             CardView::Medium(card) => println!("preview: {}", card.title),
//!             CardView::Nothing => {}
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod checkout;
pub mod currency;
pub mod error;
pub mod logging;
pub mod render;
pub mod theme;
pub mod types;

// Re-exports
pub use checkout::{CheckoutLinkAdapter, CheckoutWidget, SharedCheckoutWidget};
pub use currency::{CurrencyFormatter, IsoCurrencyFormatter};
pub use error::{LinkInBioError, Result, ThemeError};
pub use theme::{ThemeConfig, ThemeResolver};
pub use types::*;
