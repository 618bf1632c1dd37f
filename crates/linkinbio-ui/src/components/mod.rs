//! Reusable page primitives

mod avatar;
mod button;
mod card;
mod drawer;

pub use avatar::*;
pub use button::*;
pub use card::*;
pub use drawer::*;

use linkinbio_core::theme::ClassList;

/// Base classes with the caller's classes merged on top
pub(crate) fn compose(base: &str, extra: Option<&str>) -> String {
    ClassList::new().with(base).with_opt(extra).merge()
}
