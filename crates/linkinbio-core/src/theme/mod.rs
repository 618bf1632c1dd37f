//! Theme configuration and the style cascade.
//!
//! - [`ThemeConfig`]: validated, immutable theme document
//! - [`ThemeResolver`]: prioritized lookup over the theme tree
//! - [`merge_classes`] / [`ClassList`]: conflict-aware class joining

mod config;
mod merge;
mod resolver;
mod scope;

pub use config::ThemeConfig;
pub use merge::{merge_classes, ClassList};
pub use resolver::{Dimensions, ThemeResolver, ThemeValue};
pub use scope::{Attribute, ButtonPosition, Category, Scope, Size, SubElement};
