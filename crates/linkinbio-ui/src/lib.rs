//! Link-in-bio UI Primitives
//!
//! Framework-level building blocks for the profile page: card surfaces,
//! buttons, the avatar, and the bottom drawer that hosts a medium card's
//! detail view. They carry no theme knowledge of their own; callers pass
//! the classes resolved by `linkinbio-core` and the primitives merge them
//! over their base styling.
//!
//! ## Class handling
//!
//! Every primitive takes an optional `class` that is merged (not appended)
//! over its base classes, so a theme's `bg-black` replaces a primitive's
//! `bg-card` instead of fighting it.

pub mod components;

pub use components::*;
