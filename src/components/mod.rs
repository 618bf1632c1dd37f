//! Page components

mod links;
mod profile;

pub use links::Link;
pub use profile::Profile;
