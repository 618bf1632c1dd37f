//! Page data records

mod card;
mod page;
mod profile;

pub use card::{CardRecord, LinkTarget, MediumCard, SmallCard, ThumbnailSource};
pub use page::{LinkSummary, PageDocument};
pub use profile::ProfileRecord;
