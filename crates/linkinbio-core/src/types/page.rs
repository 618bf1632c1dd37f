//! Page document: one profile plus its links

use std::path::Path;

use serde::Deserialize;

use super::{CardRecord, ProfileRecord};
use crate::error::{LinkInBioError, Result};

/// Everything a page renders
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageDocument {
    pub profile: ProfileRecord,
    #[serde(default)]
    pub links: Vec<CardRecord>,
}

/// Link counts by variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkSummary {
    pub small: usize,
    pub medium: usize,
    pub unsupported: usize,
}

impl LinkSummary {
    pub fn total(&self) -> usize {
        self.small + self.medium + self.unsupported
    }
}

impl PageDocument {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LinkInBioError::from(e).at_path(path))?;
        let page = Self::from_json_str(&text).map_err(|e| e.at_path(path))?;
        tracing::debug!(path = %path.display(), links = page.links.len(), "Loaded page");
        Ok(page)
    }

    pub fn summary(&self) -> LinkSummary {
        self.links
            .iter()
            .fold(LinkSummary::default(), |mut summary, link| {
                match link {
                    CardRecord::Small(_) => summary.small += 1,
                    CardRecord::Medium(_) => summary.medium += 1,
                    CardRecord::Unsupported { .. } => summary.unsupported += 1,
                }
                summary
            })
    }
}
