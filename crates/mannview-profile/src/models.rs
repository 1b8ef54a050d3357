//! Payload models for the researcher profile API response.
//!
//! The backend serves camelCase JSON with plenty of optional fields; the
//! conversion into core entities applies the malformed-input policy: absent
//! citation counts are 0, negative counts clamp to 0, blank venues count as
//! absent, and coauthor lists are deduplicated to set semantics.

use std::collections::HashSet;

use mannview_common::{CoreRank, Publication};
use serde::Deserialize;

/// Top-level profile response as served by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub name: String,
    #[serde(default)]
    pub affiliations: Vec<String>,
    #[serde(default)]
    pub papers: Vec<PaperPayload>,
}

/// One paper entry inside a profile response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperPayload {
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub core_rank: Option<String>,
    #[serde(default)]
    pub citations: Option<i64>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub coauthors: Vec<String>,
    #[serde(default)]
    pub is_preprint: bool,
}

impl PaperPayload {
    /// Convert into the core entity, normalising degenerate field values.
    pub fn into_publication(self) -> Publication {
        let venue = self
            .venue
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let core_rank = self
            .core_rank
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty() && r != "N/A")
            .map(|r| CoreRank::from_str(&r));

        let citations = self.citations.unwrap_or(0).clamp(0, u32::MAX as i64) as u32;

        let mut seen = HashSet::new();
        let coauthors = self
            .coauthors
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Publication {
            title: self.title,
            year: self.year,
            venue,
            core_rank,
            citations,
            topics: self.topics,
            coauthors,
            is_preprint: self.is_preprint,
        }
    }
}
