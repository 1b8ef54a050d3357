//! Core entity types exchanged between the profile-fetching collaborator,
//! the bibliometric aggregator, and the presentation layer.
//! These are plain data: the aggregator consumes and produces them without
//! performing any I/O.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// CORE ranking
// ---------------------------------------------------------------------------

/// CORE venue ranking grade used in computer-science bibliometrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreRank {
    #[serde(rename = "A*")]
    AStar,
    A,
    B,
    C,
    Unknown,
}

impl CoreRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreRank::AStar   => "A*",
            CoreRank::A       => "A",
            CoreRank::B       => "B",
            CoreRank::C       => "C",
            CoreRank::Unknown => "Unknown",
        }
    }

    /// Parse a rank label. Anything outside the CORE grades maps to `Unknown`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "A*" => CoreRank::AStar,
            "A"  => CoreRank::A,
            "B"  => CoreRank::B,
            "C"  => CoreRank::C,
            _    => CoreRank::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// Publication
// ---------------------------------------------------------------------------

/// One scholarly work attributed to the subject researcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub core_rank: Option<CoreRank>,
    /// Absent citation counts are treated as 0.
    #[serde(default)]
    pub citations: u32,
    /// Ordered topic labels; duplicates within one publication are allowed.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Coauthor names, excluding the subject researcher. Set semantics:
    /// no name appears twice for the same publication.
    #[serde(default)]
    pub coauthors: Vec<String>,
    #[serde(default)]
    pub is_preprint: bool,
}

// ---------------------------------------------------------------------------
// Filter specification
// ---------------------------------------------------------------------------

/// Sort order for the filtered publication list, keyed by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// User-chosen filter criteria. All fields are optional and composable;
/// the default value applies no constraint at all.
///
/// Owned by the presentation layer and mutated by user interaction; the
/// aggregator only ever reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact-match venue allowlist. Empty means unconstrained.
    #[serde(default)]
    pub venues: Vec<String>,
    pub core_ranking: Option<CoreRank>,
    /// Inclusive `[min_year, max_year]` bound. An inverted range matches
    /// nothing rather than erroring.
    pub year_range: Option<(i32, i32)>,
    pub sort: Option<SortDirection>,
}

impl FilterSpec {
    /// True when every criterion is unset, i.e. filtering is the identity.
    pub fn is_unconstrained(&self) -> bool {
        self.venues.is_empty()
            && self.core_ranking.is_none()
            && self.year_range.is_none()
            && self.sort.is_none()
    }
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// Per-venue aggregate: publication count plus the rank recorded for the
/// venue (first occurrence wins during aggregation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueStats {
    pub count: u32,
    pub core_rank: Option<CoreRank>,
}

/// Statistics derived from one filtered publication list.
///
/// Ephemeral: recomputed from scratch whenever the filter spec or the
/// source list changes, and discarded afterwards. Never updated
/// incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DerivedStatistics {
    pub paper_count: usize,
    pub citation_total: u64,
    pub h_index: usize,
    pub g_index: usize,
    pub venue_aggregates: HashMap<String, VenueStats>,
    pub topic_aggregates: HashMap<String, u32>,
    pub coauthor_aggregates: HashMap<String, u32>,
}

impl DerivedStatistics {
    /// The canonical all-zero value, returned for an empty publication list.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_rank_round_trip() {
        for rank in [CoreRank::AStar, CoreRank::A, CoreRank::B, CoreRank::C] {
            assert_eq!(CoreRank::from_str(rank.as_str()), rank);
        }
    }

    #[test]
    fn test_core_rank_unrecognised_is_unknown() {
        assert_eq!(CoreRank::from_str("D"), CoreRank::Unknown);
        assert_eq!(CoreRank::from_str(""), CoreRank::Unknown);
    }

    #[test]
    fn test_core_rank_serde_labels() {
        let json = serde_json::to_string(&CoreRank::AStar).unwrap();
        assert_eq!(json, "\"A*\"");
        let back: CoreRank = serde_json::from_str("\"A*\"").unwrap();
        assert_eq!(back, CoreRank::AStar);
    }

    #[test]
    fn test_default_filter_spec_is_unconstrained() {
        assert!(FilterSpec::default().is_unconstrained());
        let spec = FilterSpec {
            year_range: Some((2020, 2022)),
            ..Default::default()
        };
        assert!(!spec.is_unconstrained());
    }

    #[test]
    fn test_empty_statistics_are_zero() {
        let stats = DerivedStatistics::empty();
        assert_eq!(stats.paper_count, 0);
        assert_eq!(stats.citation_total, 0);
        assert_eq!(stats.h_index, 0);
        assert_eq!(stats.g_index, 0);
        assert!(stats.venue_aggregates.is_empty());
        assert!(stats.topic_aggregates.is_empty());
        assert!(stats.coauthor_aggregates.is_empty());
    }

    #[test]
    fn test_publication_deserialises_with_defaults() {
        let p: Publication =
            serde_json::from_str(r#"{"title": "A Paper", "year": 2021}"#).unwrap();
        assert!(p.venue.is_none());
        assert!(p.core_rank.is_none());
        assert_eq!(p.citations, 0);
        assert!(p.topics.is_empty());
        assert!(p.coauthors.is_empty());
        assert!(!p.is_preprint);
    }
}
