//! mannview-metrics — Bibliometric aggregation and filtering pipeline.
//!
//! Derives per-researcher statistics from a raw publication list:
//! - filter/sort stage over the in-memory list,
//! - citation indices (h-index, g-index),
//! - grouped aggregates (venues with CORE ranks, topics, coauthors).
//!
//! The pipeline is synchronous and performs no I/O. It retains no state
//! between calls: whenever the filter spec or the source list changes, the
//! caller re-invokes [`derive_statistics`] and discards the previous output.

pub mod aggregate;
pub mod config;
pub mod filter;
pub mod indices;
pub mod rankings;

use mannview_common::{DerivedStatistics, FilterSpec, Publication};
use tracing::debug;

pub use config::MetricsConfig;

/// Recompute derived statistics for `publications` under `spec`, using the
/// default configuration.
pub fn derive_statistics(publications: &[Publication], spec: &FilterSpec) -> DerivedStatistics {
    derive_statistics_with(publications, spec, &MetricsConfig::default())
}

/// Recompute derived statistics: filter and sort the list, then compute the
/// citation indices and the three grouped aggregates over the filtered
/// subset.
pub fn derive_statistics_with(
    publications: &[Publication],
    spec: &FilterSpec,
    config: &MetricsConfig,
) -> DerivedStatistics {
    let filtered = filter::apply_filters(publications, spec);
    debug!(
        input = publications.len(),
        filtered = filtered.len(),
        "Recomputing derived statistics"
    );

    let citations: Vec<u32> = filtered.iter().map(|p| p.citations).collect();

    DerivedStatistics {
        paper_count: filtered.len(),
        citation_total: citations.iter().map(|&c| u64::from(c)).sum(),
        h_index: indices::h_index(&citations),
        g_index: indices::g_index(&citations),
        venue_aggregates: aggregate::aggregate_venues(
            &filtered,
            config.fuzzy_acceptance_threshold,
        ),
        topic_aggregates: aggregate::aggregate_topics(&filtered),
        coauthor_aggregates: aggregate::aggregate_coauthors(&filtered),
    }
}
