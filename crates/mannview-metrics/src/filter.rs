//! Publication filtering and sorting.
//!
//! Pure function of (list, spec) → filtered ordered list. Active filters
//! apply conjunctively and commute; sorting by year is stable so that
//! publications sharing a year keep their relative input order.

use mannview_common::{FilterSpec, Publication, SortDirection};

/// Apply every set criterion of `spec` to `publications`, then reorder by
/// year when a sort direction is set.
///
/// An unconstrained spec returns the input unchanged, order preserved.
pub fn apply_filters(publications: &[Publication], spec: &FilterSpec) -> Vec<Publication> {
    let mut filtered: Vec<Publication> = publications
        .iter()
        .filter(|p| matches_spec(p, spec))
        .cloned()
        .collect();

    // Vec::sort_by_key is stable; ties by year keep input order.
    match spec.sort {
        Some(SortDirection::Ascending) => filtered.sort_by_key(|p| p.year),
        Some(SortDirection::Descending) => filtered.sort_by_key(|p| std::cmp::Reverse(p.year)),
        None => {}
    }

    filtered
}

fn matches_spec(publication: &Publication, spec: &FilterSpec) -> bool {
    if !spec.venues.is_empty() {
        match publication.venue.as_deref() {
            Some(venue) if spec.venues.iter().any(|v| v == venue) => {}
            _ => return false,
        }
    }

    if let Some(rank) = spec.core_ranking {
        if publication.core_rank != Some(rank) {
            return false;
        }
    }

    if let Some((min_year, max_year)) = spec.year_range {
        if publication.year < min_year || publication.year > max_year {
            return false;
        }
    }

    true
}
