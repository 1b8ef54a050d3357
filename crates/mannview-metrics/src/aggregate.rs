//! Grouped aggregation over a filtered publication list.
//!
//! Three independent aggregates, each a single linear scan. All of them are
//! recomputed in full whenever the filtered list changes; nothing here is
//! updated incrementally.

use std::collections::{HashMap, HashSet};

use mannview_common::{Publication, VenueStats};

use crate::rankings;

/// Group publications by exact venue name.
///
/// Publications without a venue are excluded. For each venue the count of
/// matching publications is recorded together with the rank observed at the
/// venue's first occurrence in scan order; later publications under the same
/// venue never overwrite it, even when they carry a different rank. When the
/// first occurrence has no rank of its own, the static CORE reference table
/// is consulted (fuzzy lookup, see `rankings`).
pub fn aggregate_venues(
    publications: &[Publication],
    fuzzy_acceptance_threshold: f64,
) -> HashMap<String, VenueStats> {
    let mut venues: HashMap<String, VenueStats> = HashMap::new();
    for publication in publications {
        let Some(venue) = publication.venue.as_deref() else {
            continue;
        };
        if let Some(stats) = venues.get_mut(venue) {
            stats.count += 1;
        } else {
            let core_rank = publication
                .core_rank
                .or_else(|| rankings::lookup_core_rank(venue, fuzzy_acceptance_threshold));
            venues.insert(venue.to_string(), VenueStats { count: 1, core_rank });
        }
    }
    venues
}

/// Count topic label occurrences across the filtered list.
///
/// A label repeated within one publication's topic list counts once per
/// occurrence; there is no intra-publication deduplication.
pub fn aggregate_topics(publications: &[Publication]) -> HashMap<String, u32> {
    let mut topics: HashMap<String, u32> = HashMap::new();
    for publication in publications {
        for topic in &publication.topics {
            *topics.entry(topic.clone()).or_insert(0) += 1;
        }
    }
    topics
}

/// Count, per coauthor, the number of publications they co-appear on.
///
/// `coauthors` carries set semantics per publication; a duplicated name in
/// one publication is still only counted once, so no coauthor's count can
/// exceed the number of publications.
pub fn aggregate_coauthors(publications: &[Publication]) -> HashMap<String, u32> {
    let mut coauthors: HashMap<String, u32> = HashMap::new();
    for publication in publications {
        let mut seen = HashSet::new();
        for name in &publication.coauthors {
            if seen.insert(name.as_str()) {
                *coauthors.entry(name.clone()).or_insert(0) += 1;
            }
        }
    }
    coauthors
}

#[cfg(test)]
mod tests {
    use super::*;
    use mannview_common::CoreRank;

    const THRESHOLD: f64 = 0.3;

    fn publication(venue: Option<&str>, rank: Option<CoreRank>) -> Publication {
        Publication {
            title: "p".to_string(),
            year: 2021,
            venue: venue.map(str::to_string),
            core_rank: rank,
            citations: 0,
            topics: vec![],
            coauthors: vec![],
            is_preprint: false,
        }
    }

    #[test]
    fn test_venue_first_seen_rank_wins() {
        let input = vec![
            publication(Some("ICML"), Some(CoreRank::AStar)),
            publication(Some("ICML"), None),
        ];
        let venues = aggregate_venues(&input, THRESHOLD);
        let icml = &venues["ICML"];
        assert_eq!(icml.count, 2);
        assert_eq!(icml.core_rank, Some(CoreRank::AStar));
    }

    #[test]
    fn test_venue_first_seen_rank_wins_even_when_later_differs() {
        let input = vec![
            publication(Some("ICML"), Some(CoreRank::B)),
            publication(Some("ICML"), Some(CoreRank::AStar)),
        ];
        let venues = aggregate_venues(&input, THRESHOLD);
        assert_eq!(venues["ICML"].core_rank, Some(CoreRank::B));
    }

    #[test]
    fn test_venue_fallback_to_reference_table() {
        let input = vec![publication(
            Some("International Conference on Machine Learning 2023"),
            None,
        )];
        let venues = aggregate_venues(&input, THRESHOLD);
        let stats = venues
            .get("International Conference on Machine Learning 2023")
            .unwrap();
        assert_eq!(stats.core_rank, Some(CoreRank::AStar));
    }

    #[test]
    fn test_venue_unresolved_rank_stays_absent() {
        let input = vec![publication(Some("Workshop on Obscure Things"), None)];
        let venues = aggregate_venues(&input, THRESHOLD);
        assert_eq!(venues["Workshop on Obscure Things"].core_rank, None);
    }

    #[test]
    fn test_publications_without_venue_are_excluded() {
        let input = vec![publication(None, None), publication(Some("ICML"), None)];
        let venues = aggregate_venues(&input, THRESHOLD);
        assert_eq!(venues.len(), 1);
    }

    #[test]
    fn test_topic_occurrences_count_per_occurrence() {
        let mut p = publication(None, None);
        p.topics = vec!["NLP".to_string(), "NLP".to_string(), "ML".to_string()];
        let topics = aggregate_topics(&[p]);
        assert_eq!(topics["NLP"], 2);
        assert_eq!(topics["ML"], 1);
    }

    #[test]
    fn test_coauthors_counted_once_per_publication() {
        let mut a = publication(None, None);
        a.coauthors = vec!["Ada".to_string(), "Grace".to_string()];
        let mut b = publication(None, None);
        b.coauthors = vec!["Ada".to_string()];
        let coauthors = aggregate_coauthors(&[a, b]);
        assert_eq!(coauthors["Ada"], 2);
        assert_eq!(coauthors["Grace"], 1);
    }

    #[test]
    fn test_duplicate_coauthor_within_publication_counts_once() {
        let mut p = publication(None, None);
        p.coauthors = vec!["Ada".to_string(), "Ada".to_string()];
        let coauthors = aggregate_coauthors(&[p]);
        assert_eq!(coauthors["Ada"], 1);
    }

    #[test]
    fn test_empty_input_yields_empty_aggregates() {
        assert!(aggregate_venues(&[], THRESHOLD).is_empty());
        assert!(aggregate_topics(&[]).is_empty());
        assert!(aggregate_coauthors(&[]).is_empty());
    }
}
