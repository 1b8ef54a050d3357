//! Static CORE ranking reference table.
//!
//! Consulted only as a fallback when a publication carries no rank of its
//! own. Venue names coming out of DBLP are noisy ("Proc. of ...", volume
//! numbers, years), so lookups run against a normalised form and fall back
//! to approximate matching when no exact key matches.

use levenshtein::levenshtein;
use mannview_common::CoreRank;
use tracing::debug;

/// Normalised venue name → CORE rank. Keys must already be in the
/// `normalize_venue_name` form.
const CORE_RANKINGS: &[(&str, CoreRank)] = &[
    ("international conference on machine learning", CoreRank::AStar),
    ("neural information processing systems", CoreRank::A),
    ("international conference on learning representations", CoreRank::AStar),
    ("aaai conference on artificial intelligence", CoreRank::AStar),
    ("international joint conference on artificial intelligence", CoreRank::AStar),
    ("annual meeting of the association for computational linguistics", CoreRank::AStar),
    ("empirical methods in natural language processing", CoreRank::A),
    ("conference on computer vision and pattern recognition", CoreRank::AStar),
    ("international conference on software engineering", CoreRank::AStar),
    ("international world wide web conference", CoreRank::AStar),
    ("conference on information and knowledge management", CoreRank::A),
    ("international semantic web conference", CoreRank::A),
    ("european conference on machine learning", CoreRank::A),
    ("journal of web semantics", CoreRank::B),
    ("ieee computer", CoreRank::C),
];

/// Normalise a venue name for table lookup: lowercase, strip digits and
/// punctuation (everything that is not a letter or whitespace), collapse
/// whitespace runs, trim.
pub fn normalize_venue_name(name: &str) -> String {
    let lowered: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Look up the CORE rank for a raw venue name.
///
/// Exact match on the normalised name first; otherwise the closest table
/// key by Levenshtein distance, normalised by the longer string's length,
/// accepted only below `acceptance_threshold`. Returns `None` for empty
/// input or when no key is close enough.
pub fn lookup_core_rank(venue: &str, acceptance_threshold: f64) -> Option<CoreRank> {
    let normalized = normalize_venue_name(venue);
    if normalized.is_empty() {
        return None;
    }

    for (key, rank) in CORE_RANKINGS {
        if *key == normalized {
            return Some(*rank);
        }
    }

    let mut best: Option<(&str, CoreRank, f64)> = None;
    for (key, rank) in CORE_RANKINGS {
        let distance = levenshtein(&normalized, key);
        let longer = normalized.len().max(key.len());
        let score = distance as f64 / longer as f64;
        if best.map_or(true, |(_, _, s)| score < s) {
            best = Some((key, *rank, score));
        }
    }

    match best {
        Some((key, rank, score)) if score < acceptance_threshold => {
            debug!(venue = %venue, matched = %key, score, "Fuzzy CORE rank match accepted");
            Some(rank)
        }
        Some((key, _, score)) => {
            debug!(venue = %venue, closest = %key, score, "Fuzzy CORE rank match rejected");
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.3;

    #[test]
    fn test_normalize_strips_digits_and_punctuation() {
        assert_eq!(
            normalize_venue_name("International Conference on Machine Learning 2023, Vol. 139!"),
            "international conference on machine learning vol"
        );
        assert_eq!(normalize_venue_name("  IEEE   Computer  "), "ieee computer");
        assert_eq!(normalize_venue_name("2023"), "");
    }

    #[test]
    fn test_exact_lookup_after_normalisation() {
        assert_eq!(
            lookup_core_rank("International Conference on Machine Learning (2023)", THRESHOLD),
            Some(CoreRank::AStar)
        );
        assert_eq!(lookup_core_rank("IEEE Computer", THRESHOLD), Some(CoreRank::C));
    }

    #[test]
    fn test_fuzzy_lookup_accepts_close_names() {
        // "Conf." instead of "Conference": 6 edits over 44 chars ≈ 0.14.
        assert_eq!(
            lookup_core_rank("International Conf. on Machine Learning", THRESHOLD),
            Some(CoreRank::AStar)
        );
    }

    #[test]
    fn test_fuzzy_lookup_rejects_distant_names() {
        assert_eq!(
            lookup_core_rank("Symposium on Operating Systems Principles", THRESHOLD),
            None
        );
    }

    #[test]
    fn test_empty_and_numeric_only_names() {
        assert_eq!(lookup_core_rank("", THRESHOLD), None);
        assert_eq!(lookup_core_rank("2023", THRESHOLD), None);
    }

    #[test]
    fn test_threshold_zero_disables_fuzzy_matching() {
        assert_eq!(
            lookup_core_rank("International Conf. on Machine Learning", 0.0),
            None
        );
        // Exact matches are unaffected by the threshold.
        assert_eq!(
            lookup_core_rank("Journal of Web Semantics", 0.0),
            Some(CoreRank::B)
        );
    }
}
