//! Assembled researcher profile.

use mannview_common::{DerivedStatistics, FilterSpec, Publication};
use mannview_metrics::{derive_statistics_with, MetricsConfig};
use serde::{Deserialize, Serialize};

use crate::models::ProfileResponse;

/// A researcher together with the publication list attributed to them.
///
/// The publication list is the raw, unfiltered input; statistics are always
/// derived on demand so the presentation layer can never observe a stale
/// partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearcherProfile {
    pub name: String,
    pub affiliations: Vec<String>,
    pub publications: Vec<Publication>,
}

impl ResearcherProfile {
    pub fn from_response(response: ProfileResponse) -> Self {
        Self {
            name: response.name,
            affiliations: response.affiliations,
            publications: response
                .papers
                .into_iter()
                .map(|p| p.into_publication())
                .collect(),
        }
    }

    /// Derive statistics for the current filter spec.
    pub fn statistics(&self, spec: &FilterSpec) -> DerivedStatistics {
        self.statistics_with(spec, &MetricsConfig::default())
    }

    pub fn statistics_with(&self, spec: &FilterSpec, config: &MetricsConfig) -> DerivedStatistics {
        derive_statistics_with(&self.publications, spec, config)
    }

    /// Earliest and latest publication year, used to seed the year-range
    /// filter controls. `None` for an empty publication list.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let first = self.publications.first()?.year;
        Some(self.publications.iter().fold((first, first), |(min, max), p| {
            (min.min(p.year), max.max(p.year))
        }))
    }
}
