//! Configuration loading for Mannheim View.
//! Reads mannview.toml from the current directory or the path in the
//! MANNVIEW_CONFIG env var; a missing file yields the defaults.

use std::path::Path;

use mannview_common::{MannviewError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Normalised-Levenshtein score below which a fuzzy venue match against
    /// the CORE reference table is accepted. Must lie in [0, 1]; 0 disables
    /// fuzzy matching entirely.
    #[serde(default = "default_fuzzy_acceptance_threshold")]
    pub fuzzy_acceptance_threshold: f64,
    /// How long a fetched researcher profile stays valid in the cache.
    #[serde(default = "default_profile_cache_ttl_secs")]
    pub profile_cache_ttl_secs: u64,
}

fn default_fuzzy_acceptance_threshold() -> f64 { 0.3 }
fn default_profile_cache_ttl_secs()     -> u64 { 86_400 }

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            fuzzy_acceptance_threshold: default_fuzzy_acceptance_threshold(),
            profile_cache_ttl_secs: default_profile_cache_ttl_secs(),
        }
    }
}

impl MetricsConfig {
    /// Load from the MANNVIEW_CONFIG path, falling back to ./mannview.toml.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("MANNVIEW_CONFIG").unwrap_or_else(|_| "mannview.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load from an explicit path. A missing file is not an error: the
    /// defaults apply.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| MannviewError::Config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| MannviewError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_acceptance_threshold) {
            warn!(
                threshold = self.fuzzy_acceptance_threshold,
                "Rejecting fuzzy acceptance threshold outside [0, 1]"
            );
            return Err(MannviewError::Config(format!(
                "fuzzy_acceptance_threshold must lie in [0, 1], got {}",
                self.fuzzy_acceptance_threshold
            )));
        }
        if self.profile_cache_ttl_secs == 0 {
            warn!("Rejecting zero profile cache TTL");
            return Err(MannviewError::Config(
                "profile_cache_ttl_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
