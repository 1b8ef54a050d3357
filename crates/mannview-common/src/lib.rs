//! mannview-common — Shared types and errors used across all Mannheim View crates.

pub mod entities;
pub mod error;

// Re-export commonly used types
pub use entities::{
    CoreRank, DerivedStatistics, FilterSpec, Publication, SortDirection, VenueStats,
};
pub use error::{MannviewError, Result};
