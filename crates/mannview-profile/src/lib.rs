//! mannview-profile — Data boundary to the profile-fetching collaborator.
//!
//! The HTTP client that talks to the DBLP-backed REST API lives outside
//! this workspace; it hands over plain JSON. This crate holds the payload
//! models for that response, the conversion into core entities, the
//! assembled researcher profile, and the TTL cache that replaces the
//! original dashboard's module-level profile store.

pub mod cache;
pub mod models;
pub mod profile;

pub use cache::{Clock, ProfileCache, SystemClock};
pub use models::{PaperPayload, ProfileResponse};
pub use profile::ResearcherProfile;
