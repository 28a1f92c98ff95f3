//! Recommendation service - versioned demo microservice for traffic routing
//!
//! Two handler variants (v1 and v2) of a single `/recommendations` endpoint,
//! used to demonstrate version-based traffic splitting in a service mesh.
//! The active variant is selected from configuration at process start.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::Catalog;
pub use models::{RecommendationItem, RecommendationResponse, ServiceVersion};
