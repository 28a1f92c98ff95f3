// Model exports
pub mod domain;
pub mod responses;

pub use domain::{ParseVersionError, RecommendationItem, ServiceVersion};
pub use responses::{ErrorResponse, HealthResponse, RecommendationResponse};
