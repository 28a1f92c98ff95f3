use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::core::Catalog;
use crate::models::{HealthResponse, RecommendationResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

/// Routes exposed by the v1 variant
pub fn configure_v1(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::get().to(get_recommendations));
}

/// Routes exposed by the v2 variant
pub fn configure_v2(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::get().to(get_recommendations))
        .route("/recommendations", web::post().to(post_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service_version: state.catalog.version().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List recommendations endpoint
///
/// GET /recommendations
///
/// Returns the fixed list for the active version. No inputs, no validation.
async fn get_recommendations(state: web::Data<AppState>) -> impl Responder {
    let items = state.catalog.list();

    tracing::debug!("Returning {} recommendations ({})", items.len(), state.catalog.version());

    HttpResponse::Ok().json(RecommendationResponse {
        version: state.catalog.version().to_string(),
        recommendations: items,
        user_preferences: None,
    })
}

/// Personalized recommendations endpoint (v2 only)
///
/// POST /recommendations
///
/// Request body: any JSON object, optionally carrying `userId`:
/// ```json
/// {
///   "userId": "42"
/// }
/// ```
/// The body is echoed back unmodified as `userPreferences`.
async fn post_recommendations(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> impl Responder {
    let preferences = body.into_inner();

    tracing::info!(
        "Personalizing recommendations (userId present: {})",
        preferences.get("userId").is_some()
    );

    let items = state.catalog.personalized(&preferences);

    HttpResponse::Ok().json(RecommendationResponse {
        version: state.catalog.version().to_string(),
        recommendations: items,
        user_preferences: Some(preferences),
    })
}
