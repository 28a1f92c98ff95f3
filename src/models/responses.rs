use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::domain::RecommendationItem;

/// Response for the recommendations endpoint
///
/// `userPreferences` is only present on personalized (POST) responses; GET
/// responses omit the key entirely rather than sending null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub version: String,
    pub recommendations: Vec<RecommendationItem>,
    #[serde(rename = "userPreferences", skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<Value>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "serviceVersion")]
    pub service_version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_response_omits_user_preferences() {
        let response = RecommendationResponse {
            version: "v1".to_string(),
            recommendations: vec![RecommendationItem::new(1, "Movie A", "Popular")],
            user_preferences: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("userPreferences").is_none());
    }

    #[test]
    fn test_post_response_echoes_user_preferences() {
        let prefs = serde_json::json!({"userId": "42"});
        let response = RecommendationResponse {
            version: "v2".to_string(),
            recommendations: vec![],
            user_preferences: Some(prefs.clone()),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userPreferences"], prefs);
    }
}
