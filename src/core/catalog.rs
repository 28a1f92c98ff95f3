use serde_json::Value;
use crate::models::{RecommendationItem, ServiceVersion};

/// Builds the per-version recommendation lists
///
/// Both variants return a fixed three-item table; v2 additionally supports
/// templating the first title from the caller's `userId`.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    version: ServiceVersion,
}

impl Catalog {
    pub fn new(version: ServiceVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> ServiceVersion {
        self.version
    }

    /// Fixed recommendation list for the active version
    pub fn list(&self) -> Vec<RecommendationItem> {
        match self.version {
            ServiceVersion::V1 => vec![
                RecommendationItem::new(1, "Movie A", "Popular"),
                RecommendationItem::new(2, "Movie B", "Trending"),
                RecommendationItem::new(3, "Movie C", "Top Rated"),
            ],
            ServiceVersion::V2 => vec![
                RecommendationItem::new(1, "Movie X", "AI-Enhanced"),
                RecommendationItem::new(2, "Movie Y", "Personalized"),
                RecommendationItem::new(3, "Movie Z", "Recently Watched"),
            ],
        }
    }

    /// List with the first title templated on the caller's `userId`
    ///
    /// `preferences` is the raw POST body. A missing `userId` field falls
    /// back to the literal `unknown`; the body itself is never validated
    /// beyond being JSON.
    pub fn personalized(&self, preferences: &Value) -> Vec<RecommendationItem> {
        let user_id = preferences
            .get("userId")
            .map(render_user_id)
            .unwrap_or_else(|| "unknown".to_string());

        let mut items = self.list();
        if let Some(first) = items.first_mut() {
            first.title = format!("{} for user {}", first.title, user_id);
        }
        items
    }
}

/// Render a `userId` value as opaque text
///
/// Strings are used verbatim; any other JSON value is rendered in its
/// compact JSON form.
fn render_user_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
