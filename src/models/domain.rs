use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single recommendation record returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
}

impl RecommendationItem {
    pub fn new(id: u32, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
        }
    }
}

/// Handler variant this process runs as
///
/// The same binary is deployed once per version behind the mesh router;
/// the version tag in every response is what the routing rules key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceVersion {
    V1,
    V2,
}

impl ServiceVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl Default for ServiceVersion {
    fn default() -> Self {
        Self::V1
    }
}

impl fmt::Display for ServiceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown service version '{0}', expected 'v1' or 'v2'")]
pub struct ParseVersionError(String);

impl FromStr for ServiceVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            other => Err(ParseVersionError(other.to_string())),
        }
    }
}
