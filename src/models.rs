use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One celestial body as stored in the planets table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct PlanetRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub velocity: String,
    pub distance: String,
}

impl PlanetRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        velocity: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            image: image.into(),
            velocity: velocity.into(),
            distance: distance.into(),
        }
    }
}

// Request bodies
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlanetRequest {
    /// Planet identifier, 0 - 9 in the reference dataset
    pub id: i64,
}

// API response types
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HostInfo {
    pub os: String,
    pub env: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
