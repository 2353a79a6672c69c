use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Constants shared between the page, the API and clients
pub mod protocol;

// API request/response types
pub mod api;
pub use api::{
    CompanionListResponse, CompanionQuery, HealthResponse, RecentSessionsQuery,
    RecentSessionsResponse,
};

// Subject palette
pub mod subjects;
pub use subjects::subject_color;

/// A learning companion as stored by the portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    pub id: Uuid,
    pub name: String,
    /// Category used for grouping and for the card color
    pub subject: String,
    pub topic: String,
    pub voice: String,
    pub style: String,
    /// Lesson length in minutes
    pub duration: i32,
    /// Id of the user that created the companion
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A previously completed session, together with the companion it was held with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub companion: Companion,
    pub completed_at: DateTime<Utc>,
}

/// Everything a companion card needs: the companion itself plus its display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionCardProps {
    #[serde(flatten)]
    pub companion: Companion,
    pub color: String,
}

impl CompanionCardProps {
    pub fn new(companion: Companion) -> Self {
        let color = subject_color(&companion.subject).to_string();
        Self { companion, color }
    }
}

impl From<Companion> for CompanionCardProps {
    fn from(companion: Companion) -> Self {
        Self::new(companion)
    }
}
