//! API request and response types
//!
//! These are the JSON shapes served under `/api`. The home page reads the
//! same data through the backend's store directly.

use serde::{Deserialize, Serialize};

use crate::protocol::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, RECENT_SESSION_LIMIT};
use crate::{Companion, SessionRecord};

/// Filters and paging for a companion listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionQuery {
    pub limit: i64,
    /// 1-based page number
    pub page: i64,
    /// Case-insensitive substring match on the subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Case-insensitive substring match on the topic or the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Default for CompanionQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            page: 1,
            subject: None,
            topic: None,
        }
    }
}

impl CompanionQuery {
    /// First page of unfiltered companions, at most `limit` of them
    pub fn with_limit(limit: i64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Clamp paging into range and drop blank filters
    pub fn normalized(self) -> Self {
        Self {
            limit: self.limit.clamp(0, MAX_PAGE_SIZE),
            page: self.page.max(1),
            subject: non_blank(self.subject),
            topic: non_blank(self.topic),
        }
    }

    /// Number of rows skipped before this page starts
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit.max(0))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Query string for the recent sessions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentSessionsQuery {
    pub limit: i64,
}

impl Default for RecentSessionsQuery {
    fn default() -> Self {
        Self {
            limit: RECENT_SESSION_LIMIT,
        }
    }
}

impl RecentSessionsQuery {
    pub fn clamped_limit(&self) -> i64 {
        self.limit.clamp(0, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionListResponse {
    pub companions: Vec<Companion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSessionsResponse {
    pub sessions: Vec<SessionRecord>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_first_page() {
        let query = CompanionQuery::default();
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(query.page, 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn offset_follows_page() {
        let query = CompanionQuery {
            limit: 3,
            page: 4,
            ..CompanionQuery::default()
        };
        assert_eq!(query.offset(), 9);
    }

    #[test]
    fn normalized_clamps_paging() {
        let query = CompanionQuery {
            limit: 10_000,
            page: -2,
            ..CompanionQuery::default()
        }
        .normalized();
        assert_eq!(query.limit, MAX_PAGE_SIZE);
        assert_eq!(query.page, 1);

        let query = CompanionQuery::with_limit(-5).normalized();
        assert_eq!(query.limit, 0);
    }

    #[test]
    fn normalized_drops_blank_filters() {
        let query = CompanionQuery {
            subject: Some("   ".to_string()),
            topic: Some(" brain ".to_string()),
            ..CompanionQuery::default()
        }
        .normalized();
        assert_eq!(query.subject, None);
        assert_eq!(query.topic.as_deref(), Some("brain"));
    }

    #[test]
    fn query_deserializes_with_missing_fields() {
        let query: CompanionQuery = serde_json::from_str(r#"{"subject":"maths"}"#).unwrap();
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(query.page, 1);
        assert_eq!(query.subject.as_deref(), Some("maths"));
    }

    #[test]
    fn recent_sessions_limit_is_clamped() {
        assert_eq!(RecentSessionsQuery::default().clamped_limit(), RECENT_SESSION_LIMIT);
        assert_eq!(RecentSessionsQuery { limit: 500 }.clamped_limit(), MAX_PAGE_SIZE);
        assert_eq!(RecentSessionsQuery { limit: -1 }.clamped_limit(), 0);
    }
}
