use chrono::{DateTime, Utc};
use diesel::prelude::*;
use shared::{Companion, SessionRecord};
use uuid::Uuid;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::companions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompanionRow {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub topic: String,
    pub voice: String,
    pub style: String,
    pub duration: i32,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<CompanionRow> for Companion {
    fn from(row: CompanionRow) -> Self {
        Companion {
            id: row.id,
            name: row.name,
            subject: row.subject,
            topic: row.topic,
            voice: row.voice,
            style: row.style,
            duration: row.duration,
            author: row.author,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::companions)]
pub struct NewCompanion {
    pub name: String,
    pub subject: String,
    pub topic: String,
    pub voice: String,
    pub style: String,
    pub duration: i32,
    pub author: String,
}

// ============================================================================
// Session History Models
// ============================================================================

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::session_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SessionHistoryRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl SessionHistoryRow {
    /// Pair a history row with the companion it references
    pub fn into_record(self, companion: CompanionRow) -> SessionRecord {
        SessionRecord {
            id: self.id,
            companion: companion.into(),
            completed_at: self.created_at,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::session_history)]
pub struct NewSessionHistory {
    pub companion_id: Uuid,
    pub user_id: Option<String>,
}
