//! Fixtures shared by the backend's unit tests

use async_trait::async_trait;
use chrono::Utc;
use shared::{Companion, CompanionQuery, SessionRecord};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;
use uuid::Uuid;

use crate::store::{CompanionStore, StoreError};

pub fn companion(name: &str, subject: &str) -> Companion {
    Companion {
        id: Uuid::new_v4(),
        name: name.to_string(),
        subject: subject.to_string(),
        topic: format!("{} basics", subject),
        voice: "female".to_string(),
        style: "casual".to_string(),
        duration: 45,
        author: "user_test".to_string(),
        created_at: Utc::now(),
    }
}

pub fn session(companion: Companion) -> SessionRecord {
    SessionRecord {
        id: Uuid::new_v4(),
        companion,
        completed_at: Utc::now(),
    }
}

/// In-memory [`CompanionStore`]; returns rows in insertion order
#[derive(Default)]
pub struct MemoryStore {
    companions: Vec<Companion>,
    sessions: Vec<SessionRecord>,
    fail_companions: bool,
    fail_sessions: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl MemoryStore {
    pub fn new(companions: Vec<Companion>, sessions: Vec<SessionRecord>) -> Self {
        Self {
            companions,
            sessions,
            ..Self::default()
        }
    }

    pub fn failing_companions(mut self) -> Self {
        self.fail_companions = true;
        self
    }

    pub fn failing_sessions(mut self) -> Self {
        self.fail_sessions = true;
        self
    }

    /// Names of the store operations called so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn unavailable() -> StoreError {
    StoreError::Query(diesel::result::Error::BrokenTransactionManager)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl CompanionStore for MemoryStore {
    async fn all_companions(&self, query: &CompanionQuery) -> Result<Vec<Companion>, StoreError> {
        self.record("all_companions");
        if self.fail_companions {
            return Err(unavailable());
        }
        if query.limit <= 0 {
            return Ok(Vec::new());
        }

        Ok(self
            .companions
            .iter()
            .filter(|c| {
                query
                    .subject
                    .as_deref()
                    .map_or(true, |s| contains_ci(&c.subject, s))
            })
            .filter(|c| {
                query
                    .topic
                    .as_deref()
                    .map_or(true, |t| contains_ci(&c.topic, t) || contains_ci(&c.name, t))
            })
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn recent_sessions(&self, limit: i64) -> Result<Vec<SessionRecord>, StoreError> {
        self.record("recent_sessions");
        if self.fail_sessions {
            return Err(unavailable());
        }

        Ok(self
            .sessions
            .iter()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

/// Tracing layer that counts ERROR events
#[derive(Clone, Default)]
pub struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
