//! Data providers for companions and session history
//!
//! Handlers only see the [`CompanionStore`] trait; [`PgCompanionStore`] is the
//! Postgres implementation used by the server.

use async_trait::async_trait;
use diesel::dsl::AsSelect;
use diesel::pg::Pg;
use diesel::prelude::*;
use shared::{Companion, CompanionQuery, SessionRecord};
use thiserror::Error;
use tracing::debug;

use crate::db::DbPool;
use crate::models::{CompanionRow, SessionHistoryRow};
use crate::schema::companions;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

#[async_trait]
pub trait CompanionStore: Send + Sync {
    /// Companions matching `query`, newest first, one page at a time
    async fn all_companions(&self, query: &CompanionQuery) -> Result<Vec<Companion>, StoreError>;

    /// The most recently completed sessions, newest first
    async fn recent_sessions(&self, limit: i64) -> Result<Vec<SessionRecord>, StoreError>;
}

/// Substring pattern for `ILIKE` that matches `needle` literally.
/// `\` is Postgres's default LIKE escape character.
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// One page of companions matching `query`, newest first with `id` breaking ties
pub fn companions_query(
    query: &CompanionQuery,
) -> companions::BoxedQuery<'static, Pg, AsSelect<CompanionRow, Pg>> {
    let mut select = companions::table
        .select(CompanionRow::as_select())
        .into_boxed();

    if let Some(subject) = &query.subject {
        select = select.filter(companions::subject.ilike(like_pattern(subject)));
    }

    if let Some(topic) = &query.topic {
        let pattern = like_pattern(topic);
        select = select.filter(
            companions::topic
                .ilike(pattern.clone())
                .or(companions::name.ilike(pattern)),
        );
    }

    select
        .order(companions::created_at.desc())
        .then_order_by(companions::id)
        .limit(query.limit)
        .offset(query.offset())
}

#[derive(Clone)]
pub struct PgCompanionStore {
    pool: DbPool,
}

impl PgCompanionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanionStore for PgCompanionStore {
    async fn all_companions(&self, query: &CompanionQuery) -> Result<Vec<Companion>, StoreError> {
        if query.limit <= 0 {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get()?;
        let rows = companions_query(query).load::<CompanionRow>(&mut conn)?;

        debug!("Loaded {} companions (page {})", rows.len(), query.page);

        Ok(rows.into_iter().map(Companion::from).collect())
    }

    async fn recent_sessions(&self, limit: i64) -> Result<Vec<SessionRecord>, StoreError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get()?;

        use crate::schema::session_history;

        let rows: Vec<(SessionHistoryRow, CompanionRow)> = session_history::table
            .inner_join(companions::table)
            .order(session_history::created_at.desc())
            .then_order_by(session_history::id)
            .limit(limit)
            .select((SessionHistoryRow::as_select(), CompanionRow::as_select()))
            .load(&mut conn)?;

        debug!("Loaded {} recent sessions", rows.len());

        Ok(rows
            .into_iter()
            .map(|(history, companion)| history.into_record(companion))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::debug_query;

    fn sql_of(query: &CompanionQuery) -> String {
        debug_query::<Pg, _>(&companions_query(query)).to_string()
    }

    #[test]
    fn test_companions_query_breaks_created_at_ties_by_id() {
        let sql = sql_of(&CompanionQuery::with_limit(3));
        assert!(
            sql.contains(r#"ORDER BY "companions"."created_at" DESC, "companions"."id""#),
            "unexpected SQL: {}",
            sql
        );
    }

    #[test]
    fn test_companions_query_binds_escaped_filters() {
        let query = CompanionQuery {
            subject: Some("%".to_string()),
            topic: Some("_".to_string()),
            ..CompanionQuery::default()
        };
        let sql = sql_of(&query);

        assert!(sql.contains("ILIKE"), "unexpected SQL: {}", sql);
        assert!(sql.contains(&format!("{:?}", like_pattern("%"))), "unexpected SQL: {}", sql);
        assert!(sql.contains(&format!("{:?}", like_pattern("_"))), "unexpected SQL: {}", sql);
    }

    #[test]
    fn test_like_pattern_wraps_plain_text() {
        assert_eq!(like_pattern("maths"), "%maths%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("%"), r"%\%%");
        assert_eq!(like_pattern("_"), r"%\_%");
        assert_eq!(like_pattern("100%_sure"), r"%100\%\_sure%");
    }

    #[test]
    fn test_like_pattern_escapes_backslash() {
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }
}
