use anyhow::{Context, Result};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use uuid::Uuid;

use crate::models::{NewCompanion, NewSessionHistory};
use crate::schema::{companions, session_history};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Embedded database migrations - compiled into the binary
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Author recorded on companions created by `seed_demo_companions`
pub const DEMO_AUTHOR: &str = "dev_mode_demo_author";

pub fn create_pool() -> Result<DbPool> {
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database pool")?;

    Ok(pool)
}

/// Run pending database migrations
/// Returns the list of migrations that were applied
pub fn run_migrations(pool: &DbPool) -> Result<Vec<String>> {
    let mut conn = pool.get()?;

    let applied: Vec<String> = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?
        .iter()
        .map(|m| m.to_string())
        .collect();

    Ok(applied)
}

/// (name, subject, topic, duration in minutes)
const DEMO_COMPANIONS: &[(&str, &str, &str, i32)] = &[
    ("Neura the Brainy Explorer", "science", "Neural Network of the Brain", 45),
    ("Countsy the Number Wizard", "maths", "Derivatives & Integrals", 30),
    ("Verba the Vocabulary Builder", "language", "English Literature", 30),
    ("Codey the Logic Hacker", "coding", "Intro to If-Else Statements", 45),
    ("Memo, the Memory Keeper", "history", "World Wars: Causes & Consequences", 15),
    ("The Market Maestro", "economics", "The Basics of Supply & Demand", 10),
];

/// Populate an empty database with demo companions and one completed session each.
/// Does nothing if any companion already exists.
///
/// Returns the number of companions created.
pub fn seed_demo_companions(pool: &DbPool) -> Result<usize> {
    let mut conn = pool.get()?;

    let existing: i64 = companions::table.count().get_result(&mut conn)?;
    if existing > 0 {
        return Ok(0);
    }

    conn.transaction::<usize, anyhow::Error, _>(|conn| {
        let new_companions: Vec<NewCompanion> = DEMO_COMPANIONS
            .iter()
            .map(|(name, subject, topic, duration)| NewCompanion {
                name: name.to_string(),
                subject: subject.to_string(),
                topic: topic.to_string(),
                voice: "female".to_string(),
                style: "casual".to_string(),
                duration: *duration,
                author: DEMO_AUTHOR.to_string(),
            })
            .collect();

        let ids: Vec<Uuid> = diesel::insert_into(companions::table)
            .values(&new_companions)
            .returning(companions::id)
            .get_results(conn)?;

        let history: Vec<NewSessionHistory> = ids
            .iter()
            .map(|id| NewSessionHistory {
                companion_id: *id,
                user_id: Some(DEMO_AUTHOR.to_string()),
            })
            .collect();

        diesel::insert_into(session_history::table)
            .values(&history)
            .execute(conn)?;

        Ok(ids.len())
    })
}
