mod components;
mod db;
mod handlers;
mod models;
mod routes;
mod schema;
mod store;

#[cfg(test)]
mod test_support;

use clap::Parser;
use std::{env, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::store::{CompanionStore, PgCompanionStore};

#[derive(Parser, Debug, Clone)]
#[command(name = "companion-portal")]
#[command(about = "Companion portal web server")]
struct Args {
    /// Enable development mode (seeds demo companions into an empty database)
    #[arg(long)]
    dev_mode: bool,

    /// Don't run pending database migrations at startup
    #[arg(long)]
    skip_migrations: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompanionStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if args.dev_mode {
        tracing::warn!("🚧 DEV MODE ENABLED - demo companions will be seeded");
    }

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create database pool
    let pool = db::create_pool()?;

    if args.skip_migrations {
        tracing::info!("Skipping database migrations");
    } else {
        let applied = db::run_migrations(&pool)?;
        for migration in &applied {
            tracing::info!("Applied migration: {}", migration);
        }
    }

    // Seed demo data in dev mode
    if args.dev_mode {
        let created = db::seed_demo_companions(&pool)?;
        if created > 0 {
            tracing::info!("✓ Seeded {} demo companions", created);
        }
    }

    // Create app state
    let app_state = Arc::new(AppState {
        store: Arc::new(PgCompanionStore::new(pool)),
    });

    let app = routes::build_router(app_state);

    // Run the server
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
