//! Home page: popular companions and recently completed sessions
//!
//! Both lists are fetched fresh on every request, companions first and then
//! sessions. If either fetch fails the error is logged once and the page is
//! rendered with both lists empty; a failure is never shown to the visitor
//! and a half-loaded page is never rendered.

use axum::{extract::State, response::Html};
use shared::protocol::{POPULAR_COMPANION_LIMIT, RECENT_SESSION_LIMIT};
use shared::{Companion, CompanionCardProps, CompanionQuery, SessionRecord};
use std::sync::Arc;
use tracing::error;

use crate::components::{companion_card, companions_list, cta};
use crate::store::{CompanionStore, StoreError};
use crate::AppState;

pub const PAGE_HEADING: &str = "Popular Companions";
pub const RECENT_SESSIONS_TITLE: &str = "Recently completed sessions";
const RECENT_SESSIONS_CLASSES: &str = "w-2/3 max-lg:w-full";

/// Data the home page is rendered from
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingData {
    pub companions: Vec<Companion>,
    pub recent_sessions: Vec<SessionRecord>,
}

/// GET / - Render the home page
pub async fn home_page(State(app_state): State<Arc<AppState>>) -> Html<String> {
    let data = load_listing(app_state.store.as_ref()).await;
    Html(render_listing_page(&data))
}

/// Fetch both lists, degrading to empty lists if either fetch fails
pub async fn load_listing(store: &dyn CompanionStore) -> ListingData {
    match fetch_listing(store).await {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to fetch companions: {}", e);
            ListingData::default()
        }
    }
}

async fn fetch_listing(store: &dyn CompanionStore) -> Result<ListingData, StoreError> {
    let companions = store
        .all_companions(&CompanionQuery::with_limit(POPULAR_COMPANION_LIMIT))
        .await?;
    let recent_sessions = store.recent_sessions(RECENT_SESSION_LIMIT).await?;

    Ok(ListingData {
        companions,
        recent_sessions,
    })
}

pub fn render_listing_page(data: &ListingData) -> String {
    let cards: Vec<String> = data
        .companions
        .iter()
        .cloned()
        .map(|companion| companion_card(&CompanionCardProps::new(companion)))
        .collect();

    let recent = companions_list(
        RECENT_SESSIONS_TITLE,
        &data.recent_sessions,
        RECENT_SESSIONS_CLASSES,
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Companion Portal</title>
    <style>
        body {{
            margin: 0;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #fff;
            color: #111;
        }}
        main {{
            max-width: 1400px;
            margin: 0 auto;
            padding: 2rem;
        }}
        .home-section {{
            display: flex;
            gap: 1rem;
            justify-content: space-between;
            align-items: flex-start;
            margin-top: 2rem;
        }}
        .companion-card {{
            flex: 1;
            border: 1px solid #000;
            border-radius: 1rem;
            padding: 1rem 1.25rem;
        }}
        .subject-badge {{
            display: inline-block;
            background: #000;
            color: #fff;
            border-radius: 2rem;
            padding: 0.2rem 0.75rem;
            font-size: 0.85rem;
        }}
        .companion-list {{
            border: 1px solid #000;
            border-radius: 1rem;
            padding: 1.25rem;
        }}
        .companion-list .subject-badge {{
            color: #000;
        }}
        .session-table {{
            width: 100%;
            border-collapse: collapse;
        }}
        .session-table th, .session-table td {{
            text-align: left;
            padding: 0.5rem;
        }}
        .session-name {{
            display: block;
            font-weight: 700;
        }}
        .cta-section {{
            background: #000;
            color: #fff;
            border-radius: 1rem;
            padding: 2rem;
            text-align: center;
        }}
        .cta-badge {{
            display: inline-block;
            background: #fe5933;
            border-radius: 0.25rem;
            padding: 0.25rem 0.75rem;
        }}
        .btn-primary {{
            display: inline-block;
            background: #fe5933;
            color: #fff;
            border-radius: 0.5rem;
            padding: 0.5rem 1rem;
            text-decoration: none;
        }}
        @media (max-width: 1024px) {{
            .home-section {{ flex-direction: column; }}
            .max-lg\:w-full {{ width: 100%; }}
        }}
        .w-2\/3 {{ width: 66%; }}
    </style>
</head>
<body>
<main>
    <h1>{heading}</h1>

    <section class="home-section popular-companions">
{cards}
    </section>

    <section class="home-section">
{recent}
{cta}
    </section>
</main>
</body>
</html>"#,
        heading = PAGE_HEADING,
        cards = cards.join("\n"),
        recent = recent,
        cta = cta(),
    )
}
