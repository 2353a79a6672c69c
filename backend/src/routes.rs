use axum::{
    http::{header, HeaderValue},
    routing::{get, MethodRouter},
    Router,
};
use shared::protocol::NO_STORE_CACHE_CONTROL;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{handlers, AppState};

/// Per-route caching policy, fixed when the route is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig {
    /// When false, responses carry `Cache-Control: no-store` so every request
    /// is recomputed from fresh data
    pub cacheable: bool,
}

impl RouteConfig {
    pub const CACHEABLE: RouteConfig = RouteConfig { cacheable: true };
    pub const FRESH: RouteConfig = RouteConfig { cacheable: false };

    /// Wrap a route so its responses follow this policy
    pub fn apply<S>(self, route: MethodRouter<S>) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        if self.cacheable {
            route
        } else {
            route.layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static(NO_STORE_CACHE_CONTROL),
            ))
        }
    }
}

pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Home page, always rendered from fresh data
        .route("/", RouteConfig::FRESH.apply(get(handlers::home::home_page)))

        // JSON API
        .route(
            "/api/health",
            RouteConfig::CACHEABLE.apply(get(handlers::health::health)),
        )
        .route(
            "/api/companions",
            RouteConfig::CACHEABLE.apply(get(handlers::companions::list_companions)),
        )
        .route(
            "/api/sessions/recent",
            RouteConfig::CACHEABLE.apply(get(handlers::companions::recent_sessions)),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
