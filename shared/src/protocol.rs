/// Number of companions shown in the "Popular Companions" grid on the home page.
pub const POPULAR_COMPANION_LIMIT: i64 = 3;

/// Number of completed sessions listed on the home page.
pub const RECENT_SESSION_LIMIT: i64 = 10;

/// Page size used by the companions API when the client doesn't ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page the JSON API will serve in one response.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Cache-Control value sent on routes that must always be recomputed.
pub const NO_STORE_CACHE_CONTROL: &str = "no-store, max-age=0";
