use crate::{AppState, handlers, paths::pages};
use axum::{Router, routing::get};

/// Page Router Module
///
/// Every path here is classified as protected. Whether an unauthenticated
/// request is redirected depends on the configured `GatePolicy`.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route(pages::DASHBOARD, get(handlers::dashboard))
        .route(pages::MARKETS, get(handlers::markets))
        // GET /markets/{id}
        .route(pages::MARKET_DETAIL, get(handlers::market_detail))
        .route(pages::CREATORS, get(handlers::creators))
        // GET /creators/{id}
        .route(pages::CREATOR_DETAIL, get(handlers::creator_detail))
        .route(pages::PORTFOLIO, get(handlers::portfolio))
        .route(pages::PROFILE, get(handlers::profile))
}
