use crate::{AppState, handlers, paths::pages};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Paths the gate always lets through: the root is public and `/login` is the
/// auth page.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        .route(pages::HOME, get(handlers::home))
        // GET /login
        .route(pages::LOGIN, get(handlers::login))
}
