use crate::{AppState, handlers, paths::endpoints};
use axum::{Router, routing::get};

/// API Router Module
///
/// Read-only configuration endpoints. Everything under `/api` is excluded from
/// the access gate, so these are reachable without the auth cookie under any policy.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // GET /api/health
        // Liveness probe. Load balancers never carry the auth cookie.
        .route(endpoints::HEALTH, get(handlers::health))
        // GET /api/network
        // The network configuration selected at startup.
        .route(endpoints::NETWORK, get(handlers::get_network))
        // GET /api/network/all
        .route(endpoints::NETWORKS, get(handlers::get_networks))
        // GET /api/wallet
        // Wallet registration status. The API key is never included.
        .route(endpoints::WALLET, get(handlers::get_wallet))
        // GET /api/routes
        .route(endpoints::ROUTES, get(handlers::get_routes))
}
