use crate::{
    AppState,
    models::{PageView, RouteTable},
    network::NetworkConfig,
    paths::{API_ENDPOINTS, PAGE_ROUTES, pages},
    wallet::WalletInfo,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// --- Public Pages ---

/// home
///
/// [Public Route] The landing page. Never gated.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page", body = PageView))
)]
pub async fn home() -> Json<PageView> {
    Json(PageView::new("home", pages::HOME))
}

/// login
///
/// [Auth Page] The sign-in page. Never gated.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login page", body = PageView))
)]
pub async fn login() -> Json<PageView> {
    Json(PageView::new("login", pages::LOGIN))
}

// --- Protected Pages ---

/// dashboard
///
/// [Protected Page] The signed-in landing page.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses((status = 200, description = "Dashboard page", body = PageView))
)]
pub async fn dashboard() -> Json<PageView> {
    Json(PageView::new("dashboard", pages::DASHBOARD))
}

/// markets
///
/// [Protected Page] Market listing.
#[utoipa::path(
    get,
    path = "/markets",
    responses((status = 200, description = "Markets page", body = PageView))
)]
pub async fn markets() -> Json<PageView> {
    Json(PageView::new("markets", pages::MARKETS))
}

/// market_detail
///
/// [Protected Page] Echoes the concrete path built from the `{id}` template.
#[utoipa::path(
    get,
    path = "/markets/{id}",
    params(("id" = String, Path, description = "Market identifier")),
    responses((status = 200, description = "Market page", body = PageView))
)]
pub async fn market_detail(Path(id): Path<String>) -> Json<PageView> {
    Json(PageView::new("market_detail", pages::market_detail(&id)))
}

/// creators
///
/// [Protected Page] Creator listing.
#[utoipa::path(
    get,
    path = "/creators",
    responses((status = 200, description = "Creators page", body = PageView))
)]
pub async fn creators() -> Json<PageView> {
    Json(PageView::new("creators", pages::CREATORS))
}

/// creator_detail
///
/// [Protected Page] Echoes the concrete path built from the `{id}` template.
#[utoipa::path(
    get,
    path = "/creators/{id}",
    params(("id" = String, Path, description = "Creator identifier")),
    responses((status = 200, description = "Creator page", body = PageView))
)]
pub async fn creator_detail(Path(id): Path<String>) -> Json<PageView> {
    Json(PageView::new("creator_detail", pages::creator_detail(&id)))
}

/// portfolio
///
/// [Protected Page] The user's positions.
#[utoipa::path(
    get,
    path = "/portfolio",
    responses((status = 200, description = "Portfolio page", body = PageView))
)]
pub async fn portfolio() -> Json<PageView> {
    Json(PageView::new("portfolio", pages::PORTFOLIO))
}

/// profile
///
/// [Protected Page] Account settings.
#[utoipa::path(
    get,
    path = "/profile",
    responses((status = 200, description = "Profile page", body = PageView))
)]
pub async fn profile() -> Json<PageView> {
    Json(PageView::new("profile", pages::PROFILE))
}

// --- API ---

/// get_network
///
/// [API Route] The network configuration the app was started with.
#[utoipa::path(
    get,
    path = "/api/network",
    responses((status = 200, description = "Active network", body = NetworkConfig))
)]
pub async fn get_network(State(network): State<NetworkConfig>) -> Json<NetworkConfig> {
    Json(network)
}

/// get_networks
///
/// [API Route] Every selectable network with the configured package identifier.
#[utoipa::path(
    get,
    path = "/api/network/all",
    responses((status = 200, description = "Selectable networks", body = [NetworkConfig]))
)]
pub async fn get_networks(State(network): State<NetworkConfig>) -> Json<Vec<NetworkConfig>> {
    Json(NetworkConfig::all(network.package_id.as_deref()))
}

/// get_wallet
///
/// [API Route] Whether the wallet connector was registered, and with which providers.
/// Never exposes the API key.
#[utoipa::path(
    get,
    path = "/api/wallet",
    responses((status = 200, description = "Wallet wiring", body = WalletInfo))
)]
pub async fn get_wallet(State(state): State<AppState>) -> Json<WalletInfo> {
    Json(WalletInfo::from_registration(
        state.wallet.as_ref(),
        state.network.network,
    ))
}

/// get_routes
///
/// [API Route] The page and endpoint tables, for clients that build links.
#[utoipa::path(
    get,
    path = "/api/routes",
    responses((status = 200, description = "Route tables", body = RouteTable))
)]
pub async fn get_routes() -> Json<RouteTable> {
    Json(RouteTable::from_tables(PAGE_ROUTES, API_ENDPOINTS))
}

/// health
///
/// [API Route] Liveness probe for load balancers. Lives under `/api` so the gate
/// never redirects it.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health() -> &'static str {
    "ok"
}

/// not_found
///
/// Fallback for unmatched paths. Registered explicitly so the access gate wraps it.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}
