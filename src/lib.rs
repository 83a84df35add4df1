use axum::{
    Router,
    extract::FromRef,
    http::HeaderName,
    middleware,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod config;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod network;
pub mod paths;
pub mod wallet;

// Router segregation (Public, Pages, API).
pub mod routes;
use routes::{api, pages, public};

// --- Public Re-exports ---

pub use config::{AppConfig, ConfigError};
pub use gate::{Decision, GatePolicy, PathClass};
pub use network::{Network, NetworkConfig};
pub use wallet::WalletRegistration;

/// ApiDoc
///
/// OpenAPI document for the service, served at `/api/openapi.json`. It lives under
/// `/api` so the access gate never stands between a client and the docs.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::home, handlers::login, handlers::dashboard, handlers::markets,
        handlers::market_detail, handlers::creators, handlers::creator_detail,
        handlers::portfolio, handlers::profile, handlers::health,
        handlers::get_network, handlers::get_networks, handlers::get_wallet, handlers::get_routes
    ),
    components(
        schemas(
            models::PageView, models::RouteView, models::RouteTable,
            network::Network, network::NetworkConfig, wallet::WalletInfo,
        )
    ),
    tags(
        (name = "krill-web", description = "Krill web application API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Shared, immutable container for everything handlers need. Built explicitly at
/// startup by `from_config`; there is no module-level client or wallet singleton.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The loaded environment configuration.
    pub config: AppConfig,
    /// Client configuration for the selected network.
    pub network: NetworkConfig,
    /// Wallet connector registration. `None` when no API key was configured.
    pub wallet: Option<WalletRegistration>,
}

impl AppState {
    /// from_config
    ///
    /// Initialization order is fixed: the network configuration is resolved first,
    /// then the wallet connector is registered against it.
    pub fn from_config(config: AppConfig) -> Self {
        let network = NetworkConfig::select(config.network, config.wallet.package_id.clone());
        let wallet = wallet::register_wallets(&config.wallet, &network);

        Self {
            config,
            network,
            wallet,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for NetworkConfig {
    fn from_ref(app_state: &AppState) -> NetworkConfig {
        app_state.network.clone()
    }
}

impl FromRef<AppState> for GatePolicy {
    fn from_ref(app_state: &AppState) -> GatePolicy {
        app_state.config.gate_policy
    }
}

/// create_router
///
/// Assembles the routing structure, wraps it in the access gate, then applies
/// the observability layers and CORS.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let gate_policy = GatePolicy::from_ref(&state);

    let base_router = Router::new()
        .merge(SwaggerUi::new("/api/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .merge(pages::page_routes())
        .merge(api::api_routes())
        .fallback(handlers::not_found)
        // The gate wraps every route and the fallback. Exclusions are decided
        // inside the middleware from the request path.
        .layer(middleware::from_fn_with_state(gate_policy, gate::access_gate))
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Builds the per-request span, correlating every log line with the `x-request-id`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
