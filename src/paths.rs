//! Page routes and API endpoints.
//!
//! Templates use `{id}` placeholders so the same constants can be registered on
//! the router and expanded into concrete links with [`fill`].

/// The placeholder every parameterized template carries.
pub const ID_PARAM: &str = "{id}";

/// RouteEntry
///
/// A symbolic name paired with its path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: &'static str,
    pub template: &'static str,
}

impl RouteEntry {
    pub const fn new(name: &'static str, template: &'static str) -> Self {
        Self { name, template }
    }

    pub fn is_parameterized(&self) -> bool {
        self.template.contains(ID_PARAM)
    }
}

/// Substitutes `id` into the template's `{id}` placeholder. No validation is applied.
pub fn fill(template: &str, id: &str) -> String {
    template.replacen(ID_PARAM, id, 1)
}

/// Finds a template by its symbolic name.
pub fn lookup(table: &[RouteEntry], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.template)
}

pub mod pages {
    use super::fill;

    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const MARKETS: &str = "/markets";
    pub const MARKET_DETAIL: &str = "/markets/{id}";
    pub const CREATORS: &str = "/creators";
    pub const CREATOR_DETAIL: &str = "/creators/{id}";
    pub const PORTFOLIO: &str = "/portfolio";
    pub const PROFILE: &str = "/profile";

    pub fn market_detail(id: &str) -> String {
        fill(MARKET_DETAIL, id)
    }

    pub fn creator_detail(id: &str) -> String {
        fill(CREATOR_DETAIL, id)
    }
}

pub mod endpoints {
    use super::fill;

    pub const HEALTH: &str = "/api/health";
    pub const MARKET_LIST: &str = "/api/market";
    pub const MARKET_TRADE: &str = "/api/market/trade";
    pub const CREATOR_LIST: &str = "/api/creators";
    pub const CREATOR: &str = "/api/creators/{id}";
    pub const NETWORK: &str = "/api/network";
    pub const NETWORKS: &str = "/api/network/all";
    pub const WALLET: &str = "/api/wallet";
    pub const ROUTES: &str = "/api/routes";

    pub fn creator(id: &str) -> String {
        fill(CREATOR, id)
    }
}

pub const PAGE_ROUTES: &[RouteEntry] = &[
    RouteEntry::new("home", pages::HOME),
    RouteEntry::new("login", pages::LOGIN),
    RouteEntry::new("dashboard", pages::DASHBOARD),
    RouteEntry::new("markets", pages::MARKETS),
    RouteEntry::new("market_detail", pages::MARKET_DETAIL),
    RouteEntry::new("creators", pages::CREATORS),
    RouteEntry::new("creator_detail", pages::CREATOR_DETAIL),
    RouteEntry::new("portfolio", pages::PORTFOLIO),
    RouteEntry::new("profile", pages::PROFILE),
];

pub const API_ENDPOINTS: &[RouteEntry] = &[
    RouteEntry::new("health", endpoints::HEALTH),
    RouteEntry::new("market_list", endpoints::MARKET_LIST),
    RouteEntry::new("market_trade", endpoints::MARKET_TRADE),
    RouteEntry::new("creator_list", endpoints::CREATOR_LIST),
    RouteEntry::new("creator", endpoints::CREATOR),
    RouteEntry::new("network", endpoints::NETWORK),
    RouteEntry::new("networks", endpoints::NETWORKS),
    RouteEntry::new("wallet", endpoints::WALLET),
    RouteEntry::new("routes", endpoints::ROUTES),
];
