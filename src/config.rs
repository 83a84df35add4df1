use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use thiserror::Error;

use crate::{gate::GatePolicy, network::Network};

/// ConfigError
///
/// Raised by `AppConfig::load` when an environment value is present but unusable.
/// Absent values never error; they fall back to defaults or are carried as `None`.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown network '{0}' (expected mainnet, testnet, devnet or localnet)")]
    UnknownNetwork(String),
    #[error("invalid boolean '{value}' for {key}")]
    InvalidFlag { key: &'static str, value: String },
    #[error("invalid bind address '{0}'")]
    InvalidBindAddr(String),
}

/// AppConfig
///
/// Holds the application's entire configuration state. Immutable once loaded and
/// pulled into handlers and middleware via `FromRef`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    // The chain network the wallet and client wiring target.
    pub network: Network,
    // Wallet provider credentials, all opaque.
    pub wallet: WalletConfig,
    // What the access gate does with protected requests lacking the auth cookie.
    pub gate_policy: GatePolicy,
}

/// WalletConfig
///
/// The three externally sourced strings consumed by the wallet and network wiring.
/// None of them are parsed or validated here.
#[derive(Clone, Default, PartialEq)]
pub struct WalletConfig {
    pub api_key: Option<String>,
    pub google_client_id: Option<String>,
    pub package_id: Option<String>,
}

impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("google_client_id", &self.google_client_id)
            .field("package_id", &self.package_id)
            .finish()
    }
}

/// Env
///
/// Defines the runtime context.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);

impl Default for AppConfig {
    /// Test-safe configuration that never touches the process environment.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network: Network::Testnet,
            wallet: WalletConfig::default(),
            gate_policy: GatePolicy::PassThrough,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads every setting from environment variables. Call `dotenv::dotenv()` first
    /// if a `.env` file should be honoured.
    ///
    /// # Errors
    /// Returns `ConfigError` when `SUI_NETWORK`, `AUTH_GATE_REDIRECT` or `BIND_ADDR`
    /// is set to a value that cannot be interpreted.
    pub fn load() -> Result<Self, ConfigError> {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = match non_empty("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => DEFAULT_BIND_ADDR,
        };

        let network = match non_empty("SUI_NETWORK") {
            Some(raw) => raw.parse()?,
            None => Network::Testnet,
        };

        let gate_policy = match env_flag("AUTH_GATE_REDIRECT")? {
            Some(true) => GatePolicy::RedirectToLogin,
            _ => GatePolicy::PassThrough,
        };

        let wallet = WalletConfig {
            api_key: non_empty("ENOKI_API_KEY"),
            google_client_id: non_empty("GOOGLE_CLIENT_ID"),
            package_id: non_empty("PACKAGE_ID"),
        };

        Ok(Self {
            env,
            bind_addr,
            network,
            wallet,
            gate_policy,
        })
    }
}

/// Reads a variable, treating blank values as unset. Non-blank values are
/// returned verbatim; callers that parse trim for themselves.
fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// parse_flag
///
/// Interprets the usual boolean spellings, case-insensitively.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(key: &'static str) -> Result<Option<bool>, ConfigError> {
    match non_empty(key) {
        None => Ok(None),
        Some(value) => parse_flag(&value)
            .map(Some)
            .ok_or(ConfigError::InvalidFlag { key, value }),
    }
}
