use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::{
    config::WalletConfig,
    network::{Network, NetworkConfig},
};

/// OAuthProvider
///
/// A sign-in provider registered with the wallet connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthProvider {
    Google { client_id: String },
}

impl OAuthProvider {
    pub fn name(&self) -> &'static str {
        match self {
            OAuthProvider::Google { .. } => "google",
        }
    }
}

/// WalletRegistration
///
/// The outcome of registering the wallet connector against a network. Holds the
/// provider API key, so it is deliberately not `Serialize`; expose `WalletInfo` instead.
#[derive(Clone, PartialEq)]
pub struct WalletRegistration {
    pub network: Network,
    pub rpc_url: String,
    pub providers: Vec<OAuthProvider>,
    api_key: String,
}

impl WalletRegistration {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for WalletRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletRegistration")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("providers", &self.providers)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// register_wallets
///
/// Registers the wallet connector for the given network. Without an API key the
/// registration is skipped with a warning; this is never fatal. Without an OAuth
/// client id the connector is registered with no sign-in providers.
pub fn register_wallets(
    config: &WalletConfig,
    network: &NetworkConfig,
) -> Option<WalletRegistration> {
    let Some(api_key) = config.api_key.clone() else {
        tracing::warn!("ENOKI_API_KEY is not set; skipping wallet registration");
        return None;
    };

    let providers = match &config.google_client_id {
        Some(client_id) => vec![OAuthProvider::Google {
            client_id: client_id.clone(),
        }],
        None => {
            tracing::warn!("GOOGLE_CLIENT_ID is not set; wallet registered without OAuth providers");
            Vec::new()
        }
    };

    tracing::info!(
        network = %network.network,
        providers = providers.len(),
        "wallet connector registered"
    );

    Some(WalletRegistration {
        network: network.network,
        rpc_url: network.rpc_url.clone(),
        providers,
        api_key,
    })
}

/// WalletInfo
///
/// Public, secret-free view of the wallet wiring served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct WalletInfo {
    pub registered: bool,
    pub network: Network,
    pub providers: Vec<String>,
}

impl WalletInfo {
    pub fn from_registration(registration: Option<&WalletRegistration>, network: Network) -> Self {
        match registration {
            Some(reg) => Self {
                registered: true,
                network: reg.network,
                providers: reg.providers.iter().map(|p| p.name().to_string()).collect(),
            },
            None => Self {
                registered: false,
                network,
                providers: Vec::new(),
            },
        }
    }
}
