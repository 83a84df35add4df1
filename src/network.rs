use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::config::ConfigError;

/// Network
///
/// The chain networks the client and wallet wiring can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Devnet,
        Network::Localnet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }

    /// Full-node JSON-RPC endpoint for this network.
    pub fn rpc_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Network::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string()))
    }
}

/// NetworkConfig
///
/// The resolved client configuration for one network. Constructed once during
/// state assembly and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NetworkConfig {
    pub network: Network,
    pub rpc_url: String,
    /// On-chain package identifier, passed through verbatim.
    pub package_id: Option<String>,
}

impl NetworkConfig {
    /// select
    ///
    /// Picks the RPC endpoint for `network` and attaches the package identifier.
    pub fn select(network: Network, package_id: Option<String>) -> Self {
        Self {
            network,
            rpc_url: network.rpc_url().to_string(),
            package_id,
        }
    }

    /// Every selectable network, each carrying the same package identifier.
    pub fn all(package_id: Option<&str>) -> Vec<Self> {
        Network::ALL
            .into_iter()
            .map(|network| Self::select(network, package_id.map(str::to_string)))
            .collect()
    }
}
