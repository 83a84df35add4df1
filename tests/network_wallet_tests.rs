use krill_web::{
    AppConfig, AppState, ConfigError, Network, NetworkConfig,
    config::WalletConfig,
    wallet::{OAuthProvider, WalletInfo, register_wallets},
};

// --- Network Selector ---

#[test]
fn test_network_parses_case_insensitively() {
    assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
    assert_eq!("Testnet".parse::<Network>(), Ok(Network::Testnet));
    assert_eq!(" DEVNET ".parse::<Network>(), Ok(Network::Devnet));
    assert_eq!("localnet".parse::<Network>(), Ok(Network::Localnet));
}

#[test]
fn test_unknown_network_is_rejected() {
    assert_eq!(
        "moonnet".parse::<Network>(),
        Err(ConfigError::UnknownNetwork("moonnet".to_string()))
    );
}

#[test]
fn test_select_uses_network_rpc_and_passes_package_through() {
    let config = NetworkConfig::select(Network::Mainnet, Some("0xPACKAGE".to_string()));

    assert_eq!(config.network, Network::Mainnet);
    assert_eq!(config.rpc_url, "https://fullnode.mainnet.sui.io:443");
    assert_eq!(config.package_id.as_deref(), Some("0xPACKAGE"));
}

#[test]
fn test_all_lists_every_network() {
    let all = NetworkConfig::all(None);
    let networks: Vec<_> = all.iter().map(|config| config.network).collect();

    assert_eq!(networks, Network::ALL.to_vec());
    assert!(all.iter().all(|config| config.package_id.is_none()));
    assert_eq!(all[3].rpc_url, "http://127.0.0.1:9000");
}

#[test]
fn test_network_serializes_lowercase() {
    let json = serde_json::to_string(&Network::Devnet).unwrap();
    assert_eq!(json, "\"devnet\"");
}

// --- Wallet Registration ---

fn wallet_config(api_key: Option<&str>, client_id: Option<&str>) -> WalletConfig {
    WalletConfig {
        api_key: api_key.map(str::to_string),
        google_client_id: client_id.map(str::to_string),
        package_id: None,
    }
}

#[test]
fn test_missing_api_key_skips_registration() {
    let network = NetworkConfig::select(Network::Testnet, None);
    assert!(register_wallets(&wallet_config(None, Some("client")), &network).is_none());
}

#[test]
fn test_registration_with_google_provider() {
    let network = NetworkConfig::select(Network::Devnet, None);
    let registration =
        register_wallets(&wallet_config(Some("enoki_public_123"), Some("client.apps")), &network)
            .unwrap();

    assert_eq!(registration.network, Network::Devnet);
    assert_eq!(registration.rpc_url, network.rpc_url);
    assert_eq!(registration.api_key(), "enoki_public_123");
    assert_eq!(
        registration.providers,
        vec![OAuthProvider::Google {
            client_id: "client.apps".to_string()
        }]
    );
}

#[test]
fn test_registration_without_client_id_has_no_providers() {
    let network = NetworkConfig::select(Network::Testnet, None);
    let registration = register_wallets(&wallet_config(Some("key"), None), &network).unwrap();

    assert!(registration.providers.is_empty());
}

#[test]
fn test_debug_output_redacts_api_key() {
    let network = NetworkConfig::select(Network::Testnet, None);
    let config = wallet_config(Some("super-secret-key"), None);
    let registration = register_wallets(&config, &network).unwrap();

    assert!(!format!("{registration:?}").contains("super-secret-key"));
    assert!(!format!("{config:?}").contains("super-secret-key"));
}

#[test]
fn test_wallet_info_never_carries_secrets() {
    let network = NetworkConfig::select(Network::Mainnet, None);
    let registration =
        register_wallets(&wallet_config(Some("super-secret-key"), Some("cid")), &network);

    let info = WalletInfo::from_registration(registration.as_ref(), Network::Mainnet);
    assert!(info.registered);
    assert_eq!(info.providers, vec!["google".to_string()]);

    let json = serde_json::to_string(&info).unwrap();
    assert!(!json.contains("super-secret-key"));
}

// --- State Assembly ---

#[test]
fn test_state_from_config_wires_network_then_wallet() {
    let config = AppConfig {
        network: Network::Localnet,
        wallet: WalletConfig {
            api_key: Some("key".to_string()),
            google_client_id: None,
            package_id: Some("0x2".to_string()),
        },
        ..AppConfig::default()
    };

    let state = AppState::from_config(config);

    assert_eq!(state.network.network, Network::Localnet);
    assert_eq!(state.network.package_id.as_deref(), Some("0x2"));
    let wallet = state.wallet.unwrap();
    assert_eq!(wallet.network, Network::Localnet);
    assert_eq!(wallet.rpc_url, "http://127.0.0.1:9000");
}

#[test]
fn test_state_without_api_key_has_no_wallet() {
    let state = AppState::from_config(AppConfig::default());
    assert!(state.wallet.is_none());
}
