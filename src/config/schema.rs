//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file; every
//! section has defaults so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};

/// Root configuration shared by the `halo` and `halo-genesis` binaries.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Halo router endpoint.
    pub router: RouterConfig,

    /// everPay API used for the genesis transfer.
    pub everpay: EverpayConfig,

    /// Halo token settings.
    pub token: TokenConfig,

    /// Genesis submission settings.
    pub genesis: GenesisConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Router connection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Base URL, e.g. "http://127.0.0.1:8080".
    pub url: String,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// everPay API settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EverpayConfig {
    pub url: String,

    pub timeout_secs: u64,

    /// Token moved by the genesis transfer (amount is always zero).
    pub token_tag: String,
}

impl Default for EverpayConfig {
    fn default() -> Self {
        Self {
            url: "https://api.everpay.io".to_string(),
            timeout_secs: 30,
            token_tag: "ethereum-eth-0x0000000000000000000000000000000000000000".to_string(),
        }
    }
}

/// Halo token settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TokenConfig {
    /// Decimals used to scale human-readable amounts.
    pub decimals: u8,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self { decimals: 18 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GenesisConfig {
    /// Receiver of the genesis transfer; the halo node watches this account.
    pub halo_address: String,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            halo_address: "0xD110107aDb30BCe6C0646EAF77cC1C815012331d".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.token.decimals, 18);
        assert_eq!(config.router.url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_partial_section() {
        let config: ClientConfig = toml::from_str(
            r#"
            [router]
            url = "https://router.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.router.url, "https://router.example.com");
        assert_eq!(config.router.timeout_secs, 30);
        assert_eq!(config.everpay, EverpayConfig::default());
    }
}
