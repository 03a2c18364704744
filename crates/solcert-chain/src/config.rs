//! Client configuration
//!
//! Connection settings are plain data: a node URL and the certificate
//! contract address, both overridable through the environment. The defaults
//! match the local development deployment, where the contract lands at the
//! first deterministic address of a fresh dev node.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the node URL
pub const ENV_RPC_URL: &str = "RPC_URL";

/// Environment variable overriding the contract address
pub const ENV_CONTRACT_ADDRESS: &str = "CONTRACT_ADDRESS";

/// Connection settings for the certificate ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// JSON-RPC endpoint of the ledger node
    pub rpc_url: String,

    /// Address of the certificate contract
    pub contract_address: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::local()
    }
}

impl ChainConfig {
    /// Settings for a local development node
    pub fn local() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
        }
    }

    /// Local defaults with `RPC_URL` / `CONTRACT_ADDRESS` overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::local();
        if let Ok(url) = std::env::var(ENV_RPC_URL) {
            if !url.is_empty() {
                config.rpc_url = url;
            }
        }
        if let Ok(address) = std::env::var(ENV_CONTRACT_ADDRESS) {
            if !address.is_empty() {
                config.contract_address = address;
            }
        }
        config
    }
}
