// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Registry
//!
//! Lookup table of the networks the application knows about.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use super::identity::{is_valid_address, ChainId, NetworkIdentity};

/// Registry loading errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed registry: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("registry key {key} does not match chain id {chain_id}")]
    KeyMismatch { key: String, chain_id: ChainId },

    #[error("invalid contract address for {0}")]
    InvalidContractAddress(ChainId),

    #[error("registry contains no networks")]
    Empty,
}

/// Registry of supported networks, keyed by chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    networks: BTreeMap<ChainId, NetworkIdentity>,
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NetworkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        NetworkRegistry {
            networks: BTreeMap::new(),
        }
    }

    /// Registry holding the networks the application ships with.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(NetworkIdentity::amoy());
        registry
    }

    /// Loads networks from JSON.
    ///
    /// The document is an object keyed by decimal chain id:
    ///
    /// ```
    /// use otcswap_wallet::chain::NetworkRegistry;
    ///
    /// let json = r#"{
    ///     "80002": {
    ///         "name": "Amoy",
    ///         "contractAddress": "0xF9D874860d5801233dd84569fad8513e0037A5d9",
    ///         "explorer": "https://www.oklink.com/amoy",
    ///         "rpcUrl": "https://rpc.ankr.com/polygon_amoy",
    ///         "fallbackRpcUrls": ["https://polygon-amoy.public.blastapi.io"],
    ///         "chainId": "0x13882",
    ///         "nativeCurrency": { "name": "POL", "symbol": "POL", "decimals": 18 }
    ///     }
    /// }"#;
    /// let registry = NetworkRegistry::from_json(json).unwrap();
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: BTreeMap<String, NetworkIdentity> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut registry = Self::new();
        for (key, network) in raw {
            let key_id: Option<ChainId> = key.parse().ok();
            if key_id != Some(network.chain_id()) {
                return Err(RegistryError::KeyMismatch {
                    key,
                    chain_id: network.chain_id(),
                });
            }
            if !network.contract_address().is_empty()
                && !is_valid_address(network.contract_address())
            {
                return Err(RegistryError::InvalidContractAddress(network.chain_id()));
            }
            registry.register(network);
        }
        Ok(registry)
    }

    /// Loads networks from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Adds or replaces a network.
    pub fn register(&mut self, network: NetworkIdentity) {
        self.networks.insert(network.chain_id(), network);
    }

    /// Looks up a network by chain id.
    pub fn get(&self, chain_id: ChainId) -> Option<&NetworkIdentity> {
        self.networks.get(&chain_id)
    }

    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.networks.contains_key(&chain_id)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Iterates networks in chain id order.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkIdentity> {
        self.networks.values()
    }
}
