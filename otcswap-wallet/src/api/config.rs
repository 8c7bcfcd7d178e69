// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wallet Configuration

use std::path::Path;
use std::time::Duration;

use crate::chain::{ChainId, NetworkIdentity, NetworkRegistry};

use super::contract::{ContractAbi, ContractConfig};
use super::error::{WalletError, WalletResult};

/// Configuration for a wallet session.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Networks the client knows about.
    pub registry: NetworkRegistry,

    /// The network every session must be on.
    pub target_chain: ChainId,

    /// ABI of the application contract.
    pub contract_abi: ContractAbi,

    /// Correct the network automatically when the provider switches away.
    pub auto_enforce_network: bool,

    /// Automatic corrections allowed per drain of provider events.
    pub max_auto_switch_attempts: u32,

    /// Per-request timeout for read-only endpoints. `None` waits forever.
    pub probe_timeout: Option<Duration>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        WalletConfig {
            registry: NetworkRegistry::builtin(),
            target_chain: ChainId::AMOY,
            contract_abi: ContractAbi::default(),
            auto_enforce_network: true,
            max_auto_switch_attempts: 3,
            probe_timeout: None,
        }
    }
}

impl WalletConfig {
    /// Uses `registry` and targets `target_chain` in it.
    pub fn with_registry(mut self, registry: NetworkRegistry, target_chain: ChainId) -> Self {
        self.registry = registry;
        self.target_chain = target_chain;
        self
    }

    /// Loads the registry from a JSON file and targets `target_chain` in it.
    pub fn with_registry_file(
        self,
        path: impl AsRef<Path>,
        target_chain: ChainId,
    ) -> WalletResult<Self> {
        let registry = NetworkRegistry::from_file(path)?;
        let config = self.with_registry(registry, target_chain);
        config.validate()?;
        Ok(config)
    }

    /// Targets another network of the current registry.
    pub fn with_target_chain(mut self, chain_id: ChainId) -> Self {
        self.target_chain = chain_id;
        self
    }

    pub fn with_abi(mut self, abi: ContractAbi) -> Self {
        self.contract_abi = abi;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    pub fn with_max_auto_switch_attempts(mut self, attempts: u32) -> Self {
        self.max_auto_switch_attempts = attempts;
        self
    }

    /// Leave wrong-network sessions alone after external chain changes.
    pub fn without_auto_enforce(mut self) -> Self {
        self.auto_enforce_network = false;
        self
    }

    /// Resolves the target network.
    pub fn target_network(&self) -> WalletResult<&NetworkIdentity> {
        self.registry
            .get(self.target_chain)
            .ok_or(WalletError::UnknownNetwork(self.target_chain))
    }

    /// Contract address on the target network plus the ABI.
    pub fn contract_config(&self) -> WalletResult<ContractConfig> {
        Ok(ContractConfig {
            address: self.target_network()?.contract_address().to_string(),
            abi: self.contract_abi.clone(),
        })
    }

    /// Checks the configuration is usable.
    pub fn validate(&self) -> WalletResult<()> {
        let target = self.target_network()?;
        if target.rpc_url().is_empty() {
            return Err(WalletError::Configuration(format!(
                "network {} has no rpc url",
                target.name()
            )));
        }
        Ok(())
    }
}
