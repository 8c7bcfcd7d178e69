// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session Handles
//!
//! Handles the contract layer works through once a session exists. They are
//! immutable: the session replaces them whenever the account or network
//! changes.

use std::fmt;
use std::sync::Arc;

use crate::api::contract::ContractConfig;
use crate::chain::ChainId;
use crate::provider::WalletProvider;

/// Read/write access to the injected provider.
#[derive(Clone)]
pub struct ProviderHandle {
    inner: Arc<dyn WalletProvider>,
}

impl ProviderHandle {
    pub fn new(inner: Arc<dyn WalletProvider>) -> Self {
        ProviderHandle { inner }
    }

    pub fn provider(&self) -> &dyn WalletProvider {
        self.inner.as_ref()
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle").finish_non_exhaustive()
    }
}

/// Signing identity: the provider bound to one account on one chain.
#[derive(Debug, Clone)]
pub struct SignerHandle {
    provider: ProviderHandle,
    account: String,
    chain_id: Option<ChainId>,
}

impl SignerHandle {
    pub fn new(provider: ProviderHandle, account: String, chain_id: Option<ChainId>) -> Self {
        SignerHandle {
            provider,
            account,
            chain_id,
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn chain_id(&self) -> Option<ChainId> {
        self.chain_id
    }

    pub fn provider(&self) -> &ProviderHandle {
        &self.provider
    }
}

/// The application contract bound to a signer.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    config: ContractConfig,
    signer: SignerHandle,
}

impl ContractHandle {
    pub fn new(config: ContractConfig, signer: SignerHandle) -> Self {
        ContractHandle { config, signer }
    }

    pub fn address(&self) -> &str {
        &self.config.address
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn signer(&self) -> &SignerHandle {
        &self.signer
    }
}
