// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Enforcement
//!
//! Drives the provider onto the required network: switch first, register
//! the network if the provider does not know it.

use tracing::{debug, info, warn};

use crate::api::error::{WalletError, WalletResult};
use crate::chain::{ChainId, NetworkIdentity};
use crate::provider::{ProviderError, WalletProvider};

/// How the provider ended up on the target network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnforceOutcome {
    /// Already there; nothing was requested.
    AlreadyOnTarget,
    /// A switch request succeeded.
    Switched,
    /// The provider did not know the network; it was registered.
    Added,
}

/// Switch-or-register protocol for one target network.
#[derive(Debug, Clone)]
pub struct NetworkEnforcer {
    target: NetworkIdentity,
}

impl NetworkEnforcer {
    pub fn new(target: NetworkIdentity) -> Self {
        NetworkEnforcer { target }
    }

    pub fn target(&self) -> &NetworkIdentity {
        &self.target
    }

    pub fn target_chain(&self) -> ChainId {
        self.target.chain_id()
    }

    /// Ensures the provider's active network is the target.
    ///
    /// `current` is the chain the session last saw; when it already equals
    /// the target no request is made.
    pub fn enforce(
        &self,
        provider: &dyn WalletProvider,
        current: Option<ChainId>,
    ) -> WalletResult<EnforceOutcome> {
        let target = self.target.chain_id();
        if current == Some(target) {
            debug!(chain = %target, "already on target network");
            return Ok(EnforceOutcome::AlreadyOnTarget);
        }

        info!(from = ?current, to = %target, "switching network");
        match provider.switch_chain(target) {
            Ok(()) => Ok(EnforceOutcome::Switched),
            Err(ProviderError::UnrecognizedChain) => {
                info!(network = self.target.name(), "provider does not know network, adding it");
                provider
                    .add_chain(&self.target.add_chain_params())
                    .map_err(|source| self.failed(source))?;
                Ok(EnforceOutcome::Added)
            }
            Err(source) => Err(self.failed(source)),
        }
    }

    fn failed(&self, source: ProviderError) -> WalletError {
        warn!(chain = %self.target.chain_id(), error = %source, "network switch failed");
        WalletError::NetworkSwitchFailed {
            chain_id: self.target.chain_id(),
            source,
        }
    }
}
