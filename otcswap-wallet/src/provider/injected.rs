// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Injected Provider Trait
//!
//! Capability set consumed from the host's wallet provider.

use std::sync::mpsc::Sender;

use crate::chain::{AddChainParams, ChainId};

use super::error::ProviderResult;
use super::event::{ProviderEvent, ProviderEventKind};

/// Wallet provider injected by the host environment (e.g. a browser extension).
///
/// # Synchronous Interface
///
/// Every request is a blocking call. Account and chain requests may block
/// indefinitely while the user answers a prompt in the host; bindings that
/// need a deadline must impose it themselves.
///
/// # Example
///
/// ```ignore
/// use otcswap_wallet::provider::{MockProvider, WalletProvider};
///
/// let provider = MockProvider::new();
/// provider.grant_accounts(&["0xabc"]);
/// let accounts = provider.request_accounts()?;
/// ```
pub trait WalletProvider: Send + Sync {
    /// Requests account authorization. May prompt the user.
    fn request_accounts(&self) -> ProviderResult<Vec<String>>;

    /// Returns already authorized accounts without prompting.
    fn accounts(&self) -> ProviderResult<Vec<String>>;

    /// Returns the active chain.
    fn chain_id(&self) -> ProviderResult<ChainId>;

    /// Asks the provider to switch its active chain.
    ///
    /// Fails with [`ProviderError::UnrecognizedChain`](super::ProviderError::UnrecognizedChain)
    /// when the provider does not know `chain_id`.
    fn switch_chain(&self, chain_id: ChainId) -> ProviderResult<()>;

    /// Asks the provider to register a network and switch to it.
    fn add_chain(&self, params: &AddChainParams) -> ProviderResult<()>;

    /// Registers `sink` to receive every notification of `kind`.
    fn subscribe(&self, kind: ProviderEventKind, sink: Sender<ProviderEvent>) -> ProviderResult<()>;
}
