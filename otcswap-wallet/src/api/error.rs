// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for wallet session operations.

use thiserror::Error;

use crate::chain::{ChainId, RegistryError};
use crate::provider::ProviderError;
use crate::rpc::RpcError;

/// Unified error type for wallet operations.
#[derive(Error, Debug)]
pub enum WalletError {
    /// No wallet provider is present in the host environment.
    #[error("no wallet provider available")]
    ProviderUnavailable,

    /// The user declined an authorization prompt.
    #[error("user rejected the request")]
    UserRejected,

    /// A `connect` is already in flight.
    #[error("connection already in progress")]
    AlreadyConnecting,

    /// The provider granted access but reported no account.
    #[error("provider returned no accounts")]
    NoAccounts,

    /// Switching to (or registering) the required network failed.
    #[error("failed to switch to network {chain_id}: {source}")]
    NetworkSwitchFailed {
        chain_id: ChainId,
        #[source]
        source: ProviderError,
    },

    /// Every read-only endpoint failed its liveness probe.
    #[error("no reachable endpoint for {network} ({attempted} tried): {source}")]
    NoReachableEndpoint {
        network: String,
        attempted: usize,
        #[source]
        source: RpcError,
    },

    /// The chain id is not in the registry.
    #[error("unknown network: {0}")]
    UnknownNetwork(ChainId),

    /// Any other provider failure.
    #[error("provider error: {0}")]
    Provider(ProviderError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<ProviderError> for WalletError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::UserRejected => WalletError::UserRejected,
            other => WalletError::Provider(other),
        }
    }
}

impl From<RegistryError> for WalletError {
    fn from(error: RegistryError) -> Self {
        WalletError::Configuration(error.to_string())
    }
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;
