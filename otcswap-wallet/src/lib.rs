// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! OTCSwap Wallet Library
//!
//! Connection lifecycle between the OTCSwap client and an injected wallet
//! provider: session state, reaction to account and network changes made
//! outside the application, enforcement of the required network, and
//! failover across read-only RPC endpoints.

pub mod api;
pub mod chain;
pub mod provider;
pub mod rpc;
pub mod session;

pub use api::{
    CallbackListener, ContractAbi, ContractConfig, ListenerRegistry, WalletConfig, WalletError,
    WalletEvent, WalletListener, WalletResult,
};
pub use chain::{AddChainParams, ChainId, NativeCurrency, NetworkIdentity, NetworkRegistry};
pub use provider::{MockProvider, ProviderError, ProviderEvent, ProviderEventKind, WalletProvider};
pub use rpc::{EndpointSelector, MockRpcConnector, ReadProvider, RpcConnector, RpcError, RpcTransport};
#[cfg(feature = "http")]
pub use rpc::{HttpRpcConnector, HttpRpcTransport};
pub use session::{
    ConnectInfo, ContractHandle, EnforceOutcome, NetworkEnforcer, ProviderHandle, Session,
    SessionHealth, SessionState, SignerHandle, WalletManager,
};
