// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! RPC Transport Traits
//!
//! Platform-agnostic access to read-only blockchain endpoints.

use crate::chain::ChainId;

use super::error::RpcResult;

/// A client bound to one read-only endpoint.
///
/// Calls are blocking. Implementations may drive an async runtime
/// internally but expose a blocking interface here.
pub trait RpcTransport: Send + Sync {
    /// URL this transport talks to.
    fn url(&self) -> &str;

    /// Queries the chain the endpoint serves. Used as the liveness probe.
    fn chain_id(&self) -> RpcResult<ChainId>;
}

/// Opens transports for endpoint URLs.
pub trait RpcConnector {
    type Transport: RpcTransport;

    /// Creates a transport for `url`. Must not perform network I/O.
    fn open(&self, url: &str) -> RpcResult<Self::Transport>;
}
