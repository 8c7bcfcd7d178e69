// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Endpoint Selection
//!
//! Picks a working read-only endpoint for a network: the primary first,
//! then each fallback in declared order.

use tracing::{debug, info, warn};

use crate::api::error::{WalletError, WalletResult};
use crate::chain::{ChainId, NetworkIdentity};

use super::error::{RpcError, RpcResult};
use super::transport::{RpcConnector, RpcTransport};

/// A read-only data channel that passed its liveness probe.
#[derive(Debug)]
pub struct ReadProvider<T: RpcTransport> {
    transport: T,
    chain_id: ChainId,
    endpoint_index: usize,
}

impl<T: RpcTransport> ReadProvider<T> {
    /// URL of the selected endpoint.
    pub fn url(&self) -> &str {
        self.transport.url()
    }

    /// Chain reported by the probe.
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Position in the endpoint list (0 = primary).
    pub fn endpoint_index(&self) -> usize {
        self.endpoint_index
    }

    /// True if a fallback was selected.
    pub fn is_fallback(&self) -> bool {
        self.endpoint_index > 0
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

/// Selects the first reachable endpoint of a network.
///
/// Each endpoint is probed exactly once; retry policy belongs to the
/// caller. No deadline is imposed here either: a hung endpoint stalls the
/// selection unless the connector's transports carry their own timeout.
pub struct EndpointSelector<C: RpcConnector> {
    connector: C,
    check_chain: bool,
}

impl<C: RpcConnector> EndpointSelector<C> {
    /// Creates a selector that also rejects endpoints serving another chain.
    pub fn new(connector: C) -> Self {
        EndpointSelector {
            connector,
            check_chain: true,
        }
    }

    /// Accept any endpoint that answers, whatever chain it serves.
    pub fn without_chain_check(mut self) -> Self {
        self.check_chain = false;
        self
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Returns the first endpoint of `network` that answers its probe.
    ///
    /// Fails with [`WalletError::NoReachableEndpoint`] carrying the last
    /// endpoint's error when none does.
    pub fn select(&self, network: &NetworkIdentity) -> WalletResult<ReadProvider<C::Transport>> {
        let mut last_error = None;
        let mut attempted = 0;

        for (index, url) in network.endpoints().enumerate() {
            attempted += 1;
            match self.probe(url, network.chain_id()) {
                Ok((transport, chain_id)) => {
                    if index > 0 {
                        info!(url, index, "using fallback endpoint for {}", network.name());
                    } else {
                        debug!(url, "primary endpoint reachable");
                    }
                    return Ok(ReadProvider {
                        transport,
                        chain_id,
                        endpoint_index: index,
                    });
                }
                Err(e) => {
                    warn!(url, error = %e, "endpoint probe failed");
                    last_error = Some(e);
                }
            }
        }

        Err(WalletError::NoReachableEndpoint {
            network: network.name().to_string(),
            attempted,
            source: last_error
                .unwrap_or_else(|| RpcError::Unreachable("no endpoints configured".into())),
        })
    }

    fn probe(&self, url: &str, expected: ChainId) -> RpcResult<(C::Transport, ChainId)> {
        let transport = self.connector.open(url)?;
        let actual = transport.chain_id()?;
        if self.check_chain && actual != expected {
            return Err(RpcError::ChainMismatch { expected, actual });
        }
        Ok((transport, actual))
    }
}
