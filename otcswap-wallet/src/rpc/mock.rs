// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock RPC Connector
//!
//! Scripted endpoints for testing endpoint selection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::chain::ChainId;

use super::error::{RpcError, RpcResult};
use super::transport::{RpcConnector, RpcTransport};

#[derive(Debug, Clone)]
enum Outcome {
    Chain(ChainId),
    Fail(String),
}

#[derive(Default)]
struct MockRpcState {
    outcomes: HashMap<String, Outcome>,
    probed: Vec<String>,
}

/// Connector whose endpoints answer or fail as scripted.
///
/// Unscripted URLs fail as unreachable.
#[derive(Clone, Default)]
pub struct MockRpcConnector {
    state: Arc<Mutex<MockRpcState>>,
}

impl MockRpcConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// `url` answers probes with `chain_id`.
    pub fn respond(&self, url: &str, chain_id: ChainId) -> &Self {
        self.state
            .lock()
            .expect("mutex poisoned")
            .outcomes
            .insert(url.to_string(), Outcome::Chain(chain_id));
        self
    }

    /// `url` fails probes with `reason`.
    pub fn fail(&self, url: &str, reason: &str) -> &Self {
        self.state
            .lock()
            .expect("mutex poisoned")
            .outcomes
            .insert(url.to_string(), Outcome::Fail(reason.to_string()));
        self
    }

    /// URLs probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").probed.clone()
    }
}

impl RpcConnector for MockRpcConnector {
    type Transport = MockRpcTransport;

    fn open(&self, url: &str) -> RpcResult<MockRpcTransport> {
        Ok(MockRpcTransport {
            url: url.to_string(),
            state: Arc::clone(&self.state),
        })
    }
}

/// Transport handed out by [`MockRpcConnector`].
#[derive(Clone)]
pub struct MockRpcTransport {
    url: String,
    state: Arc<Mutex<MockRpcState>>,
}

impl std::fmt::Debug for MockRpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRpcTransport")
            .field("url", &self.url)
            .finish()
    }
}

impl RpcTransport for MockRpcTransport {
    fn url(&self) -> &str {
        &self.url
    }

    fn chain_id(&self) -> RpcResult<ChainId> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.probed.push(self.url.clone());
        match state.outcomes.get(&self.url) {
            Some(Outcome::Chain(chain_id)) => Ok(*chain_id),
            Some(Outcome::Fail(reason)) => Err(RpcError::Unreachable(reason.clone())),
            None => Err(RpcError::Unreachable(format!("no route to {}", self.url))),
        }
    }
}
