// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Provider
//!
//! In-memory wallet provider for tests. Clones share state, so a test can
//! keep one handle to script the wallet while the session owns another.

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::chain::{AddChainParams, ChainId};

use super::error::{ProviderError, ProviderResult};
use super::event::{ProviderEvent, ProviderEventKind};
use super::injected::WalletProvider;

/// A request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    RequestAccounts,
    Accounts,
    ChainId,
    SwitchChain(ChainId),
    AddChain(AddChainParams),
    Subscribe(ProviderEventKind),
}

/// Test-side ends of a held `request_accounts` call.
pub struct AccountRequestGate {
    /// Receives once the held request has started.
    pub entered: Receiver<()>,
    /// Send to let the held request continue.
    pub release: Sender<()>,
}

struct GateInner {
    entered: Sender<()>,
    release: Receiver<()>,
}

#[derive(Default)]
struct MockState {
    /// Accounts the user will approve on `request_accounts`.
    wallet_accounts: Vec<String>,
    /// Accounts already authorized for this origin.
    authorized: Vec<String>,
    chain_id: ChainId,
    known_chains: HashSet<ChainId>,
    request_error: Option<ProviderError>,
    chain_id_error: Option<ProviderError>,
    switch_error: Option<ProviderError>,
    add_chain_error: Option<ProviderError>,
    /// Chain the "user" flips back to after every successful switch.
    revert_to: Option<ChainId>,
    gate: Option<GateInner>,
    calls: Vec<ProviderCall>,
    subscribers: Vec<(ProviderEventKind, Sender<ProviderEvent>)>,
}

/// Mock wallet provider.
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Creates a mock on chain 1 (Ethereum mainnet) that knows only that chain.
    pub fn new() -> Self {
        Self::on_chain(ChainId::new(1))
    }

    /// Creates a mock whose active chain is `chain_id`.
    pub fn on_chain(chain_id: ChainId) -> Self {
        let mock = MockProvider::default();
        {
            let mut state = mock.lock();
            state.chain_id = chain_id;
            state.known_chains.insert(chain_id);
        }
        mock
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mutex poisoned")
    }

    /// Accounts the user approves when prompted.
    pub fn set_wallet_accounts(&self, accounts: &[&str]) {
        self.lock().wallet_accounts = accounts.iter().map(|a| a.to_string()).collect();
    }

    /// Marks accounts as already authorized (and approvable).
    pub fn grant_accounts(&self, accounts: &[&str]) {
        let accounts: Vec<String> = accounts.iter().map(|a| a.to_string()).collect();
        let mut state = self.lock();
        state.wallet_accounts = accounts.clone();
        state.authorized = accounts;
    }

    /// Makes `request_accounts` fail with `error`.
    pub fn fail_requests_with(&self, error: ProviderError) {
        self.lock().request_error = Some(error);
    }

    /// Makes `chain_id` fail with `error`.
    pub fn fail_chain_id_with(&self, error: ProviderError) {
        self.lock().chain_id_error = Some(error);
    }

    /// Makes `switch_chain` fail with `error` regardless of known chains.
    pub fn fail_switch_with(&self, error: ProviderError) {
        self.lock().switch_error = Some(error);
    }

    /// Makes `add_chain` fail with `error`.
    pub fn fail_add_chain_with(&self, error: ProviderError) {
        self.lock().add_chain_error = Some(error);
    }

    /// Registers a chain the provider can switch to without `add_chain`.
    pub fn add_known_chain(&self, chain_id: ChainId) {
        self.lock().known_chains.insert(chain_id);
    }

    /// After every successful switch, immediately switch back to `chain_id`
    /// as a stubborn user would.
    pub fn revert_switches_to(&self, chain_id: ChainId) {
        self.lock().revert_to = Some(chain_id);
    }

    /// Holds the next `request_accounts` call until released.
    pub fn hold_account_requests(&self) -> AccountRequestGate {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        self.lock().gate = Some(GateInner {
            entered: entered_tx,
            release: release_rx,
        });
        AccountRequestGate {
            entered: entered_rx,
            release: release_tx,
        }
    }

    /// Returns the active chain.
    pub fn active_chain(&self) -> ChainId {
        self.lock().chain_id
    }

    /// Returns every request received so far.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock().calls.clone()
    }

    /// Counts requests matching `pred`.
    pub fn count_calls(&self, pred: impl Fn(&ProviderCall) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| pred(c)).count()
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    /// Pushes a notification to subscribers of its kind, updating mock state
    /// the way a real wallet would.
    pub fn emit(&self, event: ProviderEvent) {
        let mut state = self.lock();
        match &event {
            ProviderEvent::AccountsChanged(accounts) => state.authorized = accounts.clone(),
            ProviderEvent::ChainChanged(chain_id) => state.chain_id = *chain_id,
            _ => {}
        }
        Self::deliver(&mut state, event);
    }

    fn deliver(state: &mut MockState, event: ProviderEvent) {
        let kind = event.kind();
        state
            .subscribers
            .retain(|(k, sink)| *k != kind || sink.send(event.clone()).is_ok());
    }

    fn activate(state: &mut MockState, chain_id: ChainId) {
        state.chain_id = chain_id;
        Self::deliver(state, ProviderEvent::ChainChanged(chain_id));
        if let Some(revert) = state.revert_to {
            if revert != chain_id {
                state.chain_id = revert;
                Self::deliver(state, ProviderEvent::ChainChanged(revert));
            }
        }
    }
}

impl WalletProvider for MockProvider {
    fn request_accounts(&self) -> ProviderResult<Vec<String>> {
        let gate = {
            let mut state = self.lock();
            state.calls.push(ProviderCall::RequestAccounts);
            state.gate.take()
        };
        if let Some(gate) = gate {
            let _ = gate.entered.send(());
            let _ = gate.release.recv();
        }

        let mut state = self.lock();
        if let Some(error) = state.request_error.clone() {
            return Err(error);
        }
        state.authorized = state.wallet_accounts.clone();
        Ok(state.authorized.clone())
    }

    fn accounts(&self) -> ProviderResult<Vec<String>> {
        let mut state = self.lock();
        state.calls.push(ProviderCall::Accounts);
        Ok(state.authorized.clone())
    }

    fn chain_id(&self) -> ProviderResult<ChainId> {
        let mut state = self.lock();
        state.calls.push(ProviderCall::ChainId);
        match state.chain_id_error.clone() {
            Some(error) => Err(error),
            None => Ok(state.chain_id),
        }
    }

    fn switch_chain(&self, chain_id: ChainId) -> ProviderResult<()> {
        let mut state = self.lock();
        state.calls.push(ProviderCall::SwitchChain(chain_id));
        if let Some(error) = state.switch_error.clone() {
            return Err(error);
        }
        if !state.known_chains.contains(&chain_id) {
            return Err(ProviderError::UnrecognizedChain);
        }
        if state.chain_id != chain_id {
            Self::activate(&mut state, chain_id);
        }
        Ok(())
    }

    fn add_chain(&self, params: &AddChainParams) -> ProviderResult<()> {
        let mut state = self.lock();
        state.calls.push(ProviderCall::AddChain(params.clone()));
        if let Some(error) = state.add_chain_error.clone() {
            return Err(error);
        }
        state.known_chains.insert(params.chain_id);
        if state.chain_id != params.chain_id {
            Self::activate(&mut state, params.chain_id);
        }
        Ok(())
    }

    fn subscribe(&self, kind: ProviderEventKind, sink: Sender<ProviderEvent>) -> ProviderResult<()> {
        let mut state = self.lock();
        state.calls.push(ProviderCall::Subscribe(kind));
        state.subscribers.push((kind, sink));
        Ok(())
    }
}
