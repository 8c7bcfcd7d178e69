// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session State

use crate::chain::ChainId;

/// Lifecycle state of a wallet session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `init` has not run.
    Uninitialized,
    /// `init` is talking to the provider.
    Initializing,
    /// Initialized, no active account.
    Disconnected,
    /// Initialized with an active account.
    Connected,
}

/// Mutable session data.
///
/// Fields are only reachable through methods that keep `connected`
/// implying an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    connected: bool,
    account: Option<String>,
    chain_id: Option<ChainId>,
    initialized: bool,
    initializing: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.initializing {
            SessionState::Initializing
        } else if !self.initialized {
            SessionState::Uninitialized
        } else if self.connected {
            SessionState::Connected
        } else {
            SessionState::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn chain_id(&self) -> Option<ChainId> {
        self.chain_id
    }

    /// Marks the session connected with `account` as the active account.
    pub fn establish(&mut self, account: String, chain_id: Option<ChainId>) {
        self.account = Some(account);
        self.connected = true;
        if chain_id.is_some() {
            self.chain_id = chain_id;
        }
    }

    /// Switches the active account, keeping the session connected.
    pub fn set_account(&mut self, account: String) {
        self.account = Some(account);
        self.connected = true;
    }

    pub fn set_chain(&mut self, chain_id: ChainId) {
        self.chain_id = Some(chain_id);
    }

    /// Drops the account and the connection.
    pub fn reset(&mut self) {
        self.account = None;
        self.connected = false;
    }

    /// Provider lost its connection; the last account is kept for display.
    pub fn mark_offline(&mut self) {
        self.connected = false;
    }

    pub(crate) fn begin_init(&mut self) {
        self.initializing = true;
    }

    pub(crate) fn finish_init(&mut self, success: bool) {
        self.initializing = false;
        self.initialized = self.initialized || success;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_states() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Uninitialized);

        session.begin_init();
        assert_eq!(session.state(), SessionState::Initializing);

        session.finish_init(true);
        assert_eq!(session.state(), SessionState::Disconnected);

        session.establish("0xabc".into(), Some(ChainId::AMOY));
        assert_eq!(session.state(), SessionState::Connected);

        session.reset();
        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(session.account().is_none());
    }

    #[test]
    fn test_failed_init_returns_to_uninitialized() {
        let mut session = Session::new();
        session.begin_init();
        session.finish_init(false);
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_establish_keeps_known_chain_when_none_given() {
        let mut session = Session::new();
        session.set_chain(ChainId::new(1));
        session.establish("0xabc".into(), None);
        assert_eq!(session.chain_id(), Some(ChainId::new(1)));
    }

    #[test]
    fn test_mark_offline_keeps_account() {
        let mut session = Session::new();
        session.establish("0xabc".into(), None);
        session.mark_offline();
        assert!(!session.is_connected());
        assert_eq!(session.account(), Some("0xabc"));
    }
}
