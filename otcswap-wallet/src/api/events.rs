// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Session notifications and the listener set they fan out to.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::chain::ChainId;

/// Events emitted by the wallet session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// A session was established.
    Connect {
        account: String,
        chain_id: Option<ChainId>,
    },

    /// The session ended. `reason` is set when the provider dropped it.
    Disconnect { reason: Option<String> },

    /// The active account changed.
    AccountsChanged { account: String },

    /// The active chain changed.
    ChainChanged { chain_id: ChainId },
}

impl WalletEvent {
    /// Event name as seen by callback-style consumers.
    pub fn name(&self) -> &'static str {
        match self {
            WalletEvent::Connect { .. } => "connect",
            WalletEvent::Disconnect { .. } => "disconnect",
            WalletEvent::AccountsChanged { .. } => "accountsChanged",
            WalletEvent::ChainChanged { .. } => "chainChanged",
        }
    }
}

/// Listener trait.
///
/// Implement this trait to observe session transitions.
pub trait WalletListener: Send + Sync {
    /// Called for every published event.
    fn on_event(&self, event: &WalletEvent);
}

/// Closure-backed listener.
pub struct CallbackListener<F>
where
    F: Fn(&WalletEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackListener<F>
where
    F: Fn(&WalletEvent) + Send + Sync,
{
    /// Creates a new callback listener.
    pub fn new(callback: F) -> Self {
        CallbackListener { callback }
    }
}

impl<F> WalletListener for CallbackListener<F>
where
    F: Fn(&WalletEvent) + Send + Sync,
{
    fn on_event(&self, event: &WalletEvent) {
        (self.callback)(event);
    }
}

/// Set of listeners, unique by identity.
///
/// Two `Arc`s pointing at the same listener are the same subscription;
/// two distinct listeners with identical behaviour are not.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Mutex<Vec<Arc<dyn WalletListener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener. Returns false if it was already subscribed.
    pub fn subscribe(&self, listener: Arc<dyn WalletListener>) -> bool {
        let mut listeners = self.listeners.lock().expect("mutex poisoned");
        if listeners.iter().any(|l| same_listener(l, &listener)) {
            return false;
        }
        listeners.push(listener);
        true
    }

    /// Removes a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, listener: &Arc<dyn WalletListener>) -> bool {
        let mut listeners = self.listeners.lock().expect("mutex poisoned");
        let before = listeners.len();
        listeners.retain(|l| !same_listener(l, listener));
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().expect("mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every listener.
    pub fn clear(&self) {
        self.listeners.lock().expect("mutex poisoned").clear();
    }

    /// Delivers `event` to every current listener.
    ///
    /// Iterates a snapshot, so listeners may subscribe or unsubscribe while
    /// being notified. A panicking listener is logged and skipped. Returns
    /// the number of listeners that completed normally.
    pub fn publish(&self, event: &WalletEvent) -> usize {
        let snapshot: Vec<Arc<dyn WalletListener>> =
            self.listeners.lock().expect("mutex poisoned").clone();

        let mut delivered = 0;
        for listener in snapshot {
            match panic::catch_unwind(AssertUnwindSafe(|| listener.on_event(event))) {
                Ok(()) => delivered += 1,
                Err(_) => warn!(event = event.name(), "listener panicked during publish"),
            }
        }
        delivered
    }
}

/// Identity comparison on the data pointer; vtable pointers of the same
/// object may differ between codegen units.
fn same_listener(a: &Arc<dyn WalletListener>, b: &Arc<dyn WalletListener>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
