// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Provider Notifications
//!
//! Change notifications pushed by the provider outside the application's
//! control.

use crate::chain::ChainId;

use super::error::ProviderError;

/// Kind of provider notification, used when subscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderEventKind {
    AccountsChanged,
    ChainChanged,
    Connect,
    Disconnect,
}

impl ProviderEventKind {
    /// Every kind the session subscribes to.
    pub const ALL: [ProviderEventKind; 4] = [
        ProviderEventKind::AccountsChanged,
        ProviderEventKind::ChainChanged,
        ProviderEventKind::Connect,
        ProviderEventKind::Disconnect,
    ];

    /// Wire name of the notification.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderEventKind::AccountsChanged => "accountsChanged",
            ProviderEventKind::ChainChanged => "chainChanged",
            ProviderEventKind::Connect => "connect",
            ProviderEventKind::Disconnect => "disconnect",
        }
    }
}

/// A notification pushed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The authorized account list changed. Empty means the user revoked access.
    AccountsChanged(Vec<String>),
    /// The active chain changed.
    ChainChanged(ChainId),
    /// The provider became able to serve requests on a chain.
    Connect { chain_id: ChainId },
    /// The provider lost its connection to every chain.
    Disconnect { error: Option<ProviderError> },
}

impl ProviderEvent {
    pub fn kind(&self) -> ProviderEventKind {
        match self {
            ProviderEvent::AccountsChanged(_) => ProviderEventKind::AccountsChanged,
            ProviderEvent::ChainChanged(_) => ProviderEventKind::ChainChanged,
            ProviderEvent::Connect { .. } => ProviderEventKind::Connect,
            ProviderEvent::Disconnect { .. } => ProviderEventKind::Disconnect,
        }
    }
}
