// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property Tests for session::manager
//!
//! Arbitrary sequences of provider notifications against the session's
//! event invariants.

mod common;

use common::strategies::*;
use common::RecordingListener;
use otcswap_wallet::provider::ProviderEvent;
use otcswap_wallet::*;
use proptest::prelude::*;

fn push_accounts(provider: &MockProvider, manager: &WalletManager, accounts: &[String]) {
    provider.emit(ProviderEvent::AccountsChanged(accounts.to_vec()));
    manager.process_events();
}

fn manager(provider: &MockProvider, config: WalletConfig) -> WalletManager {
    let manager = WalletManager::with_provider(config, provider.clone()).unwrap();
    manager.init().unwrap();
    manager
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Consecutive `accountsChanged` events never repeat an account.
    #[test]
    fn prop_accounts_changed_never_repeats(payloads in accounts_sequence_strategy()) {
        let provider = MockProvider::on_chain(ChainId::AMOY);
        let manager = manager(&provider, WalletConfig::default());
        let listener = RecordingListener::new();
        manager.subscribe(listener.clone());

        for payload in &payloads {
            push_accounts(&provider, &manager, payload);
        }

        let mut last: Option<String> = None;
        for event in listener.events() {
            match event {
                WalletEvent::AccountsChanged { account } => {
                    prop_assert_ne!(Some(&account), last.as_ref());
                    last = Some(account);
                }
                WalletEvent::Disconnect { .. } => last = None,
                other => prop_assert!(false, "unexpected event {:?}", other),
            }
        }
    }

    /// Every empty payload yields exactly one disconnect, connected or not.
    #[test]
    fn prop_empty_payload_disconnects_once(payloads in accounts_sequence_strategy()) {
        let provider = MockProvider::on_chain(ChainId::AMOY);
        let manager = manager(&provider, WalletConfig::default());
        let listener = RecordingListener::new();
        manager.subscribe(listener.clone());

        for payload in &payloads {
            listener.clear();
            push_accounts(&provider, &manager, payload);

            let disconnects = listener
                .names()
                .into_iter()
                .filter(|name| *name == "disconnect")
                .count();
            prop_assert_eq!(disconnects, usize::from(payload.is_empty()));
        }
    }

    /// The session account always tracks the first account of the last payload.
    #[test]
    fn prop_account_tracks_last_payload(payloads in accounts_sequence_strategy()) {
        let provider = MockProvider::on_chain(ChainId::AMOY);
        let manager = manager(&provider, WalletConfig::default());

        for payload in &payloads {
            push_accounts(&provider, &manager, payload);

            let account = manager.account();
            prop_assert_eq!(account.as_ref(), payload.first());
            prop_assert_eq!(manager.is_connected(), !payload.is_empty());
            prop_assert_eq!(manager.signer().is_some(), !payload.is_empty());
        }
    }

    /// Without enforcement the session mirrors whatever chain the wallet reports.
    #[test]
    fn prop_chain_mirrors_provider_without_enforcement(
        chains in prop::collection::vec(chain_id_strategy(), 1..20)
    ) {
        let provider = MockProvider::on_chain(ChainId::AMOY);
        let config = WalletConfig::default().without_auto_enforce();
        let manager = manager(&provider, config);

        for chain in &chains {
            provider.emit(ProviderEvent::ChainChanged(ChainId::new(*chain)));
            manager.process_events();
            prop_assert_eq!(manager.chain_id(), Some(ChainId::new(*chain)));
        }
    }

    /// With enforcement on and a cooperative wallet, every drain ends on the target.
    #[test]
    fn prop_enforcement_returns_to_target(
        chains in prop::collection::vec(chain_id_strategy(), 1..20)
    ) {
        let provider = MockProvider::on_chain(ChainId::AMOY);
        for chain in [1u64, 137, 11_155_111] {
            provider.add_known_chain(ChainId::new(chain));
        }
        let manager = manager(&provider, WalletConfig::default());

        for chain in &chains {
            provider.emit(ProviderEvent::ChainChanged(ChainId::new(*chain)));
            manager.process_events();

            prop_assert_eq!(provider.active_chain(), ChainId::AMOY);
            prop_assert_eq!(manager.chain_id(), Some(ChainId::AMOY));
        }
    }
}
