// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for provider::error and provider::mock

use std::sync::mpsc;

use otcswap_wallet::chain::{ChainId, NetworkIdentity};
use otcswap_wallet::provider::*;

#[test]
fn test_error_code_classification() {
    assert_eq!(ProviderError::from_code(4001, ""), ProviderError::UserRejected);
    assert_eq!(
        ProviderError::from_code(4902, "Unrecognized chain ID"),
        ProviderError::UnrecognizedChain
    );
    assert_eq!(ProviderError::from_code(4901, ""), ProviderError::Disconnected);
    assert_eq!(
        ProviderError::from_code(-32603, "internal"),
        ProviderError::Rpc {
            code: -32603,
            message: "internal".into()
        }
    );
}

#[test]
fn test_error_code_round_trip_for_known_codes() {
    for code in [4001, 4100, 4200, 4900, 4902] {
        assert_eq!(ProviderError::from_code(code, "").code(), code);
    }
}

#[test]
fn test_mock_accounts_require_authorization() {
    let provider = MockProvider::new();
    provider.set_wallet_accounts(&["0xabc"]);

    assert!(provider.accounts().unwrap().is_empty());
    assert_eq!(provider.request_accounts().unwrap(), vec!["0xabc".to_string()]);
    assert_eq!(provider.accounts().unwrap(), vec!["0xabc".to_string()]);
}

#[test]
fn test_mock_rejects_requests() {
    let provider = MockProvider::new();
    provider.fail_requests_with(ProviderError::UserRejected);

    assert_eq!(provider.request_accounts(), Err(ProviderError::UserRejected));
}

#[test]
fn test_mock_switch_unknown_chain() {
    let provider = MockProvider::new();

    assert_eq!(
        provider.switch_chain(ChainId::AMOY),
        Err(ProviderError::UnrecognizedChain)
    );
    assert_eq!(provider.active_chain(), ChainId::new(1));
}

#[test]
fn test_mock_add_chain_switches_and_notifies() {
    let provider = MockProvider::new();
    let (sink, inbox) = mpsc::channel();
    provider
        .subscribe(ProviderEventKind::ChainChanged, sink)
        .unwrap();

    provider
        .add_chain(&NetworkIdentity::amoy().add_chain_params())
        .unwrap();

    assert_eq!(provider.active_chain(), ChainId::AMOY);
    assert_eq!(
        inbox.try_recv().unwrap(),
        ProviderEvent::ChainChanged(ChainId::AMOY)
    );

    // Known now, so a switch away and back needs no add
    provider.add_known_chain(ChainId::new(1));
    provider.switch_chain(ChainId::new(1)).unwrap();
    provider.switch_chain(ChainId::AMOY).unwrap();
    assert_eq!(
        provider.count_calls(|c| matches!(c, ProviderCall::AddChain(_))),
        1
    );
}

#[test]
fn test_mock_emit_routes_by_kind() {
    let provider = MockProvider::new();
    let (accounts_sink, accounts_inbox) = mpsc::channel();
    let (chain_sink, chain_inbox) = mpsc::channel();
    provider
        .subscribe(ProviderEventKind::AccountsChanged, accounts_sink)
        .unwrap();
    provider
        .subscribe(ProviderEventKind::ChainChanged, chain_sink)
        .unwrap();

    provider.emit(ProviderEvent::AccountsChanged(vec!["0xabc".into()]));

    assert!(accounts_inbox.try_recv().is_ok());
    assert!(chain_inbox.try_recv().is_err());
    assert_eq!(provider.accounts().unwrap(), vec!["0xabc".to_string()]);
}

#[test]
fn test_mock_drops_closed_subscribers() {
    let provider = MockProvider::new();
    let (sink, inbox) = mpsc::channel();
    provider
        .subscribe(ProviderEventKind::ChainChanged, sink)
        .unwrap();
    drop(inbox);

    provider.emit(ProviderEvent::ChainChanged(ChainId::new(5)));
    assert_eq!(provider.subscription_count(), 0);
}

#[test]
fn test_mock_revert_switches() {
    let provider = MockProvider::new();
    provider.add_known_chain(ChainId::AMOY);
    provider.revert_switches_to(ChainId::new(1));
    let (sink, inbox) = mpsc::channel();
    provider
        .subscribe(ProviderEventKind::ChainChanged, sink)
        .unwrap();

    provider.switch_chain(ChainId::AMOY).unwrap();

    let events: Vec<ProviderEvent> = inbox.try_iter().collect();
    assert_eq!(
        events,
        vec![
            ProviderEvent::ChainChanged(ChainId::AMOY),
            ProviderEvent::ChainChanged(ChainId::new(1)),
        ]
    );
    assert_eq!(provider.active_chain(), ChainId::new(1));
}
