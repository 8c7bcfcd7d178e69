// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for api::events

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use otcswap_wallet::api::*;
use otcswap_wallet::ChainId;

fn connect_event() -> WalletEvent {
    WalletEvent::Connect {
        account: "0xabc".into(),
        chain_id: Some(ChainId::AMOY),
    }
}

fn counting_listener(count: &Arc<AtomicUsize>) -> Arc<dyn WalletListener> {
    let count = Arc::clone(count);
    Arc::new(CallbackListener::new(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
    }))
}

#[test]
fn test_event_names() {
    assert_eq!(connect_event().name(), "connect");
    assert_eq!(WalletEvent::Disconnect { reason: None }.name(), "disconnect");
    assert_eq!(
        WalletEvent::AccountsChanged {
            account: "0xabc".into()
        }
        .name(),
        "accountsChanged"
    );
    assert_eq!(
        WalletEvent::ChainChanged {
            chain_id: ChainId::AMOY
        }
        .name(),
        "chainChanged"
    );
}

#[test]
fn test_callback_listener() {
    let count = Arc::new(AtomicUsize::new(0));
    let listener = counting_listener(&count);

    listener.on_event(&connect_event());

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_publish_reaches_every_listener() {
    let count = Arc::new(AtomicUsize::new(0));
    let registry = ListenerRegistry::new();

    for _ in 0..3 {
        registry.subscribe(counting_listener(&count));
    }

    assert_eq!(registry.publish(&connect_event()), 3);
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_duplicate_subscribe_is_noop() {
    let count = Arc::new(AtomicUsize::new(0));
    let registry = ListenerRegistry::new();
    let listener = counting_listener(&count);

    assert!(registry.subscribe(Arc::clone(&listener)));
    assert!(!registry.subscribe(Arc::clone(&listener)));
    assert_eq!(registry.len(), 1);

    assert!(registry.unsubscribe(&listener));
    assert_eq!(registry.len(), 0);
    assert!(registry.is_empty());

    registry.publish(&connect_event());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_identity_not_content() {
    let count = Arc::new(AtomicUsize::new(0));
    let registry = ListenerRegistry::new();

    // Same behaviour, different listeners
    registry.subscribe(counting_listener(&count));
    registry.subscribe(counting_listener(&count));

    assert_eq!(registry.len(), 2);
}

#[test]
fn test_unsubscribe_absent_is_noop() {
    let count = Arc::new(AtomicUsize::new(0));
    let registry = ListenerRegistry::new();
    registry.subscribe(counting_listener(&count));

    let stranger = counting_listener(&count);
    assert!(!registry.unsubscribe(&stranger));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_panicking_listener_does_not_stop_fanout() {
    common::init_tracing();
    let count = Arc::new(AtomicUsize::new(0));
    let registry = ListenerRegistry::new();

    registry.subscribe(Arc::new(CallbackListener::new(|_| {
        panic!("listener failure");
    })));
    registry.subscribe(counting_listener(&count));

    assert_eq!(registry.publish(&connect_event()), 1);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // The set is intact for the next publish
    assert_eq!(registry.len(), 2);
    registry.publish(&connect_event());
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_listener_may_unsubscribe_itself_during_publish() {
    let registry = Arc::new(ListenerRegistry::new());
    let count = Arc::new(AtomicUsize::new(0));
    let slot: Arc<Mutex<Option<Arc<dyn WalletListener>>>> = Arc::new(Mutex::new(None));

    let registry_clone = Arc::clone(&registry);
    let slot_clone = Arc::clone(&slot);
    let once: Arc<dyn WalletListener> = Arc::new(CallbackListener::new(move |_| {
        if let Some(me) = slot_clone.lock().unwrap().take() {
            registry_clone.unsubscribe(&me);
        }
    }));
    *slot.lock().unwrap() = Some(Arc::clone(&once));

    registry.subscribe(once);
    registry.subscribe(counting_listener(&count));

    registry.publish(&connect_event());
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_listener_subscribed_during_publish_sees_next_event() {
    let registry = Arc::new(ListenerRegistry::new());
    let count = Arc::new(AtomicUsize::new(0));

    let registry_clone = Arc::clone(&registry);
    let late = counting_listener(&count);
    registry.subscribe(Arc::new(CallbackListener::new(move |_| {
        registry_clone.subscribe(Arc::clone(&late));
    })));

    registry.publish(&connect_event());
    assert_eq!(count.load(Ordering::SeqCst), 0);

    registry.publish(&connect_event());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clear() {
    let count = Arc::new(AtomicUsize::new(0));
    let registry = ListenerRegistry::new();
    registry.subscribe(counting_listener(&count));

    registry.clear();

    assert!(registry.is_empty());
}
