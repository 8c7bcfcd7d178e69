// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test helpers.

#![allow(dead_code)]

pub mod strategies;

use std::sync::{Arc, Mutex, Once};

use otcswap_wallet::{WalletEvent, WalletListener};

static TRACING: Once = Once::new();

/// Routes library logs to the test output. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Listener that records every event it sees.
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<WalletEvent>>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<WalletEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(WalletEvent::name).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl WalletListener for RecordingListener {
    fn on_event(&self, event: &WalletEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
