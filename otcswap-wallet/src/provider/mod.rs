// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Injected Wallet Provider
//!
//! Interface boundary with the host's wallet provider: the request surface,
//! its push notifications and its error codes.

pub mod error;
pub mod event;
pub mod injected;
pub mod mock;

pub use error::{ProviderError, ProviderResult};
pub use event::{ProviderEvent, ProviderEventKind};
pub use injected::WalletProvider;
pub use mock::{AccountRequestGate, MockProvider, ProviderCall};
