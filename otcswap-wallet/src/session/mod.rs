// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wallet Session
//!
//! The connection state machine and the network enforcement it relies on.
//!
//! # Architecture
//!
//! - **Session**: connected flag, account, chain, lifecycle state
//! - **NetworkEnforcer**: switch-or-register protocol for the target network
//! - **Handles**: provider, signer and contract handles rebuilt on change
//! - **WalletManager**: owns all of the above and reacts to provider events

pub mod enforcer;
pub mod handles;
pub mod manager;
pub mod state;

pub use enforcer::{EnforceOutcome, NetworkEnforcer};
pub use handles::{ContractHandle, ProviderHandle, SignerHandle};
pub use manager::{ConnectInfo, SessionHealth, WalletManager};
pub use state::{Session, SessionState};
