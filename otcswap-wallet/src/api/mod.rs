// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wallet API Layer
//!
//! Types shared with the layers that consume a wallet session.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for the API layer
//! - [`config`] - Configuration types
//! - [`contract`] - Contract address and ABI
//! - [`events`] - Session events and listener registry

pub mod config;
pub mod contract;
pub mod error;
pub mod events;

// Error types
pub use error::{WalletError, WalletResult};

// Configuration
pub use config::WalletConfig;

// Contract
pub use contract::{ContractAbi, ContractConfig};

// Events
pub use events::{CallbackListener, ListenerRegistry, WalletEvent, WalletListener};
