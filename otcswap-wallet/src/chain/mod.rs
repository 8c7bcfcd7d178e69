// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Identities
//!
//! Static description of the networks the client can work with. Pure data:
//! nothing here talks to a provider or an endpoint.

pub mod identity;
pub mod registry;

pub use identity::{
    is_valid_address, AddChainParams, ChainId, ChainIdParseError, NativeCurrency, NetworkIdentity,
};
pub use registry::{NetworkRegistry, RegistryError};
