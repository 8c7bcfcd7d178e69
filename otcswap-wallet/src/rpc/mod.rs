// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only Endpoints
//!
//! Data channels that do not need the injected wallet: a transport
//! abstraction, a JSON-RPC over HTTP implementation and failover selection
//! across a network's primary and fallback endpoints.
//!
//! # Example
//!
//! ```ignore
//! use otcswap_wallet::chain::NetworkIdentity;
//! use otcswap_wallet::rpc::{EndpointSelector, HttpRpcConnector};
//!
//! let selector = EndpointSelector::new(HttpRpcConnector::new(None)?);
//! let provider = selector.select(&NetworkIdentity::amoy())?;
//! println!("reading from {}", provider.url());
//! ```

pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod mock;
pub mod selector;
pub mod transport;

pub use error::{RpcError, RpcResult};
#[cfg(feature = "http")]
pub use http::{HttpRpcConnector, HttpRpcTransport};
pub use mock::{MockRpcConnector, MockRpcTransport};
pub use selector::{EndpointSelector, ReadProvider};
pub use transport::{RpcConnector, RpcTransport};
