// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON-RPC over HTTP
//!
//! Read-only endpoint client built on `reqwest`, driven by a private
//! single-threaded tokio runtime behind a blocking interface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::chain::ChainId;

use super::error::{RpcError, RpcResult};
use super::transport::{RpcConnector, RpcTransport};

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a [Value],
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcErrorObject>,
}

impl JsonRpcResponse {
    fn into_result(self, method: &str) -> RpcResult<Value> {
        if let Some(error) = self.error {
            return Err(RpcError::JsonRpc {
                code: error.code,
                message: error.message,
            });
        }
        self.result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: missing result")))
    }
}

/// Opens [`HttpRpcTransport`]s sharing one HTTP client and runtime.
///
/// Must not be used from inside another tokio runtime: the blocking calls
/// would panic there.
#[derive(Debug, Clone)]
pub struct HttpRpcConnector {
    client: Client,
    runtime: Arc<Runtime>,
}

impl HttpRpcConnector {
    /// Creates a connector. `timeout` bounds each request when set; with
    /// `None` a hung endpoint blocks indefinitely.
    pub fn new(timeout: Option<Duration>) -> RpcResult<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("OTCSwap/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RpcError::Unreachable(format!("runtime: {e}")))?;

        Ok(HttpRpcConnector {
            client: builder.build()?,
            runtime: Arc::new(runtime),
        })
    }
}

impl RpcConnector for HttpRpcConnector {
    type Transport = HttpRpcTransport;

    fn open(&self, url: &str) -> RpcResult<HttpRpcTransport> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(RpcError::Unreachable(format!("unsupported url: {url}")));
        }
        Ok(HttpRpcTransport {
            url: url.to_string(),
            client: self.client.clone(),
            runtime: Arc::clone(&self.runtime),
            next_id: AtomicU64::new(1),
        })
    }
}

/// JSON-RPC 2.0 client for one endpoint.
#[derive(Debug)]
pub struct HttpRpcTransport {
    url: String,
    client: Client,
    runtime: Arc<Runtime>,
    next_id: AtomicU64,
}

impl HttpRpcTransport {
    /// Issues a JSON-RPC call and returns its `result`.
    pub fn request(&self, method: &str, params: &[Value]) -> RpcResult<Value> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        debug!(url = %self.url, method, "rpc request");

        self.runtime.block_on(self.send(&body))
    }

    async fn send(&self, body: &JsonRpcRequest<'_>) -> RpcResult<Value> {
        let response = self.client.post(&self.url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(RpcError::Http(response.status().as_u16()));
        }

        let reply: JsonRpcResponse = response.json().await?;
        reply.into_result(body.method)
    }

    /// Latest block number.
    pub fn block_number(&self) -> RpcResult<u64> {
        parse_quantity(&self.request("eth_blockNumber", &[])?)
    }
}

impl RpcTransport for HttpRpcTransport {
    fn url(&self) -> &str {
        &self.url
    }

    fn chain_id(&self) -> RpcResult<ChainId> {
        let value = self.request("eth_chainId", &[])?;
        parse_quantity(&value).map(ChainId::new)
    }
}

/// Parses a hex-encoded JSON-RPC quantity.
fn parse_quantity(value: &Value) -> RpcResult<u64> {
    let text = value
        .as_str()
        .ok_or_else(|| RpcError::InvalidResponse(format!("expected quantity, got {value}")))?;
    let digits = text
        .strip_prefix("0x")
        .ok_or_else(|| RpcError::InvalidResponse(format!("quantity without 0x: {text}")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|_| RpcError::InvalidResponse(format!("bad quantity: {text}")))
}
