// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only Endpoint Errors

use thiserror::Error;

use crate::chain::ChainId;

/// Errors from read-only RPC endpoints.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Request could not be sent or the response could not be read.
    #[cfg(feature = "http")]
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a JSON-RPC error object.
    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    /// The response did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The endpoint could not be reached at all.
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// The endpoint serves a different network.
    #[error("endpoint serves chain {actual}, expected {expected}")]
    ChainMismatch { expected: ChainId, actual: ChainId },
}

/// Result type for endpoint operations.
pub type RpcResult<T> = Result<T, RpcError>;
