// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Provider Error Types

use thiserror::Error;

/// Errors reported by an injected wallet provider.
///
/// Variants follow the EIP-1193 / EIP-3085 numeric codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The user declined the request.
    #[error("user rejected the request")]
    UserRejected,

    /// The requested method or account has not been authorized.
    #[error("unauthorized")]
    Unauthorized,

    /// The provider does not support the method.
    #[error("unsupported method")]
    UnsupportedMethod,

    /// The provider is disconnected from all chains.
    #[error("provider disconnected")]
    Disconnected,

    /// The provider does not know the requested chain.
    #[error("unrecognized chain")]
    UnrecognizedChain,

    /// Any other error the provider reports.
    #[error("provider error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl ProviderError {
    pub const USER_REJECTED: i64 = 4001;
    pub const UNAUTHORIZED: i64 = 4100;
    pub const UNSUPPORTED_METHOD: i64 = 4200;
    pub const DISCONNECTED: i64 = 4900;
    pub const CHAIN_DISCONNECTED: i64 = 4901;
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;

    /// Classifies a raw provider error code.
    pub fn from_code(code: i64, message: &str) -> Self {
        match code {
            Self::USER_REJECTED => ProviderError::UserRejected,
            Self::UNAUTHORIZED => ProviderError::Unauthorized,
            Self::UNSUPPORTED_METHOD => ProviderError::UnsupportedMethod,
            Self::DISCONNECTED | Self::CHAIN_DISCONNECTED => ProviderError::Disconnected,
            Self::UNRECOGNIZED_CHAIN => ProviderError::UnrecognizedChain,
            _ => ProviderError::Rpc {
                code,
                message: message.to_string(),
            },
        }
    }

    /// Returns the numeric code.
    pub fn code(&self) -> i64 {
        match self {
            ProviderError::UserRejected => Self::USER_REJECTED,
            ProviderError::Unauthorized => Self::UNAUTHORIZED,
            ProviderError::UnsupportedMethod => Self::UNSUPPORTED_METHOD,
            ProviderError::Disconnected => Self::DISCONNECTED,
            ProviderError::UnrecognizedChain => Self::UNRECOGNIZED_CHAIN,
            ProviderError::Rpc { code, .. } => *code,
        }
    }
}

/// Result type for provider requests.
pub type ProviderResult<T> = Result<T, ProviderError>;
