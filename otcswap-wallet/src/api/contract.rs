// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract Configuration
//!
//! Address and ABI of the swap contract, handed to the contract layer.
//! The ABI itself is opaque here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{WalletError, WalletResult};

/// JSON ABI supplied by the contract collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAbi(Value);

impl Default for ContractAbi {
    fn default() -> Self {
        ContractAbi(Value::Array(Vec::new()))
    }
}

impl ContractAbi {
    /// Parses an ABI document. It must be a JSON array.
    pub fn from_json(json: &str) -> WalletResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| WalletError::Configuration(format!("abi: {e}")))?;
        if !value.is_array() {
            return Err(WalletError::Configuration("abi must be a JSON array".into()));
        }
        Ok(ContractAbi(value))
    }

    /// Number of ABI entries.
    pub fn len(&self) -> usize {
        self.0.as_array().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the `function` entries.
    pub fn function_names(&self) -> Vec<&str> {
        self.0
            .as_array()
            .into_iter()
            .flatten()
            .filter(|entry| entry.get("type").and_then(Value::as_str) == Some("function"))
            .filter_map(|entry| entry.get("name").and_then(Value::as_str))
            .collect()
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

/// Address and ABI of the application contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub address: String,
    pub abi: ContractAbi,
}
