// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Identity
//!
//! Immutable description of a supported network: chain identifier,
//! endpoints, explorer and native currency.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error parsing a chain identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid chain id: {0}")]
pub struct ChainIdParseError(pub String);

/// Numeric chain identifier.
///
/// Providers report chain ids as `0x`-prefixed hex strings; this type keeps
/// the number and formats it back to hex on display and serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    /// Polygon Amoy testnet.
    pub const AMOY: ChainId = ChainId(80_002);

    /// Creates a chain id from its numeric value.
    pub const fn new(id: u64) -> Self {
        ChainId(id)
    }

    /// Returns the numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the `0x`-prefixed hex form used on the provider wire.
    pub fn to_hex(self) -> String {
        format!("{:#x}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = ChainIdParseError;

    /// Accepts `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => trimmed.parse::<u64>(),
        };
        parsed
            .map(ChainId)
            .map_err(|_| ChainIdParseError(s.to_string()))
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct ChainIdVisitor;

impl<'de> Visitor<'de> for ChainIdVisitor {
    type Value = ChainId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex or decimal chain id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ChainId, E> {
        Ok(ChainId(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ChainId, E> {
        u64::try_from(v)
            .map(ChainId)
            .map_err(|_| E::custom(format!("negative chain id: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ChainId, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChainIdVisitor)
    }
}

/// Native currency of a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Currency name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal precision.
    pub decimals: u8,
}

impl NativeCurrency {
    /// Creates a currency descriptor.
    pub fn new(name: &str, symbol: &str, decimals: u8) -> Self {
        NativeCurrency {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }
}

/// A supported network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkIdentity {
    chain_id: ChainId,
    name: String,
    #[serde(default)]
    contract_address: String,
    rpc_url: String,
    #[serde(default)]
    fallback_rpc_urls: Vec<String>,
    explorer: String,
    native_currency: NativeCurrency,
}

impl NetworkIdentity {
    /// Creates a network identity with no fallback endpoints.
    pub fn new(
        chain_id: ChainId,
        name: &str,
        rpc_url: &str,
        explorer: &str,
        native_currency: NativeCurrency,
    ) -> Self {
        NetworkIdentity {
            chain_id,
            name: name.to_string(),
            contract_address: String::new(),
            rpc_url: rpc_url.to_string(),
            fallback_rpc_urls: Vec::new(),
            explorer: explorer.to_string(),
            native_currency,
        }
    }

    /// Appends a fallback endpoint.
    pub fn with_fallback(mut self, url: &str) -> Self {
        self.fallback_rpc_urls.push(url.to_string());
        self
    }

    /// Sets the application contract deployed on this network.
    pub fn with_contract_address(mut self, address: &str) -> Self {
        self.contract_address = address.to_string();
        self
    }

    /// Polygon Amoy, the network the swap contract lives on.
    pub fn amoy() -> Self {
        NetworkIdentity::new(
            ChainId::AMOY,
            "Amoy",
            "https://rpc.ankr.com/polygon_amoy",
            "https://www.oklink.com/amoy",
            NativeCurrency::new("POLYGON Ecosystem Token", "POL", 18),
        )
        .with_fallback("https://polygon-amoy.blockpi.network/v1/rpc/public")
        .with_fallback("https://polygon-amoy.public.blastapi.io")
        .with_contract_address("0xF9D874860d5801233dd84569fad8513e0037A5d9")
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn fallback_rpc_urls(&self) -> &[String] {
        &self.fallback_rpc_urls
    }

    pub fn explorer(&self) -> &str {
        &self.explorer
    }

    pub fn native_currency(&self) -> &NativeCurrency {
        &self.native_currency
    }

    /// Primary endpoint followed by every fallback, in declared order.
    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.rpc_url.as_str())
            .chain(self.fallback_rpc_urls.iter().map(String::as_str))
    }

    /// Builds the descriptor a provider needs to register this network.
    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.chain_id,
            chain_name: self.name.clone(),
            native_currency: self.native_currency.clone(),
            rpc_urls: self.endpoints().map(str::to_string).collect(),
            block_explorer_urls: vec![self.explorer.clone()],
        }
    }
}

/// Parameters of a "register network" request (EIP-3085 shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

/// Returns true if `address` is a `0x`-prefixed 20-byte hex string.
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(body) => body.len() == 40 && hex::decode(body).is_ok(),
        None => false,
    }
}
