// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;

/// A small pool of addresses so generated sequences repeat accounts often.
pub fn account_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "0x1111111111111111111111111111111111111111",
        "0x2222222222222222222222222222222222222222",
        "0x3333333333333333333333333333333333333333",
    ])
    .prop_map(str::to_string)
}

/// One `accountsChanged` payload: empty (revoked) or up to three accounts.
pub fn accounts_payload_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(account_strategy(), 0..=3)
}

/// A sequence of `accountsChanged` payloads.
pub fn accounts_sequence_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(accounts_payload_strategy(), 1..30)
}

/// Chain ids around the target so both matching and wrong networks occur.
pub fn chain_id_strategy() -> impl Strategy<Value = u64> {
    prop::sample::select(vec![1u64, 137, 80_002, 11_155_111])
}
