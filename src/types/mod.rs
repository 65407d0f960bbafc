// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Data types exchanged with the node and returned to callers.
//!
//! - [`transaction`]: raw transaction blocks as reported by the node
//! - [`coin`]: coin pages and the filtered coin records built from them
//! - [`balance`]: balance responses and results
//! - [`transfer`]: normalized transfer records and their status

pub mod balance;
pub mod coin;
pub mod transaction;
pub mod transfer;

use serde_json::Value;

/// Read a non-negative integer the node may encode as a string or a number.
pub(crate) fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}
