// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for suiscan integration tests
//!
//! Provides a scripted transport so adapter behavior can be tested without a
//! real Sui node, plus builders for the JSON the node returns.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use suiscan::transport::RpcTransport;
use suiscan::{NodeAdapter, NodeConfig, RpcError, Url};

pub const SUI: &str = "0x2::sui::SUI";
pub const SENDER: &str = "0xaaa";
pub const DIGEST: &str = "9xV1";

/// A scripted reply to one JSON-RPC call.
#[derive(Debug, Clone)]
pub enum Reply {
    Result(Value),
    /// Upstream JSON-RPC error with this message
    Error(String),
}

/// Mock RpcTransport for testing NodeAdapter logic
///
/// Replies are queued per method. The last reply of a method is repeated once
/// its queue is down to one entry, so a single scripted height serves any
/// number of calls. Every call is recorded.
///
/// # Example
///
/// ```rust,ignore
/// let mock = MockTransport::new()
///     .with_result("sui_getLatestCheckpointSequenceNumber", json!("1210"))
///     .with_error("sui_getTransactionBlock", "Could not find the referenced transaction");
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful result for `method`
    pub fn with_result(self, method: &str, result: Value) -> Self {
        self.push(method, Reply::Result(result));
        self
    }

    /// Queue an upstream error for `method`
    pub fn with_error(self, method: &str, message: &str) -> Self {
        self.push(method, Reply::Error(message.to_string()));
        self
    }

    fn push(&self, method: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made to `method`
    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .count()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            let queue = replies
                .get_mut(method)
                .unwrap_or_else(|| panic!("no reply scripted for {method}"));
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        };

        match reply.unwrap_or_else(|| panic!("reply queue for {method} is empty")) {
            Reply::Result(value) => Ok(value),
            Reply::Error(message) => Err(RpcError::upstream(method, message)),
        }
    }
}

/// Build an adapter over a shared mock so tests can inspect recorded calls.
pub fn adapter(mock: &Arc<MockTransport>, confirmation_limit: u64) -> NodeAdapter<Arc<MockTransport>> {
    let url = Url::parse("http://localhost:9000").unwrap();
    NodeAdapter::with_transport(NodeConfig::new(url, confirmation_limit), "test-node", Arc::clone(mock))
}

/// An address-owned balance change of the native coin
pub fn sui_change(address: &str, amount: &str) -> Value {
    json!({
        "owner": {"AddressOwner": address},
        "coinType": SUI,
        "amount": amount,
    })
}

/// A successful transaction block from [`SENDER`] with the given balance changes.
///
/// Gas used is 750000 + 1976000 - 978120 = 1747880 MIST.
pub fn transaction(balance_changes: Vec<Value>) -> Value {
    json!({
        "digest": DIGEST,
        "transaction": {"data": {"sender": SENDER}},
        "effects": {
            "status": {"status": "success"},
            "gasUsed": {
                "computationCost": "750000",
                "storageCost": "1976000",
                "storageRebate": "978120",
                "nonRefundableStorageFee": "9880"
            }
        },
        "balanceChanges": balance_changes,
        "checkpoint": "1200",
        "timestampMs": "1700000000000"
    })
}

/// A one-page coin response
pub fn coin_page(coins: Vec<Value>, next_cursor: Option<&str>, has_next_page: bool) -> Value {
    json!({
        "data": coins,
        "nextCursor": next_cursor,
        "hasNextPage": has_next_page,
    })
}

/// A coin entry as returned by `suix_getCoins`
pub fn coin(object_id: &str, coin_type: &str, balance: Value) -> Value {
    json!({
        "coinType": coin_type,
        "coinObjectId": object_id,
        "version": "1",
        "digest": format!("D{object_id}"),
        "balance": balance,
        "previousTransaction": "T1",
    })
}
