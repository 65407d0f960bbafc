// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw transaction blocks as returned by `sui_getTransactionBlock`
//!
//! Only the fields the normalizer reads are modelled. Every field is optional
//! because nodes omit sections depending on the requested options and on the
//! transaction's state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value_as_u64;

/// Execution status string reported for successful transactions.
const STATUS_SUCCESS: &str = "success";

/// A transaction block together with the JSON it was decoded from.
///
/// The raw JSON is carried through to every normalized record.
#[derive(Debug, Clone)]
pub struct RawTransaction {
    pub block: TransactionBlock,
    pub raw: Value,
}

impl RawTransaction {
    /// Decode a transaction block, keeping the original JSON.
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let block = TransactionBlock::deserialize(&raw)?;
        Ok(Self { block, raw })
    }
}

/// Decoded view of a transaction block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlock {
    #[serde(default)]
    pub digest: String,
    #[serde(default)]
    pub transaction: Option<TransactionEnvelope>,
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
    #[serde(default)]
    pub balance_changes: Option<Vec<BalanceChange>>,
    /// Checkpoint sequence number, usually a decimal string
    #[serde(default)]
    pub checkpoint: Option<Value>,
    /// Milliseconds since the Unix epoch, usually a decimal string
    #[serde(default)]
    pub timestamp_ms: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    #[serde(default)]
    pub data: Option<TransactionData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub sender: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    #[serde(default)]
    pub status: Option<ExecutionStatus>,
    #[serde(default)]
    pub gas_used: Option<GasCostSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Gas usage summary; all costs are MIST integer strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    #[serde(default)]
    pub computation_cost: Option<String>,
    #[serde(default)]
    pub storage_cost: Option<String>,
    #[serde(default)]
    pub storage_rebate: Option<String>,
    #[serde(default)]
    pub non_refundable_storage_fee: Option<String>,
}

/// A per-owner balance delta reported for a transaction.
///
/// Negative amounts are debits (the payer), positive amounts credits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    /// Owner object, e.g. `{"AddressOwner": "0x.."}`
    #[serde(default)]
    pub owner: Value,
    #[serde(default)]
    pub coin_type: Option<String>,
    /// Signed MIST amount; expected to be a string
    #[serde(default)]
    pub amount: Value,
}

impl BalanceChange {
    /// Address of an address-owned balance.
    pub fn owner_address(&self) -> Option<&str> {
        self.owner.get("AddressOwner").and_then(Value::as_str)
    }

    /// The amount, if the node encoded it as a string.
    pub fn amount_str(&self) -> Option<&str> {
        self.amount.as_str()
    }
}

impl TransactionBlock {
    /// Declared sender of the transaction.
    pub fn sender(&self) -> Option<&str> {
        self.transaction
            .as_ref()
            .and_then(|tx| tx.data.as_ref())
            .and_then(|data| data.sender.as_deref())
    }

    /// Balance changes, empty when the node reported none.
    pub fn balance_changes(&self) -> &[BalanceChange] {
        self.balance_changes.as_deref().unwrap_or_default()
    }

    /// Whether the effects report successful execution.
    ///
    /// Anything other than an explicit `"success"` counts as failure.
    pub fn is_success(&self) -> bool {
        self.effects
            .as_ref()
            .and_then(|effects| effects.status.as_ref())
            .and_then(|status| status.status.as_deref())
            == Some(STATUS_SUCCESS)
    }

    /// Gas usage summary, if effects were returned.
    pub fn gas_used(&self) -> Option<&GasCostSummary> {
        self.effects
            .as_ref()
            .and_then(|effects| effects.gas_used.as_ref())
    }

    /// Checkpoint the transaction was included in.
    pub fn checkpoint_height(&self) -> Option<u64> {
        self.checkpoint.as_ref().and_then(value_as_u64)
    }

    /// Inclusion time in milliseconds, `0` when unknown.
    pub fn timestamp_millis(&self) -> u64 {
        self.timestamp_ms
            .as_ref()
            .and_then(value_as_u64)
            .unwrap_or_default()
    }
}
