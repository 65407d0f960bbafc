// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized transfer records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    /// Executed successfully and buried under enough checkpoints
    Finished,
    /// Execution failed
    Failed,
    /// Not found, or successful but not yet sufficiently confirmed
    Unknown,
    /// Reserved; never produced by the adapter
    Updating,
}

impl TxStatus {
    /// Classify a transfer from its execution result and confirmation depth.
    ///
    /// A failed execution is always [`TxStatus::Failed`]. A successful one is
    /// [`TxStatus::Finished`] once `current_height >= tx_height +
    /// confirmation_limit`, and [`TxStatus::Unknown`] before that or when the
    /// inclusion checkpoint is not known yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use suiscan::TxStatus;
    ///
    /// assert_eq!(TxStatus::classify(Some(100), 109, 10, true), TxStatus::Unknown);
    /// assert_eq!(TxStatus::classify(Some(100), 110, 10, true), TxStatus::Finished);
    /// assert_eq!(TxStatus::classify(Some(100), 500, 10, false), TxStatus::Failed);
    /// ```
    pub fn classify(
        tx_height: Option<u64>,
        current_height: u64,
        confirmation_limit: u64,
        success: bool,
    ) -> Self {
        if !success {
            return TxStatus::Failed;
        }

        // A confirmation target past u64::MAX is never reached.
        match tx_height.and_then(|height| height.checked_add(confirmation_limit)) {
            Some(target) if current_height >= target => TxStatus::Finished,
            _ => TxStatus::Unknown,
        }
    }
}

/// One side of a transfer: an address and the MIST value attributed to it.
///
/// For the sender the value is the fee-inclusive debit; for the receiver it
/// is the credited amount as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferParty {
    pub address: String,
    pub value: String,
}

/// A chain-agnostic transfer record.
///
/// Every record produced from a transaction has exactly one `from` and one
/// `to` entry. The not-found sentinel has neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTransfer {
    /// Inclusion time in milliseconds since the Unix epoch
    pub timestamp: u64,
    pub hash: String,
    /// Fee paid by the sender in SUI, plain decimal notation
    pub used_fee: String,
    pub ticker: String,
    pub from: Vec<TransferParty>,
    pub to: Vec<TransferParty>,
    pub status: TxStatus,
    /// Checkpoint the transaction was included in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    /// The transaction block as returned by the node
    pub raw: Value,
}

impl NormalizedTransfer {
    /// Well-formed record returned when a transaction cannot be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use suiscan::{NormalizedTransfer, TxStatus};
    ///
    /// let record = NormalizedTransfer::not_found("SUI", "0xdead");
    /// assert_eq!(record.timestamp, 0);
    /// assert_eq!(record.status, TxStatus::Unknown);
    /// assert!(record.is_not_found());
    /// ```
    pub fn not_found(ticker: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            timestamp: 0,
            hash: hash.into(),
            used_fee: String::new(),
            ticker: ticker.into(),
            from: Vec::new(),
            to: Vec::new(),
            status: TxStatus::Unknown,
            height: None,
            raw: Value::Object(Map::new()),
        }
    }

    /// Whether this is the not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        self.timestamp == 0 && self.from.is_empty() && self.to.is_empty()
    }

    /// Inclusion time as a UTC datetime, `None` for the sentinel.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        if self.timestamp == 0 {
            return None;
        }
        i64::try_from(self.timestamp)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_confirmation_boundary() {
        assert_eq!(TxStatus::classify(Some(100), 109, 10, true), TxStatus::Unknown);
        assert_eq!(TxStatus::classify(Some(100), 110, 10, true), TxStatus::Finished);
        assert_eq!(TxStatus::classify(Some(100), 111, 10, true), TxStatus::Finished);
    }

    #[test]
    fn test_status_failed_at_any_height() {
        for current in [0, 50, 109, 110, 10_000] {
            assert_eq!(TxStatus::classify(Some(100), current, 10, false), TxStatus::Failed);
        }
        assert_eq!(TxStatus::classify(None, 10_000, 10, false), TxStatus::Failed);
    }

    #[test]
    fn test_status_without_checkpoint_is_unknown() {
        assert_eq!(TxStatus::classify(None, u64::MAX, 0, true), TxStatus::Unknown);
    }

    #[test]
    fn test_status_zero_confirmation_limit() {
        assert_eq!(TxStatus::classify(Some(100), 100, 0, true), TxStatus::Finished);
        assert_eq!(TxStatus::classify(Some(100), 99, 0, true), TxStatus::Unknown);
    }

    #[test]
    fn test_status_near_u64_max() {
        assert_eq!(
            TxStatus::classify(Some(u64::MAX), u64::MAX, 10, true),
            TxStatus::Unknown
        );
        assert_eq!(
            TxStatus::classify(Some(u64::MAX - 5), u64::MAX, 10, true),
            TxStatus::Unknown
        );
        assert_eq!(
            TxStatus::classify(Some(u64::MAX - 10), u64::MAX, 10, true),
            TxStatus::Finished
        );
        assert_eq!(
            TxStatus::classify(Some(u64::MAX), u64::MAX, 0, true),
            TxStatus::Finished
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(TxStatus::Finished).unwrap(), json!("finished"));
        assert_eq!(serde_json::to_value(TxStatus::Updating).unwrap(), json!("updating"));
    }

    #[test]
    fn test_sentinel_shape() {
        let record = NormalizedTransfer::not_found("sui", "0xdead");
        let encoded = serde_json::to_value(&record).unwrap();

        assert_eq!(
            encoded,
            json!({
                "timestamp": 0,
                "hash": "0xdead",
                "usedFee": "",
                "ticker": "sui",
                "from": [],
                "to": [],
                "status": "unknown",
                "raw": {}
            })
        );
        assert_eq!(record.timestamp_utc(), None);
    }

    #[test]
    fn test_timestamp_utc() {
        let mut record = NormalizedTransfer::not_found("SUI", "h");
        record.timestamp = 1_700_000_000_000;
        let datetime = record.timestamp_utc().unwrap();
        assert_eq!(datetime.timestamp(), 1_700_000_000);
    }
}
