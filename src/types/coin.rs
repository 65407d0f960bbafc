// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin object types

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::units::parse_mist;

/// One page of `suix_getCoins`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPage {
    /// Coin entries; `None` when the node omitted the field entirely
    #[serde(default)]
    pub data: Option<Vec<CoinData>>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
}

/// A raw coin entry as reported by the node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinData {
    #[serde(default)]
    pub coin_type: Option<String>,
    #[serde(default)]
    pub coin_object_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
    /// Balance in MIST; expected to be a string
    #[serde(default)]
    pub balance: Value,
    #[serde(default)]
    pub previous_transaction: Option<String>,
}

impl CoinData {
    /// Convert into a [`CoinRecord`] if this entry passes the coin filter.
    ///
    /// An entry is kept only when its coin type equals `coin_type` and its
    /// balance is a numeric string greater than zero.
    pub fn to_record(&self, coin_type: &str) -> Option<CoinRecord> {
        if self.coin_type.as_deref() != Some(coin_type) {
            return None;
        }

        let balance = self.balance.as_str()?;
        let amount = parse_mist(balance).ok()?;
        if amount <= BigDecimal::from(0u8) {
            return None;
        }

        Some(CoinRecord {
            object_id: self.coin_object_id.clone().unwrap_or_default(),
            digest: self.digest.clone().unwrap_or_default(),
            balance: balance.to_string(),
        })
    }
}

/// A coin object owned by an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    pub object_id: String,
    pub digest: String,
    /// Balance in MIST, always a positive integer string
    pub balance: String,
}

/// All coins of one type owned by an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinsByAddress {
    pub data: Vec<CoinRecord>,
    /// Sum of all coin balances in display units
    pub total_balance: String,
}
