// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin listing with cursor pagination
//!
//! `suix_getCoins` returns coins in pages linked by an opaque cursor. Some
//! nodes answer a request whose cursor they cannot interpret by returning the
//! first page again, which would loop forever. Every cursor seen during a
//! listing is therefore remembered and a repeat aborts the listing with
//! [`NodeError::PaginationLoopDetected`].

use std::collections::HashSet;

use bigdecimal::BigDecimal;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::constants::{rpc_methods, COIN_PAGE_LIMIT};
use crate::transport::RpcTransport;
use crate::types::coin::{CoinPage, CoinRecord, CoinsByAddress};
use crate::units::{format_display_unit, parse_mist};
use crate::{AmountError, NodeError};

const OPERATION: &str = "getCoinsByAddress";

/// Lists the coins of one type owned by an address.
///
/// Pages are fetched strictly one after the other since each request needs
/// the previous page's cursor. All pagination state is local to a call.
#[derive(Debug)]
pub struct CoinPaginator<'a, T: ?Sized> {
    transport: &'a T,
    page_limit: u32,
}

impl<'a, T: RpcTransport + ?Sized> CoinPaginator<'a, T> {
    /// Create a paginator requesting [`COIN_PAGE_LIMIT`] coins per page.
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            page_limit: COIN_PAGE_LIMIT,
        }
    }

    /// Override the page size
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Fetch every coin of `coin_type` owned by `address`.
    ///
    /// Entries of another coin type or with a zero or non-numeric balance are
    /// dropped. The total is the exact sum of the kept balances in display
    /// units.
    ///
    /// # Errors
    ///
    /// - [`NodeError::PaginationLoopDetected`] if the node repeats a cursor
    /// - [`NodeError::UpstreamFormat`] if a page has no `data` field
    /// - [`NodeError::Rpc`] if a page request fails
    pub async fn list_coins(
        &self,
        coin_type: &str,
        address: &str,
    ) -> Result<CoinsByAddress, NodeError> {
        let mut cursor: Option<String> = None;
        let mut seen_cursors: HashSet<String> = HashSet::new();
        let mut records: Vec<CoinRecord> = Vec::new();
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(coin_type, address, cursor.as_deref()).await?;
            pages += 1;

            let next_cursor = page.next_cursor.filter(|c| !c.is_empty());

            if let Some(next) = &next_cursor {
                if !seen_cursors.insert(next.clone()) {
                    return Err(NodeError::PaginationLoopDetected {
                        address: address.to_string(),
                        cursor: next.clone(),
                    });
                }
            }

            let data = page.data.ok_or_else(|| {
                NodeError::upstream_format(OPERATION, address, "page is missing its data field")
            })?;

            let before = records.len();
            records.extend(data.iter().filter_map(|coin| coin.to_record(coin_type)));
            debug!(
                page = pages,
                received = data.len(),
                kept = records.len() - before,
                "Fetched coin page"
            );

            match next_cursor {
                Some(next) if page.has_next_page != Some(false) => cursor = Some(next),
                _ => break,
            }
        }

        let total = sum_balances(&records)
            .map_err(|e| NodeError::amount(OPERATION, address, e))?;
        let total_balance =
            format_display_unit(&total).map_err(|e| NodeError::amount(OPERATION, address, e))?;

        Ok(CoinsByAddress {
            data: records,
            total_balance,
        })
    }

    async fn fetch_page(
        &self,
        coin_type: &str,
        address: &str,
        cursor: Option<&str>,
    ) -> Result<CoinPage, NodeError> {
        let params = vec![
            json!(address),
            json!(coin_type),
            cursor.map_or(Value::Null, |c| json!(c)),
            json!(self.page_limit),
        ];

        let result = self
            .transport
            .call(rpc_methods::GET_COINS, params)
            .await
            .map_err(|e| NodeError::rpc(OPERATION, address, e))?;

        if result.is_null() {
            return Err(NodeError::upstream_format(
                OPERATION,
                address,
                "empty page response",
            ));
        }

        serde_json::from_value(result)
            .map_err(|e| NodeError::upstream_format(OPERATION, address, e.to_string()))
    }
}

/// Exact sum of coin balances in MIST.
fn sum_balances(records: &[CoinRecord]) -> Result<BigDecimal, AmountError> {
    records
        .iter()
        .try_fold(BigDecimal::from(0u8), |sum, record| {
            parse_mist(&record.balance).map(|balance| sum + balance)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(balance: &str) -> CoinRecord {
        CoinRecord {
            object_id: "0x1".to_string(),
            digest: "d".to_string(),
            balance: balance.to_string(),
        }
    }

    #[test]
    fn test_sum_balances_is_exact() {
        let records = vec![
            record("18446744073709551615"),
            record("18446744073709551615"),
            record("2"),
        ];
        let total = sum_balances(&records).unwrap();
        assert_eq!(total, parse_mist("36893488147419103232").unwrap());
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total = sum_balances(&[]).unwrap();
        assert_eq!(format_display_unit(&total).unwrap(), "0");
    }
}
