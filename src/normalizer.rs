// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction normalization
//!
//! Turns a raw transaction block into [`NormalizedTransfer`] records:
//!
//! 1. The block must carry only native-coin balance changes with string
//!    amounts; anything else is skipped without error.
//! 2. Exactly one balance change must belong to the declared sender. Its
//!    absolute amount is the fee-inclusive debit.
//! 3. Every other balance change is a receiver and yields one record that
//!    shares the sender, fee and status.
//!
//! Receivers are assembled as independent units and joined. A unit that fails
//! produces no record and does not affect its siblings.

use bigdecimal::BigDecimal;
use futures::future::join_all;
use tracing::debug;

use crate::config::constants::SUI_COIN_TYPE;
use crate::types::transaction::{BalanceChange, GasCostSummary, RawTransaction};
use crate::types::transfer::{NormalizedTransfer, TransferParty, TxStatus};
use crate::units::{mist_to_sui_plain, parse_mist};
use crate::NodeError;

const OPERATION: &str = "transactionProcess";

/// Converts raw transaction blocks into normalized transfers.
#[derive(Debug, Clone)]
pub struct TransactionNormalizer {
    ticker: String,
    confirmation_limit: u64,
}

impl TransactionNormalizer {
    /// Create a normalizer stamping records with `ticker`.
    pub fn new(ticker: impl Into<String>, confirmation_limit: u64) -> Self {
        Self {
            ticker: ticker.into(),
            confirmation_limit,
        }
    }

    /// Checkpoints required before a successful transaction is finished
    pub fn confirmation_limit(&self) -> u64 {
        self.confirmation_limit
    }

    /// Normalize `tx` against the chain height `current_height`.
    ///
    /// Returns one record per receiver, in balance-change order. Ineligible
    /// transactions produce an empty list.
    pub async fn normalize(
        &self,
        tx: &RawTransaction,
        current_height: u64,
    ) -> Vec<NormalizedTransfer> {
        let block = &tx.block;

        if !is_native_transfer(block.balance_changes()) {
            debug!(digest = %block.digest, "Skipping transaction without native-only balance changes");
            return Vec::new();
        }

        let Some((_, receivers)) = split_balance_changes(block.sender(), block.balance_changes())
        else {
            debug!(digest = %block.digest, "Skipping transaction without a single sender balance change");
            return Vec::new();
        };

        let units = receivers
            .into_iter()
            .map(|receiver| async move { self.transfer_for(tx, receiver, current_height) });

        join_all(units)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(transfer) => Some(transfer),
                Err(e) => {
                    debug!(digest = %block.digest, error = %e, "Dropping receiver");
                    None
                }
            })
            .collect()
    }

    /// Assemble the record paying `receiver` in `tx`.
    ///
    /// This is the unit [`TransactionNormalizer::normalize`] runs per
    /// receiver. It does not apply the eligibility filter.
    ///
    /// # Errors
    ///
    /// - [`NodeError::MissingBalanceChanges`] if the block has no balance
    ///   changes
    /// - [`NodeError::UpstreamFormat`] if the block has no single sender entry,
    ///   lacks gas data or either party is not address-owned
    /// - [`NodeError::Amount`] if a gas component is not an integer
    pub fn transfer_for(
        &self,
        tx: &RawTransaction,
        receiver: &BalanceChange,
        current_height: u64,
    ) -> Result<NormalizedTransfer, NodeError> {
        let block = &tx.block;

        if block.balance_changes().is_empty() {
            return Err(NodeError::MissingBalanceChanges {
                digest: block.digest.clone(),
            });
        }

        let (sender, _) = split_balance_changes(block.sender(), block.balance_changes())
            .ok_or_else(|| {
                NodeError::upstream_format(OPERATION, &block.digest, "no single sender balance change")
            })?;

        let status = TxStatus::classify(
            block.checkpoint_height(),
            current_height,
            self.confirmation_limit,
            block.is_success(),
        );

        let gas = block.gas_used().ok_or_else(|| {
            NodeError::upstream_format(OPERATION, &block.digest, "missing effects.gasUsed")
        })?;
        let used_fee = used_fee(gas)
            .map(|fee| mist_to_sui_plain(&fee))
            .map_err(|e| NodeError::amount(OPERATION, &block.digest, e))?;

        let mut from = party(sender, &block.digest, "sender")?;
        let to = party(receiver, &block.digest, "receiver")?;
        // The sender's debit is reported as a magnitude.
        if let Some(magnitude) = from.value.strip_prefix('-') {
            from.value = magnitude.to_string();
        }

        Ok(NormalizedTransfer {
            timestamp: block.timestamp_millis(),
            hash: block.digest.clone(),
            used_fee,
            ticker: self.ticker.clone(),
            from: vec![from],
            to: vec![to],
            status,
            height: block.checkpoint_height(),
            raw: tx.raw.clone(),
        })
    }
}

/// Whether every balance change moves the native coin with a numeric amount.
///
/// An empty list is not a transfer.
pub fn is_native_transfer(changes: &[BalanceChange]) -> bool {
    !changes.is_empty()
        && changes.iter().all(|change| {
            change.coin_type.as_deref() == Some(SUI_COIN_TYPE)
                && change
                    .amount_str()
                    .is_some_and(|amount| parse_mist(amount).is_ok())
        })
}

/// Split balance changes into the sender's single entry and the receivers.
///
/// Returns `None` unless exactly one entry is owned by `sender`.
pub fn split_balance_changes<'a>(
    sender: Option<&str>,
    changes: &'a [BalanceChange],
) -> Option<(&'a BalanceChange, Vec<&'a BalanceChange>)> {
    let sender = sender?;
    let (senders, receivers): (Vec<_>, Vec<_>) = changes
        .iter()
        .partition(|change| change.owner_address() == Some(sender));

    match senders.as_slice() {
        [only] => Some((*only, receivers)),
        _ => None,
    }
}

/// Total gas fee in MIST: computation plus storage minus the storage rebate.
///
/// The result is negative when the rebate exceeds the costs.
pub fn used_fee(gas: &GasCostSummary) -> Result<BigDecimal, crate::AmountError> {
    let field = |value: &Option<String>| parse_mist(value.as_deref().unwrap_or_default());

    let computation = field(&gas.computation_cost)?;
    let storage = field(&gas.storage_cost)?;
    let rebate = field(&gas.storage_rebate)?;

    Ok(computation + storage - rebate)
}

fn party(change: &BalanceChange, digest: &str, role: &str) -> Result<TransferParty, NodeError> {
    let address = change.owner_address().ok_or_else(|| {
        NodeError::upstream_format(
            OPERATION,
            digest,
            format!("{role} balance change is not address-owned"),
        )
    })?;
    let value = change.amount_str().ok_or_else(|| {
        NodeError::upstream_format(OPERATION, digest, format!("{role} amount is not a string"))
    })?;

    Ok(TransferParty {
        address: address.to_string(),
        value: value.to_string(),
    })
}
