// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Node adapter façade
//!
//! [`NodeAdapter`] is the chain-agnostic surface over one Sui full node. Each
//! operation issues its RPC calls through an [`RpcTransport`], converts MIST
//! into display units and reports failures as [`NodeError`] with the operation
//! name and the address or digest involved.

use futures::future::join;
use serde_json::{json, Value};
use tracing::{debug, Instrument};

use crate::coins::CoinPaginator;
use crate::config::constants::{rpc_methods, transaction_block_options, NETWORK};
use crate::config::NodeConfig;
use crate::normalizer::TransactionNormalizer;
use crate::spans;
use crate::transport::{HttpTransport, RpcTransport};
use crate::types::balance::{BalanceByAddress, SuiBalance};
use crate::types::coin::CoinsByAddress;
use crate::types::transaction::RawTransaction;
use crate::types::transfer::NormalizedTransfer;
use crate::types::value_as_u64;
use crate::units::to_display_unit;
use crate::{NodeError, RpcError};

mod operation {
    pub(super) const GET_HEIGHT: &str = "getHeight";
    pub(super) const BALANCE_BY_ADDRESS: &str = "balanceByAddress";
    pub(super) const TX_BY_HASH: &str = "txByHash";
}

/// Tickers served by a Sui node
const TICKERS: &[&str] = &[NETWORK];

/// Adapter for a single Sui full node.
///
/// The transport defaults to [`HttpTransport`]; tests and callers that need
/// request logging can supply any other [`RpcTransport`].
///
/// # Examples
///
/// ```rust,no_run
/// use suiscan::{NodeAdapter, NodeConfigBuilder};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = NodeConfigBuilder::new("https://fullnode.mainnet.sui.io")
///     .confirmation_limit(10)
///     .build()?;
/// let adapter = NodeAdapter::new(config, "sui-mainnet")?;
///
/// let height = adapter.get_height().await?;
/// let transfer = adapter.tx_by_hash("SUI", "9xV1...").await?;
/// println!("{height}: {:?}", transfer.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NodeAdapter<T = HttpTransport> {
    name: String,
    config: NodeConfig,
    transport: T,
}

impl NodeAdapter<HttpTransport> {
    /// Create an adapter talking HTTP JSON-RPC to the configured node.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: NodeConfig, name: impl Into<String>) -> Result<Self, RpcError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, name, transport))
    }
}

impl<T: RpcTransport> NodeAdapter<T> {
    /// Create an adapter over an arbitrary transport.
    pub fn with_transport(config: NodeConfig, name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            config,
            transport,
        }
    }

    /// Configured node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Network identifier, always `SUI`
    pub fn network(&self) -> &'static str {
        NETWORK
    }

    /// Tickers this adapter serves
    pub fn tickers(&self) -> &'static [&'static str] {
        TICKERS
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Latest checkpoint sequence number.
    ///
    /// # Errors
    ///
    /// - [`NodeError::HeightUnavailable`] if the node returns an empty value
    /// - [`NodeError::UpstreamFormat`] if the value is not a non-negative integer
    /// - [`NodeError::Rpc`] if the call fails
    pub async fn get_height(&self) -> Result<u64, NodeError> {
        let span = spans::get_height(&self.name);
        self.fetch_height().instrument(span).await
    }

    async fn fetch_height(&self) -> Result<u64, NodeError> {
        let result = self
            .transport
            .call(rpc_methods::GET_HEIGHT, Vec::new())
            .await
            .map_err(|e| NodeError::rpc(operation::GET_HEIGHT, &self.name, e))?;

        match &result {
            Value::Null => Err(NodeError::HeightUnavailable),
            Value::String(s) if s.is_empty() => Err(NodeError::HeightUnavailable),
            other => value_as_u64(other).ok_or_else(|| {
                NodeError::upstream_format(
                    operation::GET_HEIGHT,
                    &self.name,
                    format!("checkpoint sequence number {other} is not an integer"),
                )
            }),
        }
    }

    /// Native balance of `address` in display units.
    ///
    /// `ticker` must name the native coin; the comparison ignores case.
    ///
    /// # Errors
    ///
    /// - [`NodeError::UnsupportedTicker`] for any other ticker
    /// - [`NodeError::UpstreamFormat`] if the response has no `totalBalance`
    /// - [`NodeError::Amount`] if the balance is not a non-negative integer
    /// - [`NodeError::Rpc`] if the call fails
    pub async fn balance_by_address(
        &self,
        ticker: &str,
        address: &str,
    ) -> Result<BalanceByAddress, NodeError> {
        let span = spans::balance_by_address(&self.name, ticker, address);

        async move {
            self.ensure_ticker(ticker)?;

            let result = self
                .transport
                .call(rpc_methods::GET_BALANCE_BY_ADDRESS, vec![json!(address)])
                .await
                .map_err(|e| NodeError::rpc(operation::BALANCE_BY_ADDRESS, address, e))?;

            let response: SuiBalance = serde_json::from_value(result).map_err(|e| {
                NodeError::upstream_format(operation::BALANCE_BY_ADDRESS, address, e.to_string())
            })?;
            let total = response.total_balance.ok_or_else(|| {
                NodeError::upstream_format(
                    operation::BALANCE_BY_ADDRESS,
                    address,
                    "missing totalBalance",
                )
            })?;

            let balance = to_display_unit(&total)
                .map_err(|e| NodeError::amount(operation::BALANCE_BY_ADDRESS, address, e))?;
            debug!(mist = %total, balance = %balance, "Fetched balance");

            Ok::<_, NodeError>(BalanceByAddress { balance })
        }
        .instrument(span)
        .await
    }

    /// All coins of `coin_type` owned by `address`, with their total.
    ///
    /// See [`CoinPaginator::list_coins`] for filtering and error behavior.
    pub async fn get_coins_by_address(
        &self,
        coin_type: &str,
        address: &str,
    ) -> Result<CoinsByAddress, NodeError> {
        let span = spans::get_coins_by_address(&self.name, coin_type, address);
        CoinPaginator::new(&self.transport)
            .list_coins(coin_type, address)
            .instrument(span)
            .await
    }

    /// Fetch a transaction and return its first normalized transfer.
    ///
    /// A transaction the node does not know, or one that is not a plain
    /// native transfer, yields [`NormalizedTransfer::not_found`] rather than
    /// an error.
    ///
    /// A node that reports no height also yields the sentinel. Normalized
    /// records carry the network ticker; the sentinel echoes `ticker`.
    ///
    /// # Errors
    ///
    /// - [`NodeError::Rpc`] if the transaction or height call fails for any
    ///   other reason
    /// - [`NodeError::UpstreamFormat`] if the transaction or the height cannot
    ///   be decoded
    pub async fn tx_by_hash(&self, ticker: &str, hash: &str) -> Result<NormalizedTransfer, NodeError> {
        let span = spans::tx_by_hash(&self.name, ticker, hash);

        async move {
            let transfers = self.fetch_transfers(hash).await?;
            Ok::<_, NodeError>(transfers
                .into_iter()
                .next()
                .unwrap_or_else(|| NormalizedTransfer::not_found(ticker, hash)))
        }
        .instrument(span)
        .await
    }

    /// Fetch a transaction and return one normalized transfer per receiver.
    ///
    /// Not-found and ineligible transactions yield an empty list. Errors are
    /// as for [`NodeAdapter::tx_by_hash`].
    pub async fn transfers_by_hash(
        &self,
        ticker: &str,
        hash: &str,
    ) -> Result<Vec<NormalizedTransfer>, NodeError> {
        let span = spans::tx_by_hash(&self.name, ticker, hash);
        self.fetch_transfers(hash).instrument(span).await
    }

    async fn fetch_transfers(&self, hash: &str) -> Result<Vec<NormalizedTransfer>, NodeError> {
        let params = vec![json!(hash), transaction_block_options()];
        let (tx, height) = join(
            self.transport.call(rpc_methods::GET_TX_BY_DIGEST, params),
            self.get_height(),
        )
        .await;

        let tx = match tx {
            Ok(Value::Null) => {
                debug!("Node returned no transaction");
                return Ok(Vec::new());
            }
            Ok(tx) => tx,
            Err(e) if e.is_transaction_not_found() => {
                debug!(error = %e, "Transaction not found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(NodeError::rpc(operation::TX_BY_HASH, hash, e)),
        };
        let current_height = match height {
            Ok(height) => height,
            Err(e @ NodeError::HeightUnavailable) => {
                debug!(error = %e, "No chain height to classify against");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let tx = RawTransaction::from_value(tx).map_err(|e| {
            NodeError::upstream_format(operation::TX_BY_HASH, hash, e.to_string())
        })?;

        // Records carry the network ticker, whatever alias the caller used.
        let normalizer = TransactionNormalizer::new(NETWORK, self.config.confirmation_limit());
        let transfers = normalizer.normalize(&tx, current_height).await;
        debug!(
            records = transfers.len(),
            current_height, "Normalized transaction"
        );

        Ok(transfers)
    }

    fn ensure_ticker(&self, ticker: &str) -> Result<(), NodeError> {
        if TICKERS.iter().any(|t| t.eq_ignore_ascii_case(ticker)) {
            return Ok(());
        }
        Err(NodeError::UnsupportedTicker {
            ticker: ticker.to_string(),
            network: NETWORK.to_string(),
        })
    }
}
