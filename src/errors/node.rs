//! Error types for node adapter operations.
//!
//! This module provides error types for the operations exposed by
//! [`NodeAdapter`](crate::NodeAdapter): height lookup, balance lookup, coin
//! pagination and transaction normalization.

use super::{AmountError, RpcError};

/// Errors that can occur during node adapter operations.
///
/// Wrapped failures carry the operation name and the address or digest the
/// call was made for.
///
/// # Examples
///
/// ```rust,no_run
/// use suiscan::{NodeAdapter, NodeError};
///
/// # async fn example(adapter: NodeAdapter) -> Result<(), NodeError> {
/// match adapter.balance_by_address("sui", "0x02f0").await {
///     Ok(result) => println!("Balance: {}", result.balance),
///     Err(NodeError::UnsupportedTicker { ticker, .. }) => {
///         eprintln!("Ticker {ticker} is not served by this node");
///     }
///     Err(NodeError::Rpc { operation, source, .. }) => {
///         eprintln!("{operation} failed: {source}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The node returned an empty checkpoint sequence number.
    #[error("Not found height")]
    HeightUnavailable,

    /// The requested ticker is not the node's native coin.
    #[error("{network} does not support ticker {ticker}")]
    UnsupportedTicker {
        /// Ticker requested by the caller
        ticker: String,
        /// Native ticker of the node
        network: String,
    },

    /// The node returned a pagination cursor that was already consumed.
    #[error("A repeated cursor {cursor} is detected while listing coins of {address}")]
    PaginationLoopDetected {
        /// Address whose coins were being listed
        address: String,
        /// The repeated cursor
        cursor: String,
    },

    /// A response is missing an expected field or has an unexpected shape.
    #[error("Invalid response format for {operation} ({target}): {details}")]
    UpstreamFormat {
        /// Adapter operation being performed
        operation: &'static str,
        /// Address or digest involved
        target: String,
        /// What was wrong with the response
        details: String,
    },

    /// A transaction expected to carry balance changes has none.
    #[error("Not found balanceChanges in transaction {digest}")]
    MissingBalanceChanges {
        /// Transaction digest
        digest: String,
    },

    /// The underlying RPC call failed.
    #[error("Fetch error {target} \"{operation}\"")]
    Rpc {
        /// Adapter operation being performed
        operation: &'static str,
        /// Address or digest involved
        target: String,
        /// The RPC failure
        #[source]
        source: RpcError,
    },

    /// An amount returned by the node could not be converted.
    #[error("Amount conversion failed in {operation} ({target})")]
    Amount {
        /// Adapter operation being performed
        operation: &'static str,
        /// Address or digest involved
        target: String,
        /// The conversion failure
        #[source]
        source: AmountError,
    },
}

impl NodeError {
    /// Wrap an RPC failure with call context.
    pub fn rpc(operation: &'static str, target: impl Into<String>, source: RpcError) -> Self {
        NodeError::Rpc {
            operation,
            target: target.into(),
            source,
        }
    }

    /// Wrap an amount conversion failure with call context.
    pub fn amount(operation: &'static str, target: impl Into<String>, source: AmountError) -> Self {
        NodeError::Amount {
            operation,
            target: target.into(),
            source,
        }
    }

    /// Create an `UpstreamFormat` error.
    pub fn upstream_format(
        operation: &'static str,
        target: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        NodeError::UpstreamFormat {
            operation,
            target: target.into(),
            details: details.into(),
        }
    }

    /// The RPC failure behind this error, if any.
    pub fn rpc_source(&self) -> Option<&RpcError> {
        match self {
            NodeError::Rpc { source, .. } => Some(source),
            _ => None,
        }
    }
}
