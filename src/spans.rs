//! Tracing span helpers for suiscan operations.
//!
//! Telemetry is kept out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here and attaches
//! it to its future.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: &str) -> Result<T, NodeError> {
//!     let span = spans::my_operation(&self.name, param);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use tracing::{Level, Span};

/// Span for fetching the latest checkpoint sequence number.
///
/// Parent: tx_by_hash span, or none
/// Children: rpc_call span when the transport is wrapped in a logging layer
#[inline]
pub(crate) fn get_height(node: &str) -> Span {
    tracing::debug_span!("suiscan.get_height", node = %node)
}

/// Span for a native balance lookup.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn balance_by_address(node: &str, ticker: &str, address: &str) -> Span {
    tracing::span!(
        Level::INFO,
        "suiscan.balance_by_address",
        node = %node,
        ticker = %ticker,
        address = %address,
    )
}

/// Span for listing all coins of a type owned by an address.
///
/// Parent: None (root span for this operation)
/// Children: one rpc_call span per page
#[inline]
pub(crate) fn get_coins_by_address(node: &str, coin_type: &str, address: &str) -> Span {
    tracing::info_span!(
        "suiscan.get_coins_by_address",
        node = %node,
        coin_type = %coin_type,
        address = %address,
    )
}

/// Span for fetching and normalizing a transaction.
///
/// Parent: None (root span for this operation)
/// Children: get_height span and the transaction fetch
#[inline]
pub(crate) fn tx_by_hash(node: &str, ticker: &str, hash: &str) -> Span {
    tracing::info_span!(
        "suiscan.tx_by_hash",
        node = %node,
        ticker = %ticker,
        hash = %hash,
    )
}
