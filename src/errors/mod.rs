//! Error types for the suiscan library.
//!
//! This module provides strongly-typed errors for all public APIs in suiscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`ConfigError`,
//!   `RpcError`, `AmountError`, `NodeError`)
//! - **Unified error type** (`SuiscanError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`ConfigError`] - Rejected node configuration (bad URL, bad confirmation limit)
//! - [`RpcError`] - Transport-level and upstream JSON-RPC failures
//! - [`AmountError`] - Invalid or negative MIST amounts reaching the unit converter
//! - [`NodeError`] - Failures of the node adapter operations, carrying the
//!   operation name and the address or digest involved
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use suiscan::{NodeAdapter, NodeError};
//!
//! async fn example(adapter: &NodeAdapter) {
//!     match adapter.get_coins_by_address("0x2::sui::SUI", "0xabc").await {
//!         Ok(coins) => println!("Total: {}", coins.total_balance),
//!         Err(NodeError::PaginationLoopDetected { cursor, .. }) => {
//!             eprintln!("Node repeated cursor {cursor}");
//!         }
//!         Err(e) => eprintln!("Other error: {e}"),
//!     }
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use suiscan::{AccountService, SuiscanError};
//!
//! async fn example(json: &str) -> Result<(), SuiscanError> {
//!     let service = AccountService::from_json(json)?;
//!     let height = service.nodes()[0].get_height().await?;
//!     println!("Latest checkpoint: {height}");
//!     Ok(())
//! }
//! ```

mod amount;
mod config;
mod node;
mod rpc;

pub use amount::AmountError;
pub use config::ConfigError;
pub use node::NodeError;
pub use rpc::RpcError;

/// Unified error type for all suiscan operations.
///
/// All module-specific error types convert into `SuiscanError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum SuiscanError {
    /// Error from configuration validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the JSON-RPC transport.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from MIST/SUI unit conversion.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from a node adapter operation.
    #[error("Node error: {0}")]
    Node(#[from] NodeError),
}
