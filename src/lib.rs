//! Sui full-node adapter
//!
//! `suiscan` exposes a Sui full node through a small chain-agnostic surface:
//! the latest checkpoint height, native balances, coin listings and
//! transactions normalized into sender/receiver transfer records.
//!
//! - [`NodeAdapter`] is the façade over one node
//! - [`AccountService`] builds adapters from per-node options
//! - [`units`] converts MIST amounts into grouped SUI display strings
//! - [`transport`] carries JSON-RPC calls, with an optional logging layer
//!
//! ```rust,no_run
//! use suiscan::{NodeAdapter, NodeConfigBuilder};
//!
//! # async fn example() -> Result<(), suiscan::SuiscanError> {
//! let config = NodeConfigBuilder::new("https://fullnode.mainnet.sui.io")
//!     .confirmation_limit(10)
//!     .build()?;
//! let adapter = NodeAdapter::new(config, "sui-mainnet")?;
//!
//! let coins = adapter
//!     .get_coins_by_address("0x2::sui::SUI", "0x02f0")
//!     .await?;
//! println!("{} coins, {} SUI", coins.data.len(), coins.total_balance);
//! # Ok(())
//! # }
//! ```

mod adapter;
mod coins;
pub mod config;
mod errors;
mod normalizer;
mod service;
mod spans;
pub mod transport;
pub mod types;
pub mod units;

pub use adapter::NodeAdapter;
pub use coins::CoinPaginator;
pub use config::{NodeConfig, NodeConfigBuilder, NodeOptions, NodesOptions};
pub use errors::*;
pub use normalizer::{is_native_transfer, split_balance_changes, used_fee, TransactionNormalizer};
pub use service::AccountService;
pub use types::balance::{BalanceByAddress, SuiBalance};
pub use types::coin::{CoinData, CoinPage, CoinRecord, CoinsByAddress};
pub use types::transaction::{BalanceChange, GasCostSummary, RawTransaction, TransactionBlock};
pub use types::transfer::{NormalizedTransfer, TransferParty, TxStatus};
pub use url::Url;
