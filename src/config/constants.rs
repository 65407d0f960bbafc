//! Network identifiers, RPC method names and defaults
//!
//! This module centralizes the Sui-specific constants used throughout the
//! suiscan crate.

use std::time::Duration;

use serde_json::{json, Value};

/// Native ticker served by the adapter.
pub const NETWORK: &str = "SUI";

/// Fully qualified type of the native coin.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// Request timeout applied when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

/// Page size requested from `suix_getCoins`.
pub const COIN_PAGE_LIMIT: u32 = 100;

/// JSON-RPC methods consumed by the adapter.
pub mod rpc_methods {
    /// Latest checkpoint sequence number (chain height)
    pub const GET_HEIGHT: &str = "sui_getLatestCheckpointSequenceNumber";

    /// Total native balance of an address
    pub const GET_BALANCE_BY_ADDRESS: &str = "suix_getBalance";

    /// Paginated coin objects of an address
    pub const GET_COINS: &str = "suix_getCoins";

    /// Transaction block by digest
    pub const GET_TX_BY_DIGEST: &str = "sui_getTransactionBlock";
}

/// Options object sent with `sui_getTransactionBlock`.
pub fn transaction_block_options() -> Value {
    json!({
        "showInput": true,
        "showEffects": true,
        "showEvents": true,
        "showObjectChanges": true,
        "showBalanceChanges": true,
        "showRawEffects": true,
    })
}
