//! Balance types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `suix_getBalance`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiBalance {
    #[serde(default)]
    pub coin_type: Option<String>,
    #[serde(default)]
    pub coin_object_count: Option<Value>,
    /// Total balance in MIST
    #[serde(default)]
    pub total_balance: Option<String>,
    #[serde(default)]
    pub locked_balance: Option<Value>,
}

/// Balance of an address in display units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceByAddress {
    pub balance: String,
}
