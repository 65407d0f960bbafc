//! JSON-RPC 2.0 request and response envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Protocol version sent in every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request.
///
/// The id only correlates a request with its response; a fresh one is
/// generated for every call.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: Uuid,
    pub method: &'a str,
    pub params: &'a [Value],
}

impl<'a> RpcRequest<'a> {
    /// Build a request with a new UUID v4 id.
    pub fn new(method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: Uuid::new_v4(),
            method,
            params,
        }
    }
}

/// A JSON-RPC 2.0 response as returned by the node.
///
/// Every field is optional so partial responses still decode; the transport
/// decides what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// The upstream error message, if present and non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|error| error.message.as_deref())
            .filter(|message| !message.is_empty())
    }

    /// Consume the response, returning `result` or `null`.
    pub fn into_result(self) -> Value {
        self.result.unwrap_or(Value::Null)
    }
}
