//! Shared RPC error types for Sui full-node calls.
//!
//! This module provides error types for the failures that can occur when a
//! JSON-RPC request is sent to a node: the HTTP exchange itself failing, the
//! body not being a JSON-RPC response, or the node reporting an error object.

/// Errors that can occur during a single JSON-RPC call.
///
/// Every variant carries the RPC method so the failure can be traced back to
/// the call that produced it.
///
/// # Examples
///
/// ```rust
/// use suiscan::RpcError;
///
/// let error = RpcError::upstream(
///     "sui_getTransactionBlock",
///     "Could not find the referenced transaction",
/// );
/// assert!(error.is_transaction_not_found());
/// println!("Error: {}", error);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The HTTP request could not be completed.
    ///
    /// Covers connection failures, DNS errors and timeouts. The underlying
    /// cause is kept as the error source.
    #[error("Transport failure during {method}")]
    Transport {
        /// RPC method being called
        method: String,
        /// The underlying HTTP client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The node answered with a JSON-RPC error object.
    #[error("{method} failed: {message}")]
    Upstream {
        /// RPC method being called
        method: String,
        /// The `error.message` reported by the node
        message: String,
    },

    /// The node answered with a non-success HTTP status and no error message.
    #[error("{method} returned HTTP {status}")]
    HttpStatus {
        /// RPC method being called
        method: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body is not a JSON-RPC response.
    #[error("Malformed response for {method}")]
    MalformedResponse {
        /// RPC method being called
        method: String,
        /// The underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    ClientBuild {
        /// The underlying HTTP client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Message fragment the node uses for unknown transaction digests.
const TRANSACTION_NOT_FOUND: &str = "Could not find the referenced transaction";

impl RpcError {
    /// Helper to create a `Transport` error from any error type.
    pub fn transport(
        method: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::Transport {
            method: method.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create an `Upstream` error.
    pub fn upstream(method: impl Into<String>, message: impl Into<String>) -> Self {
        RpcError::Upstream {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Helper to create a `MalformedResponse` error from any error type.
    pub fn malformed_response(
        method: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::MalformedResponse {
            method: method.into(),
            source: Box::new(source),
        }
    }

    /// The upstream message, if the node reported one.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            RpcError::Upstream { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether the node reported that the requested transaction does not exist.
    pub fn is_transaction_not_found(&self) -> bool {
        self.upstream_message()
            .is_some_and(|message| message.contains(TRANSACTION_NOT_FOUND))
    }
}
