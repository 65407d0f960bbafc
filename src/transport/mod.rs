// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC transport for Sui full nodes.
//!
//! The adapter talks to a node exclusively through the [`RpcTransport`]
//! trait, which takes a method name and positional parameters and returns the
//! decoded `result` payload. [`HttpTransport`] is the production
//! implementation; tests substitute scripted transports.
//!
//! # Logging
//!
//! The [`LoggingLayer`] is a Tower `Layer` that wraps any transport and
//! records each call in a tracing span:
//!
//! ```rust,ignore
//! use suiscan::transport::{HttpTransport, LoggingLayer};
//! use tower::Layer;
//!
//! let transport = LoggingLayer::new()
//!     .with_request_logging()
//!     .layer(HttpTransport::new(&config)?);
//! ```

mod envelope;
mod http;
mod logging;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::RpcError;

pub use envelope::{RpcErrorObject, RpcRequest, RpcResponse, JSONRPC_VERSION};
pub use http::HttpTransport;
pub use logging::{LoggingLayer, LoggingTransport};

/// A single-attempt JSON-RPC call to a node.
///
/// Implementations issue exactly one request per call and perform no retries.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Call `method` with positional `params` and return the `result` payload.
    ///
    /// An absent `result` is returned as [`Value::Null`].
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        (**self).call(method, params).await
    }
}
