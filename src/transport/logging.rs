// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower-based logging layer for node transports.
//!
//! This module implements a logging layer that uses `tracing` to record
//! JSON-RPC request/response information for debugging and observability.

use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tower::Layer;
use tracing::{debug, trace, warn, Instrument};

use super::RpcTransport;
use crate::RpcError;

/// A Tower layer that adds logging/tracing to JSON-RPC calls.
///
/// This layer wraps each call in a tracing span and logs timing
/// information, request details, and any errors that occur.
///
/// # Example
///
/// ```rust,ignore
/// use suiscan::transport::{HttpTransport, LoggingLayer};
/// use tower::Layer;
///
/// let transport = LoggingLayer::new().layer(HttpTransport::new(&config)?);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer {
    /// Whether to log request params (can be verbose)
    log_requests: bool,
    /// Whether to log response payloads (can be verbose)
    log_responses: bool,
}

impl LoggingLayer {
    /// Creates a new logging layer with default settings.
    ///
    /// By default, only timing and errors are logged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables logging of request params.
    pub fn with_request_logging(mut self) -> Self {
        self.log_requests = true;
        self
    }

    /// Enables logging of response payloads.
    ///
    /// Warning: transaction blocks with raw effects are large.
    pub fn with_response_logging(mut self) -> Self {
        self.log_responses = true;
        self
    }

    /// Enables logging of both request and response payloads.
    pub fn verbose(mut self) -> Self {
        self.log_requests = true;
        self.log_responses = true;
        self
    }
}

impl<T> Layer<T> for LoggingLayer {
    type Service = LoggingTransport<T>;

    fn layer(&self, inner: T) -> Self::Service {
        LoggingTransport {
            inner,
            log_requests: self.log_requests,
            log_responses: self.log_responses,
        }
    }
}

/// A transport that logs every call made through the wrapped transport.
#[derive(Clone, Debug)]
pub struct LoggingTransport<T> {
    inner: T,
    log_requests: bool,
    log_responses: bool,
}

impl<T> LoggingTransport<T> {
    /// The wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: RpcTransport> RpcTransport for LoggingTransport<T> {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let span = tracing::info_span!(
            "rpc_call",
            method = %method,
            duration_ms = tracing::field::Empty,
        );

        async {
            let start = Instant::now();

            if self.log_requests {
                trace!(params = ?params, "RPC request");
            } else {
                debug!("RPC request: {method}");
            }

            let result = self.inner.call(method, params).await;
            let duration = start.elapsed();

            tracing::Span::current().record("duration_ms", duration.as_millis() as u64);

            match &result {
                Ok(response) => {
                    if self.log_responses {
                        trace!(
                            response = %response,
                            duration_ms = %duration.as_millis(),
                            "RPC response"
                        );
                    } else {
                        debug!(
                            duration_ms = %duration.as_millis(),
                            "RPC response: {method}"
                        );
                    }
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        duration_ms = %duration.as_millis(),
                        "RPC error: {method}"
                    );
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}
