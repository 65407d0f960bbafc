// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP implementation of [`RpcTransport`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::trace;
use url::Url;

use super::{RpcRequest, RpcResponse, RpcTransport};
use crate::{NodeConfig, RpcError};

/// Sends JSON-RPC requests to a node with a single HTTP POST each.
///
/// The configured timeout applies to the whole exchange. The client is cheap
/// to clone and shares its connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use suiscan::transport::{HttpTransport, RpcTransport};
/// use suiscan::NodeConfigBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = NodeConfigBuilder::new("https://fullnode.mainnet.sui.io")
///     .confirmation_limit(10)
///     .build()?;
/// let transport = HttpTransport::new(&config)?;
/// let height = transport
///     .call("sui_getLatestCheckpointSequenceNumber", vec![])
///     .await?;
/// println!("{height}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    /// Build a transport for the node described by `config`.
    pub fn new(config: &NodeConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RpcError::ClientBuild {
                source: Box::new(e),
            })?;

        Ok(Self {
            client,
            url: config.url().clone(),
        })
    }

    /// Endpoint this transport posts to
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let request = RpcRequest::new(method, &params);
        trace!(%method, id = %request.id, "Sending JSON-RPC request");

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcError::transport(method, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RpcError::transport(method, e))?;

        let decoded = match serde_json::from_slice::<RpcResponse>(&body) {
            Ok(decoded) => decoded,
            Err(_) if !status.is_success() => {
                return Err(RpcError::HttpStatus {
                    method: method.to_string(),
                    status: status.as_u16(),
                });
            }
            Err(e) => return Err(RpcError::malformed_response(method, e)),
        };

        // Nodes report JSON-RPC errors with either 200 or an error status.
        if let Some(message) = decoded.error_message() {
            return Err(RpcError::upstream(method, message));
        }

        if !status.is_success() {
            return Err(RpcError::HttpStatus {
                method: method.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(decoded.into_result())
    }
}
