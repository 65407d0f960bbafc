//! Configuration for Sui node adapters
//!
//! Node configuration arrives from the account-service layer as a mapping of
//! node name to loosely typed options ([`NodeOptions`]). Each entry is
//! validated into an immutable [`NodeConfig`] before an adapter is built.
//!
//! # Example: Validating deserialized options
//!
//! ```rust
//! use suiscan::{NodeOptions, NodesOptions};
//!
//! let nodes: NodesOptions = serde_json::from_str(
//!     r#"{ "node": { "url": "https://fullnode.mainnet.sui.io", "confirmationLimit": 10 } }"#,
//! )
//! .unwrap();
//!
//! let config = nodes["node"].validate("node").unwrap();
//! assert_eq!(config.confirmation_limit(), 10);
//! ```
//!
//! # Example: Building programmatically
//!
//! ```rust
//! use suiscan::NodeConfigBuilder;
//! use std::time::Duration;
//!
//! let config = NodeConfigBuilder::new("https://fullnode.mainnet.sui.io")
//!     .confirmation_limit(10)
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::ConfigError;

pub mod constants;

use constants::DEFAULT_REQUEST_TIMEOUT;

/// Raw per-node options as supplied by the account-service layer.
///
/// Unknown keys are ignored. Timeouts are in milliseconds; an absent or zero
/// timeout falls back to [`DEFAULT_REQUEST_TIMEOUT`]. The URL and the
/// confirmation limit are kept as raw JSON so that a mistyped value is
/// reported against its node by [`NodeOptions::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOptions {
    /// JSON-RPC endpoint URL, expected to be a string
    #[serde(default)]
    pub url: Option<Value>,

    /// Request timeout in milliseconds
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Number of checkpoints after which a transaction counts as finished,
    /// expected to be a non-negative integer
    #[serde(default)]
    pub confirmation_limit: Option<Value>,
}

/// Mapping of logical node name to its options.
pub type NodesOptions = BTreeMap<String, NodeOptions>;

impl NodeOptions {
    /// Validate these options into a [`NodeConfig`].
    ///
    /// `node` is the logical node name and only used for error reporting.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidUrl`] if the URL is missing, not a string, blank
    ///   or unparseable
    /// - [`ConfigError::InvalidConfirmationLimit`] if the limit is missing or
    ///   not a non-negative integer
    pub fn validate(&self, node: &str) -> Result<NodeConfig, ConfigError> {
        let url = match &self.url {
            None | Some(Value::Null) => None,
            Some(Value::String(url)) => Some(url.as_str()),
            Some(other) => {
                return Err(ConfigError::invalid_url(
                    node,
                    format!("expected a string, got {other}"),
                ))
            }
        };
        let url = parse_url(node, url)?;

        let confirmation_limit = self
            .confirmation_limit
            .as_ref()
            .and_then(Value::as_u64)
            .ok_or_else(|| ConfigError::invalid_confirmation_limit(node))?;

        let timeout = match self.timeout {
            Some(millis) if millis > 0 => Duration::from_millis(millis),
            _ => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(NodeConfig {
            url,
            timeout,
            confirmation_limit,
        })
    }
}

/// Validated, immutable configuration of a single node.
///
/// Read-only after construction; safe to share across concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    url: Url,
    timeout: Duration,
    confirmation_limit: u64,
}

impl NodeConfig {
    /// Create a configuration with the default request timeout.
    pub fn new(url: Url, confirmation_limit: u64) -> Self {
        Self {
            url,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            confirmation_limit,
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// JSON-RPC endpoint URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Per-request HTTP timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Checkpoints required before a successful transaction is `finished`
    pub fn confirmation_limit(&self) -> u64 {
        self.confirmation_limit
    }
}

/// Builder for [`NodeConfig`]
///
/// # Example
///
/// ```rust
/// use suiscan::NodeConfigBuilder;
///
/// let err = NodeConfigBuilder::new("").confirmation_limit(3).build();
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NodeConfigBuilder {
    name: String,
    options: NodeOptions,
}

impl NodeConfigBuilder {
    /// Start a builder for the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            name: "node".to_string(),
            options: NodeOptions {
                url: Some(Value::String(url.into())),
                ..NodeOptions::default()
            },
        }
    }

    /// Name used when reporting validation errors
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Set the confirmation limit
    pub fn confirmation_limit(mut self, limit: i64) -> Self {
        self.options.confirmation_limit = Some(Value::from(limit));
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<NodeConfig, ConfigError> {
        self.options.validate(&self.name)
    }
}

fn parse_url(node: &str, url: Option<&str>) -> Result<Url, ConfigError> {
    let raw = match url.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ConfigError::invalid_url(node, "URL is empty")),
    };

    let url = Url::parse(raw).map_err(|e| ConfigError::invalid_url(node, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::invalid_url(
            node,
            format!("unsupported scheme {scheme}"),
        )),
    }
}
