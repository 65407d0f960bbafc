//! Error types for node configuration.
//!
//! Configuration errors are raised at construction time and are fatal for the
//! node entry that caused them.

/// Errors that can occur while validating node configuration.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use suiscan::{ConfigError, NodeOptions};
///
/// let options = NodeOptions {
///     url: Some(json!("   ")),
///     timeout: None,
///     confirmation_limit: Some(json!(10)),
/// };
///
/// match options.validate("node") {
///     Err(ConfigError::InvalidUrl { node, .. }) => assert_eq!(node, "node"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The node URL is missing, not a string, blank, or cannot be parsed.
    #[error("Failed to initialize node \"{node}\". Invalid URL: {reason}")]
    InvalidUrl {
        /// Name of the node entry
        node: String,
        /// Why the URL was rejected
        reason: String,
    },

    /// The confirmation limit is missing or not a non-negative integer.
    #[error("Failed to initialize node \"{node}\". Invalid confirmation limit.")]
    InvalidConfirmationLimit {
        /// Name of the node entry
        node: String,
    },

    /// The node options document could not be parsed.
    #[error("Malformed node options: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create an `InvalidUrl` error for a node entry.
    pub fn invalid_url(node: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidUrl {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// Create an `InvalidConfirmationLimit` error for a node entry.
    pub fn invalid_confirmation_limit(node: impl Into<String>) -> Self {
        ConfigError::InvalidConfirmationLimit { node: node.into() }
    }
}
