// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Account service: the set of configured node adapters
//!
//! [`AccountService`] turns raw [`NodesOptions`] into one [`NodeAdapter`] per
//! logical node name. The caller owns the service and passes it, or the
//! adapters it holds, to whatever needs them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use suiscan::AccountService;
//!
//! # async fn example() -> Result<(), suiscan::SuiscanError> {
//! let service = AccountService::from_json(
//!     r#"{"sui-mainnet": {"url": "https://fullnode.mainnet.sui.io", "confirmationLimit": 10}}"#,
//! )?;
//!
//! if let Some(node) = service.node("sui-mainnet") {
//!     let balance = node.balance_by_address("SUI", "0x02f0").await?;
//!     println!("{}", balance.balance);
//! }
//! # Ok(())
//! # }
//! ```

use tracing::info;

use crate::config::constants::NETWORK;
use crate::config::NodesOptions;
use crate::transport::{HttpTransport, RpcTransport};
use crate::{ConfigError, NodeAdapter, SuiscanError};

/// Owns the node adapters of one network, ordered by node name.
#[derive(Debug)]
pub struct AccountService<T = HttpTransport> {
    nodes: Vec<NodeAdapter<T>>,
}

impl AccountService<HttpTransport> {
    /// Validate `options` and build an HTTP adapter for every node.
    ///
    /// # Errors
    ///
    /// - [`SuiscanError::Config`] if any node's options are invalid
    /// - [`SuiscanError::Rpc`] if an HTTP client cannot be built
    pub fn init_nodes(options: &NodesOptions) -> Result<Self, SuiscanError> {
        let mut nodes = Vec::with_capacity(options.len());

        for (name, node_options) in options {
            let config = node_options.validate(name)?;
            info!(node = %name, url = %config.url(), "Configured node");
            nodes.push(NodeAdapter::new(config, name.clone())?);
        }

        Ok(Self { nodes })
    }

    /// Parse [`NodesOptions`] from JSON and initialize the nodes.
    ///
    /// # Errors
    ///
    /// As for [`AccountService::init_nodes`], plus [`ConfigError::Malformed`]
    /// if `json` is not a valid options object.
    pub fn from_json(json: &str) -> Result<Self, SuiscanError> {
        let options: NodesOptions = serde_json::from_str(json).map_err(ConfigError::from)?;
        Self::init_nodes(&options)
    }
}

impl<T: RpcTransport> AccountService<T> {
    /// Build a service from adapters constructed elsewhere.
    pub fn from_adapters(adapters: impl IntoIterator<Item = NodeAdapter<T>>) -> Self {
        let mut nodes: Vec<_> = adapters.into_iter().collect();
        nodes.sort_by(|a, b| a.name().cmp(b.name()));
        Self { nodes }
    }

    /// All adapters, ordered by node name
    pub fn nodes(&self) -> &[NodeAdapter<T>] {
        &self.nodes
    }

    /// The adapter configured under `name`
    pub fn node(&self, name: &str) -> Option<&NodeAdapter<T>> {
        self.nodes.iter().find(|node| node.name() == name)
    }

    pub fn network(&self) -> &'static str {
        NETWORK
    }
}
