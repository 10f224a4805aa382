//! Recorded results of graph introspection for a set of nodes.
//!
//! A snapshot is what the graph queries (`get_publisher_info`, ...,
//! `list_parameters`) returned, serialized as JSON:
//!
//! ```json
//! {
//!   "nodes": [
//!     {
//!       "name": "/talker",
//!       "publishers": [{ "name": "/chatter", "types": ["std_msgs/msg/String"] }],
//!       "parameters": [{ "name": "use_sim_time", "type_code": 1, "value": false }]
//!     }
//!   ]
//! }
//! ```

use std::{fs, path::Path};

use ros2model_core::{NodeModel, TopicRecord};
use serde::Deserialize;

use crate::{
    ExclusionList, ExclusionSet, NodeError, RawParameter, build_parameters, normalize_endpoints,
    visible_endpoints,
};

/// Nodes whose name contains this are helper nodes of `tf2` listeners.
const TRANSFORM_LISTENER_MARKER: &str = "transform_listener_impl";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeSnapshot>,
}

/// Introspection results for one node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeSnapshot {
    pub name: String,
    #[serde(default)]
    pub subscribers: Vec<TopicRecord>,
    #[serde(default)]
    pub publishers: Vec<TopicRecord>,
    #[serde(default)]
    pub service_clients: Vec<TopicRecord>,
    #[serde(default)]
    pub service_servers: Vec<TopicRecord>,
    #[serde(default)]
    pub action_clients: Vec<TopicRecord>,
    #[serde(default)]
    pub action_servers: Vec<TopicRecord>,
    /// `None` when the parameter listing timed out or failed.
    #[serde(default)]
    pub parameters: Option<Vec<RawParameter>>,
}

impl NodeSnapshot {
    /// Node name without its namespace.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

impl GraphSnapshot {
    pub fn from_json(text: &str) -> Result<Self, NodeError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, NodeError> {
        let text = fs::read_to_string(path).map_err(|source| NodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Nodes in snapshot order, without hidden nodes unless `include_hidden`.
    pub fn visible_nodes(&self, include_hidden: bool) -> impl Iterator<Item = &NodeSnapshot> {
        self.nodes
            .iter()
            .filter(move |node| include_hidden || !is_hidden_node(&node.name))
    }

    /// Look up a node by name, relative names being taken from the root
    /// namespace. Warns when several nodes share the name and returns the
    /// first.
    pub fn find(
        &self,
        node_name: &str,
        include_hidden: bool,
    ) -> Result<&NodeSnapshot, NodeError> {
        let absolute = absolute_node_name(node_name);
        let mut matches = self
            .visible_nodes(include_hidden)
            .filter(|node| absolute_node_name(&node.name) == absolute);
        let first = matches.next().ok_or_else(|| NodeError::NodeNotFound {
            node_name: node_name.to_string(),
        })?;

        let count = 1 + matches.count();
        if count > 1 {
            tracing::warn!(
                "There are {count} nodes in the graph with the exact name \"{node_name}\". \
                 You are seeing information about only one of them."
            );
        }
        Ok(first)
    }

    /// Nodes a full-graph run models, in snapshot order.
    pub fn modelled_nodes(&self, include_hidden: bool) -> impl Iterator<Item = &NodeSnapshot> {
        self.visible_nodes(include_hidden)
            .filter(|node| is_modelled_node(&node.name))
    }
}

pub fn absolute_node_name(node_name: &str) -> String {
    if node_name.starts_with('/') {
        node_name.to_string()
    } else {
        format!("/{node_name}")
    }
}

/// Whether the node's own name (not its namespace) starts with `_`.
pub fn is_hidden_node(full_name: &str) -> bool {
    full_name.rsplit('/').next().is_some_and(|name| name.starts_with('_'))
}

/// Whether a full-graph run writes a model for this node.
pub fn is_modelled_node(full_name: &str) -> bool {
    !full_name.contains(TRANSFORM_LISTENER_MARKER)
}

/// Normalize every endpoint kind of `node` and read its parameters.
///
/// Subscribers, publishers and service servers are filtered through
/// `exclusions`; clients and action endpoints are kept as reported. Hidden
/// endpoints are dropped first unless `include_hidden` is set.
pub fn build_node_model(
    node: &NodeSnapshot,
    exclusions: &ExclusionSet,
    include_hidden: bool,
) -> Result<NodeModel, NodeError> {
    let node_name = absolute_node_name(&node.name);
    let keep_all = ExclusionList::empty();
    let endpoints = |records: &[TopicRecord], list: &ExclusionList| {
        if include_hidden {
            normalize_endpoints(&node_name, records, list)
        } else {
            normalize_endpoints(&node_name, &visible_endpoints(records), list)
        }
    };

    Ok(NodeModel {
        node_name: node.name.clone(),
        subscribers: endpoints(node.subscribers.as_slice(), &exclusions.subscribers),
        publishers: endpoints(node.publishers.as_slice(), &exclusions.publishers),
        service_clients: endpoints(node.service_clients.as_slice(), &keep_all),
        service_servers: endpoints(node.service_servers.as_slice(), &exclusions.service_servers),
        action_clients: endpoints(node.action_clients.as_slice(), &keep_all),
        action_servers: endpoints(node.action_servers.as_slice(), &keep_all),
        parameters: build_parameters(node.parameters.as_deref())?,
    })
}
