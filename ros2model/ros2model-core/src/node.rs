//! Endpoint and parameter records describing one running node.

use serde::{Deserialize, Serialize};

use crate::ParameterValue;

/// A topic, service or action endpoint as reported by graph introspection.
///
/// Equality is structural (name and the whole type sequence), which is what
/// exclusion filtering relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicRecord {
    pub name: String,
    #[serde(alias = "types", default)]
    pub type_names: Vec<String>,
}

impl TopicRecord {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        type_names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            type_names: type_names.into_iter().map(Into::into).collect(),
        }
    }

    /// The type the record is rendered with.
    pub fn primary_type(&self) -> Option<&str> {
        self.type_names.first().map(String::as_str)
    }
}

/// A node parameter with its display type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRecord {
    pub name: String,
    pub type_display: String,
    pub value: ParameterValue,
}

/// Normalized view of one running node, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeModel {
    pub node_name: String,
    pub subscribers: Vec<TopicRecord>,
    pub publishers: Vec<TopicRecord>,
    pub service_clients: Vec<TopicRecord>,
    pub service_servers: Vec<TopicRecord>,
    pub action_clients: Vec<TopicRecord>,
    pub action_servers: Vec<TopicRecord>,
    pub parameters: Vec<ParameterRecord>,
}

impl NodeModel {
    /// Endpoint sections in rendering order, labelled.
    pub fn endpoint_sections(&self) -> [(&'static str, &[TopicRecord]); 6] {
        [
            ("subscribers", self.subscribers.as_slice()),
            ("publishers", self.publishers.as_slice()),
            ("serviceclients", self.service_clients.as_slice()),
            ("serviceservers", self.service_servers.as_slice()),
            ("actionclients", self.action_clients.as_slice()),
            ("actionservers", self.action_servers.as_slice()),
        ]
    }
}
