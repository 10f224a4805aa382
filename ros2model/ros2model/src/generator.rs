//! Model text generation for interface packages and running nodes.

#[cfg(feature = "node")]
use std::collections::HashSet;
#[cfg(feature = "interface")]
use std::path::Path;

use ros2model_core::RenderOptions;
#[cfg(feature = "interface")]
use ros2model_core::format_interface_package;
#[cfg(feature = "node")]
use ros2model_core::format_node_model;
#[cfg(feature = "interface")]
use ros2model_interface::scan_package;
#[cfg(feature = "node")]
use ros2model_node::{ExclusionSet, GraphSnapshot, NodeSnapshot, build_node_model};

use crate::error::ModelError;

/// Produces `.ros2` model text from definition files or node snapshots.
pub struct ModelGenerator {
    #[cfg(feature = "node")]
    exclusions: ExclusionSet,
    #[cfg(feature = "node")]
    include_hidden: bool,
    render: RenderOptions,
}

/// Builder for configuring [`ModelGenerator`].
pub struct ModelGeneratorBuilder {
    #[cfg(feature = "node")]
    exclusions: ExclusionSet,
    #[cfg(feature = "node")]
    include_hidden: bool,
    render: RenderOptions,
}

impl ModelGenerator {
    /// Create a builder for [`ModelGenerator`].
    pub fn builder() -> ModelGeneratorBuilder {
        ModelGeneratorBuilder {
            #[cfg(feature = "node")]
            exclusions: ExclusionSet::default(),
            #[cfg(feature = "node")]
            include_hidden: false,
            render: RenderOptions::default(),
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Model of every definition in an installed package's share directory.
    #[cfg(feature = "interface")]
    pub fn interface_package(
        &self,
        share_dir: &Path,
        package_name: &str,
    ) -> Result<String, ModelError> {
        let package = scan_package(share_dir, package_name)?;
        Ok(format_interface_package(&package)?)
    }

    /// Model of one node from a snapshot.
    #[cfg(feature = "node")]
    pub fn node(&self, snapshot: &GraphSnapshot, node_name: &str) -> Result<String, ModelError> {
        let node = snapshot.find(node_name, self.include_hidden)?;
        self.node_snapshot(node)
    }

    /// Models of every modelled node in a snapshot, keyed by short node name.
    ///
    /// A node whose model cannot be built is logged and skipped. Nodes in
    /// different namespaces may share a short name; this is logged too.
    #[cfg(feature = "node")]
    pub fn all_nodes(&self, snapshot: &GraphSnapshot) -> Vec<(String, String)> {
        let mut seen = HashSet::new();
        snapshot
            .modelled_nodes(self.include_hidden)
            .filter_map(|node| match self.node_snapshot(node) {
                Ok(text) => {
                    let short_name = node.short_name().to_string();
                    if !seen.insert(short_name.clone()) {
                        tracing::warn!(
                            node = %node.name,
                            "another node is already modelled as '{short_name}'"
                        );
                    }
                    Some((short_name, text))
                }
                Err(err) => {
                    tracing::warn!(node = %node.name, "skipping node: {err}");
                    None
                }
            })
            .collect()
    }

    #[cfg(feature = "node")]
    fn node_snapshot(&self, node: &NodeSnapshot) -> Result<String, ModelError> {
        let model = build_node_model(node, &self.exclusions, self.include_hidden)?;
        Ok(format_node_model(&model, &self.render)?)
    }
}

impl Default for ModelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelGeneratorBuilder {
    /// Replace the endpoint exclusion lists (built-in lists by default).
    #[cfg(feature = "node")]
    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Keep hidden nodes and endpoints (a name token starting with `_`).
    #[cfg(feature = "node")]
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Write parameter values into node models.
    pub fn with_parameter_values(mut self, include: bool) -> Self {
        self.render.include_parameter_values = include;
        self
    }

    pub fn build(self) -> ModelGenerator {
        ModelGenerator {
            #[cfg(feature = "node")]
            exclusions: self.exclusions,
            #[cfg(feature = "node")]
            include_hidden: self.include_hidden,
            render: self.render,
        }
    }
}
