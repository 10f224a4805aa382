//! Error types for node model construction.

use std::path::PathBuf;

use ros2model_core::ParameterTypeError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// A parameter reported a type code the mapper does not know.
    #[error("parameter '{name}': {source}")]
    UnknownParameterType {
        name: String,
        #[source]
        source: ParameterTypeError,
    },

    /// The requested node is not part of the snapshot.
    #[error("Unable to find node '{node_name}'")]
    NodeNotFound { node_name: String },

    /// Snapshot JSON could not be deserialized.
    #[error("invalid graph snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
