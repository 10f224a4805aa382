//! Error types for model generation.

/// Errors produced by [`ModelGenerator`](crate::ModelGenerator).
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Reading or parsing interface definition files failed.
    #[cfg(feature = "interface")]
    #[error(transparent)]
    Interface(#[from] ros2model_interface::InterfaceError),

    /// Loading a snapshot or building a node model failed.
    #[cfg(feature = "node")]
    #[error(transparent)]
    Node(#[from] ros2model_node::NodeError),

    /// Writing the model text failed.
    #[error("failed to format model")]
    Format(#[from] std::fmt::Error),
}
