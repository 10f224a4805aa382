mod error;
mod generator;

pub use error::ModelError;
pub use generator::{ModelGenerator, ModelGeneratorBuilder};
pub use ros2model_core as core;
#[cfg(feature = "interface")]
pub use ros2model_interface as interface;
#[cfg(feature = "node")]
pub use ros2model_node as node;
