//! Running-node introspection → canonical [`ros2model_core`] model.
//!
//! Live endpoint records arrive with raw type strings
//! (`std_msgs/msg/String`) and fully-qualified names. [`normalize`] rewrites
//! them into the descriptor grammar used for definition files
//! (`std_msgs.String`) and makes names owned by the node relative (`~/...`).
//! [`exclusion`] drops well-known infrastructure endpoints, and
//! [`parameter`] maps parameter type codes to display names. Hidden nodes and
//! endpoints (a name token starting with `_`) are left out unless asked for.
//!
//! The graph queries themselves are not performed here: their results are
//! read from a [`GraphSnapshot`].

mod error;
pub mod exclusion;
pub mod normalize;
pub mod parameter;
mod snapshot;

pub use error::NodeError;
pub use exclusion::{ExclusionEntry, ExclusionList, ExclusionSet};
pub use normalize::{
    canonical_type_name, is_hidden_name, normalize_endpoints, normalize_type, normalize_types,
    relative_prefix, relativize_names, visible_endpoints,
};
pub use parameter::{RawParameter, build_parameters, decode_value};
pub use snapshot::{
    GraphSnapshot, NodeSnapshot, absolute_node_name, build_node_model, is_hidden_node,
    is_modelled_node,
};
