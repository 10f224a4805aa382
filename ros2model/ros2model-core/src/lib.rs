//! Canonical model types shared by the interface-file parsers and the
//! running-node normalizer.
//!
//! Both sources converge on the same descriptor grammar: primitive type
//! tokens verbatim, user-defined types wrapped in `"` with an optional `[]`
//! suffix outside the quotes.

mod error;
mod field_map;
mod format;
mod interface;
mod node;
mod parameter;
mod value;

pub use error::ParameterTypeError;
pub use field_map::FieldMap;
pub use format::{RenderOptions, format_interface_package, format_node_model};
pub use interface::{Action, InterfacePackage, Message, Service};
pub use node::{NodeModel, ParameterRecord, TopicRecord};
pub use parameter::{ParameterType, parameter_type_string};
pub use value::ParameterValue;
