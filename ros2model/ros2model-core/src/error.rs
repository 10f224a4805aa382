//! Error types for the model layer.

/// A wire parameter type code outside `rcl_interfaces/msg/ParameterType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized parameter type code {code}")]
pub struct ParameterTypeError {
    pub code: u8,
}
