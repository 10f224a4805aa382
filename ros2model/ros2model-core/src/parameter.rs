use std::fmt;

use crate::ParameterTypeError;

/// Parameter type codes from `rcl_interfaces/msg/ParameterType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParameterType {
    NotSet = 0,
    Bool = 1,
    Integer = 2,
    Double = 3,
    String = 4,
    ByteArray = 5,
    BoolArray = 6,
    IntegerArray = 7,
    DoubleArray = 8,
    StringArray = 9,
}

impl ParameterType {
    pub const ALL: [Self; 10] = [
        Self::NotSet,
        Self::Bool,
        Self::Integer,
        Self::Double,
        Self::String,
        Self::ByteArray,
        Self::BoolArray,
        Self::IntegerArray,
        Self::DoubleArray,
        Self::StringArray,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Display string written into node models.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bool => "Boolean",
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::String => "String",
            Self::ByteArray => "Array: Byte",
            Self::BoolArray => "Array: Boolean",
            Self::IntegerArray => "Array: Integer",
            Self::DoubleArray => "Array: Double",
            Self::StringArray => "Array: String",
            Self::NotSet => "Any",
        }
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            Self::ByteArray
                | Self::BoolArray
                | Self::IntegerArray
                | Self::DoubleArray
                | Self::StringArray
        )
    }
}

impl TryFrom<u8> for ParameterType {
    type Error = ParameterTypeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.code() == code)
            .ok_or(ParameterTypeError { code })
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Map a wire type code straight to its display string.
///
/// There is no fallback: an unknown code is an error.
pub fn parameter_type_string(code: u8) -> Result<&'static str, ParameterTypeError> {
    ParameterType::try_from(code).map(ParameterType::display_name)
}
