//! Parameter records from list/describe/get parameter results.

use ros2model_core::{ParameterRecord, ParameterType, ParameterValue};
use serde::Deserialize;
use serde_json::Value;

use crate::NodeError;

/// One parameter as reported by the node: name, wire type code and value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawParameter {
    pub name: String,
    pub type_code: u8,
    #[serde(default)]
    pub value: Value,
}

fn array<T>(raw: &Value, item: impl Fn(&Value) -> Option<T>) -> Option<Vec<T>> {
    raw.as_array()?.iter().map(item).collect()
}

/// Read a JSON value as a parameter of type `ty`; `None` on mismatch.
pub fn decode_value(ty: ParameterType, raw: &Value) -> Option<ParameterValue> {
    let value = match ty {
        ParameterType::NotSet => ParameterValue::NotSet,
        ParameterType::Bool => ParameterValue::Bool(raw.as_bool()?),
        ParameterType::Integer => ParameterValue::Integer(raw.as_i64()?),
        ParameterType::Double => ParameterValue::Double(raw.as_f64()?),
        ParameterType::String => ParameterValue::String(raw.as_str()?.to_owned()),
        ParameterType::ByteArray => ParameterValue::ByteArray(array(raw, |v| {
            v.as_u64().and_then(|b| u8::try_from(b).ok())
        })?),
        ParameterType::BoolArray => ParameterValue::BoolArray(array(raw, Value::as_bool)?),
        ParameterType::IntegerArray => ParameterValue::IntegerArray(array(raw, Value::as_i64)?),
        ParameterType::DoubleArray => ParameterValue::DoubleArray(array(raw, Value::as_f64)?),
        ParameterType::StringArray => {
            ParameterValue::StringArray(array(raw, |v| v.as_str().map(str::to_owned))?)
        }
    };
    Some(value)
}

fn parameter_record(raw: &RawParameter) -> Result<ParameterRecord, NodeError> {
    let ty = ParameterType::try_from(raw.type_code).map_err(|source| {
        NodeError::UnknownParameterType {
            name: raw.name.clone(),
            source,
        }
    })?;
    let value = decode_value(ty, &raw.value).unwrap_or_else(|| {
        tracing::warn!(
            parameter = %raw.name,
            "value {} is not of type {ty}, leaving it unset",
            raw.value
        );
        ParameterValue::NotSet
    });
    Ok(ParameterRecord {
        name: raw.name.clone(),
        type_display: ty.display_name().to_string(),
        value,
    })
}

/// Parameter records sorted by name.
///
/// A value that does not match its declared type is recorded as
/// [`ParameterValue::NotSet`]; only an unknown type code is an error.
///
/// `None` stands for a parameter listing that produced no answer (e.g. the
/// node did not respond in time) and yields an empty list.
pub fn build_parameters(
    raw: Option<&[RawParameter]>,
) -> Result<Vec<ParameterRecord>, NodeError> {
    let Some(raw) = raw else {
        tracing::debug!("no parameter listing available");
        return Ok(Vec::new());
    };
    let mut sorted: Vec<&RawParameter> = raw.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted.into_iter().map(parameter_record).collect()
}
