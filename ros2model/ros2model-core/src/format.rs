//! Text rendering of the canonical model into `.ros2` model files.
//!
//! The layout is indentation based, two spaces per level:
//!
//! ```text
//! my_interfaces:
//!   msgs:
//!     Point:
//!       message:
//!         x: float64
//!         child: "geometry_msgs.Pose"[]
//! ```

use std::fmt::{Error, Result, Write as _};

use crate::{FieldMap, InterfacePackage, NodeModel, ParameterRecord, TopicRecord};

/// Switches for [`format_node_model`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Write each parameter's current value next to its type.
    pub include_parameter_values: bool,
}

/// Render all definitions of an interface package.
///
/// Kinds without definitions are omitted; a definition whose section is
/// empty is written as `{}`.
pub fn format_interface_package(package: &InterfacePackage) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "{}:", package.package_name)?;

    if !package.messages.is_empty() {
        writeln!(out, "  msgs:")?;
        for msg in &package.messages {
            writeln!(out, "    {}:", msg.name)?;
            format_section("message", &msg.fields, 6, &mut out)?;
        }
    }
    if !package.services.is_empty() {
        writeln!(out, "  srvs:")?;
        for srv in &package.services {
            writeln!(out, "    {}:", srv.name)?;
            format_section("request", &srv.request, 6, &mut out)?;
            format_section("response", &srv.response, 6, &mut out)?;
        }
    }
    if !package.actions.is_empty() {
        writeln!(out, "  actions:")?;
        for action in &package.actions {
            writeln!(out, "    {}:", action.name)?;
            format_section("goal", &action.goal, 6, &mut out)?;
            format_section("result", &action.result, 6, &mut out)?;
            format_section("feedback", &action.feedback, 6, &mut out)?;
        }
    }

    Ok(out)
}

/// Render the endpoints and parameters of one node.
///
/// Empty endpoint kinds and an empty parameter list are left out.
pub fn format_node_model(
    model: &NodeModel,
    options: &RenderOptions,
) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "{}:", model.node_name)?;

    for (label, records) in model.endpoint_sections() {
        if records.is_empty() {
            continue;
        }
        writeln!(out, "  {label}:")?;
        for record in records {
            format_endpoint(record, &mut out)?;
        }
    }

    if !model.parameters.is_empty() {
        writeln!(out, "  parameters:")?;
        for param in &model.parameters {
            format_parameter(param, options, &mut out)?;
        }
    }

    Ok(out)
}

fn format_section(label: &str, fields: &FieldMap, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if fields.is_empty() {
        return writeln!(out, "{pad}{label}: {{}}");
    }
    writeln!(out, "{pad}{label}:")?;
    for (name, descriptor) in fields.iter() {
        writeln!(out, "{pad}  {name}: {descriptor}")?;
    }
    Ok(())
}

fn format_endpoint(record: &TopicRecord, out: &mut String) -> Result {
    writeln!(out, "    {:?}:", record.name)?;
    if let Some(ty) = record.primary_type() {
        writeln!(out, "      type: {ty}")?;
    }
    Ok(())
}

fn format_parameter(param: &ParameterRecord, options: &RenderOptions, out: &mut String) -> Result {
    writeln!(out, "    {}:", param.name)?;
    writeln!(out, "      type: {:?}", param.type_display)?;
    if options.include_parameter_values && param.value.is_set() {
        writeln!(out, "      value: {}", param.value)?;
    }
    Ok(())
}
