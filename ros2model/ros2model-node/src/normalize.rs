//! Canonicalization of live endpoint records.
//!
//! All functions are pure and return new records; the input slices are
//! never modified.

use ros2model_core::TopicRecord;

use crate::ExclusionList;

/// Prefix substituted when the node name is not absolute.
pub const PLACEHOLDER_ROOT: &str = "/node_name";

/// Replaces the node's own prefix in endpoint names.
pub const RELATIVE_MARKER: &str = "~";

const NAMESPACE_MARKERS: [&str; 3] = ["/msg/", "/srv/", "/action/"];

/// `pkg/msg/Type` → `pkg.Type`; a type without any `/` → `"Type"`.
pub fn canonical_type_name(raw: &str) -> String {
    let mut name = if raw.contains('/') {
        raw.to_string()
    } else {
        format!("\"{raw}\"")
    };
    for marker in NAMESPACE_MARKERS {
        name = name.replace(marker, ".");
    }
    name
}

/// Rewrite the primary type of one record. Records without types are copied.
pub fn normalize_type(record: &TopicRecord) -> TopicRecord {
    let mut type_names = record.type_names.clone();
    if let Some(primary) = type_names.first_mut() {
        *primary = canonical_type_name(primary);
    }
    TopicRecord {
        name: record.name.clone(),
        type_names,
    }
}

pub fn normalize_types(records: &[TopicRecord]) -> Vec<TopicRecord> {
    records.iter().map(normalize_type).collect()
}

/// The node name if it is absolute, otherwise [`PLACEHOLDER_ROOT`].
pub fn relative_prefix(node_name: &str) -> &str {
    if node_name.starts_with('/') {
        node_name
    } else {
        PLACEHOLDER_ROOT
    }
}

/// Replace every occurrence of the node's prefix in each record name with
/// [`RELATIVE_MARKER`].
pub fn relativize_names(node_name: &str, records: &[TopicRecord]) -> Vec<TopicRecord> {
    let prefix = relative_prefix(node_name);
    records
        .iter()
        .map(|record| TopicRecord {
            name: record.name.replace(prefix, RELATIVE_MARKER),
            type_names: record.type_names.clone(),
        })
        .collect()
}

/// Whether any `/`-separated token of a topic, service or action name starts
/// with `_`.
pub fn is_hidden_name(name: &str) -> bool {
    name.split('/').any(|token| token.starts_with('_'))
}

/// Records whose names are not hidden.
pub fn visible_endpoints(records: &[TopicRecord]) -> Vec<TopicRecord> {
    records
        .iter()
        .filter(|record| !is_hidden_name(&record.name))
        .cloned()
        .collect()
}

/// Type rewrite, then name rewrite, then exclusion filtering.
pub fn normalize_endpoints(
    node_name: &str,
    records: &[TopicRecord],
    exclusions: &ExclusionList,
) -> Vec<TopicRecord> {
    let typed = normalize_types(records);
    let relative = relativize_names(node_name, &typed);
    exclusions.retain(relative)
}
