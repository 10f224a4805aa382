//! Fixed lists of infrastructure endpoints left out of node models.
//!
//! Every node gets parameter services, a `/rosout` publisher and, for
//! lifecycle nodes, state services. They say nothing about the node itself.
//!
//! Entries are written in the live graph's own vocabulary
//! (`rcl_interfaces/msg/Log`) with node-relative names (`~/get_state`).
//! A record matches an entry when its name and whole type sequence equal the
//! entry either as written or after type canonicalization, so a list can be
//! applied before or after [`normalize_type`].

use ros2model_core::TopicRecord;

use crate::normalize_type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionEntry {
    pub name: &'static str,
    pub type_names: &'static [&'static str],
}

impl ExclusionEntry {
    pub const fn new(name: &'static str, type_names: &'static [&'static str]) -> Self {
        Self { name, type_names }
    }

    pub fn to_record(&self) -> TopicRecord {
        TopicRecord::new(self.name, self.type_names.iter().copied())
    }

    pub fn matches(&self, record: &TopicRecord) -> bool {
        if record.name != self.name || record.type_names.len() != self.type_names.len() {
            return false;
        }
        let raw = self.to_record();
        *record == raw || *record == normalize_type(&raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionList {
    entries: &'static [ExclusionEntry],
}

impl ExclusionList {
    pub const fn new(entries: &'static [ExclusionEntry]) -> Self {
        Self { entries }
    }

    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    pub fn entries(&self) -> &'static [ExclusionEntry] {
        self.entries
    }

    pub fn contains(&self, record: &TopicRecord) -> bool {
        self.entries.iter().any(|entry| entry.matches(record))
    }

    /// Keep the records that match no entry, preserving order.
    pub fn retain(&self, records: Vec<TopicRecord>) -> Vec<TopicRecord> {
        records
            .into_iter()
            .filter(|record| {
                let excluded = self.contains(record);
                if excluded {
                    tracing::debug!(name = %record.name, "excluding infrastructure endpoint");
                }
                !excluded
            })
            .collect()
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::empty()
    }
}

macro_rules! entry {
    ($name:literal, $ty:literal) => {
        ExclusionEntry {
            name: $name,
            type_names: &[$ty],
        }
    };
}

pub const SUBSCRIBERS: ExclusionList = ExclusionList::new(&[entry!(
    "/parameter_events",
    "rcl_interfaces/msg/ParameterEvent"
)]);

pub const PUBLISHERS: ExclusionList = ExclusionList::new(&[
    entry!("~/transition_event", "lifecycle_msgs/msg/TransitionEvent"),
    entry!("/parameter_events", "rcl_interfaces/msg/ParameterEvent"),
    entry!("/rosout", "rcl_interfaces/msg/Log"),
]);

pub const SERVICE_SERVERS: ExclusionList = ExclusionList::new(&[
    entry!("~/change_state", "lifecycle_msgs/srv/ChangeState"),
    entry!("~/describe_parameters", "rcl_interfaces/srv/DescribeParameters"),
    entry!("~/get_available_states", "lifecycle_msgs/srv/GetAvailableStates"),
    entry!("~/get_available_transitions", "lifecycle_msgs/srv/GetAvailableTransitions"),
    entry!("~/get_parameter_types", "rcl_interfaces/srv/GetParameterTypes"),
    entry!("~/get_parameters", "rcl_interfaces/srv/GetParameters"),
    entry!("~/get_state", "lifecycle_msgs/srv/GetState"),
    entry!("~/get_transition_graph", "lifecycle_msgs/srv/GetAvailableTransitions"),
    entry!("~/list_parameters", "rcl_interfaces/srv/ListParameters"),
    entry!("~/set_parameters", "rcl_interfaces/srv/SetParameters"),
    entry!("~/set_parameters_atomically", "rcl_interfaces/srv/SetParametersAtomically"),
]);

/// Exclusion lists per filtered endpoint kind. Clients and actions are never
/// filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionSet {
    pub subscribers: ExclusionList,
    pub publishers: ExclusionList,
    pub service_servers: ExclusionList,
}

impl ExclusionSet {
    /// Filter nothing.
    pub const fn none() -> Self {
        Self {
            subscribers: ExclusionList::empty(),
            publishers: ExclusionList::empty(),
            service_servers: ExclusionList::empty(),
        }
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self {
            subscribers: SUBSCRIBERS,
            publishers: PUBLISHERS,
            service_servers: SERVICE_SERVERS,
        }
    }
}
