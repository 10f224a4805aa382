use ros2model_core::TopicRecord;
use ros2model_node::{
    ExclusionEntry, ExclusionList, canonical_type_name, normalize_endpoints, normalize_types,
    relative_prefix, relativize_names,
};

#[test]
fn namespaced_types_become_dotted() {
    assert_eq!(canonical_type_name("std_msgs/msg/String"), "std_msgs.String");
    assert_eq!(
        canonical_type_name("example_interfaces/srv/AddTwoInts"),
        "example_interfaces.AddTwoInts"
    );
    assert_eq!(
        canonical_type_name("action_tutorials/action/Fibonacci"),
        "action_tutorials.Fibonacci"
    );
}

#[test]
fn types_without_namespace_are_quoted() {
    assert_eq!(canonical_type_name("Custom"), "\"Custom\"");
}

#[test]
fn only_the_primary_type_is_rewritten() {
    let records = vec![TopicRecord::new(
        "/multi",
        ["std_msgs/msg/String", "std_msgs/msg/Header"],
    )];
    let normalized = normalize_types(&records);
    assert_eq!(
        normalized[0].type_names,
        vec!["std_msgs.String", "std_msgs/msg/Header"]
    );
    // Input is left untouched.
    assert_eq!(records[0].type_names[0], "std_msgs/msg/String");
}

#[test]
fn records_without_types_pass_through() {
    let records = vec![TopicRecord::new("/untyped", Vec::<String>::new())];
    assert_eq!(normalize_types(&records), records);
}

#[test]
fn relative_prefix_falls_back_to_placeholder_root() {
    assert_eq!(relative_prefix("/talker"), "/talker");
    assert_eq!(relative_prefix("talker"), "/node_name");
    assert_eq!(relative_prefix(""), "/node_name");
}

#[test]
fn names_owned_by_the_node_become_relative() {
    let records = vec![
        TopicRecord::new("/talker/get_parameters", ["rcl_interfaces.GetParameters"]),
        TopicRecord::new("/chatter", ["std_msgs.String"]),
    ];
    let relative = relativize_names("/talker", &records);
    assert_eq!(relative[0].name, "~/get_parameters");
    assert_eq!(relative[1].name, "/chatter");
    assert_eq!(relative[0].type_names, records[0].type_names);
}

#[test]
fn non_absolute_node_names_use_the_placeholder() {
    let records = vec![
        TopicRecord::new("/node_name/state", ["std_msgs.String"]),
        TopicRecord::new("/talker/state", ["std_msgs.String"]),
    ];
    let relative = relativize_names("talker", &records);
    assert_eq!(relative[0].name, "~/state");
    assert_eq!(relative[1].name, "/talker/state");
}

#[test]
fn normalize_endpoints_applies_all_passes() {
    const CHATTER_ONLY: ExclusionList = ExclusionList::new(&[ExclusionEntry {
        name: "/chatter",
        type_names: &["std_msgs/msg/String"],
    }]);
    let records = vec![
        TopicRecord::new("/chatter", ["std_msgs/msg/String"]),
        TopicRecord::new("/ns/talker/status", ["Status"]),
    ];

    let normalized = normalize_endpoints("/ns/talker", &records, &CHATTER_ONLY);
    assert_eq!(normalized, vec![TopicRecord::new("~/status", ["\"Status\""])]);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(normalize_endpoints("/talker", &[], &ExclusionList::empty()).is_empty());
}
