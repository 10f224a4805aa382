use ros2model_core::{FieldMap, TopicRecord};

#[test]
fn insertion_order_is_declaration_order() {
    let mut map = FieldMap::new();
    map.insert("z", "int32");
    map.insert("a", "string");
    map.insert("m", "\"Pose\"[]");

    let names: Vec<_> = map.names().collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn redeclaring_a_field_overwrites_in_place() {
    let mut map = FieldMap::new();
    map.insert("x", "int32");
    map.insert("y", "int32");
    let previous = map.insert("x", "float64");

    assert_eq!(previous.as_deref(), Some("int32"));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("x"), Some("float64"));
    assert_eq!(map.iter().next(), Some(("x", "float64")));
}

#[test]
fn collects_from_pairs() {
    let map: FieldMap = [("a", "bool"), ("b", "uint8[]")].into_iter().collect();
    assert!(map.contains("b"));
    assert!(!map.contains("c"));
    assert_eq!(map.get("b"), Some("uint8[]"));
}

#[test]
fn topic_records_compare_structurally() {
    let a = TopicRecord::new("/rosout", ["rcl_interfaces/msg/Log"]);
    let b = TopicRecord::new("/rosout", ["rcl_interfaces/msg/Log"]);
    let c = TopicRecord::new("/rosout", ["rcl_interfaces/msg/Log", "extra/msg/Type"]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.primary_type(), Some("rcl_interfaces/msg/Log"));
    assert_eq!(TopicRecord::new("/x", Vec::<String>::new()).primary_type(), None);
}
