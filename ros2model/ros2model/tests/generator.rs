use std::fs;

use ros2model::{ModelError, ModelGenerator, node::GraphSnapshot};

const SNAPSHOT: &str = r#"
{
  "nodes": [
    {
      "name": "/turtlesim",
      "subscribers": [
        { "name": "/turtle1/cmd_vel", "types": ["geometry_msgs/msg/Twist"] },
        { "name": "/parameter_events", "types": ["rcl_interfaces/msg/ParameterEvent"] }
      ],
      "publishers": [
        { "name": "/turtle1/pose", "types": ["turtlesim/msg/Pose"] },
        { "name": "/rosout", "types": ["rcl_interfaces/msg/Log"] }
      ],
      "service_servers": [
        { "name": "/turtlesim/get_parameters", "types": ["rcl_interfaces/srv/GetParameters"] },
        { "name": "/spawn", "types": ["turtlesim/srv/Spawn"] }
      ],
      "action_servers": [
        { "name": "/turtle1/rotate_absolute", "types": ["turtlesim/action/RotateAbsolute"] }
      ],
      "parameters": [
        { "name": "background_r", "type_code": 2, "value": 69 },
        { "name": "use_sim_time", "type_code": 1, "value": false }
      ]
    },
    { "name": "/transform_listener_impl_1", "parameters": null }
  ]
}
"#;

#[test]
fn renders_interface_package_from_share_dir() {
    let share = tempfile::tempdir().unwrap();
    fs::create_dir(share.path().join("msg")).unwrap();
    fs::write(
        share.path().join("msg").join("Pose.msg"),
        "float32 x\nfloat32 y\nfloat32 theta\n",
    )
    .unwrap();
    fs::create_dir(share.path().join("srv")).unwrap();
    fs::write(
        share.path().join("srv").join("Spawn.srv"),
        "float32 x\nstring name # Optional\n---\nstring name\n",
    )
    .unwrap();

    let text = ModelGenerator::new()
        .interface_package(share.path(), "turtlesim")
        .unwrap();
    let expected = "\
turtlesim:
  msgs:
    Pose:
      message:
        x: float32
        y: float32
        theta: float32
  srvs:
    Spawn:
      request:
        x: float32
        name: string
      response:
        name: string
";
    assert_eq!(text, expected);
}

#[test]
fn renders_running_node_without_infrastructure() {
    let snapshot = GraphSnapshot::from_json(SNAPSHOT).unwrap();
    let text = ModelGenerator::builder()
        .with_parameter_values(true)
        .build()
        .node(&snapshot, "/turtlesim")
        .unwrap();
    let expected = "\
/turtlesim:
  subscribers:
    \"/turtle1/cmd_vel\":
      type: geometry_msgs.Twist
  publishers:
    \"/turtle1/pose\":
      type: turtlesim.Pose
  serviceservers:
    \"/spawn\":
      type: turtlesim.Spawn
  actionservers:
    \"/turtle1/rotate_absolute\":
      type: turtlesim.RotateAbsolute
  parameters:
    background_r:
      type: \"Integer\"
      value: 69
    use_sim_time:
      type: \"Boolean\"
      value: false
";
    assert_eq!(text, expected);
}

#[test]
fn all_nodes_skips_transform_listener_helpers() {
    let snapshot = GraphSnapshot::from_json(SNAPSHOT).unwrap();
    let models = ModelGenerator::new().all_nodes(&snapshot);
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].0, "turtlesim");
    assert!(!models[0].1.contains("value:"));
}

#[test]
fn unknown_node_surfaces_as_node_error() {
    let snapshot = GraphSnapshot::from_json(SNAPSHOT).unwrap();
    let err = ModelGenerator::new().node(&snapshot, "/ghost").unwrap_err();
    assert!(matches!(err, ModelError::Node(_)));
    assert_eq!(err.to_string(), "Unable to find node '/ghost'");
}

#[test]
fn all_nodes_skips_nodes_that_fail_to_build() {
    let snapshot = GraphSnapshot::from_json(
        r#"{ "nodes": [
            { "name": "/good", "parameters": [{ "name": "rate", "type_code": 3, "value": 2.5 }] },
            { "name": "/broken", "parameters": [{ "name": "odd", "type_code": 42 }] },
            { "name": "/bad", "parameters": [{ "name": "rate", "type_code": 3, "value": null }] }
        ] }"#,
    )
    .unwrap();

    let models = ModelGenerator::builder()
        .with_parameter_values(true)
        .build()
        .all_nodes(&snapshot);
    let names: Vec<_> = models.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["good", "bad"]);
    assert!(models[0].1.contains("value: 2.5"));
    assert_eq!(
        models[1].1,
        "/bad:\n  parameters:\n    rate:\n      type: \"Double\"\n"
    );
}

#[test]
fn all_nodes_keeps_nodes_sharing_a_short_name() {
    let snapshot = GraphSnapshot::from_json(
        r#"{ "nodes": [{ "name": "/a/talker" }, { "name": "/b/talker" }] }"#,
    )
    .unwrap();
    let models = ModelGenerator::new().all_nodes(&snapshot);
    assert_eq!(models.len(), 2);
    assert!(models.iter().all(|(name, _)| name == "talker"));
    assert!(models[0].1.starts_with("/a/talker:"));
    assert!(models[1].1.starts_with("/b/talker:"));
}

#[test]
fn hidden_nodes_and_endpoints_need_opting_in() {
    let snapshot = GraphSnapshot::from_json(
        r#"{ "nodes": [
            {
              "name": "/driver",
              "publishers": [
                { "name": "/odom", "types": ["nav_msgs/msg/Odometry"] },
                { "name": "/_diagnostics", "types": ["diagnostic_msgs/msg/DiagnosticArray"] }
              ]
            },
            { "name": "/_monitor" }
        ] }"#,
    )
    .unwrap();

    let default = ModelGenerator::new();
    assert_eq!(default.all_nodes(&snapshot).len(), 1);
    assert!(!default.node(&snapshot, "/driver").unwrap().contains("_diagnostics"));
    assert!(matches!(
        default.node(&snapshot, "/_monitor").unwrap_err(),
        ModelError::Node(_)
    ));

    let hidden = ModelGenerator::builder().with_hidden(true).build();
    assert_eq!(hidden.all_nodes(&snapshot).len(), 2);
    assert!(hidden.node(&snapshot, "/driver").unwrap().contains("\"/_diagnostics\""));
}
