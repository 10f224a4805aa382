use std::{fs, path::Path};

use ros2model_interface::{
    find_package_share, scan_msg_dir, scan_package, scan_srv_dir, spec_files,
};

fn write(dir: &Path, name: &str, text: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), text).unwrap();
}

#[test]
fn spec_files_filters_by_extension_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "B.msg", "int32 b");
    write(dir.path(), "A.msg", "int32 a");
    write(dir.path(), "notes.txt", "");
    write(dir.path(), "C.srv", "---");
    fs::create_dir(dir.path().join("nested.msg")).unwrap();
    write(&dir.path().join("sub"), "D.msg", "int32 d");

    let files = spec_files(dir.path(), "msg").unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A.msg", "B.msg"]);
}

#[test]
fn missing_directory_scans_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan_msg_dir(&dir.path().join("msg")).unwrap().is_empty());
    assert!(scan_srv_dir(&dir.path().join("srv")).unwrap().is_empty());
}

#[test]
fn scan_package_collects_every_kind() {
    let share = tempfile::tempdir().unwrap();
    write(&share.path().join("msg"), "Num.msg", "int64 num\n");
    write(
        &share.path().join("msg"),
        "Sphere.msg",
        "geometry_msgs/Point center\nfloat64 radius\n",
    );
    write(
        &share.path().join("srv"),
        "AddThreeInts.srv",
        "int64 a\nint64 b\nint64 c\n---\nint64 sum\n",
    );
    write(
        &share.path().join("action"),
        "Fibonacci.action",
        "int32 order\n---\nint32[] sequence\n---\nint32[] partial_sequence\n",
    );

    let package = scan_package(share.path(), "tutorial_interfaces").unwrap();
    assert_eq!(package.package_name, "tutorial_interfaces");

    let msg_names: Vec<_> = package.messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(msg_names, vec!["Num", "Sphere"]);
    assert_eq!(
        package.messages[1].fields.get("center"),
        Some("\"geometry_msgs.Point\"")
    );

    assert_eq!(package.services.len(), 1);
    assert_eq!(package.services[0].response.get("sum"), Some("int64"));

    assert_eq!(package.actions.len(), 1);
    assert_eq!(
        package.actions[0].feedback.get("partial_sequence"),
        Some("int32[]")
    );
}

#[test]
fn package_without_actions_has_empty_action_list() {
    let share = tempfile::tempdir().unwrap();
    write(&share.path().join("msg"), "Only.msg", "bool flag");

    let package = scan_package(share.path(), "pkg").unwrap();
    assert_eq!(package.messages.len(), 1);
    assert!(package.services.is_empty());
    assert!(package.actions.is_empty());
}

#[test]
fn share_directory_comes_from_the_first_prefix_that_has_it() {
    let overlay = tempfile::tempdir().unwrap();
    let underlay = tempfile::tempdir().unwrap();
    fs::create_dir_all(overlay.path().join("share").join("other_pkg")).unwrap();
    fs::create_dir_all(underlay.path().join("share").join("turtlesim").join("msg")).unwrap();

    let prefixes = [overlay.path(), underlay.path()];
    assert_eq!(
        find_package_share(prefixes, "turtlesim"),
        Some(underlay.path().join("share").join("turtlesim"))
    );
    assert_eq!(
        find_package_share(prefixes, "other_pkg"),
        Some(overlay.path().join("share").join("other_pkg"))
    );
    assert_eq!(find_package_share(prefixes, "missing_pkg"), None);
}
