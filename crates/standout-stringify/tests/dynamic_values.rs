//! Integration tests for rendering serde values and JSON trees.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;
use standout_stringify::{
    check_json, classify_json, json_to_text, render, render_json, serialize_to,
    serialize_to_text, Category, StringifyError,
};

#[derive(Serialize)]
struct Disk {
    mount: &'static str,
    usage: Vec<u8>,
}

#[derive(Serialize)]
struct Host {
    disks: Vec<Disk>,
    name: String,
    spare: Option<Disk>,
}

#[test]
fn test_node_categories() {
    assert_eq!(classify_json(&json!(1.5)), Category::Streamable);
    assert_eq!(classify_json(&json!("x")), Category::Streamable);
    assert_eq!(classify_json(&json!([])), Category::Sequence);
    assert_eq!(classify_json(&json!({})), Category::Sequence);
    assert_eq!(classify_json(&json!(null)), Category::Unrenderable);
}

#[test]
fn test_serialized_struct_renders_as_entries() {
    let host = Host {
        disks: vec![Disk {
            mount: "/",
            usage: vec![71, 80],
        }],
        name: "web-1".into(),
        spare: Some(Disk {
            mount: "/srv",
            usage: vec![],
        }),
    };
    insta::assert_snapshot!(
        serialize_to_text(&host).unwrap(),
        @"[(disks, [[(mount, /), (usage, [71, 80])]]), (name, web-1), (spare, [[(mount, /srv), (usage, [])]])]"
    );
}

#[test]
fn test_none_field_is_an_empty_sequence() {
    let host = Host {
        disks: vec![],
        name: "web-2".into(),
        spare: None,
    };
    assert_eq!(
        serialize_to_text(&host).unwrap(),
        "[(disks, []), (name, web-2), (spare, [])]"
    );
}

#[test]
fn test_serde_and_static_rendering_agree() {
    let pair = (1, "one");
    assert_eq!(serialize_to_text(&pair).unwrap(), render!(pair));

    let nothing: Option<(u8, char)> = None;
    assert_eq!(serialize_to_text(&nothing).unwrap(), render!(nothing));
    assert_eq!(serialize_to_text(&Some((2u8, 'b'))).unwrap(), render!(Some((2u8, 'b'))));

    assert_eq!(serialize_to_text(&1.0f64).unwrap(), render!(1.0f64));
    assert_eq!(serialize_to_text(&()).unwrap(), render!(()));

    let mut routes = BTreeMap::new();
    routes.insert("north", vec![(0, 1), (0, 2)]);
    routes.insert("east", vec![]);
    assert_eq!(serialize_to_text(&routes).unwrap(), render!(routes));
}

#[test]
fn test_json_tree_loses_tuple_shape() {
    let value = serde_json::to_value((1, "one")).unwrap();
    assert_eq!(json_to_text(&value).unwrap(), "[1, one]");
    assert_eq!(serialize_to_text(&(1, "one")).unwrap(), "(1, one)");
}

#[test_log::test]
fn test_nothing_is_written_when_a_node_is_rejected() {
    let mut out = String::from("before:");
    let value = json!([1, 2, [3, null]]);

    let err = render_json(&mut out, &value).unwrap_err();
    assert!(matches!(
        err,
        StringifyError::Unrenderable { ref path, kind: "null" } if path == "$[2][1]"
    ));
    assert_eq!(out, "before:");
}

#[test]
fn test_check_accepts_renderable_trees() {
    assert!(check_json(&json!({"a": [true, "b", {"c": 0}]})).is_ok());
}

#[test]
fn test_strings_are_not_quoted() {
    assert_eq!(json_to_text(&json!(["a b", "c"])).unwrap(), "[a b, c]");
}

#[test]
fn test_serialize_into_caller_sink() {
    let mut out = String::new();
    serialize_to(&mut out, &vec![(1, "one"), (2, "two")]).unwrap();
    assert_eq!(out, "[(1, one), (2, two)]");
}
