#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use super::*;
use crate::resolver::MapResolver;

fn root(package: &str, name: &str) -> QualifiedName {
    QualifiedName::new(package, name)
}

#[test]
fn synthesize_schema___flat_primitives___emits_single_message() {
    let resolver =
        MapResolver::new().with_message("my_msgs/Flat", &[("a", "uint32"), ("b", "string")]);

    let schema = synthesize_schema(&root("my_msgs", "Flat"), &resolver).unwrap();

    assert_eq!(
        schema,
        "syntax = \"proto3\";\n\
         package protolink__my_msgs__Flat;\n\
         \n\
         message my_msgs__Flat {\n\
         uint32 a = 1;\n\
         string b = 2;\n\
         }\n"
    );
}

#[test]
fn synthesize_schema___folds_primitive_widths() {
    let resolver = MapResolver::new().with_message(
        "my_msgs/Widths",
        &[("small", "uint8"), ("mid", "int16"), ("wide", "uint64")],
    );

    let schema = synthesize_schema(&root("my_msgs", "Widths"), &resolver).unwrap();

    assert!(schema.contains("uint32 small = 1;"));
    assert!(schema.contains("int32 mid = 2;"));
    assert!(schema.contains("uint64 wide = 3;"));
}

#[test]
fn synthesize_schema___nested_user_type___declares_block_before_field() {
    let resolver = MapResolver::new()
        .with_message("pkg/Point", &[("x", "float64"), ("y", "float64")])
        .with_message("pkg/Outer", &[("pos", "pkg/Point")]);

    let schema = synthesize_schema(&root("pkg", "Outer"), &resolver).unwrap();

    let block = schema.find("message pkg__Point {").unwrap();
    let field = schema.find("pkg__Point pos = 1;").unwrap();
    assert!(block < field);
    assert!(schema.contains("double x = 1;\ndouble y = 2;"));
}

#[test]
fn synthesize_schema___sequence_of_user_type___marks_field_repeated() {
    let resolver = MapResolver::new()
        .with_message("pkg/Item", &[("id", "uint64")])
        .with_message("pkg/Batch", &[("items", "sequence<pkg/Item>")]);

    let schema = synthesize_schema(&root("pkg", "Batch"), &resolver).unwrap();

    assert!(schema.contains("repeated pkg__Item items = 1;"));
    assert!(schema.contains("message pkg__Item {\nuint64 id = 1;\n}"));
}

#[test]
fn synthesize_schema___sequence_of_primitive___is_repeated_scalar() {
    let resolver =
        MapResolver::new().with_message("pkg/Samples", &[("values", "sequence<float32>")]);

    let schema = synthesize_schema(&root("pkg", "Samples"), &resolver).unwrap();

    assert!(schema.contains("repeated float values = 1;"));
}

#[test]
fn synthesize_schema___fixed_array___is_repeated_like_sequence() {
    let resolver = MapResolver::new().with_message("pkg/Block", &[("data", "uint8[16]")]);

    let schema = synthesize_schema(&root("pkg", "Block"), &resolver).unwrap();

    assert!(schema.contains("repeated uint32 data = 1;"));
}

#[test]
fn synthesize_schema___tags_increase_without_gaps_across_mixed_fields() {
    let resolver = MapResolver::new()
        .with_message("pkg/Point", &[("x", "float64")])
        .with_message(
            "pkg/Mixed",
            &[
                ("a", "uint32"),
                ("p", "pkg/Point"),
                ("c", "sequence<int32>"),
                ("d", "boolean"),
            ],
        );

    let schema = synthesize_schema(&root("pkg", "Mixed"), &resolver).unwrap();

    assert!(schema.contains("uint32 a = 1;"));
    assert!(schema.contains("pkg__Point p = 2;"));
    assert!(schema.contains("repeated int32 c = 3;"));
    assert!(schema.contains("bool d = 4;"));
}

#[test]
fn synthesize_schema___child_tags_restart_at_one() {
    let resolver = MapResolver::new()
        .with_message("pkg/Inner", &[("a", "uint32"), ("b", "uint32")])
        .with_message("pkg/Outer", &[("x", "string"), ("inner", "pkg/Inner")]);

    let schema = synthesize_schema(&root("pkg", "Outer"), &resolver).unwrap();

    assert!(schema.contains("message pkg__Inner {\nuint32 a = 1;\nuint32 b = 2;\n}"));
    assert!(schema.contains("pkg__Inner inner = 2;"));
}

#[test]
fn synthesize_schema___repeated_reference___declares_block_once() {
    let resolver = MapResolver::new()
        .with_message("pkg/Vector3", &[("x", "float64")])
        .with_message(
            "pkg/Twist",
            &[("linear", "pkg/Vector3"), ("angular", "pkg/Vector3")],
        );

    let schema = synthesize_schema(&root("pkg", "Twist"), &resolver).unwrap();

    assert_eq!(schema.matches("message pkg__Vector3 {").count(), 1);
    assert!(schema.contains("pkg__Vector3 linear = 1;"));
    assert!(schema.contains("pkg__Vector3 angular = 2;"));
}

#[test]
fn synthesize_schema___is_idempotent_for_fixed_resolver() {
    let resolver = MapResolver::new()
        .with_message("pkg/Point", &[("x", "float64"), ("y", "float64")])
        .with_message("pkg/Path", &[("points", "sequence<pkg/Point>")]);

    let first = synthesize_schema(&root("pkg", "Path"), &resolver).unwrap();
    let second = synthesize_schema(&root("pkg", "Path"), &resolver).unwrap();

    assert_eq!(first, second);
}

#[test]
fn synthesize_schema___self_referential_type___fails_fast() {
    let resolver = MapResolver::new().with_message("pkg/Node", &[("next", "pkg/Node")]);

    let result = synthesize_schema(&root("pkg", "Node"), &resolver);

    assert!(matches!(result, Err(TranslationError::CyclicType(_))));
}

#[test]
fn synthesize_schema___mutually_referential_types___fail_fast() {
    let resolver = MapResolver::new()
        .with_message("pkg/A", &[("b", "pkg/B")])
        .with_message("pkg/B", &[("a", "pkg/A")]);

    let result = synthesize_schema(&root("pkg", "A"), &resolver);

    assert!(matches!(result, Err(TranslationError::CyclicType(_))));
}

#[test]
fn synthesize_schema___unknown_root___is_resolution_error() {
    let result = synthesize_schema(&root("pkg", "Nope"), &MapResolver::new());

    assert!(matches!(
        result,
        Err(TranslationError::TypeResolution { .. })
    ));
}
