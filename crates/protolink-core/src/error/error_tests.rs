#![allow(non_snake_case)]

use super::*;

#[test]
fn TranslationError___type_resolution___displays_name_and_reason() {
    let err = TranslationError::resolution("geometry_msgs/Pose", "no .msg definition found");

    let display = err.to_string();

    assert_eq!(
        display,
        "could not resolve message type geometry_msgs/Pose: no .msg definition found"
    );
}

#[test]
fn TranslationError___unsupported_type___displays_offending_string() {
    let err = TranslationError::UnsupportedType("complex128".into());

    assert_eq!(err.to_string(), "unsupported built-in type: complex128");
}

#[test]
fn TranslationError___cyclic_type___displays_type_name() {
    let err = TranslationError::CyclicType("pkg/Node".into());

    assert_eq!(err.to_string(), "cyclic message definition involving pkg/Node");
}

#[test]
fn TranslationError___invalid_type_name___quotes_input() {
    let err = TranslationError::InvalidTypeName("std_msgs".into());

    assert_eq!(
        err.to_string(),
        "invalid type name \"std_msgs\": expected package/Name"
    );
}
