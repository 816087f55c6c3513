//! Field-type classification.
//!
//! Turns the field-type strings reported by the resolver into [`FieldType`]
//! descriptors. Classification is total: every string yields exactly one
//! descriptor or the translation fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TranslationError, TranslationResult};
use crate::ir::{FieldType, MessageNode, ProtoScalar, QualifiedName};
use crate::resolver::MessageResolver;

#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static FIXED_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<base>[\w/]+)\[(?P<len>\d*)\]$").expect("fixed-array pattern is valid")
});

/// Classify one field-type string.
///
/// Message references are validated by attempting resolution; a reference
/// the resolver cannot find classifies as unsupported rather than deferring
/// the failure to a later stage.
pub fn classify(
    field_type: &str,
    resolver: &dyn MessageResolver,
) -> TranslationResult<FieldType> {
    if let Some(inner) = sequence_element(field_type) {
        return Ok(FieldType::Sequence(Box::new(classify(inner, resolver)?)));
    }

    if let Some(caps) = FIXED_ARRAY.captures(field_type) {
        let element = classify(&caps["base"], resolver)?;
        return Ok(FieldType::FixedArray(Box::new(element)));
    }

    if let Some(scalar) = fold_primitive(field_type) {
        return Ok(FieldType::Primitive(scalar));
    }

    if field_type.contains('/') {
        let name: QualifiedName = field_type
            .parse()
            .map_err(|_| TranslationError::UnsupportedType(field_type.to_string()))?;
        resolver
            .resolve(&name)
            .map_err(|_| TranslationError::UnsupportedType(field_type.to_string()))?;
        return Ok(FieldType::Message(name));
    }

    Err(TranslationError::UnsupportedType(field_type.to_string()))
}

/// Resolve a message type and classify each of its fields, preserving
/// declaration order.
pub fn classify_message(
    name: &QualifiedName,
    resolver: &dyn MessageResolver,
) -> TranslationResult<MessageNode> {
    let fields = resolver.resolve(name)?;

    let mut classified = Vec::with_capacity(fields.len());
    for (field_name, field_type) in fields {
        classified.push((field_name, classify(&field_type, resolver)?));
    }

    Ok(MessageNode {
        name: name.clone(),
        fields: classified,
    })
}

fn sequence_element(field_type: &str) -> Option<&str> {
    field_type.strip_prefix("sequence<")?.strip_suffix('>')
}

/// Fold a source primitive name onto its proto3 scalar.
fn fold_primitive(name: &str) -> Option<ProtoScalar> {
    match name {
        "uint8" | "uint16" | "uint32" => Some(ProtoScalar::Uint32),
        "int8" | "int16" | "int32" => Some(ProtoScalar::Int32),
        "uint64" => Some(ProtoScalar::Uint64),
        "int64" => Some(ProtoScalar::Int64),
        "string" => Some(ProtoScalar::String),
        "float32" | "float" => Some(ProtoScalar::Float),
        "float64" | "double" => Some(ProtoScalar::Double),
        "boolean" => Some(ProtoScalar::Bool),
        _ => None,
    }
}
