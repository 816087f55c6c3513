//! Conversion-unit collection for glue-code generation.
//!
//! A second traversal over the same type graph as the schema synthesizer,
//! producing one [`ConversionUnit`] per namespace-qualified message type.
//! The namespace path is threaded through every call starting from the
//! generated root package, so one naming rule covers the root's own unit
//! and every deeper one.

use std::collections::HashSet;

use crate::classify::classify_message;
use crate::error::{TranslationError, TranslationResult};
use crate::ir::{ConversionUnit, FieldType, QualifiedName};
use crate::naming::{generated_package, generated_type_name, source_type_path};
use crate::resolver::MessageResolver;

/// Collect conversion units for `root` and every message type it references
/// transitively, children before their parents.
///
/// Each distinct namespace-qualified spelling contributes exactly one unit;
/// the same source type reached along two different containing paths keeps
/// two distinct units, one per spelling.
pub fn collect_conversions(
    root: &QualifiedName,
    resolver: &dyn MessageResolver,
) -> TranslationResult<Vec<ConversionUnit>> {
    tracing::debug!(root = %root, "collecting conversion units");

    let mut units = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = Vec::new();
    collect_message(
        &generated_package(root),
        root,
        resolver,
        &mut units,
        &mut seen,
        &mut stack,
    )?;

    Ok(units)
}

fn collect_message(
    namespace: &str,
    ty: &QualifiedName,
    resolver: &dyn MessageResolver,
    units: &mut Vec<ConversionUnit>,
    seen: &mut HashSet<String>,
    stack: &mut Vec<String>,
) -> TranslationResult<()> {
    let schema_type = format!("{namespace}::{}", generated_type_name(ty));
    if !seen.insert(schema_type.clone()) {
        return Ok(());
    }
    if stack.contains(&ty.to_string()) {
        return Err(TranslationError::CyclicType(ty.to_string()));
    }
    stack.push(ty.to_string());

    let node = classify_message(ty, resolver)?;
    let mut unit = ConversionUnit {
        schema_type: schema_type.clone(),
        source_type: source_type_path(ty),
        primitive_fields: Vec::new(),
        user_type_fields: Vec::new(),
        collection_fields: Vec::new(),
    };

    for (field_name, field_type) in &node.fields {
        match field_type {
            FieldType::Primitive(_) | FieldType::FixedArray(_) => {
                unit.primitive_fields.push(field_name.clone());
            }
            FieldType::Message(child) => {
                unit.user_type_fields.push(field_name.clone());
                collect_message(&schema_type, child, resolver, units, seen, stack)?;
            }
            FieldType::Sequence(element) => {
                unit.collection_fields.push(field_name.clone());
                // The sequence itself contributes no unit, only its element
                if let Some(child) = message_element(element) {
                    collect_message(&schema_type, child, resolver, units, seen, stack)?;
                }
            }
        }
    }

    stack.pop();
    units.push(unit);
    Ok(())
}

/// Innermost message type of a (possibly wrapped) sequence element.
fn message_element(element: &FieldType) -> Option<&QualifiedName> {
    match element {
        FieldType::Message(name) => Some(name),
        FieldType::Sequence(inner) | FieldType::FixedArray(inner) => message_element(inner),
        FieldType::Primitive(_) => None,
    }
}
