//! Proto3 schema synthesis.
//!
//! Walks the type graph of a root message and emits one nested `message`
//! block per referenced type, child blocks before the field declaration
//! that references them. Tag numbers restart at 1 inside each block and are
//! assigned in field-declaration order.

use std::collections::HashSet;

use crate::classify::classify_message;
use crate::error::{TranslationError, TranslationResult};
use crate::ir::{FieldType, MessageNode, QualifiedName};
use crate::naming::{generated_package, generated_type_name};
use crate::resolver::MessageResolver;

/// Synthesize the proto3 schema for `root` and every message type it
/// references transitively.
///
/// The output is deterministic for a fixed resolver: re-running synthesis
/// on the same root produces byte-identical text.
pub fn synthesize_schema(
    root: &QualifiedName,
    resolver: &dyn MessageResolver,
) -> TranslationResult<String> {
    tracing::debug!(root = %root, "synthesizing schema");

    let node = classify_message(root, resolver)?;
    let mut stack = vec![root.to_string()];
    let body = synthesize_message_body(&node, resolver, &mut stack)?;

    let mut schema = String::new();
    schema.push_str("syntax = \"proto3\";\n");
    schema.push_str(&format!("package {};\n", generated_package(root)));
    schema.push_str(&format!("\nmessage {} {{\n", generated_type_name(root)));
    schema.push_str(&body);
    schema.push_str("}\n");

    Ok(schema)
}

/// Emit the body of one message block: nested blocks plus field statements,
/// tags counting up from 1.
fn synthesize_message_body(
    node: &MessageNode,
    resolver: &dyn MessageResolver,
    stack: &mut Vec<String>,
) -> TranslationResult<String> {
    let mut body = String::new();
    // Nested blocks already declared in this scope; a type referenced by two
    // fields of the same message gets one block and two field statements
    let mut declared = HashSet::new();

    for (tag, (field_name, field_type)) in node.fields.iter().enumerate() {
        synthesize_field(
            &mut body,
            field_type,
            field_name,
            tag as u32 + 1,
            false,
            resolver,
            stack,
            &mut declared,
        )?;
    }

    Ok(body)
}

#[allow(clippy::too_many_arguments)]
fn synthesize_field(
    out: &mut String,
    field_type: &FieldType,
    field_name: &str,
    tag: u32,
    repeated: bool,
    resolver: &dyn MessageResolver,
    stack: &mut Vec<String>,
    declared: &mut HashSet<String>,
) -> TranslationResult<()> {
    match field_type {
        // Fixed arrays and sequences are not distinguished in proto3 output;
        // both surface as a repeated field of the element type
        FieldType::Sequence(element) | FieldType::FixedArray(element) => synthesize_field(
            out, element, field_name, tag, true, resolver, stack, declared,
        ),
        FieldType::Message(name) => {
            let type_name = generated_type_name(name);

            if !declared.contains(&type_name) {
                if stack.contains(&name.to_string()) {
                    return Err(TranslationError::CyclicType(name.to_string()));
                }

                let node = classify_message(name, resolver)?;
                stack.push(name.to_string());
                let nested = synthesize_message_body(&node, resolver, stack)?;
                stack.pop();

                out.push_str(&format!("message {type_name} {{\n"));
                out.push_str(&nested);
                out.push_str("}\n\n");
                declared.insert(type_name.clone());
            }

            let marker = if repeated { "repeated " } else { "" };
            out.push_str(&format!("{marker}{type_name} {field_name} = {tag};\n"));
            Ok(())
        }
        FieldType::Primitive(scalar) => {
            let marker = if repeated { "repeated " } else { "" };
            out.push_str(&format!(
                "{marker}{} {field_name} = {tag};\n",
                scalar.proto_name()
            ));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;
