//! protolink-core - Message-type translation from ROS 2 IDL to proto3
//!
//! This crate provides the translation pipeline behind `protolink-gen`:
//! - [`MessageResolver`] as the boundary to the installed message definitions
//! - [`classify`] for folding field-type strings into [`FieldType`] descriptors
//! - [`synthesize_schema`] for the nested proto3 schema text
//! - [`collect_conversions`] for the glue-code conversion metadata
//!
//! One invocation translates exactly one root type to completion or fails
//! with a [`TranslationError`]; there is no partial output.

mod classify;
mod conversions;
mod error;
mod ir;
pub mod naming;
mod resolver;
mod schema;

pub use classify::{classify, classify_message};
pub use conversions::collect_conversions;
pub use error::{TranslationError, TranslationResult};
pub use ir::{ConversionUnit, FieldType, MessageNode, ProtoScalar, QualifiedName};
pub use resolver::{AmentResolver, FieldList, MapResolver, MessageResolver};
pub use schema::synthesize_schema;
