//! Intermediate representation for message translation.
//!
//! Field-type strings arriving from the resolver are parsed exactly once
//! into the typed descriptors in this module; every later stage (schema
//! synthesis, conversion collection, glue emission) works on these values
//! and never re-derives structure from strings.
//!
//! # Structure
//!
//! - [`QualifiedName`]: a package plus a bare type name (`pkg/Name`)
//! - [`FieldType`]: classification of one declared field type
//! - [`ProtoScalar`]: a source primitive folded to its proto3 counterpart
//! - [`MessageNode`]: a resolved message type with classified fields
//! - [`ConversionUnit`]: the per-type record consumed by the glue templates

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::TranslationError;

/// A package-qualified message type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Package the type is declared in (e.g. `geometry_msgs`).
    pub package: String,

    /// Bare type name (e.g. `Point`).
    pub name: String,
}

impl QualifiedName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

impl FromStr for QualifiedName {
    type Err = TranslationError;

    /// Parse the `package/Name` spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(package), Some(name), None) if !package.is_empty() && !name.is_empty() => {
                Ok(Self::new(package, name))
            }
            _ => Err(TranslationError::InvalidTypeName(s.to_string())),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.name)
    }
}

/// A source primitive folded to its proto3 scalar type.
///
/// The folding collapses widths the target schema cannot express: all
/// unsigned integers up to 32 bits become `uint32`, all signed ones become
/// `int32`. 64-bit integers and strings keep their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoScalar {
    Uint32,
    Int32,
    Uint64,
    Int64,
    Float,
    Double,
    Bool,
    String,
}

impl ProtoScalar {
    /// The proto3 spelling of this scalar.
    pub fn proto_name(self) -> &'static str {
        match self {
            ProtoScalar::Uint32 => "uint32",
            ProtoScalar::Int32 => "int32",
            ProtoScalar::Uint64 => "uint64",
            ProtoScalar::Int64 => "int64",
            ProtoScalar::Float => "float",
            ProtoScalar::Double => "double",
            ProtoScalar::Bool => "bool",
            ProtoScalar::String => "string",
        }
    }
}

/// Classification of a single declared field type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Scalar primitive, already folded to its proto3 counterpart.
    Primitive(ProtoScalar),

    /// Fixed-size array (`T[N]`); the element is classified recursively.
    FixedArray(Box<FieldType>),

    /// Variable-length sequence (`sequence<T>`).
    Sequence(Box<FieldType>),

    /// Reference to another message type.
    Message(QualifiedName),
}

/// A resolved message type: classified fields in declaration order.
///
/// Declaration order is preserved end-to-end; it determines the synthesized
/// field tag numbers and the traversal order of the conversion collector.
#[derive(Debug, Clone)]
pub struct MessageNode {
    pub name: QualifiedName,
    pub fields: Vec<(String, FieldType)>,
}

/// One glue-code record per namespace-qualified nested message type.
///
/// The three field lists are disjoint and cover every immediate field of the
/// type, so downstream code emission can generate field-by-field copy
/// routines without re-deriving the classification.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionUnit {
    /// `::`-joined path of the generated structure inside the schema.
    ///
    /// The root type's own unit is prefixed with the generated package; a
    /// deeper unit is qualified by the path of the unit that reached it.
    pub schema_type: String,

    /// Fully qualified source type (`pkg::msg::Name`).
    pub source_type: String,

    /// Immediate fields copied value-for-value (scalars and fixed arrays).
    pub primitive_fields: Vec<String>,

    /// Immediate fields converted through another unit.
    pub user_type_fields: Vec<String>,

    /// Immediate variable-length fields.
    pub collection_fields: Vec<String>,
}
