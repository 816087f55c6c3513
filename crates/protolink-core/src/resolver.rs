//! Message-definition lookup.
//!
//! The traversal code never touches the filesystem directly; everything goes
//! through the [`MessageResolver`] capability, so the schema synthesizer and
//! the conversion collector can be exercised against in-memory fixtures.
//!
//! Two implementations are provided: [`AmentResolver`] reads installed
//! ROS 2 `.msg` definitions, [`MapResolver`] serves fixed fixtures.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{TranslationError, TranslationResult};
use crate::ir::QualifiedName;

/// Ordered `(field name, field-type string)` pairs, declaration order
/// preserved.
pub type FieldList = Vec<(String, String)>;

/// Lookup from a qualified type name to its ordered field map.
///
/// A resolver is a pure lookup: repeated calls for the same name return the
/// same fields, and failure means the type does not exist as far as this
/// invocation is concerned.
pub trait MessageResolver {
    /// Return the fields of `name` as declared by the message definition.
    fn resolve(&self, name: &QualifiedName) -> TranslationResult<FieldList>;
}

/// Resolver backed by installed `.msg` definitions.
///
/// Looks for `share/<package>/msg/<Name>.msg` under each install prefix
/// taken from the `AMENT_PREFIX_PATH` environment variable, plus any roots
/// added explicitly.
pub struct AmentResolver {
    prefixes: Vec<PathBuf>,
}

impl AmentResolver {
    pub fn new(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    /// Build a resolver from the `AMENT_PREFIX_PATH` environment variable.
    pub fn from_env() -> Self {
        let prefixes = env::var("AMENT_PREFIX_PATH")
            .map(|raw| {
                raw.split(':')
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();
        Self { prefixes }
    }

    fn locate(&self, name: &QualifiedName) -> Option<PathBuf> {
        self.prefixes
            .iter()
            .map(|prefix| {
                prefix
                    .join("share")
                    .join(&name.package)
                    .join("msg")
                    .join(format!("{}.msg", name.name))
            })
            .find(|candidate| candidate.is_file())
    }
}

impl MessageResolver for AmentResolver {
    fn resolve(&self, name: &QualifiedName) -> TranslationResult<FieldList> {
        let path = self.locate(name).ok_or_else(|| {
            TranslationError::resolution(
                name.to_string(),
                "no .msg definition found under the configured install prefixes",
            )
        })?;

        tracing::debug!(name = %name, path = %path.display(), "resolving message definition");

        let source = fs::read_to_string(&path).map_err(|e| {
            TranslationError::resolution(
                name.to_string(),
                format!("failed to read {}: {e}", path.display()),
            )
        })?;

        Ok(parse_msg_definition(&name.package, &source))
    }
}

/// Parse a `.msg` definition body into the introspected field spelling.
///
/// Comments and constant entries are skipped. Array suffixes are normalized
/// so the classifier sees a single spelling: `T[]` and `T[<=N]` become
/// `sequence<T>`, `T[N]` stays a fixed array.
fn parse_msg_definition(package: &str, source: &str) -> FieldList {
    let mut fields = Vec::new();

    for line in source.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let (Some(field_type), Some(field_name)) = (parts.next(), parts.next()) else {
            continue;
        };

        // Constant entries ("uint8 KIND=1", "uint8 KIND = 1") are not fields
        if field_name.contains('=') || parts.next().is_some_and(|t| t.starts_with('=')) {
            continue;
        }

        fields.push((
            field_name.to_string(),
            normalize_field_type(package, field_type),
        ));
    }

    fields
}

fn normalize_field_type(package: &str, field_type: &str) -> String {
    if let (Some(open), true) = (field_type.find('['), field_type.ends_with(']')) {
        let base = &field_type[..open];
        let bound = &field_type[open + 1..field_type.len() - 1];
        let element = normalize_bare_type(package, base);

        // Unbounded and bounded arrays are both variable-length; only a
        // plain size makes a fixed array
        if bound.is_empty() || bound.starts_with("<=") {
            return format!("sequence<{element}>");
        }
        return format!("{element}[{bound}]");
    }

    normalize_bare_type(package, field_type)
}

/// Map `.msg` spellings onto the introspected ones the classifier accepts.
fn normalize_bare_type(package: &str, field_type: &str) -> String {
    match field_type {
        "bool" => "boolean".to_string(),
        "byte" | "char" => "uint8".to_string(),
        // The bare Header shorthand predates qualified references
        "Header" => "std_msgs/Header".to_string(),
        _ if field_type == "string" || field_type.starts_with("string<=") => "string".to_string(),
        _ if field_type.contains('/') => field_type.to_string(),
        _ if field_type
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase()) =>
        {
            // Bare references name a type in the declaring package
            format!("{package}/{field_type}")
        }
        _ => field_type.to_string(),
    }
}

/// Fixed in-memory resolver for tests and embedding.
#[derive(Default)]
pub struct MapResolver {
    messages: HashMap<String, FieldList>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with its ordered `(field, type)` pairs.
    #[must_use]
    pub fn with_message(mut self, name: &str, fields: &[(&str, &str)]) -> Self {
        self.messages.insert(
            name.to_string(),
            fields
                .iter()
                .map(|(f, t)| (f.to_string(), t.to_string()))
                .collect(),
        );
        self
    }
}

impl MessageResolver for MapResolver {
    fn resolve(&self, name: &QualifiedName) -> TranslationResult<FieldList> {
        self.messages
            .get(&name.to_string())
            .cloned()
            .ok_or_else(|| TranslationError::resolution(name.to_string(), "type is not registered"))
    }
}
