//! Naming conventions for generated and source type references.
//!
//! These spellings are load-bearing for interop: the schema synthesizer, the
//! conversion collector, and the glue templates must all agree on them.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `pkg/Name` | [`generated_type_name`] | `pkg__Name` |
//! | `pkg/Name` | [`generated_package`] | `protolink__pkg__Name` |
//! | `pkg/Name` | [`source_type_path`] | `pkg::msg::Name` |
//! | `pkg/Name` | [`include_guard`] | `CONVERSION_PKG__NAME_HPP` |
//! | `pkg/Name` | [`message_header_path`] | `pkg/msg/name.hpp` |
//! | `pkg/Name` | [`schema_header_path`] | `pkg__Name.pb.h` |

use crate::ir::QualifiedName;

/// The literal tag prefixed to every generated root package name.
const GENERATED_PACKAGE_TAG: &str = "protolink";

/// Generated message/namespace name: package and bare name joined by `__`.
///
/// # Examples
///
/// ```
/// use protolink_core::QualifiedName;
/// use protolink_core::naming::generated_type_name;
///
/// let name = QualifiedName::new("geometry_msgs", "Point");
/// assert_eq!(generated_type_name(&name), "geometry_msgs__Point");
/// ```
pub fn generated_type_name(ty: &QualifiedName) -> String {
    format!("{}__{}", ty.package, ty.name)
}

/// Generated package for a root type, carrying the fixed tool tag.
///
/// # Examples
///
/// ```
/// use protolink_core::QualifiedName;
/// use protolink_core::naming::generated_package;
///
/// let name = QualifiedName::new("std_msgs", "String");
/// assert_eq!(generated_package(&name), "protolink__std_msgs__String");
/// ```
pub fn generated_package(ty: &QualifiedName) -> String {
    format!("{GENERATED_PACKAGE_TAG}__{}__{}", ty.package, ty.name)
}

/// Source-language reference: package, the `msg` segment, and bare name
/// joined by the C++ scope separator.
pub fn source_type_path(ty: &QualifiedName) -> String {
    format!("{}::msg::{}", ty.package, ty.name)
}

/// Include-guard token for the generated conversion header.
pub fn include_guard(ty: &QualifiedName) -> String {
    format!(
        "CONVERSION_{}__{}_HPP",
        ty.package.to_uppercase(),
        ty.name.to_uppercase()
    )
}

/// Include path of the source message header (`pkg/msg/name.hpp`).
pub fn message_header_path(ty: &QualifiedName) -> String {
    format!("{}/msg/{}.hpp", ty.package, to_snake_case(&ty.name))
}

/// Include path of the compiled schema header (`pkg__Name.pb.h`).
pub fn schema_header_path(ty: &QualifiedName) -> String {
    format!("{}.pb.h", generated_type_name(ty))
}

/// Convert a CamelCase type name to lower snake_case.
///
/// Every uppercase letter starts a new segment, so `TransformStamped`
/// becomes `transform_stamped` and `IMUData` becomes `i_m_u_data`.
///
/// # Examples
///
/// ```
/// use protolink_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("String"), "string");
/// assert_eq!(to_snake_case("TransformStamped"), "transform_stamped");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if !result.is_empty() {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}
