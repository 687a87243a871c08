use std::str::FromStr;

use crate::{
  generator::ast::TypeName,
  openapi::ComponentCategory,
  reserved::to_type_name,
  utils::parse_component_ref,
};

/// Derives the qualified type name a `$ref` renders as.
///
/// `#/components/<category>/<name>` becomes `<Category>.<name>`, with the leaf
/// sanitized the same way the declaring model file sanitizes it. Returns `None`
/// when the reference is not a local reference into one of the four generated sections.
pub(crate) fn ref_type_name(ref_path: &str) -> Option<TypeName> {
  let parsed = parse_component_ref(ref_path)?;
  let category = ComponentCategory::from_str(parsed.category).ok()?;
  Some(TypeName::qualified(category.namespace(), to_type_name(&parsed.name)))
}

/// Name of the client method generated for an operation.
pub(crate) fn method_name(operation_id: &str) -> String {
  to_type_name(operation_id)
}
