//! Renders schema nodes into [`TypeNode`]s.
//!
//! Rendering is total: shapes the renderer has no case for become `any`.

use serde_json::Value;

use crate::{
  generator::{
    ast::{Documentation, Keyword, PropertySignature, TypeNode},
    naming::identifiers::ref_type_name,
  },
  openapi::{ObjectOrReference, Schema, SchemaType},
};

/// Renders a schema node or reference.
///
/// References render as the qualified name of their target and are not followed.
pub(crate) fn render_type(node: &ObjectOrReference<Schema>) -> TypeNode {
  match node {
    ObjectOrReference::Ref { ref_path } => ref_type_name(ref_path).map_or(TypeNode::ANY, TypeNode::from),
    ObjectOrReference::Object(schema) => render_schema(schema),
  }
}

pub(crate) fn render_schema(schema: &Schema) -> TypeNode {
  let rendered = render_shape(schema);
  if schema.nullable {
    rendered.with_null()
  } else {
    rendered
  }
}

fn render_shape(schema: &Schema) -> TypeNode {
  if !schema.enum_values.is_empty() {
    return TypeNode::Union(
      schema
        .enum_values
        .iter()
        .map(|value| TypeNode::Literal(enum_literal(value)))
        .collect(),
    );
  }

  match schema.effective_type() {
    Some(SchemaType::Array) => TypeNode::array_of(schema.items.as_deref().map_or(TypeNode::ANY, render_type)),
    Some(SchemaType::Object) => render_object(schema),
    Some(primitive) => Keyword::from_schema_type(primitive).map_or(TypeNode::ANY, TypeNode::Keyword),
    None => TypeNode::ANY,
  }
}

fn render_object(schema: &Schema) -> TypeNode {
  if let Some(properties) = &schema.properties {
    return TypeNode::Record(
      properties
        .iter()
        .map(|(name, property)| {
          PropertySignature::builder()
            .name(name)
            .optional(!schema.is_required(name))
            .type_node(render_type(property))
            .docs(Documentation::from_optional(
              property.as_object().and_then(|p| p.description.as_ref()),
            ))
            .build()
        })
        .collect(),
    );
  }

  if !schema.one_of.is_empty() {
    TypeNode::Union(schema.one_of.iter().map(render_type).collect())
  } else if !schema.any_of.is_empty() {
    TypeNode::Union(schema.any_of.iter().map(render_type).collect())
  } else if !schema.all_of.is_empty() {
    TypeNode::Intersection(schema.all_of.iter().map(render_type).collect())
  } else {
    TypeNode::ANY
  }
}

/// Enum values render as string literals of their textual form.
fn enum_literal(value: &Value) -> String {
  match value {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  }
}
