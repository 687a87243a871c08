//! Builds the JSON Schema (draft-04) validation descriptors embedded in client methods.

use serde_json::{Map, Value, json};

use super::references::{ResolveError, ResolvedComponents};
use crate::openapi::{ObjectOrReference, Schema, SchemaType};

const DRAFT_04: &str = "http://json-schema.org/draft-04/schema#";

/// Formats that only carry meaning in OpenAPI and are unknown to JSON Schema validators.
const OPENAPI_ONLY_FORMATS: [&str; 5] = ["int32", "int64", "float", "double", "byte"];

/// Converts OpenAPI schemas into self-contained JSON Schema documents.
///
/// Nested references are inlined from the resolved component tables. A reference
/// back into a schema that is still being inlined becomes the permissive `{}`.
pub(crate) struct DescriptorBuilder<'a> {
  components: &'a ResolvedComponents,
  inlining: Vec<String>,
}

impl<'a> DescriptorBuilder<'a> {
  pub(crate) fn new(components: &'a ResolvedComponents) -> Self {
    Self {
      components,
      inlining: vec![],
    }
  }

  pub(crate) fn build(&mut self, node: &ObjectOrReference<Schema>) -> Result<Value, ResolveError> {
    let converted = self.convert(node)?;

    let mut root = Map::new();
    root.insert("$schema".to_string(), Value::String(DRAFT_04.to_string()));
    if let Value::Object(body) = converted {
      root.extend(body);
    }
    Ok(Value::Object(root))
  }

  fn convert(&mut self, node: &ObjectOrReference<Schema>) -> Result<Value, ResolveError> {
    match node {
      ObjectOrReference::Object(schema) => self.convert_schema(schema),
      ObjectOrReference::Ref { ref_path } => {
        if self.inlining.iter().any(|active| active == ref_path) {
          return Ok(json!({}));
        }
        let schema = self.components.resolve::<Schema>(ref_path)?;
        self.inlining.push(ref_path.clone());
        let converted = self.convert_schema(schema);
        self.inlining.pop();
        converted
      }
    }
  }

  fn convert_list(&mut self, nodes: &[ObjectOrReference<Schema>]) -> Result<Value, ResolveError> {
    nodes
      .iter()
      .map(|node| self.convert(node))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::Array)
  }

  fn convert_schema(&mut self, schema: &Schema) -> Result<Value, ResolveError> {
    // An intersection cannot absorb a null branch, so the whole node becomes one side of a union.
    if schema.nullable && schema.schema_type.is_none() && !schema.all_of.is_empty() {
      let inner = self.convert_schema(&Schema {
        nullable: false,
        ..schema.clone()
      })?;
      return Ok(json!({ "anyOf": [inner, { "type": "null" }] }));
    }

    let mut out = Map::new();

    if let Some(type_name) = schema.schema_type.and_then(json_type_name) {
      let type_value = if schema.nullable {
        json!([type_name, "null"])
      } else {
        json!(type_name)
      };
      out.insert("type".to_string(), type_value);
    }

    if let Some(format) = &schema.format
      && !OPENAPI_ONLY_FORMATS.contains(&format.as_str())
    {
      out.insert("format".to_string(), json!(format));
    }

    if !schema.enum_values.is_empty() {
      let mut values = schema.enum_values.clone();
      if schema.nullable && !values.contains(&Value::Null) {
        values.push(Value::Null);
      }
      out.insert("enum".to_string(), Value::Array(values));
    }

    if let Some(properties) = &schema.properties {
      let mut converted = Map::new();
      for (name, property) in properties {
        converted.insert(name.clone(), self.convert(property)?);
      }
      out.insert("properties".to_string(), Value::Object(converted));
    }

    if !schema.required.is_empty() {
      out.insert("required".to_string(), json!(schema.required));
    }

    if let Some(items) = &schema.items {
      out.insert("items".to_string(), self.convert(items)?);
    }

    if schema.unique_items {
      out.insert("uniqueItems".to_string(), Value::Bool(true));
    }

    for (keyword, members) in [
      ("allOf", &schema.all_of),
      ("oneOf", &schema.one_of),
      ("anyOf", &schema.any_of),
    ] {
      if members.is_empty() {
        continue;
      }
      let mut converted = self.convert_list(members)?;
      if schema.nullable
        && schema.schema_type.is_none()
        && keyword != "allOf"
        && let Value::Array(entries) = &mut converted
      {
        entries.push(json!({ "type": "null" }));
      }
      out.insert(keyword.to_string(), converted);
    }

    Ok(Value::Object(out))
  }
}

fn json_type_name(schema_type: SchemaType) -> Option<&'static str> {
  match schema_type {
    SchemaType::Any | SchemaType::Undefined | SchemaType::Unknown => None,
    SchemaType::Null => Some("null"),
    SchemaType::Boolean => Some("boolean"),
    SchemaType::Number => Some("number"),
    SchemaType::String => Some("string"),
    SchemaType::Integer => Some("integer"),
    SchemaType::Object => Some("object"),
    SchemaType::Array => Some("array"),
  }
}
