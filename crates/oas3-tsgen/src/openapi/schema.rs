use indexmap::IndexMap;
use serde::Deserialize;

/// Either an inline object or a `$ref` pointer to a named component.
///
/// Any JSON object carrying a `$ref` key deserializes as [`ObjectOrReference::Ref`],
/// sibling keys are ignored as the OpenAPI 3.0 rules require.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ObjectOrReference<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Object(T),
}

impl<T> ObjectOrReference<T> {
  pub fn as_object(&self) -> Option<&T> {
    match self {
      Self::Object(object) => Some(object),
      Self::Ref { .. } => None,
    }
  }
}

/// Primitive kind carried by the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SchemaType {
  Null,
  Boolean,
  Number,
  String,
  Integer,
  Any,
  Undefined,
  Object,
  Array,
  #[serde(other)]
  Unknown,
}

/// A concrete (non-reference) schema node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(rename = "type")]
  pub schema_type: Option<SchemaType>,
  pub format: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "enum", default)]
  pub enum_values: Vec<serde_json::Value>,
  #[serde(default)]
  pub nullable: bool,
  pub properties: Option<IndexMap<String, ObjectOrReference<Schema>>>,
  #[serde(default)]
  pub required: Vec<String>,
  #[serde(default)]
  pub all_of: Vec<ObjectOrReference<Schema>>,
  #[serde(default)]
  pub one_of: Vec<ObjectOrReference<Schema>>,
  #[serde(default)]
  pub any_of: Vec<ObjectOrReference<Schema>>,
  pub items: Option<Box<ObjectOrReference<Schema>>>,
  #[serde(default)]
  pub unique_items: bool,
}

impl Schema {
  /// The effective kind of this node.
  ///
  /// Documents often omit `type: object` on composite schemas, so a node that
  /// declares properties or composition keywords without a `type` counts as an object.
  pub fn effective_type(&self) -> Option<SchemaType> {
    if self.schema_type.is_some() {
      return self.schema_type;
    }
    if self.properties.is_some() || !self.all_of.is_empty() || !self.one_of.is_empty() || !self.any_of.is_empty() {
      return Some(SchemaType::Object);
    }
    None
  }

  pub fn is_required(&self, property: &str) -> bool {
    self.required.iter().any(|name| name == property)
  }
}
