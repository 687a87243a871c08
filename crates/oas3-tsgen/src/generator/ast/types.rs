use std::collections::BTreeSet;

use super::Documentation;
use crate::openapi::SchemaType;

/// TypeScript keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
  Any,
  Boolean,
  Never,
  Null,
  Number,
  String,
  Undefined,
}

impl Keyword {
  /// Keyword for a primitive schema type, `None` for the composite kinds.
  pub const fn from_schema_type(schema_type: SchemaType) -> Option<Self> {
    match schema_type {
      SchemaType::Null => Some(Self::Null),
      SchemaType::Boolean => Some(Self::Boolean),
      SchemaType::Number | SchemaType::Integer => Some(Self::Number),
      SchemaType::String => Some(Self::String),
      SchemaType::Undefined => Some(Self::Undefined),
      SchemaType::Any | SchemaType::Unknown => Some(Self::Any),
      SchemaType::Object | SchemaType::Array => None,
    }
  }
}

/// A possibly namespace-qualified type name, e.g. `Schemas.Pet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
  pub namespace: Option<String>,
  pub name: String,
}

impl TypeName {
  pub fn local(name: impl Into<String>) -> Self {
    Self {
      namespace: None,
      name: name.into(),
    }
  }

  pub fn qualified(namespace: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      namespace: Some(namespace.into()),
      name: name.into(),
    }
  }
}

impl std::fmt::Display for TypeName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.namespace {
      Some(namespace) => write!(f, "{namespace}.{}", self.name),
      None => write!(f, "{}", self.name),
    }
  }
}

/// A member of a structural record type.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct PropertySignature {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub optional: bool,
  pub type_node: TypeNode,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub deprecated: bool,
}

/// Abstract description of a TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
  Keyword(Keyword),
  /// String literal type, stored unquoted.
  Literal(String),
  Reference(TypeName),
  Array(Box<TypeNode>),
  Record(Vec<PropertySignature>),
  Union(Vec<TypeNode>),
  Intersection(Vec<TypeNode>),
  /// Generic application such as `Promise<T>`.
  Generic { name: String, args: Vec<TypeNode> },
}

impl TypeNode {
  pub const ANY: Self = Self::Keyword(Keyword::Any);
  pub const NULL: Self = Self::Keyword(Keyword::Null);

  pub fn array_of(item: TypeNode) -> Self {
    Self::Array(Box::new(item))
  }

  pub fn promise_of(inner: TypeNode) -> Self {
    Self::Generic {
      name: "Promise".to_string(),
      args: vec![inner],
    }
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Self::Keyword(Keyword::Null))
  }

  /// Unions this type with `null`.
  ///
  /// The result is always a union whose top level holds exactly one `null`
  /// member: unions are flattened and `null` is only added when missing.
  #[must_use]
  pub fn with_null(self) -> Self {
    let mut members = match self {
      Self::Union(members) => members,
      other => vec![other],
    };

    let mut seen_null = false;
    members.retain(|member| {
      if member.is_null() {
        let keep = !seen_null;
        seen_null = true;
        keep
      } else {
        true
      }
    });

    if !seen_null {
      members.push(Self::NULL);
    }
    Self::Union(members)
  }

  /// Namespaces referenced anywhere inside this type.
  pub fn collect_namespaces<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
    match self {
      Self::Reference(TypeName {
        namespace: Some(namespace),
        ..
      }) => {
        out.insert(namespace);
      }
      Self::Keyword(_) | Self::Literal(_) | Self::Reference(_) => {}
      Self::Array(item) => item.collect_namespaces(out),
      Self::Record(properties) => {
        for property in properties {
          property.type_node.collect_namespaces(out);
        }
      }
      Self::Union(members) | Self::Intersection(members) | Self::Generic { args: members, .. } => {
        for member in members {
          member.collect_namespaces(out);
        }
      }
    }
  }
}

impl From<TypeName> for TypeNode {
  fn from(name: TypeName) -> Self {
    Self::Reference(name)
  }
}
