use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{
  openapi::{ComponentCategory, Components, ObjectOrReference, Parameter, RequestBody, Response, Schema},
  utils::parse_component_ref,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
  #[error("malformed reference '{reference}': expected '#/components/<category>/<name>'")]
  MalformedReference { reference: String },
  #[error("reference '{reference}' points into '{actual}' but was resolved as '{expected}'")]
  CategoryMismatch {
    reference: String,
    expected: ComponentCategory,
    actual: String,
  },
  #[error("component '{name}' not found in '{category}'")]
  NotFound { category: ComponentCategory, name: String },
  #[error("reference '{reference}' is part of a reference cycle")]
  CyclicReference { reference: String },
}

/// A value living in one of the four component tables.
pub trait Component: Clone + Sized {
  const CATEGORY: ComponentCategory;

  fn raw_table(components: &Components) -> &IndexMap<String, ObjectOrReference<Self>>;

  fn resolved_table(resolved: &ResolvedComponents) -> &IndexMap<String, Self>;
}

macro_rules! impl_component {
  ($ty:ty, $category:ident, $field:ident) => {
    impl Component for $ty {
      const CATEGORY: ComponentCategory = ComponentCategory::$category;

      fn raw_table(components: &Components) -> &IndexMap<String, ObjectOrReference<Self>> {
        &components.$field
      }

      fn resolved_table(resolved: &ResolvedComponents) -> &IndexMap<String, Self> {
        &resolved.$field
      }
    }
  };
}

impl_component!(Schema, Schemas, schemas);
impl_component!(Parameter, Parameters, parameters);
impl_component!(RequestBody, RequestBodies, request_bodies);
impl_component!(Response, Responses, responses);

/// Component tables with every top-level alias chased to its concrete object.
///
/// Nested references inside the concrete objects are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ResolvedComponents {
  schemas: IndexMap<String, Schema>,
  parameters: IndexMap<String, Parameter>,
  request_bodies: IndexMap<String, RequestBody>,
  responses: IndexMap<String, Response>,
}

impl ResolvedComponents {
  pub fn build(components: &Components) -> Result<Self, ResolveError> {
    Ok(Self {
      schemas: resolve_table(components)?,
      parameters: resolve_table(components)?,
      request_bodies: resolve_table(components)?,
      responses: resolve_table(components)?,
    })
  }

  /// Single-hop lookup of `ref_path` in the resolved table of `T`.
  pub fn resolve<T: Component>(&self, ref_path: &str) -> Result<&T, ResolveError> {
    let name = lookup_key::<T>(ref_path)?;
    T::resolved_table(self).get(&name).ok_or(ResolveError::NotFound {
      category: T::CATEGORY,
      name,
    })
  }

  /// Returns the concrete object behind `node`, resolving it if it is a reference.
  pub fn deref<'a, T: Component>(&'a self, node: &'a ObjectOrReference<T>) -> Result<&'a T, ResolveError> {
    match node {
      ObjectOrReference::Object(object) => Ok(object),
      ObjectOrReference::Ref { ref_path } => self.resolve(ref_path),
    }
  }
}

/// Splits `ref_path` and checks it points into the table of `T`.
fn lookup_key<T: Component>(ref_path: &str) -> Result<String, ResolveError> {
  let parsed = parse_component_ref(ref_path).ok_or_else(|| ResolveError::MalformedReference {
    reference: ref_path.to_string(),
  })?;

  if parsed.category != T::CATEGORY.to_string() {
    return Err(ResolveError::CategoryMismatch {
      reference: ref_path.to_string(),
      expected: T::CATEGORY,
      actual: parsed.category.to_string(),
    });
  }

  Ok(parsed.name)
}

fn resolve_table<T: Component>(components: &Components) -> Result<IndexMap<String, T>, ResolveError> {
  let raw = T::raw_table(components);
  raw
    .iter()
    .map(|(name, entry)| Ok((name.clone(), chase(raw, entry)?.clone())))
    .collect()
}

fn chase<'a, T: Component>(
  raw: &'a IndexMap<String, ObjectOrReference<T>>,
  entry: &'a ObjectOrReference<T>,
) -> Result<&'a T, ResolveError> {
  let mut visited = HashSet::new();
  let mut current = entry;

  loop {
    match current {
      ObjectOrReference::Object(object) => return Ok(object),
      ObjectOrReference::Ref { ref_path } => {
        if !visited.insert(ref_path.as_str()) {
          return Err(ResolveError::CyclicReference {
            reference: ref_path.clone(),
          });
        }
        let name = lookup_key::<T>(ref_path)?;
        current = raw.get(&name).ok_or(ResolveError::NotFound {
          category: T::CATEGORY,
          name,
        })?;
      }
    }
  }
}
