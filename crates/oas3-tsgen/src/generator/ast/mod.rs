mod client;
mod documentation;
mod types;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

pub use client::{
  ArgValue, BODY, ClientDef, DispatchCall, HEADER_PARAMS, MethodDef, MethodParam, PATH_PARAMS,
  QUERY_PARAMS,
};
pub use documentation::Documentation;
pub use types::{Keyword, PropertySignature, TypeName, TypeNode};

use crate::openapi::ComponentCategory;

/// `export type <name> = <target>;`
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct TypeAliasDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  pub target: TypeNode,
}

/// The declarations of one `models/<category>.ts` file, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFile {
  pub category: ComponentCategory,
  pub declarations: Vec<TypeAliasDef>,
}

impl ModelFile {
  pub fn new(category: ComponentCategory) -> Self {
    Self {
      category,
      declarations: vec![],
    }
  }

  pub fn len(&self) -> usize {
    self.declarations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.declarations.is_empty()
  }

  /// Namespaces referenced by any declaration, sorted.
  pub fn referenced_namespaces(&self) -> BTreeSet<&str> {
    let mut namespaces = BTreeSet::new();
    for declaration in &self.declarations {
      declaration.target.collect_namespaces(&mut namespaces);
    }
    namespaces
  }
}
