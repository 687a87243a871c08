//! Renderers for the four component sections.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::type_resolver::render_type;
use crate::{
  generator::{
    ast::{Documentation, ModelFile, TypeAliasDef, TypeNode},
    errors::GenerationError,
    naming::identifiers::ref_type_name,
  },
  openapi::{ComponentCategory, ObjectOrReference, Parameter, RequestBody, Response, Schema},
  reserved::to_type_name,
};

fn reference_type(ref_path: &str) -> TypeNode {
  ref_type_name(ref_path).map_or(TypeNode::ANY, TypeNode::from)
}

/// Type of a parameter: its `schema`, or `any` when it declares none.
pub(crate) fn parameter_type(parameter: &ObjectOrReference<Parameter>) -> TypeNode {
  match parameter {
    ObjectOrReference::Ref { ref_path } => reference_type(ref_path),
    ObjectOrReference::Object(parameter) => parameter.schema.as_ref().map_or(TypeNode::ANY, render_type),
  }
}

/// Type of a request body's JSON payload, unioned with `null` unless the body is required.
pub(crate) fn request_body_type(body: &ObjectOrReference<RequestBody>) -> TypeNode {
  match body {
    ObjectOrReference::Ref { ref_path } => reference_type(ref_path),
    ObjectOrReference::Object(body) => {
      let payload = body.json_schema().map_or(TypeNode::ANY, render_type);
      if body.required { payload } else { payload.with_null() }
    }
  }
}

/// Type of a response's JSON payload, `any` when it has none.
pub(crate) fn response_type(response: &ObjectOrReference<Response>) -> TypeNode {
  match response {
    ObjectOrReference::Ref { ref_path } => reference_type(ref_path),
    ObjectOrReference::Object(response) => response.json_schema().map_or(TypeNode::ANY, render_type),
  }
}

fn render_section<T>(
  table: &IndexMap<String, ObjectOrReference<T>>,
  render: impl Fn(&ObjectOrReference<T>) -> TypeNode,
  description: impl Fn(&T) -> Option<&String>,
) -> Vec<TypeAliasDef> {
  table
    .iter()
    .map(|(name, entry)| {
      TypeAliasDef::builder()
        .name(to_type_name(name))
        .docs(Documentation::from_optional(entry.as_object().and_then(&description)))
        .target(render(entry))
        .build()
    })
    .collect()
}

pub(crate) fn render_schemas(table: &IndexMap<String, ObjectOrReference<Schema>>) -> Vec<TypeAliasDef> {
  render_section(table, render_type, |schema| schema.description.as_ref())
}

pub(crate) fn render_parameters(table: &IndexMap<String, ObjectOrReference<Parameter>>) -> Vec<TypeAliasDef> {
  render_section(table, parameter_type, |parameter| parameter.description.as_ref())
}

pub(crate) fn render_request_bodies(table: &IndexMap<String, ObjectOrReference<RequestBody>>) -> Vec<TypeAliasDef> {
  render_section(table, request_body_type, |body| body.description.as_ref())
}

pub(crate) fn render_responses(table: &IndexMap<String, ObjectOrReference<Response>>) -> Vec<TypeAliasDef> {
  render_section(table, response_type, |response| response.description.as_ref())
}

/// Accumulates the declarations of one model file, rejecting repeated names.
#[derive(Debug)]
pub(crate) struct ModelFileBuilder {
  file: ModelFile,
  names: HashSet<String>,
}

impl ModelFileBuilder {
  pub(crate) fn new(category: ComponentCategory) -> Self {
    Self {
      file: ModelFile::new(category),
      names: HashSet::new(),
    }
  }

  pub(crate) fn push(&mut self, declaration: TypeAliasDef) -> Result<(), GenerationError> {
    if !self.names.insert(declaration.name.clone()) {
      return Err(GenerationError::DuplicateTypeName {
        category: self.file.category,
        name: declaration.name,
      });
    }
    self.file.declarations.push(declaration);
    Ok(())
  }

  pub(crate) fn extend(&mut self, declarations: impl IntoIterator<Item = TypeAliasDef>) -> Result<(), GenerationError> {
    declarations.into_iter().try_for_each(|declaration| self.push(declaration))
  }

  pub(crate) fn finish(self) -> ModelFile {
    self.file
  }
}
