//! Typed model of an OpenAPI v3 document.
//!
//! Only the parts the generator consumes are modelled. Every ordered table is an
//! [`IndexMap`] so iteration follows the source document.

mod components;
mod schema;


pub use components::{ComponentCategory, Components, MediaType, Parameter, ParameterLocation, RequestBody, Response};
pub(crate) use components::is_json_media_type;
use indexmap::IndexMap;
pub use schema::{ObjectOrReference, Schema, SchemaType};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
  pub openapi: Option<String>,
  #[serde(default)]
  pub info: Info,
  #[serde(default)]
  pub servers: Vec<Server>,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Components,
}

impl Document {
  /// Iterates every `(path, method, operation)` triple in generation order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
    self
      .paths
      .iter()
      .flat_map(|(pattern, item)| item.operations().map(move |(method, op)| (pattern.as_str(), method, op)))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Server {
  pub url: String,
  pub description: Option<String>,
}

/// HTTP methods the client generator emits, in generation priority order.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Patch,
  Delete,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
  #[serde(rename = "$ref")]
  pub ref_path: Option<String>,
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  pub get: Option<Operation>,
  pub put: Option<Operation>,
  pub post: Option<Operation>,
  pub patch: Option<Operation>,
  pub delete: Option<Operation>,
  pub options: Option<Operation>,
  pub head: Option<Operation>,
  pub trace: Option<Operation>,
}

impl PathItem {
  /// Present operations in GET, PUT, POST, PATCH, DELETE order.
  pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    [
      (HttpMethod::Get, &self.get),
      (HttpMethod::Put, &self.put),
      (HttpMethod::Post, &self.post),
      (HttpMethod::Patch, &self.patch),
      (HttpMethod::Delete, &self.delete),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
  }

  /// Names of declared methods the client does not generate.
  pub fn unsupported_methods(&self) -> Vec<&'static str> {
    [
      ("OPTIONS", &self.options),
      ("HEAD", &self.head),
      ("TRACE", &self.trace),
    ]
    .into_iter()
    .filter_map(|(name, operation)| operation.as_ref().map(|_| name))
    .collect()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub operation_id: Option<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  pub request_body: Option<ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
  #[serde(default)]
  pub deprecated: bool,
}
