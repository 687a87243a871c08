use indexmap::IndexMap;

use super::{Documentation, TypeNode};
use crate::openapi::{HttpMethod, Info, Server};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Client method parameter names, in the order they are declared.
pub const PATH_PARAMS: &str = "pathParams";
pub const HEADER_PARAMS: &str = "headerParams";
pub const QUERY_PARAMS: &str = "queryParams";
pub const BODY: &str = "body";

/// A declared parameter of a generated client method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParam {
  pub name: &'static str,
  pub type_node: TypeNode,
}

/// Value passed to the dispatch primitive for one argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgValue {
  /// Forward the method parameter of this name.
  Param(&'static str),
  /// `{}`, used when a parameter bucket is empty.
  EmptyObject,
  /// `null`, used when the operation has no request body.
  Null,
}

/// The `performRequest` call a method body consists of.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchCall {
  pub method: HttpMethod,
  pub path: String,
  pub path_params: ArgValue,
  pub header_params: ArgValue,
  pub query_params: ArgValue,
  pub body: ArgValue,
  /// Validation descriptor per status key; declared statuses without a JSON schema hold `null`.
  pub response_schemas: IndexMap<String, serde_json::Value>,
}

impl DispatchCall {
  pub fn args(&self) -> [ArgValue; 4] {
    [self.path_params, self.header_params, self.query_params, self.body]
  }
}

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct MethodDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub deprecated: bool,
  #[builder(default)]
  pub params: Vec<MethodParam>,
  /// Resolved type of the promise, e.g. `Responses.listPetsResponse`.
  pub response_type: TypeNode,
  pub call: DispatchCall,
}

impl MethodDef {
  pub fn return_type(&self) -> TypeNode {
    TypeNode::promise_of(self.response_type.clone())
  }
}

/// The generated `Client` class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDef {
  pub title: String,
  pub version: String,
  pub base_url: String,
  pub methods: Vec<MethodDef>,
}

#[bon::bon]
impl ClientDef {
  #[builder]
  pub fn new(info: &Info, servers: &[Server], base_url: Option<String>, methods: Vec<MethodDef>) -> Self {
    Self {
      title: info.title.clone(),
      version: info.version.clone(),
      base_url: base_url.unwrap_or_else(|| {
        servers
          .first()
          .map_or_else(|| DEFAULT_BASE_URL.to_string(), |server| server.url.clone())
      }),
      methods,
    }
  }
}
