use serde_json::json;

use super::from_json;
use crate::{
  generator::{
    ast::{ArgValue, Keyword, PropertySignature, TypeName, TypeNode},
    converter::{OperationCompiler, OperationOutput, ResolveError, ResolvedComponents},
    errors::GenerationError,
    metrics::GenerationWarning,
  },
  openapi::{Components, HttpMethod, ObjectOrReference, Operation, Parameter},
};

fn compile_with(
  components: serde_json::Value,
  inherited: serde_json::Value,
  operation: serde_json::Value,
) -> Result<OperationOutput, GenerationError> {
  let components = ResolvedComponents::build(&from_json::<Components>(components)).unwrap();
  let inherited: Vec<ObjectOrReference<Parameter>> = from_json(inherited);
  let operation: Operation = from_json(operation);
  OperationCompiler::new(&components).compile("/pets/{petId}", HttpMethod::Get, &inherited, &operation)
}

fn compile(operation: serde_json::Value) -> OperationOutput {
  compile_with(json!({}), json!([]), operation).unwrap()
}

#[test]
fn test_response_union_and_variants() {
  let output = compile(json!({
    "operationId": "listPets",
    "responses": {
      "200": {
        "description": "ok",
        "content": {"application/json": {"schema": {"type": "array", "items": {"type": "string"}}}}
      },
      "404": {"description": "missing"}
    }
  }));

  let names: Vec<_> = output.response_types.iter().map(|t| t.name.as_str()).collect();
  assert_eq!(names, ["listPetsResponse", "listPets200", "listPets404"]);

  assert_eq!(
    output.response_types[0].target,
    TypeNode::Union(vec![
      TypeNode::Reference(TypeName::local("listPets200")),
      TypeNode::Reference(TypeName::local("listPets404")),
    ])
  );
  assert_eq!(
    output.response_types[1].target,
    TypeNode::Record(vec![
      PropertySignature::builder()
        .name("kind")
        .type_node(TypeNode::Literal("200".to_string()))
        .build(),
      PropertySignature::builder()
        .name("value")
        .type_node(TypeNode::array_of(TypeNode::Keyword(Keyword::String)))
        .build(),
    ])
  );

  let method = &output.method;
  assert_eq!(method.name, "listPets");
  assert_eq!(
    method.return_type(),
    TypeNode::promise_of(TypeNode::Reference(TypeName::qualified("Responses", "listPetsResponse")))
  );

  let statuses: Vec<_> = method.call.response_schemas.keys().map(String::as_str).collect();
  assert_eq!(statuses, ["200", "404"]);
  assert_eq!(method.call.response_schemas["404"], serde_json::Value::Null);
}

#[test]
fn test_schemaless_status_is_declared_before_default() {
  let output = compile(json!({
    "operationId": "deletePet",
    "responses": {
      "204": {"description": "deleted"},
      "default": {
        "description": "error",
        "content": {"application/json": {"schema": {"type": "object"}}}
      }
    }
  }));

  let schemas = &output.method.call.response_schemas;
  let statuses: Vec<_> = schemas.keys().map(String::as_str).collect();
  assert_eq!(statuses, ["204", "default"]);
  assert!(schemas["204"].is_null());
  assert_eq!(schemas["default"]["type"], "object");
  assert!(output.warnings.is_empty());
}

#[test]
fn test_deprecated_parameter_is_flagged() {
  let output = compile(json!({
    "operationId": "listPets",
    "parameters": [
      {"name": "page", "in": "query", "deprecated": true, "schema": {"type": "integer"}},
      {"name": "limit", "in": "query", "schema": {"type": "integer"}}
    ],
    "responses": {}
  }));

  let TypeNode::Record(members) = &output.method.params[0].type_node else {
    panic!("query parameters should be a record");
  };
  assert!(members[0].deprecated);
  assert!(!members[1].deprecated);
}

#[test]
fn test_path_and_query_parameters() {
  let output = compile_with(
    json!({}),
    json!([{"name": "petId", "in": "path", "required": true, "schema": {"type": "string"}}]),
    json!({
      "operationId": "showPet",
      "parameters": [{"name": "limit", "in": "query", "schema": {"type": "integer"}}],
      "responses": {}
    }),
  )
  .unwrap();

  let method = &output.method;
  let param_names: Vec<_> = method.params.iter().map(|p| p.name).collect();
  assert_eq!(param_names, ["pathParams", "queryParams"]);

  assert_eq!(
    method.params[0].type_node,
    TypeNode::Record(vec![
      PropertySignature::builder()
        .name("petId")
        .type_node(TypeNode::Keyword(Keyword::String))
        .build()
    ])
  );
  assert_eq!(
    method.params[1].type_node,
    TypeNode::Record(vec![
      PropertySignature::builder()
        .name("limit")
        .optional(true)
        .type_node(TypeNode::Keyword(Keyword::Number))
        .build()
    ])
  );

  assert_eq!(
    method.call.args(),
    [
      ArgValue::Param("pathParams"),
      ArgValue::EmptyObject,
      ArgValue::Param("queryParams"),
      ArgValue::Null,
    ]
  );
}

#[test]
fn test_parameter_references_are_resolved() {
  let output = compile_with(
    json!({
      "parameters": {
        "TraceId": {"name": "x-trace-id", "in": "header", "required": true, "schema": {"type": "string"}}
      }
    }),
    json!([]),
    json!({
      "operationId": "ping",
      "parameters": [{"$ref": "#/components/parameters/TraceId"}]
    }),
  )
  .unwrap();

  let header = &output.method.params[0];
  assert_eq!(header.name, "headerParams");
  assert_eq!(
    header.type_node,
    TypeNode::Record(vec![
      PropertySignature::builder()
        .name("x-trace-id")
        .type_node(TypeNode::Reference(TypeName::qualified("Parameters", "TraceId")))
        .build()
    ])
  );
}

#[test]
fn test_request_body_argument() {
  let output = compile(json!({
    "operationId": "createPet",
    "requestBody": {
      "required": true,
      "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
    }
  }));

  let method = &output.method;
  assert_eq!(method.params.len(), 1);
  assert_eq!(method.params[0].name, "body");
  assert_eq!(
    method.params[0].type_node,
    TypeNode::Reference(TypeName::qualified("Schemas", "Pet"))
  );
  assert_eq!(method.call.body, ArgValue::Param("body"));
  assert_eq!(method.call.path_params, ArgValue::EmptyObject);
}

#[test]
fn test_no_responses_renders_never() {
  let output = compile(json!({"operationId": "fireAndForget"}));
  assert_eq!(output.response_types.len(), 1);
  assert_eq!(output.response_types[0].target, TypeNode::Keyword(Keyword::Never));
  assert!(output.method.params.is_empty());
}

#[test]
fn test_missing_operation_id_fails() {
  let err = compile_with(json!({}), json!([]), json!({"responses": {}})).unwrap_err();
  assert_eq!(
    err,
    GenerationError::MissingOperationId {
      method: HttpMethod::Get,
      path: "/pets/{petId}".to_string(),
    }
  );
}

#[test]
fn test_unresolvable_response_names_operation() {
  let err = compile_with(
    json!({}),
    json!([]),
    json!({
      "operationId": "showPet",
      "responses": {"404": {"$ref": "#/components/responses/NotFound"}}
    }),
  )
  .unwrap_err();

  let GenerationError::Operation { operation_id, source } = err else {
    panic!("expected an operation error");
  };
  assert_eq!(operation_id, "showPet");
  assert!(matches!(source, ResolveError::NotFound { ref name, .. } if name == "NotFound"));
}

#[test]
fn test_cookie_and_non_json_warnings() {
  let output = compile(json!({
    "operationId": "download",
    "parameters": [{"name": "session", "in": "cookie"}],
    "responses": {
      "200": {"description": "file", "content": {"application/octet-stream": {}}}
    }
  }));

  assert_eq!(
    output.warnings,
    [
      GenerationWarning::CookieParameter {
        operation_id: "download".to_string(),
        name: "session".to_string(),
      },
      GenerationWarning::NonJsonContent {
        operation_id: "download".to_string(),
        location: "response 200".to_string(),
      },
    ]
  );
  assert!(output.method.params.is_empty());
  assert_eq!(
    output.method.call.response_schemas,
    indexmap::IndexMap::from([("200".to_string(), serde_json::Value::Null)])
  );
}

#[test]
fn test_summary_and_description_document_method() {
  let output = compile(json!({
    "operationId": "listPets",
    "summary": "List pets",
    "description": "Returns every pet.",
    "deprecated": true
  }));

  assert_eq!(output.method.docs.lines(), ["List pets", "Returns every pet."]);
  assert!(output.method.deprecated);
}
