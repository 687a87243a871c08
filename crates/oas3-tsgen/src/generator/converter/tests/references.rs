use serde_json::json;

use super::from_json;
use crate::{
  generator::converter::{ResolveError, ResolvedComponents},
  openapi::{ComponentCategory, Components, ObjectOrReference, Parameter, Response, Schema, SchemaType},
};

fn components(value: serde_json::Value) -> Components {
  from_json(value)
}

#[test]
fn test_missing_response_reports_name() {
  let resolved = ResolvedComponents::build(&components(json!({
    "responses": {"Ok": {"description": "fine"}}
  })))
  .unwrap();

  let err = resolved
    .resolve::<Response>("#/components/responses/NotFound")
    .unwrap_err();

  assert_eq!(
    err,
    ResolveError::NotFound {
      category: ComponentCategory::Responses,
      name: "NotFound".to_string(),
    }
  );
  assert!(err.to_string().contains("NotFound"));
}

#[test]
fn test_category_mismatch() {
  let resolved = ResolvedComponents::build(&components(json!({
    "schemas": {"Pet": {"type": "object"}}
  })))
  .unwrap();

  let err = resolved.resolve::<Parameter>("#/components/schemas/Pet").unwrap_err();
  assert!(matches!(
    err,
    ResolveError::CategoryMismatch { expected: ComponentCategory::Parameters, ref actual, .. } if actual == "schemas"
  ));
}

#[test]
fn test_malformed_reference() {
  let resolved = ResolvedComponents::default();
  for reference in ["Pet", "#/definitions/Pet", "other.yaml#/components/schemas/Pet"] {
    let err = resolved.resolve::<Schema>(reference).unwrap_err();
    assert!(matches!(err, ResolveError::MalformedReference { .. }), "{reference}");
  }
}

#[test]
fn test_aliases_are_chased() {
  let resolved = ResolvedComponents::build(&components(json!({
    "schemas": {
      "Id": {"$ref": "#/components/schemas/Uuid"},
      "Uuid": {"$ref": "#/components/schemas/Text"},
      "Text": {"type": "string"}
    }
  })))
  .unwrap();

  let schema = resolved.resolve::<Schema>("#/components/schemas/Id").unwrap();
  assert_eq!(schema.schema_type, Some(SchemaType::String));
}

#[test]
fn test_alias_cycle_is_rejected() {
  let err = ResolvedComponents::build(&components(json!({
    "schemas": {
      "A": {"$ref": "#/components/schemas/B"},
      "B": {"$ref": "#/components/schemas/A"}
    }
  })))
  .unwrap_err();

  assert!(matches!(err, ResolveError::CyclicReference { .. }));
}

#[test]
fn test_dangling_alias_is_rejected() {
  let err = ResolvedComponents::build(&components(json!({
    "parameters": {"Limit": {"$ref": "#/components/parameters/Missing"}}
  })))
  .unwrap_err();

  assert_eq!(
    err,
    ResolveError::NotFound {
      category: ComponentCategory::Parameters,
      name: "Missing".to_string(),
    }
  );
}

#[test]
fn test_nested_references_stay_unresolved() {
  let resolved = ResolvedComponents::build(&components(json!({
    "schemas": {
      "Node": {
        "type": "object",
        "properties": {"next": {"$ref": "#/components/schemas/Node"}}
      }
    }
  })))
  .unwrap();

  let node = resolved.resolve::<Schema>("#/components/schemas/Node").unwrap();
  let next = &node.properties.as_ref().unwrap()["next"];
  assert!(matches!(next, ObjectOrReference::Ref { ref_path } if ref_path == "#/components/schemas/Node"));
}

#[test]
fn test_deref_passes_inline_objects_through() {
  let resolved = ResolvedComponents::default();
  let inline: ObjectOrReference<Schema> = from_json(json!({"type": "boolean"}));
  let schema = resolved.deref(&inline).unwrap();
  assert_eq!(schema.schema_type, Some(SchemaType::Boolean));
}
