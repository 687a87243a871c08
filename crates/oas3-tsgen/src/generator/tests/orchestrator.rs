use std::path::PathBuf;

use serde_json::json;

use super::support::{file, generate, parse_spec, petstore};
use crate::{
  generator::{
    codegen::GeneratedFileType,
    converter::ResolveError,
    errors::GenerationError,
    metrics::GenerationWarning,
    orchestrator::Orchestrator,
  },
  openapi::{ComponentCategory, HttpMethod},
};

#[test]
fn test_petstore_layout() {
  let output = generate(petstore());

  let paths: Vec<PathBuf> = output.files.iter().map(|(file_type, _)| file_type.relative_path()).collect();
  assert_eq!(
    paths,
    [
      PathBuf::from("models/schemas.ts"),
      PathBuf::from("models/parameters.ts"),
      PathBuf::from("models/requestBodies.ts"),
      PathBuf::from("models/responses.ts"),
      PathBuf::from("client.ts"),
    ]
  );

  for (_, code) in output.files.iter() {
    assert!(code.starts_with("/**\n * DO NOT MODIFY - This file has been generated by oas3-tsgen.\n *\n * Swagger Petstore 1.0.0\n"));
  }
}

#[test]
fn test_petstore_statistics() {
  let stats = generate(petstore()).stats;

  assert_eq!(stats.schemas_generated, 4);
  assert_eq!(stats.parameters_generated, 1);
  assert_eq!(stats.request_bodies_generated, 1);
  assert_eq!(stats.responses_generated, 13);
  assert_eq!(stats.types_generated(), 19);
  assert_eq!(stats.operations_converted, 4);
  assert_eq!(stats.client_methods_generated, 4);
  assert_eq!(stats.cycles_detected, 1);
  assert_eq!(stats.cycle_details, vec![vec!["Owner".to_string(), "Pet".to_string()]]);
  assert!(stats.warnings.is_empty(), "{:?}", stats.warnings);
}

#[test]
fn test_petstore_schemas() {
  let output = generate(petstore());
  let schemas = file(&output, GeneratedFileType::Schemas);

  assert!(schemas.contains("import type * as Schemas from \"./schemas\";\n"));
  assert!(schemas.contains(
    "export type Pet = {
  id: number;
  name: string;
  tag?: string | null;
  status?: \"available\" | \"pending\" | \"sold\";
  owner?: Schemas.Owner;
};"
  ));
  assert!(schemas.contains("export type Pets = Array<Schemas.Pet>;"));

  let parameters = file(&output, GeneratedFileType::Parameters);
  assert!(parameters.contains("/**\n * How many items to return at one time (max 100)\n */\nexport type Limit = number;\n"));
  assert!(!parameters.contains("import type"));

  let bodies = file(&output, GeneratedFileType::RequestBodies);
  assert!(bodies.contains("export type NewPet = Schemas.Pet;"));
}

#[test]
fn test_petstore_responses() {
  let output = generate(petstore());
  let responses = file(&output, GeneratedFileType::Responses);

  assert!(responses.contains(
    "import type * as Responses from \"./responses\";\nimport type * as Schemas from \"./schemas\";\n"
  ));
  assert!(responses.contains("export type listPetsResponse = listPets200 | listPetsdefault;"));
  assert!(responses.contains("export type listPets200 = {\n  kind: \"200\";\n  value: Schemas.Pets;\n};"));
  assert!(responses.contains("export type createPets201 = {\n  kind: \"201\";\n  value: any;\n};"));
  assert!(responses.contains("export type createPetsdefault = {\n  kind: \"default\";\n  value: Responses.Problem;\n};"));
  assert!(responses.contains("export type showPetById404 = {\n  kind: \"404\";\n  value: Responses.NotFound;\n};"));
  assert!(responses.contains("export type NotFound = Schemas.Error;"));

  let operation_types = responses.find("export type listPetsResponse").unwrap();
  let components = responses.find("export type NotFound").unwrap();
  assert!(operation_types < components);
}

#[test]
fn test_petstore_client() {
  let output = generate(petstore());
  let client = file(&output, GeneratedFileType::Client);

  assert!(client.contains(
    "import type * as Parameters from \"./models/parameters\";
import type * as RequestBodies from \"./models/requestBodies\";
import type * as Responses from \"./models/responses\";
"
  ));
  assert!(!client.contains("import type * as Schemas"));
  assert!(client.contains("readonly baseUrl: string = \"http://petstore.swagger.io/v1\";"));

  assert!(client.contains("    limit?: Parameters.Limit;\n  }): Promise<Responses.listPetsResponse> {"));
  assert!(client.contains("this.performRequest(\"GET\", \"/pets\", {}, {}, queryParams, null, {"));

  assert!(client.contains("  createPets(body: RequestBodies.NewPet): Promise<Responses.createPetsResponse> {"));
  assert!(client.contains("this.performRequest(\"POST\", \"/pets\", {}, {}, {}, body, {\n      \"201\": null,\n      default: {"));

  assert!(client.contains("    \"x-request-id\"?: string;\n  }): Promise<Responses.showPetByIdResponse> {"));
  assert!(client.contains("this.performRequest(\"GET\", \"/pets/{petId}\", pathParams, headerParams, {}, null, {"));

  assert!(client.contains("   * @deprecated\n   */\n  deletePet(pathParams: {"));
  assert!(client.contains(
    "this.performRequest(\"DELETE\", \"/pets/{petId}\", pathParams, {}, {}, null, {\n      \"204\": null,\n    })"
  ));

  let list = client.find("  listPets(").unwrap();
  let create = client.find("  createPets(").unwrap();
  let show = client.find("  showPetById(").unwrap();
  let delete = client.find("  deletePet(").unwrap();
  assert!(list < create && create < show && show < delete);
}

#[test]
fn test_petstore_descriptors_inline_references() {
  let output = generate(petstore());
  let client = file(&output, GeneratedFileType::Client);

  assert!(client.contains("$schema: \"http://json-schema.org/draft-04/schema#\","));
  assert!(client.contains("type: [\"string\", \"null\"],"));
  assert!(client.contains("enum: [\"available\", \"pending\", \"sold\"],"));
  assert!(!client.contains("$ref"));
  assert!(!client.contains("int64"));
}

#[test]
fn test_generation_is_deterministic() {
  let first = generate(petstore());
  let second = generate(petstore());
  assert_eq!(first.files, second.files);
}

#[test]
fn test_base_url_override_and_default() {
  let output = Orchestrator::new(petstore(), Some("https://api.example.com".to_string()))
    .generate()
    .unwrap();
  assert!(file(&output, GeneratedFileType::Client).contains("readonly baseUrl: string = \"https://api.example.com\";"));

  let output = generate(parse_spec(r#"{"openapi": "3.0.0", "paths": {}}"#));
  assert!(file(&output, GeneratedFileType::Client).contains("readonly baseUrl: string = \"http://localhost:9000\";"));
}

#[test]
fn test_empty_document_still_generates_every_file() {
  let output = generate(parse_spec(r#"{"openapi": "3.0.3"}"#));
  assert_eq!(output.files.len(), 5);
  assert!(file(&output, GeneratedFileType::Schemas).ends_with("\nexport {};\n"));
  assert!(file(&output, GeneratedFileType::Client).contains("export class Client {\n"));
  assert_eq!(output.stats.client_methods_generated, 0);
}

#[test]
fn test_missing_operation_id_aborts() {
  let document = parse_spec(
    &json!({
      "openapi": "3.0.0",
      "paths": {"/pets": {"get": {"operationId": "listPets"}, "post": {"responses": {}}}}
    })
    .to_string(),
  );

  let err = Orchestrator::new(document, None).generate().unwrap_err();
  assert_eq!(
    err,
    GenerationError::MissingOperationId {
      method: HttpMethod::Post,
      path: "/pets".to_string(),
    }
  );
}

#[test]
fn test_duplicate_operation_id_is_rejected() {
  let document = parse_spec(
    &json!({
      "openapi": "3.0.0",
      "paths": {
        "/pets": {"get": {"operationId": "getPets"}},
        "/animals": {"get": {"operationId": "getPets"}}
      }
    })
    .to_string(),
  );

  let err = Orchestrator::new(document, None).compile().unwrap_err();
  assert_eq!(
    err,
    GenerationError::DuplicateOperationId {
      operation_id: "getPets".to_string()
    }
  );
}

#[test]
fn test_response_name_collision_is_rejected() {
  let document = parse_spec(
    &json!({
      "openapi": "3.0.0",
      "paths": {"/pets": {"get": {"operationId": "listPets", "responses": {"200": {"description": "ok"}}}}},
      "components": {"responses": {"listPets200": {"description": "clash"}}}
    })
    .to_string(),
  );

  let err = Orchestrator::new(document, None).compile().unwrap_err();
  assert_eq!(
    err,
    GenerationError::DuplicateTypeName {
      category: ComponentCategory::Responses,
      name: "listPets200".to_string(),
    }
  );
}

#[test]
fn test_dangling_component_alias_aborts() {
  let document = parse_spec(
    &json!({
      "openapi": "3.0.0",
      "components": {"schemas": {"Alias": {"$ref": "#/components/schemas/Missing"}}}
    })
    .to_string(),
  );

  let err = Orchestrator::new(document, None).compile().unwrap_err();
  assert_eq!(
    err,
    GenerationError::Resolve(ResolveError::NotFound {
      category: ComponentCategory::Schemas,
      name: "Missing".to_string(),
    })
  );
}

#[test]
fn test_skipped_items_are_reported() {
  let document = parse_spec(
    &json!({
      "openapi": "3.0.0",
      "paths": {
        "/shared": {"$ref": "#/paths/~1pets"},
        "/pets": {
          "head": {"operationId": "headPets"},
          "get": {
            "operationId": "listPets",
            "parameters": [{"name": "session", "in": "cookie"}]
          }
        }
      }
    })
    .to_string(),
  );

  let compiled = Orchestrator::new(document, None).compile().unwrap();
  assert_eq!(compiled.client.methods.len(), 1);
  assert_eq!(
    compiled.stats.warnings,
    [
      GenerationWarning::PathItemReference {
        path: "/shared".to_string(),
        reference: "#/paths/~1pets".to_string(),
      },
      GenerationWarning::UnsupportedMethod {
        method: "HEAD".to_string(),
        path: "/pets".to_string(),
      },
      GenerationWarning::CookieParameter {
        operation_id: "listPets".to_string(),
        name: "session".to_string(),
      },
    ]
  );
  assert_eq!(
    compiled.stats.warnings.iter().filter(|w| w.is_skipped_item()).count(),
    2
  );
}
