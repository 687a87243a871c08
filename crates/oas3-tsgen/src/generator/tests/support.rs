use crate::{
  generator::{
    codegen::GeneratedFileType,
    orchestrator::{GeneratedOutput, Orchestrator},
  },
  openapi::Document,
  utils::{document::DocumentFormat, parse_document},
};

pub(super) const PETSTORE: &str = include_str!("../../../fixtures/petstore.yaml");

pub(super) fn parse_spec(spec_json: &str) -> Document {
  parse_document(spec_json.as_bytes(), DocumentFormat::Json).expect("failed to parse test spec")
}

pub(super) fn petstore() -> Document {
  parse_document(PETSTORE.as_bytes(), DocumentFormat::Yaml).expect("failed to parse petstore fixture")
}

pub(super) fn generate(document: Document) -> GeneratedOutput {
  Orchestrator::new(document, None).generate().expect("generation should succeed")
}

pub(super) fn file(output: &GeneratedOutput, file_type: GeneratedFileType) -> &str {
  output
    .files
    .code(file_type)
    .map(String::as_str)
    .unwrap_or_else(|| panic!("{file_type} was not generated"))
}
