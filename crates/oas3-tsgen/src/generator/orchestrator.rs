//! Drives the whole document through the compiler.
//!
//! Operations are compiled first so a missing `operationId` or a dangling
//! reference aborts the run before any declaration is assembled. Emission only
//! starts once every model file and the client class compiled.

use std::collections::HashSet;

use super::{
  ast::{ClientDef, MethodDef, ModelFile, TypeAliasDef},
  codegen::{ClientFile, CodeMetadata, Emit, GeneratedFileType, GeneratedFiles, ModelSource},
  converter::{
    ModelFileBuilder, OperationCompiler, ResolvedComponents, render_parameters, render_request_bodies,
    render_responses, render_schemas,
  },
  errors::GenerationError,
  metrics::{GenerationStats, GenerationWarning},
  schema_graph::SchemaGraph,
};
use crate::openapi::{ComponentCategory, Document};

/// The compiled declaration set, before emission.
#[derive(Debug, Clone)]
pub struct CompiledDocument {
  /// Schemas, parameters, request bodies and responses, in that order.
  pub models: Vec<ModelFile>,
  pub client: ClientDef,
  pub stats: GenerationStats,
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub files: GeneratedFiles,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  document: Document,
  base_url: Option<String>,
}

impl Orchestrator {
  /// `base_url` overrides the document's first server URL when set.
  pub fn new(document: Document, base_url: Option<String>) -> Self {
    Self { document, base_url }
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata {
      title: self.document.info.title.clone(),
      version: self.document.info.version.clone(),
      description: self.document.info.description.clone(),
    }
  }

  pub fn compile(&self) -> Result<CompiledDocument, GenerationError> {
    let components = &self.document.components;
    let resolved = ResolvedComponents::build(components)?;

    let mut stats = GenerationStats::default();
    stats.record_cycles(SchemaGraph::build(&components.schemas).detect_cycles());

    let (methods, operation_responses) = self.compile_operations(&resolved, &mut stats)?;

    let mut schemas = ModelFileBuilder::new(ComponentCategory::Schemas);
    schemas.extend(render_schemas(&components.schemas))?;

    let mut parameters = ModelFileBuilder::new(ComponentCategory::Parameters);
    parameters.extend(render_parameters(&components.parameters))?;

    let mut request_bodies = ModelFileBuilder::new(ComponentCategory::RequestBodies);
    request_bodies.extend(render_request_bodies(&components.request_bodies))?;

    let mut responses = ModelFileBuilder::new(ComponentCategory::Responses);
    responses.extend(operation_responses)?;
    responses.extend(render_responses(&components.responses))?;

    let models: Vec<ModelFile> = [schemas, parameters, request_bodies, responses]
      .into_iter()
      .map(ModelFileBuilder::finish)
      .collect();
    for model in &models {
      stats.record_model_file(model);
    }

    let client = ClientDef::builder()
      .info(&self.document.info)
      .servers(&self.document.servers)
      .maybe_base_url(self.base_url.clone())
      .methods(methods)
      .build();
    stats.record_client_methods(client.methods.len());

    Ok(CompiledDocument { models, client, stats })
  }

  fn compile_operations(
    &self,
    resolved: &ResolvedComponents,
    stats: &mut GenerationStats,
  ) -> Result<(Vec<MethodDef>, Vec<TypeAliasDef>), GenerationError> {
    let compiler = OperationCompiler::new(resolved);
    let mut method_names = HashSet::new();
    let mut methods = vec![];
    let mut response_types = vec![];

    for (path, item) in &self.document.paths {
      if let Some(reference) = &item.ref_path {
        stats.record_warning(GenerationWarning::PathItemReference {
          path: path.clone(),
          reference: reference.clone(),
        });
      }
      for method in item.unsupported_methods() {
        stats.record_warning(GenerationWarning::UnsupportedMethod {
          method: method.to_string(),
          path: path.clone(),
        });
      }

      for (method, operation) in item.operations() {
        let output = compiler.compile(path, method, &item.parameters, operation)?;
        if !method_names.insert(output.method.name.clone()) {
          return Err(GenerationError::DuplicateOperationId {
            operation_id: operation.operation_id.clone().unwrap_or_default(),
          });
        }

        stats.record_operation();
        stats.record_warnings(output.warnings);
        response_types.extend(output.response_types);
        methods.push(output.method);
      }
    }

    Ok((methods, response_types))
  }

  /// Compiles the document and emits the four model files plus the client.
  pub fn generate(&self) -> Result<GeneratedOutput, GenerationError> {
    let compiled = self.compile()?;
    let metadata = self.metadata();

    let mut files = GeneratedFiles::default();
    for model in &compiled.models {
      let source = ModelSource {
        metadata: &metadata,
        file: model,
      };
      files.insert(GeneratedFileType::from_category(model.category), source.to_source());
    }
    let client = ClientFile {
      metadata: &metadata,
      client: &compiled.client,
    };
    files.insert(GeneratedFileType::Client, client.to_source());

    Ok(GeneratedOutput {
      files,
      stats: compiled.stats,
    })
  }
}
