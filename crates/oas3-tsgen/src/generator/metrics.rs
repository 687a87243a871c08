use strum::Display;

use super::ast::ModelFile;
use crate::openapi::ComponentCategory;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub schemas_generated: usize,
  pub parameters_generated: usize,
  pub request_bodies_generated: usize,
  pub responses_generated: usize,
  pub operations_converted: usize,
  pub client_methods_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn types_generated(&self) -> usize {
    self.schemas_generated + self.parameters_generated + self.request_bodies_generated + self.responses_generated
  }

  pub fn record_model_file(&mut self, file: &ModelFile) {
    let count = match file.category {
      ComponentCategory::Schemas => &mut self.schemas_generated,
      ComponentCategory::Parameters => &mut self.parameters_generated,
      ComponentCategory::RequestBodies => &mut self.request_bodies_generated,
      ComponentCategory::Responses => &mut self.responses_generated,
    };
    *count += file.len();
  }

  pub fn record_operation(&mut self) {
    self.operations_converted += 1;
  }

  pub fn record_client_methods(&mut self, count: usize) {
    self.client_methods_generated += count;
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    self.cycles_detected += cycles.len();
    self.cycle_details.extend(cycles);
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "'{method} {path}': the client only generates GET, PUT, POST, PATCH and DELETE")]
  UnsupportedMethod { method: String, path: String },
  #[strum(to_string = "[{operation_id}] cookie parameter '{name}' is not sent by the client")]
  CookieParameter { operation_id: String, name: String },
  #[strum(to_string = "Path '{path}': $ref '{reference}' is not followed, only inline operations are generated")]
  PathItemReference { path: String, reference: String },
  #[strum(to_string = "[{operation_id}] {location} has content but no JSON schema, typed as any")]
  NonJsonContent { operation_id: String, location: String },
}

impl GenerationWarning {
  /// Whether the warning means part of the input was left out of the client.
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::UnsupportedMethod { .. } | Self::CookieParameter { .. })
  }
}
