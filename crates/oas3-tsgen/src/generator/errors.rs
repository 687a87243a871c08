use super::converter::ResolveError;
use crate::openapi::{ComponentCategory, HttpMethod};

/// Fatal input errors. Any of them aborts the whole compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
  #[error("operation '{method} {path}' has no operationId")]
  MissingOperationId { method: HttpMethod, path: String },
  #[error("operationId '{operation_id}' is used by more than one operation")]
  DuplicateOperationId { operation_id: String },
  #[error("type '{name}' is declared twice in {category}")]
  DuplicateTypeName { category: ComponentCategory, name: String },
  #[error("operation '{operation_id}': {source}")]
  Operation {
    operation_id: String,
    #[source]
    source: ResolveError,
  },
  #[error(transparent)]
  Resolve(#[from] ResolveError),
}
