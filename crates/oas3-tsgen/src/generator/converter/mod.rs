pub(crate) mod components;
pub(crate) mod json_schema;
pub(crate) mod operations;
pub(crate) mod references;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;

pub(crate) use components::{
  ModelFileBuilder, render_parameters, render_request_bodies, render_responses, render_schemas,
};
pub(crate) use operations::{OperationCompiler, OperationOutput};
pub use references::{ResolveError, ResolvedComponents};
