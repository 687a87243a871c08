pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub(crate) mod errors;
pub(crate) mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod schema_graph;

#[cfg(test)]
mod tests;
