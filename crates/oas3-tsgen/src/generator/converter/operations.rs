//! Compiles one HTTP operation into a client method plus its response types.

use indexmap::IndexMap;

use super::{
  components::{parameter_type, request_body_type, response_type},
  json_schema::DescriptorBuilder,
  references::{ResolveError, ResolvedComponents},
};
use crate::{
  generator::{
    ast::{
      ArgValue, BODY, DispatchCall, Documentation, HEADER_PARAMS, Keyword, MethodDef, MethodParam, PATH_PARAMS,
      PropertySignature, QUERY_PARAMS, TypeAliasDef, TypeName, TypeNode,
    },
    errors::GenerationError,
    metrics::GenerationWarning,
    naming::{
      identifiers::method_name,
      responses::{response_type_name, response_variant_name},
    },
  },
  openapi::{ComponentCategory, HttpMethod, ObjectOrReference, Operation, Parameter, ParameterLocation},
  utils::doc_lines,
};

const KIND_FIELD: &str = "kind";
const VALUE_FIELD: &str = "value";

/// Everything generated for a single operation.
#[derive(Debug, Clone)]
pub(crate) struct OperationOutput {
  pub(crate) method: MethodDef,
  /// `<op>Response` followed by one `<op><status>` variant per response key.
  pub(crate) response_types: Vec<TypeAliasDef>,
  pub(crate) warnings: Vec<GenerationWarning>,
}

/// Parameters split by location, each bucket in declaration order.
#[derive(Debug, Default)]
struct ParameterBuckets {
  path: Vec<PropertySignature>,
  header: Vec<PropertySignature>,
  query: Vec<PropertySignature>,
}

pub(crate) struct OperationCompiler<'a> {
  components: &'a ResolvedComponents,
}

impl<'a> OperationCompiler<'a> {
  pub(crate) fn new(components: &'a ResolvedComponents) -> Self {
    Self { components }
  }

  /// Compiles `operation`, declared at `path` with `inherited` path-level parameters.
  ///
  /// Fails before producing anything when the operation has no `operationId`.
  pub(crate) fn compile(
    &self,
    path: &str,
    method: HttpMethod,
    inherited: &[ObjectOrReference<Parameter>],
    operation: &Operation,
  ) -> Result<OperationOutput, GenerationError> {
    let operation_id = operation
      .operation_id
      .as_deref()
      .ok_or_else(|| GenerationError::MissingOperationId {
        method,
        path: path.to_string(),
      })?;

    self
      .compile_named(operation_id, path, method, inherited, operation)
      .map_err(|source| GenerationError::Operation {
        operation_id: operation_id.to_string(),
        source,
      })
  }

  fn compile_named(
    &self,
    operation_id: &str,
    path: &str,
    method: HttpMethod,
    inherited: &[ObjectOrReference<Parameter>],
    operation: &Operation,
  ) -> Result<OperationOutput, ResolveError> {
    let mut warnings = vec![];

    let buckets = self.partition_parameters(operation_id, inherited, &operation.parameters, &mut warnings)?;
    let mut params = vec![];
    let path_params = bucket_argument(PATH_PARAMS, buckets.path, &mut params);
    let header_params = bucket_argument(HEADER_PARAMS, buckets.header, &mut params);
    let query_params = bucket_argument(QUERY_PARAMS, buckets.query, &mut params);

    let body = match &operation.request_body {
      Some(request_body) => {
        let resolved = self.components.deref(request_body)?;
        if resolved.json_schema().is_none() && !resolved.content.is_empty() {
          warnings.push(GenerationWarning::NonJsonContent {
            operation_id: operation_id.to_string(),
            location: "request body".to_string(),
          });
        }
        params.push(MethodParam {
          name: BODY,
          type_node: request_body_type(request_body),
        });
        ArgValue::Param(BODY)
      }
      None => ArgValue::Null,
    };

    let (response_types, response_schemas) = self.compile_responses(operation_id, operation, &mut warnings)?;
    let aggregate_name = response_type_name(operation_id);

    let docs = Documentation::from_lines(
      [&operation.summary, &operation.description]
        .into_iter()
        .flatten()
        .flat_map(|text| doc_lines(text)),
    );

    let method_def = MethodDef::builder()
      .name(method_name(operation_id))
      .docs(docs)
      .deprecated(operation.deprecated)
      .params(params)
      .response_type(TypeNode::Reference(TypeName::qualified(
        ComponentCategory::Responses.namespace(),
        aggregate_name,
      )))
      .call(DispatchCall {
        method,
        path: path.to_string(),
        path_params,
        header_params,
        query_params,
        body,
        response_schemas,
      })
      .build();

    Ok(OperationOutput {
      method: method_def,
      response_types,
      warnings,
    })
  }

  /// Merges inherited and operation parameters, inherited first, and splits them by location.
  fn partition_parameters(
    &self,
    operation_id: &str,
    inherited: &[ObjectOrReference<Parameter>],
    own: &[ObjectOrReference<Parameter>],
    warnings: &mut Vec<GenerationWarning>,
  ) -> Result<ParameterBuckets, ResolveError> {
    let mut buckets = ParameterBuckets::default();

    for parameter in inherited.iter().chain(own) {
      let resolved = self.components.deref(parameter)?;
      let signature = PropertySignature::builder()
        .name(&resolved.name)
        .optional(!resolved.required)
        .type_node(parameter_type(parameter))
        .docs(Documentation::from_optional(resolved.description.as_ref()))
        .deprecated(resolved.deprecated)
        .build();

      match resolved.location {
        ParameterLocation::Path => buckets.path.push(signature),
        ParameterLocation::Header => buckets.header.push(signature),
        ParameterLocation::Query => buckets.query.push(signature),
        ParameterLocation::Cookie => warnings.push(GenerationWarning::CookieParameter {
          operation_id: operation_id.to_string(),
          name: resolved.name.clone(),
        }),
      }
    }

    Ok(buckets)
  }

  fn compile_responses(
    &self,
    operation_id: &str,
    operation: &Operation,
    warnings: &mut Vec<GenerationWarning>,
  ) -> Result<(Vec<TypeAliasDef>, IndexMap<String, serde_json::Value>), ResolveError> {
    let mut descriptors = DescriptorBuilder::new(self.components);
    let mut response_schemas = IndexMap::new();
    let mut variants = vec![];

    for (status, response) in &operation.responses {
      let resolved = self.components.deref(response)?;
      // Declared statuses without a JSON schema map to null so the client stops at them.
      let descriptor = match resolved.json_schema() {
        Some(schema) => descriptors.build(schema)?,
        None => {
          if !resolved.content.is_empty() {
            warnings.push(GenerationWarning::NonJsonContent {
              operation_id: operation_id.to_string(),
              location: format!("response {status}"),
            });
          }
          serde_json::Value::Null
        }
      };
      response_schemas.insert(status.clone(), descriptor);

      let record = TypeNode::Record(vec![
        PropertySignature::builder()
          .name(KIND_FIELD)
          .type_node(TypeNode::Literal(status.clone()))
          .build(),
        PropertySignature::builder()
          .name(VALUE_FIELD)
          .type_node(response_type(response))
          .build(),
      ]);
      variants.push(
        TypeAliasDef::builder()
          .name(response_variant_name(operation_id, status))
          .docs(Documentation::from_optional(resolved.description.as_ref()))
          .target(record)
          .build(),
      );
    }

    let aggregate = if variants.is_empty() {
      TypeNode::Keyword(Keyword::Never)
    } else {
      TypeNode::Union(
        variants
          .iter()
          .map(|variant| TypeNode::Reference(TypeName::local(&variant.name)))
          .collect(),
      )
    };

    let mut response_types = Vec::with_capacity(variants.len() + 1);
    response_types.push(
      TypeAliasDef::builder()
        .name(response_type_name(operation_id))
        .target(aggregate)
        .build(),
    );
    response_types.extend(variants);

    Ok((response_types, response_schemas))
  }
}

/// Allocates the method parameter for a non-empty bucket and returns the call argument.
fn bucket_argument(name: &'static str, members: Vec<PropertySignature>, params: &mut Vec<MethodParam>) -> ArgValue {
  if members.is_empty() {
    return ArgValue::EmptyObject;
  }
  params.push(MethodParam {
    name,
    type_node: TypeNode::Record(members),
  });
  ArgValue::Param(name)
}
