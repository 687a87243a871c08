use crate::reserved::to_type_name;

const AGGREGATE_SUFFIX: &str = "Response";

/// `<operationId>Response`, the union over all of an operation's status variants.
pub(crate) fn response_type_name(operation_id: &str) -> String {
  to_type_name(&format!("{operation_id}{AGGREGATE_SUFFIX}"))
}

/// `<operationId><statusKey>`, e.g. `listPets200` or `listPetsdefault`.
pub(crate) fn response_variant_name(operation_id: &str, status_key: &str) -> String {
  to_type_name(&format!("{operation_id}{status_key}"))
}
