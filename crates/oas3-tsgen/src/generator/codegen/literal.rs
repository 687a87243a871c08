use serde_json::Value;

use super::{
  indentation,
  types::{property_key, quote_string},
};

/// Renders a JSON value as a TypeScript object literal.
///
/// Objects print one entry per line; arrays of scalars stay on one line.
pub(crate) fn value_expr(value: &Value, level: usize) -> String {
  match value {
    Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
    Value::String(text) => quote_string(text),
    Value::Array(items) if items.is_empty() => "[]".to_string(),
    Value::Array(items) if items.iter().all(is_scalar) => {
      let items: Vec<String> = items.iter().map(|item| value_expr(item, level)).collect();
      format!("[{}]", items.join(", "))
    }
    Value::Array(items) => {
      let inner = indentation(level + 1);
      let items: Vec<String> = items
        .iter()
        .map(|item| format!("{inner}{},\n", value_expr(item, level + 1)))
        .collect();
      format!("[\n{}{}]", items.concat(), indentation(level))
    }
    Value::Object(entries) if entries.is_empty() => "{}".to_string(),
    Value::Object(entries) => {
      let inner = indentation(level + 1);
      let entries: Vec<String> = entries
        .iter()
        .map(|(key, entry)| format!("{inner}{}: {},\n", property_key(key), value_expr(entry, level + 1)))
        .collect();
      format!("{{\n{}{}}}", entries.concat(), indentation(level))
    }
  }
}

fn is_scalar(value: &Value) -> bool {
  !matches!(value, Value::Array(_) | Value::Object(_))
}
