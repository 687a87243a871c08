use serde_json::json;

use crate::generator::codegen::literal::value_expr;

#[test]
fn test_scalars() {
  assert_eq!(value_expr(&json!(null), 0), "null");
  assert_eq!(value_expr(&json!(true), 0), "true");
  assert_eq!(value_expr(&json!(42), 0), "42");
  assert_eq!(value_expr(&json!("a\"b"), 0), r#""a\"b""#);
}

#[test]
fn test_object_entries_one_per_line() {
  let value = json!({"type": ["string", "null"], "required": ["a"], "items": {}, "x-kind": "pet"});
  let expected = "{\n  type: [\"string\", null],\n  required: [\"a\"],\n  items: {},\n  \"x-kind\": \"pet\",\n}";
  assert_eq!(value_expr(&value, 0), expected);
}

#[test]
fn test_arrays_of_objects_nest() {
  let value = json!({"oneOf": [{"type": "string"}]});
  let expected = "{\n  oneOf: [\n    {\n      type: \"string\",\n    },\n  ],\n}";
  assert_eq!(value_expr(&value, 0), expected);
}

#[test]
fn test_closing_brace_follows_level() {
  let value = json!({"200": {}});
  assert_eq!(value_expr(&value, 2), "{\n      \"200\": {},\n    }");
  assert_eq!(value_expr(&json!([]), 1), "[]");
}
