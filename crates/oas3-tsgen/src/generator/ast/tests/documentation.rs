use crate::generator::ast::Documentation;

#[test]
fn from_raw_handles_newlines() {
  let doc = Documentation::from_raw("Line 1\nLine 2");
  assert_eq!(doc.lines(), &["Line 1", "Line 2"]);
}

#[test]
fn from_raw_handles_escaped_newlines() {
  let doc = Documentation::from_raw("Line 1\\nLine 2");
  assert_eq!(doc.lines(), &["Line 1", "Line 2"]);
}

#[test]
fn from_optional_none_produces_empty() {
  let doc = Documentation::from_optional(None);
  assert!(doc.is_empty());
}
