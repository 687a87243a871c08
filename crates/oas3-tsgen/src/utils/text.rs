/// Splits free-form documentation into JSDoc-safe lines.
///
/// Escaped newlines are expanded and a literal `*/` is broken up so it cannot
/// terminate the surrounding comment.
#[must_use]
pub(crate) fn doc_lines(input: &str) -> Vec<String> {
  input
    .replace("\\n", "\n")
    .replace("*/", "*\\/")
    .lines()
    .map(|line| line.trim_end().to_string())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_doc_lines_escapes_comment_terminator() {
    assert_eq!(doc_lines("ends */ here\\nnext"), vec!["ends *\\/ here", "next"]);
  }
}
