use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use regex::Regex;

/// Words that cannot name a type alias, a class member binding or a variable.
static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do", "else", "enum",
    "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof", "new", "null",
    "return", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
    // strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static", "yield",
    // predefined type names
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "undefined", "unknown",
  ]
  .into_iter()
  .collect()
});

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_$]+").unwrap());

pub(crate) fn is_reserved(name: &str) -> bool {
  RESERVED_WORDS.contains(name)
}

/// Whether `name` can be written bare as a TypeScript identifier.
pub(crate) fn is_valid_identifier(name: &str) -> bool {
  IDENTIFIER_RE.is_match(name) && !is_reserved(name)
}

/// Whether `name` can be used unquoted as a property key. Reserved words are allowed there.
pub(crate) fn is_bare_property_key(name: &str) -> bool {
  IDENTIFIER_RE.is_match(name)
}

/// Converts a component name or operation id into a TypeScript identifier.
///
/// Valid identifiers are returned unchanged. Otherwise:
/// 1. Transliterates to ASCII.
/// 2. Replaces each run of invalid characters with `_`.
/// 3. Prefixes `_` if the result starts with a digit or is empty.
/// 4. Suffixes `_` if the result is a reserved word.
pub(crate) fn to_type_name(name: &str) -> String {
  if is_valid_identifier(name) {
    return name.to_string();
  }

  let ascii = any_ascii(name);
  let mut sanitized = INVALID_CHARS_RE.replace_all(&ascii, "_").into_owned();

  if sanitized.is_empty() || sanitized.starts_with(|c: char| c.is_ascii_digit()) {
    sanitized.insert(0, '_');
  }

  if is_reserved(&sanitized) {
    sanitized.push('_');
  }

  sanitized
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_identifiers() {
    assert!(is_valid_identifier("Pet"));
    assert!(is_valid_identifier("_private"));
    assert!(is_valid_identifier("$value"));
    assert!(is_valid_identifier("listPets200"));
    assert!(!is_valid_identifier("x-request-id"));
    assert!(!is_valid_identifier("200"));
    assert!(!is_valid_identifier(""));
    assert!(!is_valid_identifier("default"));
    assert!(!is_valid_identifier("has space"));
  }

  #[test]
  fn test_to_type_name_keeps_valid_names() {
    assert_eq!(to_type_name("Pet"), "Pet");
    assert_eq!(to_type_name("listPets"), "listPets");
  }

  #[test]
  fn test_to_type_name_sanitizes() {
    assert_eq!(to_type_name("pet-item"), "pet_item");
    assert_eq!(to_type_name("pet..item"), "pet_item");
    assert_eq!(to_type_name("2fa"), "_2fa");
    assert_eq!(to_type_name("default"), "default_");
    assert_eq!(to_type_name("Café"), "Cafe");
    assert_eq!(to_type_name(""), "_");
  }

  #[test]
  fn test_bare_property_keys() {
    assert!(is_bare_property_key("default"));
    assert!(is_bare_property_key("petId"));
    assert!(!is_bare_property_key("x-request-id"));
    assert!(!is_bare_property_key("2xx"));
  }
}
