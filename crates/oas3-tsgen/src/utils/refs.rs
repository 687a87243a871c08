const COMPONENTS_SEGMENT: &str = "components";

/// A `$ref` split into its category segment and leaf name.
///
/// Local component references have the shape `#/components/<category>/<name>`.
/// The category is kept as written so callers can report unexpected values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComponentRef<'a> {
  pub(crate) category: &'a str,
  pub(crate) name: String,
}

/// Parses a local component reference.
///
/// Returns `None` for external references (`other.yaml#/...`), references outside
/// `#/components`, and pointers with missing or extra segments. JSON-pointer
/// escapes in the leaf (`~1` for `/`, `~0` for `~`) are decoded.
pub(crate) fn parse_component_ref(ref_path: &str) -> Option<ComponentRef<'_>> {
  let mut segments = ref_path.split('/');

  if segments.next()? != "#" || segments.next()? != COMPONENTS_SEGMENT {
    return None;
  }

  let category = segments.next().filter(|s| !s.is_empty())?;
  let name = segments.next().filter(|s| !s.is_empty())?;
  if segments.next().is_some() {
    return None;
  }

  Some(ComponentRef {
    category,
    name: unescape_pointer_segment(name),
  })
}

fn unescape_pointer_segment(segment: &str) -> String {
  segment.replace("~1", "/").replace("~0", "~")
}
