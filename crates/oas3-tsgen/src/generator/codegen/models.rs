use strum::IntoEnumIterator;

use super::{CodeMetadata, CodeWriter, Emit, types::quote_string};
use crate::{generator::ast::ModelFile, openapi::ComponentCategory};

/// A model file together with the header it is emitted under.
pub(crate) struct ModelSource<'a> {
  pub(crate) metadata: &'a CodeMetadata,
  pub(crate) file: &'a ModelFile,
}

/// `import type * as <Namespace> from '<module>'` for every namespace in use.
pub(crate) fn write_namespace_imports<'a>(
  out: &mut CodeWriter,
  namespaces: impl IntoIterator<Item = &'a str>,
  module_dir: &str,
) {
  let mut wrote_any = false;
  for namespace in namespaces {
    let Some(category) = ComponentCategory::iter().find(|c| c.namespace() == namespace) else {
      continue;
    };
    let module = format!("{module_dir}/{}", category.module_name());
    out.line(&format!("import type * as {namespace} from {};", quote_string(&module)));
    wrote_any = true;
  }
  if wrote_any {
    out.blank();
  }
}

impl Emit for ModelSource<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    self.metadata.write_header(out);
    out.blank();
    write_namespace_imports(out, self.file.referenced_namespaces(), ".");

    for (index, declaration) in self.file.declarations.iter().enumerate() {
      if index > 0 {
        out.blank();
      }
      declaration.emit(out);
    }

    if self.file.is_empty() {
      out.line("export {};");
    }
  }
}
