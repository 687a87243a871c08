//! TypeScript emission for the generated declaration set.

mod client;
mod literal;
mod models;
mod types;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use indexmap::IndexMap;

use super::ast::Documentation;
use crate::{openapi::ComponentCategory, utils::doc_lines};

const INDENT: &str = "  ";

/// Turns an AST node into TypeScript source.
pub(crate) trait Emit {
  fn emit(&self, out: &mut CodeWriter);

  fn to_source(&self) -> String {
    let mut out = CodeWriter::default();
    self.emit(&mut out);
    out.finish()
  }
}

/// Line-oriented buffer that tracks the current indentation level.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
  buf: String,
  level: usize,
}

impl CodeWriter {
  pub(crate) fn level(&self) -> usize {
    self.level
  }

  pub(crate) fn line(&mut self, text: &str) {
    if text.is_empty() {
      self.buf.push('\n');
      return;
    }
    for _ in 0..self.level {
      self.buf.push_str(INDENT);
    }
    self.buf.push_str(text);
    self.buf.push('\n');
  }

  pub(crate) fn blank(&mut self) {
    self.buf.push('\n');
  }

  /// Writes a multi-line block, indenting every line at the current level.
  pub(crate) fn lines(&mut self, text: &str) {
    for line in text.split('\n') {
      self.line(line);
    }
  }

  pub(crate) fn indent(&mut self) {
    self.level += 1;
  }

  pub(crate) fn dedent(&mut self) {
    self.level = self.level.saturating_sub(1);
  }

  pub(crate) fn docs(&mut self, docs: &Documentation, deprecated: bool) {
    if docs.is_empty() && !deprecated {
      return;
    }
    self.line("/**");
    for line in docs.lines() {
      if line.is_empty() {
        self.line(" *");
      } else {
        self.line(&format!(" * {line}"));
      }
    }
    if deprecated {
      self.line(" * @deprecated");
    }
    self.line(" */");
  }

  pub(crate) fn finish(self) -> String {
    self.buf
  }
}

pub(crate) fn indentation(level: usize) -> String {
  INDENT.repeat(level)
}

/// Title and version of the API, written into every file header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

impl CodeMetadata {
  pub(crate) fn write_header(&self, out: &mut CodeWriter) {
    out.line("/**");
    out.line(" * DO NOT MODIFY - This file has been generated by oas3-tsgen.");
    let api = format!("{} {}", self.title, self.version);
    if !api.trim().is_empty() {
      out.line(" *");
      out.line(&format!(" * {}", api.trim()));
    }
    if let Some(description) = &self.description {
      out.line(" *");
      for line in doc_lines(description) {
        out.line(format!(" * {line}").trim_end());
      }
    }
    out.line(" */");
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum GeneratedFileType {
  Schemas,
  Parameters,
  RequestBodies,
  Responses,
  Client,
}

impl GeneratedFileType {
  pub fn from_category(category: ComponentCategory) -> Self {
    match category {
      ComponentCategory::Schemas => Self::Schemas,
      ComponentCategory::Parameters => Self::Parameters,
      ComponentCategory::RequestBodies => Self::RequestBodies,
      ComponentCategory::Responses => Self::Responses,
    }
  }

  /// Location of the file relative to the output directory.
  pub fn relative_path(self) -> PathBuf {
    match self {
      Self::Schemas => models_path(ComponentCategory::Schemas),
      Self::Parameters => models_path(ComponentCategory::Parameters),
      Self::RequestBodies => models_path(ComponentCategory::RequestBodies),
      Self::Responses => models_path(ComponentCategory::Responses),
      Self::Client => PathBuf::from("client.ts"),
    }
  }
}

pub const MODELS_DIR: &str = "models";

fn models_path(category: ComponentCategory) -> PathBuf {
  PathBuf::from(MODELS_DIR).join(format!("{}.ts", category.module_name()))
}

/// Generated sources keyed by file, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
  files: IndexMap<GeneratedFileType, String>,
}

impl GeneratedFiles {
  pub(crate) fn insert(&mut self, file_type: GeneratedFileType, code: String) {
    self.files.insert(file_type, code);
  }

  pub fn code(&self, file_type: GeneratedFileType) -> Option<&String> {
    self.files.get(&file_type)
  }

  pub fn iter(&self) -> impl Iterator<Item = (GeneratedFileType, &String)> {
    self.files.iter().map(|(file_type, code)| (*file_type, code))
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }
}

pub(crate) use client::ClientFile;
pub(crate) use models::ModelSource;
