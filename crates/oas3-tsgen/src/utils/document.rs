use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde::{Deserialize, de::DeserializeOwned};

use crate::openapi::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
  #[default]
  Json,
  Yaml,
}

impl DocumentFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  #[error("invalid JSON document at '{path}': {message}")]
  Json { path: String, message: String },
  #[error("invalid YAML document at '{path}': {message}")]
  Yaml { path: String, message: String },
  #[error("document is not valid UTF-8: {0}")]
  Utf8(#[from] std::str::Utf8Error),
  #[error("Swagger {0} documents are not supported, convert the document to OpenAPI 3 first")]
  Swagger(String),
  #[error("unsupported OpenAPI version '{0}', expected 3.0.x")]
  UnsupportedVersion(String),
  #[error("document does not declare an 'openapi' version")]
  MissingVersion,
}

/// Reads an OpenAPI document from disk.
pub struct DocumentLoader {
  file: AsyncMmapFile,
  format: DocumentFormat,
}

impl DocumentLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = DocumentFormat::from_path(path);
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self { file, format })
  }

  pub fn parse(&self) -> Result<Document, LoadError> {
    parse_document(self.file.as_slice(), self.format)
  }
}

/// Version fields of a document, read before the full model so that
/// Swagger 2.0 and OpenAPI 3.1 inputs are rejected by name.
#[derive(Debug, Deserialize)]
struct VersionHeader {
  openapi: Option<String>,
  swagger: Option<String>,
}

/// Deserializes and version-checks a document held in memory.
pub fn parse_document(bytes: &[u8], format: DocumentFormat) -> Result<Document, LoadError> {
  let header: VersionHeader = deserialize(bytes, format)?;
  check_version(&header)?;
  deserialize(bytes, format)
}

fn deserialize<T: DeserializeOwned>(bytes: &[u8], format: DocumentFormat) -> Result<T, LoadError> {
  match format {
    DocumentFormat::Json => {
      let mut deserializer = serde_json::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(&mut deserializer).map_err(|err| LoadError::Json {
        path: err.path().to_string(),
        message: err.inner().to_string(),
      })
    }
    DocumentFormat::Yaml => {
      let content = std::str::from_utf8(bytes)?;
      let deserializer = serde_yaml::Deserializer::from_str(content);
      serde_path_to_error::deserialize(deserializer).map_err(|err| LoadError::Yaml {
        path: err.path().to_string(),
        message: err.inner().to_string(),
      })
    }
  }
}

/// Only OpenAPI 3.0.x is accepted; 3.1 schemas (`type` arrays, no `nullable`) use another model.
fn check_version(header: &VersionHeader) -> Result<(), LoadError> {
  if let Some(swagger) = &header.swagger {
    return Err(LoadError::Swagger(swagger.clone()));
  }

  match header.openapi.as_deref() {
    Some(version) if version == "3.0" || version.starts_with("3.0.") => Ok(()),
    Some(version) => Err(LoadError::UnsupportedVersion(version.to_string())),
    None => Err(LoadError::MissingVersion),
  }
}
