use indexmap::IndexMap;
use mediatype::MediaType as ParsedMediaType;
use serde::Deserialize;

use super::schema::{ObjectOrReference, Schema};

const JSON_MEDIA_TYPE: &str = "application/json";

/// The four component tables a document can declare, in source order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, ObjectOrReference<Schema>>,
  #[serde(default)]
  pub parameters: IndexMap<String, ObjectOrReference<Parameter>>,
  #[serde(default)]
  pub request_bodies: IndexMap<String, ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
}

/// Component section a `$ref` can point into.
///
/// The string form is the JSON-pointer segment (`#/components/<category>/...`).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum ComponentCategory {
  #[strum(serialize = "schemas")]
  Schemas,
  #[strum(serialize = "parameters")]
  Parameters,
  #[strum(serialize = "requestBodies")]
  RequestBodies,
  #[strum(serialize = "responses")]
  Responses,
}

impl ComponentCategory {
  /// Namespace the category's declarations are imported under.
  pub const fn namespace(self) -> &'static str {
    match self {
      Self::Schemas => "Schemas",
      Self::Parameters => "Parameters",
      Self::RequestBodies => "RequestBodies",
      Self::Responses => "Responses",
    }
  }

  /// Module file stem inside the generated `models` directory.
  pub const fn module_name(self) -> &'static str {
    match self {
      Self::Schemas => "schemas",
      Self::Parameters => "parameters",
      Self::RequestBodies => "requestBodies",
      Self::Responses => "responses",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
  Cookie,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub deprecated: bool,
  pub description: Option<String>,
  pub schema: Option<ObjectOrReference<Schema>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaType {
  pub schema: Option<ObjectOrReference<Schema>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestBody {
  #[serde(default)]
  pub required: bool,
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
  pub fn json_schema(&self) -> Option<&ObjectOrReference<Schema>> {
    json_content_schema(&self.content)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
}

impl Response {
  pub fn json_schema(&self) -> Option<&ObjectOrReference<Schema>> {
    json_content_schema(&self.content)
  }
}

/// Picks the JSON payload schema of a content map.
///
/// `application/json` wins; otherwise the first JSON-structured media type
/// (`application/problem+json`, `application/json; charset=utf-8`, ...) is used.
fn json_content_schema(content: &IndexMap<String, MediaType>) -> Option<&ObjectOrReference<Schema>> {
  if let Some(media) = content.get(JSON_MEDIA_TYPE) {
    return media.schema.as_ref();
  }

  content
    .iter()
    .find(|(content_type, _)| is_json_media_type(content_type))
    .and_then(|(_, media)| media.schema.as_ref())
}

pub(crate) fn is_json_media_type(content_type: &str) -> bool {
  let Ok(media) = ParsedMediaType::parse(content_type) else {
    return false;
  };
  let suffix = media.suffix.as_ref().map(mediatype::Name::as_str);

  matches!(
    (media.ty.as_str(), media.subty.as_str(), suffix),
    ("application", "json", _) | (_, _, Some("json"))
  )
}
