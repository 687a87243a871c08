mod operations;
mod references;

use serde::de::DeserializeOwned;

/// Deserializes a document fragment written as JSON.
fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> T {
  serde_json::from_value(value).expect("fragment should deserialize")
}
