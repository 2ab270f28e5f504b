//! Serializer implementation backed by `serde_json`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SerializationError;
use crate::format::Format;
use crate::representation::{Payload, Representation};
use crate::serializer::Serializer;

/// Textual serializer bound to [`Format::String`], producing JSON documents.
///
/// Absent payloads and representations are rejected with [`SerializationError::NullArgument`].
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
  /// Creates a new instance of the JSON serializer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }

  /// Serializes any `serde` value into a textual representation.
  pub fn serialize_value<T>(&self, value: &T) -> Result<Representation, SerializationError>
  where
    T: Serialize, {
    serde_json::to_string(value)
      .map(Representation::Text)
      .map_err(|err| SerializationError::with_source("failed to encode value as JSON", err))
  }

  /// Deserializes a representation into the requested type.
  pub fn deserialize_value<T>(&self, representation: &Representation) -> Result<T, SerializationError>
  where
    T: DeserializeOwned, {
    serde_json::from_slice(representation.as_bytes())
      .map_err(|err| SerializationError::with_source("malformed JSON representation", err))
  }
}

impl Serializer for JsonSerializer {
  fn format(&self) -> Format {
    Format::String
  }

  fn serialize(&self, payload: Option<&Payload>) -> Result<Representation, SerializationError> {
    let payload = payload.ok_or(SerializationError::NullArgument("payload"))?;
    let representation = self.serialize_value(payload)?;
    tracing::trace!("encoded payload as {} bytes of JSON", representation.len());
    Ok(representation)
  }

  fn deserialize(&self, representation: Option<&Representation>) -> Result<Option<Payload>, SerializationError> {
    let representation = representation.ok_or(SerializationError::NullArgument("representation"))?;
    self.deserialize_value(representation).map(Some)
  }
}
