//! Payload and transport representation types exchanged with serializers.

/// Logical value handed to a serializer.
///
/// An absent payload is expressed as `None` at the API boundary, so `Payload::Null` is an
/// ordinary value distinct from "no payload".
pub type Payload = serde_json::Value;

/// Format specific representation produced by a serializer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
  /// Textual representation.
  Text(String),
  /// Binary representation.
  Binary(Vec<u8>),
}

/// Discriminant of a [`Representation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
  /// See [`Representation::Text`].
  Text,
  /// See [`Representation::Binary`].
  Binary,
}

impl Representation {
  /// Returns the discriminant of this representation.
  #[must_use]
  pub fn kind(&self) -> RepresentationKind {
    match self {
      Representation::Text(_) => RepresentationKind::Text,
      Representation::Binary(_) => RepresentationKind::Binary,
    }
  }

  /// Returns the raw bytes; text is exposed as its UTF-8 encoding.
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Representation::Text(text) => text.as_bytes(),
      Representation::Binary(bytes) => bytes,
    }
  }

  /// Returns the text of a textual representation.
  #[must_use]
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Representation::Text(text) => Some(text),
      Representation::Binary(_) => None,
    }
  }

  /// Consumes the representation and returns its bytes.
  #[must_use]
  pub fn into_bytes(self) -> Vec<u8> {
    match self {
      Representation::Text(text) => text.into_bytes(),
      Representation::Binary(bytes) => bytes,
    }
  }

  /// Length in bytes.
  #[must_use]
  pub fn len(&self) -> usize {
    self.as_bytes().len()
  }

  /// Returns `true` when the representation carries no bytes.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl From<String> for Representation {
  fn from(text: String) -> Self {
    Representation::Text(text)
  }
}

impl From<&str> for Representation {
  fn from(text: &str) -> Self {
    Representation::Text(text.to_string())
  }
}

impl From<Vec<u8>> for Representation {
  fn from(bytes: Vec<u8>) -> Self {
    Representation::Binary(bytes)
  }
}

impl From<&[u8]> for Representation {
  fn from(bytes: &[u8]) -> Self {
    Representation::Binary(bytes.to_vec())
  }
}
