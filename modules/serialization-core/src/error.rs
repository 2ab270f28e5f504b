//! Error types used across the serialization core.

use thiserror::Error;

/// Boxed root cause carried by [`SerializationError::Serialization`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned by serializers and serialization providers.
///
/// The three variants are distinct signals: callers are expected to tell a missing argument apart
/// from a conversion failure and from a failed format lookup.
#[derive(Debug, Error)]
pub enum SerializationError {
  /// A required argument was absent.
  #[error("{0} must not be null")]
  NullArgument(&'static str),
  /// The payload or representation is structurally incompatible with the format.
  #[error("serialization failed: {message}")]
  Serialization {
    /// Human readable description of the failure.
    message: String,
    /// Underlying error reported by the encoding backend, when there is one.
    #[source]
    source: Option<BoxError>,
  },
  /// No registered serializer handles the requested format.
  #[error("no suitable serializer for format {0:?}")]
  NoSuitableSerializer(String),
}

/// Discriminant of a [`SerializationError`], convenient for assertions and branching.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SerializationErrorKind {
  /// See [`SerializationError::NullArgument`].
  NullArgument,
  /// See [`SerializationError::Serialization`].
  Serialization,
  /// See [`SerializationError::NoSuitableSerializer`].
  NoSuitableSerializer,
}

impl SerializationError {
  /// Constructs a serialization error without an underlying cause.
  #[must_use]
  pub fn serialization(message: impl Into<String>) -> Self {
    SerializationError::Serialization {
      message: message.into(),
      source: None,
    }
  }

  /// Constructs a serialization error wrapping the root cause.
  #[must_use]
  pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static, {
    SerializationError::Serialization {
      message: message.into(),
      source: Some(Box::new(source)),
    }
  }

  /// Constructs a lookup failure for the given format identifier.
  #[must_use]
  pub fn no_suitable_serializer(format: impl Into<String>) -> Self {
    SerializationError::NoSuitableSerializer(format.into())
  }

  /// Returns the discriminant of this error.
  #[must_use]
  pub fn kind(&self) -> SerializationErrorKind {
    match self {
      SerializationError::NullArgument(_) => SerializationErrorKind::NullArgument,
      SerializationError::Serialization { .. } => SerializationErrorKind::Serialization,
      SerializationError::NoSuitableSerializer(_) => SerializationErrorKind::NoSuitableSerializer,
    }
  }

  /// Returns `true` for [`SerializationError::NullArgument`].
  #[must_use]
  pub fn is_null_argument(&self) -> bool {
    self.kind() == SerializationErrorKind::NullArgument
  }

  /// Returns `true` for [`SerializationError::Serialization`].
  #[must_use]
  pub fn is_serialization(&self) -> bool {
    self.kind() == SerializationErrorKind::Serialization
  }

  /// Returns `true` for [`SerializationError::NoSuitableSerializer`].
  #[must_use]
  pub fn is_no_suitable_serializer(&self) -> bool {
    self.kind() == SerializationErrorKind::NoSuitableSerializer
  }
}

static_assertions::assert_impl_all!(SerializationError: Send, Sync);

/// Error returned when text does not name one of the recognised formats.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown serialization format: {0:?}")]
pub struct UnknownFormat(pub String);

/// Errors raised while loading or validating a provider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// A provider must be able to hold at least one serializer.
  #[error("provider capacity must be greater than zero, got {0}")]
  InvalidCapacity(usize),
  /// The configuration document could not be parsed.
  #[error("failed to parse provider configuration: {0}")]
  Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error as _;

  #[test]
  fn kinds_are_distinct() {
    assert_eq!(
      SerializationError::NullArgument("payload").kind(),
      SerializationErrorKind::NullArgument
    );
    assert_eq!(
      SerializationError::serialization("bad").kind(),
      SerializationErrorKind::Serialization
    );
    assert_eq!(
      SerializationError::no_suitable_serializer("JAVA").kind(),
      SerializationErrorKind::NoSuitableSerializer
    );
  }

  #[test]
  fn serialization_error_exposes_root_cause() {
    let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SerializationError::with_source("malformed JSON", cause);
    assert!(err.is_serialization());
    assert!(err.source().is_some());
    assert_eq!(err.to_string(), "serialization failed: malformed JSON");
  }

  #[test]
  fn messages_name_the_offending_input() {
    assert_eq!(
      SerializationError::NullArgument("format").to_string(),
      "format must not be null"
    );
    assert_eq!(
      SerializationError::no_suitable_serializer("XML").to_string(),
      "no suitable serializer for format \"XML\""
    );
    assert_eq!(
      UnknownFormat("json".to_string()).to_string(),
      "unknown serialization format: \"json\""
    );
  }
}
