//! Provider trait resolving format identifiers to serializers.

use crate::error::SerializationError;
use crate::format::Format;
use crate::serializer::SharedSerializer;

/// Resolves format identifiers to the serializers registered for them.
///
/// Providers are immutable once constructed: the set and order of serializers never changes.
pub trait SerializationProvider {
  /// Returns the identifiers of the available formats, most preferred first.
  ///
  /// The result is a snapshot owned by the caller; changing it has no effect on the provider.
  fn available_formats(&self) -> Vec<String>;

  /// Returns the most suitable serializer registered under `format`.
  ///
  /// Fails with [`SerializationError::NullArgument`] when `format` is `None` and with
  /// [`SerializationError::NoSuitableSerializer`] when no serializer matches the identifier.
  fn serializer(&self, format: Option<&str>) -> Result<SharedSerializer, SerializationError>;

  /// Typed shorthand for [`SerializationProvider::serializer`].
  fn serializer_for(&self, format: Format) -> Result<SharedSerializer, SerializationError> {
    self.serializer(Some(format.as_str()))
  }
}
