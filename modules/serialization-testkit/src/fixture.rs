//! Stub serializers used to populate providers under test.

use std::sync::Arc;

use glue_serialization_core_rs::{Format, Payload, Representation, SerializationError, Serializer, SharedSerializer};

/// Serializer that reports a fixed format and has no other behaviour.
///
/// Both conversions fail with a [`SerializationError::Serialization`]; provider suites never call
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubSerializer {
  format: Format,
}

impl StubSerializer {
  /// Creates a stub reporting `format`.
  pub const fn new(format: Format) -> Self {
    Self { format }
  }

  /// Shared stub, ready to hand to a provider.
  pub fn shared(format: Format) -> SharedSerializer {
    Arc::new(Self::new(format))
  }
}

impl Serializer for StubSerializer {
  fn format(&self) -> Format {
    self.format
  }

  fn serialize(&self, _payload: Option<&Payload>) -> Result<Representation, SerializationError> {
    Err(SerializationError::serialization(format!(
      "stub {} serializer cannot serialize",
      self.format
    )))
  }

  fn deserialize(&self, _representation: Option<&Representation>) -> Result<Option<Payload>, SerializationError> {
    Err(SerializationError::serialization(format!(
      "stub {} serializer cannot deserialize",
      self.format
    )))
  }
}

/// The canned serializers every provider suite starts from: a `BINARY` stub followed by a
/// `STRING` stub.
pub fn stub_serializers() -> Vec<SharedSerializer> {
  vec![StubSerializer::shared(Format::Binary), StubSerializer::shared(Format::String)]
}

/// Returns `true` when both handles point at the same serializer instance.
pub fn same_serializer(left: &SharedSerializer, right: &SharedSerializer) -> bool {
  Arc::ptr_eq(left, right)
}
