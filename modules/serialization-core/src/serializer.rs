//! Serializer trait defining the boundary between payloads and transport representations.

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::SerializationError;
use crate::format::Format;
use crate::representation::{Payload, Representation};

/// Abstraction implemented by concrete serializer backends.
///
/// A serializer is bound to exactly one [`Format`] for its whole lifetime.
///
/// Absent inputs may be handled in one of two ways, and both are conformant:
/// fail with [`SerializationError::NullArgument`], or succeed so that the absent payload survives
/// a round trip. A [`SerializationError::Serialization`] is never the right answer for an absent
/// input.
pub trait Serializer: Debug + Send + Sync {
  /// Returns the format this serializer is bound to.
  fn format(&self) -> Format;

  /// Converts `payload` into this serializer's representation.
  fn serialize(&self, payload: Option<&Payload>) -> Result<Representation, SerializationError>;

  /// Restores a payload previously produced by [`Serializer::serialize`].
  fn deserialize(&self, representation: Option<&Representation>) -> Result<Option<Payload>, SerializationError>;
}

/// Shared handle to a serializer; providers reference serializers, they do not own them.
pub type SharedSerializer = Arc<dyn Serializer>;
