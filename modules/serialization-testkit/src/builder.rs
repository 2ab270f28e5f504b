//! Seam between the provider suite and a concrete provider's constructor.

use glue_serialization_core_rs::{
  InMemorySerializationProvider, ProviderConfig, ProviderConfigOption, SerializationError, SerializationProvider,
  SharedSerializer,
};

/// Serializer list handed to a [`ProviderBuilder`]. Either the list or any entry may be absent.
pub type SerializerSlots = Option<Vec<Option<SharedSerializer>>>;

/// Builds the provider under test from a list of serializers.
///
/// Implemented for every closure `Fn(SerializerSlots) -> Result<P, SerializationError>`, so most
/// adapters are a one-liner.
pub trait ProviderBuilder {
  /// Provider type produced by this builder.
  type Provider: SerializationProvider;

  /// Builds a provider offering `serializers` in the given order.
  fn build(&self, serializers: SerializerSlots) -> Result<Self::Provider, SerializationError>;
}

impl<F, P> ProviderBuilder for F
where
  F: Fn(SerializerSlots) -> Result<P, SerializationError>,
  P: SerializationProvider,
{
  type Provider = P;

  fn build(&self, serializers: SerializerSlots) -> Result<P, SerializationError> {
    self(serializers)
  }
}

/// Wraps every serializer in a present slot.
pub fn slots(serializers: &[SharedSerializer]) -> SerializerSlots {
  Some(serializers.iter().cloned().map(Some).collect())
}

/// Builder adapter for [`InMemorySerializationProvider`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryProviderBuilder {
  config: ProviderConfig,
}

impl InMemoryProviderBuilder {
  /// Builds providers with `config`.
  pub fn new(config: ProviderConfig) -> Self {
    Self { config }
  }

  /// Builds providers named `conformance` that retain at most `capacity` serializers.
  pub fn with_capacity(capacity: usize) -> Self {
    Self::new(ProviderConfig::from([
      ProviderConfigOption::with_name("conformance"),
      ProviderConfigOption::with_capacity(capacity),
    ]))
  }

  /// Configuration handed to every built provider.
  pub fn config(&self) -> &ProviderConfig {
    &self.config
  }
}

impl ProviderBuilder for InMemoryProviderBuilder {
  type Provider = InMemorySerializationProvider;

  fn build(&self, serializers: SerializerSlots) -> Result<Self::Provider, SerializationError> {
    InMemorySerializationProvider::try_from_slots(serializers, self.config.clone())
  }
}
