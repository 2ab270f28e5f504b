//! In-memory serialization provider implementation.

use crate::config::ProviderConfig;
use crate::error::{ConfigError, SerializationError};
use crate::provider::SerializationProvider;
use crate::serializer::SharedSerializer;


/// Default provider backed by an ordered list of serializers.
///
/// Insertion order is preference order. Serializers beyond the configured capacity are dropped at
/// construction; the retained prefix keeps its order. Several serializers may share a format, in
/// which case lookups resolve to the first one.
#[derive(Debug, Clone)]
pub struct InMemorySerializationProvider {
  name: String,
  capacity: usize,
  serializers: Vec<SharedSerializer>,
}

impl InMemorySerializationProvider {
  /// Creates a provider with the default configuration.
  #[must_use]
  pub fn new(serializers: Vec<SharedSerializer>) -> Self {
    Self::retain(serializers, ProviderConfig::default())
  }

  /// Creates a provider retaining at most `config.capacity()` serializers.
  ///
  /// Fails with [`ConfigError::InvalidCapacity`] when the configuration cannot hold a single
  /// serializer.
  pub fn with_config(serializers: Vec<SharedSerializer>, config: ProviderConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::retain(serializers, config))
  }

  /// Creates a provider from a list that may be absent or contain absent entries.
  ///
  /// An absent list fails with [`SerializationError::NullArgument`]. Absent entries are rejected
  /// eagerly with the same error, before any capacity truncation happens. An invalid configuration
  /// is reported as a [`SerializationError::Serialization`] carrying the [`ConfigError`].
  pub fn try_from_slots(
    slots: Option<Vec<Option<SharedSerializer>>>,
    config: ProviderConfig,
  ) -> Result<Self, SerializationError> {
    let slots = slots.ok_or(SerializationError::NullArgument("serializers"))?;
    config
      .validate()
      .map_err(|err| SerializationError::with_source(format!("provider {} is misconfigured", config.name()), err))?;
    let serializers = slots
      .into_iter()
      .enumerate()
      .map(|(index, slot)| {
        slot.ok_or_else(|| {
          tracing::debug!("provider {} rejected empty serializer slot {}", config.name(), index);
          SerializationError::NullArgument("serializer")
        })
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Self::retain(serializers, config))
  }

  fn retain(mut serializers: Vec<SharedSerializer>, config: ProviderConfig) -> Self {
    let supplied = serializers.len();
    serializers.truncate(config.capacity());
    if supplied > serializers.len() {
      tracing::debug!(
        "provider {} dropped {} serializer(s) beyond its capacity of {}",
        config.name(),
        supplied - serializers.len(),
        config.capacity()
      );
    }
    tracing::debug!(
      "provider {} created with formats {:?}",
      config.name(),
      serializers.iter().map(|s| s.format()).collect::<Vec<_>>()
    );
    Self {
      name: config.name().to_string(),
      capacity: config.capacity(),
      serializers,
    }
  }

  /// Name given by the configuration.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Maximum number of serializers this provider retains.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Number of retained serializers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.serializers.len()
  }

  /// Returns `true` when no serializer was retained.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.serializers.is_empty()
  }
}

impl SerializationProvider for InMemorySerializationProvider {
  fn available_formats(&self) -> Vec<String> {
    self
      .serializers
      .iter()
      .map(|serializer| serializer.format().to_string())
      .collect()
  }

  fn serializer(&self, format: Option<&str>) -> Result<SharedSerializer, SerializationError> {
    let format = format.ok_or(SerializationError::NullArgument("format"))?;
    match self
      .serializers
      .iter()
      .find(|serializer| serializer.format().as_str() == format)
    {
      Some(serializer) => Ok(serializer.clone()),
      None => {
        tracing::debug!("provider {} has no serializer for format {:?}", self.name, format);
        Err(SerializationError::no_suitable_serializer(format))
      }
    }
  }
}

static_assertions::assert_impl_all!(InMemorySerializationProvider: Send, Sync);
