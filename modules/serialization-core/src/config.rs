//! Configuration of [`InMemorySerializationProvider`](crate::registry::InMemorySerializationProvider).

use serde::{Deserialize, Serialize};

use crate::config_option::ProviderConfigOption;
use crate::error::ConfigError;
use crate::format::Format;

/// Default number of serializers a provider retains: one per recognised format.
pub const DEFAULT_CAPACITY: usize = Format::ALL.len();

/// Settings applied when a provider is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
  name: String,
  capacity: usize,
}

impl Default for ProviderConfig {
  fn default() -> Self {
    ProviderConfig {
      name: "default".to_string(),
      capacity: DEFAULT_CAPACITY,
    }
  }
}

impl ProviderConfig {
  /// Builds a configuration by applying `options` on top of the defaults.
  pub fn from(options: impl IntoIterator<Item = ProviderConfigOption>) -> ProviderConfig {
    let mut config = ProviderConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Parses a JSON document such as `{"name": "inbound", "capacity": 2}`.
  ///
  /// Missing keys keep their defaults. The result is validated.
  pub fn from_json(json: &str) -> Result<ProviderConfig, ConfigError> {
    let config: ProviderConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Rejects configurations that cannot hold a single serializer.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.capacity == 0 {
      return Err(ConfigError::InvalidCapacity(self.capacity));
    }
    Ok(())
  }

  /// Name used to tell providers apart in logs.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Replaces the provider name.
  pub fn set_name(&mut self, name: String) {
    self.name = name;
  }

  /// Maximum number of serializers a provider retains.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Replaces the provider capacity.
  pub fn set_capacity(&mut self, capacity: usize) {
    self.capacity = capacity;
  }
}
