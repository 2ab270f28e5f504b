//! Options used to build a [`ProviderConfig`].

use crate::config::ProviderConfig;

/// A single modification applied to a [`ProviderConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfigOption {
  /// Sets the provider name.
  SetName(String),
  /// Sets the maximum number of retained serializers.
  SetCapacity(usize),
}

impl ProviderConfigOption {
  /// Applies this option to `config`.
  pub fn apply(&self, config: &mut ProviderConfig) {
    match self {
      ProviderConfigOption::SetName(name) => {
        config.set_name(name.clone());
      }
      ProviderConfigOption::SetCapacity(capacity) => {
        config.set_capacity(*capacity);
      }
    }
  }

  /// Shorthand for [`ProviderConfigOption::SetName`].
  pub fn with_name(name: &str) -> ProviderConfigOption {
    ProviderConfigOption::SetName(name.to_string())
  }

  /// Shorthand for [`ProviderConfigOption::SetCapacity`].
  pub fn with_capacity(capacity: usize) -> ProviderConfigOption {
    ProviderConfigOption::SetCapacity(capacity)
  }
}
