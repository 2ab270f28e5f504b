//! Errors reported while setting up the suites.

use thiserror::Error;

/// Errors raised while setting up a conformance suite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuiteError {
  /// The declared provider capacity must be greater than zero.
  #[error("number of serializers must be greater than zero, got {0}")]
  InvalidCapacity(usize),
}
