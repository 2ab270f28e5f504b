#![deny(missing_docs)]
//! Conformance test suites for Glue serializers and serialization providers.
//!
//! Implementors plug their types into [`ProviderConformanceSuite`] (through a
//! [`ProviderBuilder`]) and [`SerializerConformanceSuite`], or let
//! [`provider_conformance_tests!`] and [`serializer_conformance_tests!`] generate one `#[test]`
//! per case.

pub mod builder;
pub mod error;
pub mod fixture;
mod macros;
pub mod provider_suite;
pub mod serializer_suite;

pub use builder::{slots, InMemoryProviderBuilder, ProviderBuilder, SerializerSlots};
pub use error::SuiteError;
pub use fixture::{same_serializer, stub_serializers, StubSerializer};
pub use provider_suite::{ProviderConformanceSuite, UNKNOWN_FORMAT};
pub use serializer_suite::{check_format_hint_normalization, SerializerConformanceSuite, ROUND_TRIP_PAYLOADS};
