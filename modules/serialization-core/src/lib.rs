#![deny(missing_docs)]

//! Serializer and serialization provider abstractions for Glue transports.
//!
//! A [`Serializer`] converts a [`Payload`] to and from the [`Representation`] of one fixed
//! [`Format`]. A [`SerializationProvider`] resolves format identifiers to serializers and lists the
//! available formats in preference order. [`InMemorySerializationProvider`], [`JsonSerializer`] and
//! [`ProtoSerializer`] are ready-made implementations of these contracts.

pub mod config;
pub mod config_option;
pub mod error;
pub mod format;
pub mod json;
#[cfg(feature = "proto")]
pub mod proto;
pub mod provider;
pub mod registry;
pub mod representation;
pub mod serializer;

pub use config::{ProviderConfig, DEFAULT_CAPACITY};
pub use config_option::ProviderConfigOption;
pub use error::{BoxError, ConfigError, SerializationError, SerializationErrorKind, UnknownFormat};
pub use format::Format;
pub use json::JsonSerializer;
#[cfg(feature = "proto")]
pub use proto::ProtoSerializer;
pub use provider::SerializationProvider;
pub use registry::InMemorySerializationProvider;
pub use representation::{Payload, Representation, RepresentationKind};
pub use serializer::{Serializer, SharedSerializer};
