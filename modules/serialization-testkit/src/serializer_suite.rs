//! Conformance cases for [`Serializer`] implementations.

use glue_serialization_core_rs::{
  Format, Payload, SerializationError, SerializationProvider, Serializer, SharedSerializer,
};

/// Texts every serializer must round-trip unchanged: plain, spaced, numeric-looking, and a
/// battery of punctuation that trips up escaping.
pub const ROUND_TRIP_PAYLOADS: [&str; 4] = [
  "thisIsADataPackage",
  "this is a data package",
  "1234567890",
  "°^!\"§$%&/()=?`´*+~#'-_:.;,<>|'{[]}\\",
];

/// Checks that a serializer follows the serializer contract.
///
/// The serializer under test is either given directly ([`SerializerConformanceSuite::new`]) or
/// resolved by format name from a provider ([`SerializerConformanceSuite::from_provider`]).
#[derive(Debug, Clone)]
pub struct SerializerConformanceSuite {
  serializer: SharedSerializer,
}

impl SerializerConformanceSuite {
  /// Creates a suite for `serializer`.
  pub fn new(serializer: SharedSerializer) -> Self {
    Self { serializer }
  }

  /// Resolves the serializer under test from `provider`; lookup errors are returned unchanged.
  pub fn from_provider<P>(provider: &P, format: &str) -> Result<Self, SerializationError>
  where
    P: SerializationProvider + ?Sized, {
    provider.serializer(Some(format)).map(Self::new)
  }

  /// Serializer under test.
  pub fn serializer(&self) -> &SharedSerializer {
    &self.serializer
  }

  /// The reported format is one of the recognised identifiers.
  pub fn format(&self) {
    let format = self.serializer.format();
    assert!(
      Format::is_recognized(format.as_str()),
      "Serializer doesn't return an allowed format: {format}."
    );
    assert_eq!(
      format.as_str().parse::<Format>().ok(),
      Some(format),
      "Serializer format {format} doesn't survive parsing its own identifier."
    );
  }

  /// Serializing an absent payload either fails with a null-argument error or yields a
  /// representation that deserializes back to no payload.
  pub fn serialize_null_argument(&self) {
    match self.serializer.serialize(None) {
      Ok(representation) => match self.serializer.deserialize(Some(&representation)) {
        Ok(None) => tracing::debug!("serializer accepts absent payloads"),
        Ok(Some(payload)) => {
          panic!("Serializer accepted a null payload, but its representation deserialized to {payload}.")
        }
        Err(err) => panic!("Serializer accepted a null payload, but can't deserialize the result: {err}."),
      },
      Err(err) => expect_null_argument("serialize", &err),
    }
  }

  /// Deserializing an absent representation either fails with a null-argument error or yields no
  /// payload.
  pub fn deserialize_null_argument(&self) {
    match self.serializer.deserialize(None) {
      Ok(None) => tracing::debug!("serializer accepts absent representations"),
      Ok(Some(payload)) => panic!("Deserializing a null representation produced {payload}."),
      Err(err) => expect_null_argument("deserialize", &err),
    }
  }

  /// Every text in [`ROUND_TRIP_PAYLOADS`] comes back equal after a round trip.
  pub fn round_trip(&self) {
    for text in ROUND_TRIP_PAYLOADS {
      let payload = Payload::from(text);
      let representation = self
        .serializer
        .serialize(Some(&payload))
        .unwrap_or_else(|err| panic!("Failed to serialize {text:?}: {err}."));
      let restored = self
        .serializer
        .deserialize(Some(&representation))
        .unwrap_or_else(|err| panic!("Failed to deserialize {text:?}: {err}."));
      assert_eq!(restored, Some(payload), "Round trip changed {text:?}.");
    }
  }

  /// Runs every case.
  pub fn run_all(&self) {
    self.format();
    self.serialize_null_argument();
    self.deserialize_null_argument();
    self.round_trip();
  }
}

fn expect_null_argument(operation: &str, err: &SerializationError) {
  match err {
    SerializationError::NullArgument(_) => tracing::debug!("{operation} rejects absent input: {err}"),
    SerializationError::Serialization { .. } => {
      panic!("Caught a serialization error from {operation} on null input - did not expect that: {err}.")
    }
    SerializationError::NoSuitableSerializer(_) => {
      panic!("Caught an unexpected error from {operation} on null input: {err}.")
    }
  }
}

/// Checks a serializer constructor that takes a format hint.
///
/// Absent and unrecognised hints must produce a serializer bound to a recognised format, and a
/// recognised hint must be kept.
pub fn check_format_hint_normalization<F, S>(factory: F)
where
  F: Fn(Option<&str>) -> S,
  S: Serializer, {
  for hint in [None, Some(""), Some("binary"), Some(crate::provider_suite::UNKNOWN_FORMAT)] {
    let format = factory(hint).format();
    assert!(
      Format::is_recognized(format.as_str()),
      "Hint {hint:?} produced a serializer with an unrecognised format {format}."
    );
  }
  for expected in Format::ALL {
    let format = factory(Some(expected.as_str())).format();
    assert_eq!(format, expected, "Recognised hint {expected} was not kept.");
  }
}
