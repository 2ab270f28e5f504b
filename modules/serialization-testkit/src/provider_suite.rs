//! Conformance cases for [`SerializationProvider`] implementations.

use glue_serialization_core_rs::{Format, SerializationProvider, SharedSerializer};

use crate::builder::{slots, ProviderBuilder};
use crate::error::SuiteError;
use crate::fixture::{same_serializer, stub_serializers};

/// Identifier no provider registers; used to probe lookups and list mutations.
pub const UNKNOWN_FORMAT: &str = "A new format!";

/// Checks that a provider follows the serialization provider contract.
///
/// Every case builds a fresh provider through the supplied [`ProviderBuilder`] and panics with a
/// descriptive message on the first violation, so each case can back a `#[test]` function. See
/// [`provider_conformance_tests!`](crate::provider_conformance_tests) for generating those.
///
/// `capacity` is the number of serializers the provider under test can offer. The suite always
/// supplies two stubs (`BINARY`, then `STRING`) and expects the provider to keep the first
/// `min(2, capacity)` of them.
#[derive(Debug, Clone)]
pub struct ProviderConformanceSuite<B> {
  builder: B,
  capacity: usize,
}

impl<B> ProviderConformanceSuite<B>
where
  B: ProviderBuilder,
{
  /// Creates a suite for providers holding `capacity` serializers; zero is rejected.
  pub fn new(builder: B, capacity: usize) -> Result<Self, SuiteError> {
    if capacity == 0 {
      return Err(SuiteError::InvalidCapacity(capacity));
    }
    Ok(Self { builder, capacity })
  }

  /// Declared capacity of the provider under test.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Builder used to create each provider.
  pub fn builder(&self) -> &B {
    &self.builder
  }

  fn build_with_stubs(&self) -> (Vec<SharedSerializer>, B::Provider) {
    let serializers = stub_serializers();
    let provider = self
      .builder
      .build(slots(&serializers))
      .unwrap_or_else(|err| panic!("Building a provider from valid serializers failed: {err}"));
    (serializers, provider)
  }

  /// Available formats are capped at the capacity and keep the input order.
  pub fn available_formats(&self) {
    let (serializers, provider) = self.build_with_stubs();
    let formats = provider.available_formats();
    let expected = serializers.len().min(self.capacity);
    tracing::debug!("checking available formats {:?}, expecting {} entries", formats, expected);

    assert_eq!(
      formats.len(),
      expected,
      "Number of available formats doesn't match expected number."
    );
    for (index, (format, serializer)) in formats.iter().zip(&serializers).enumerate() {
      assert_eq!(
        format.as_str(),
        serializer.format().as_str(),
        "Order of formats differs from expected at position {index}."
      );
    }
  }

  /// Building from an absent serializer list fails with a null-argument error.
  pub fn available_formats_null_serializers(&self) {
    match self.builder.build(None) {
      Ok(_) => panic!("No error building from a null serializer list - expected a null-argument error."),
      Err(err) => assert!(
        err.is_null_argument(),
        "Building from a null serializer list failed with {:?} ({err}), expected a null-argument error.",
        err.kind()
      ),
    }
  }

  /// A list containing an absent entry may be accepted, or rejected with a null-argument error.
  pub fn available_formats_null_element(&self) {
    let mut serializers = stub_serializers().into_iter().map(Some).collect::<Vec<_>>();
    serializers.insert(1, None);
    match self.builder.build(Some(serializers)) {
      Ok(_) => tracing::debug!("provider accepted a serializer list with an empty slot"),
      Err(err) => assert!(
        err.is_null_argument(),
        "Building from a list with a null entry failed with {:?} ({err}), expected a null-argument error.",
        err.kind()
      ),
    }
  }

  /// The most preferred format resolves to the very serializer supplied first.
  pub fn get_serializer(&self) {
    let (serializers, provider) = self.build_with_stubs();
    let formats = provider.available_formats();
    let first = formats
      .first()
      .unwrap_or_else(|| panic!("Provider offers no formats although serializers were supplied."));

    let resolved = provider
      .serializer(Some(first.as_str()))
      .unwrap_or_else(|err| panic!("Unexpected error resolving {first:?}: {err}"));
    assert!(
      same_serializer(&resolved, &serializers[0]),
      "Returned first serializer doesn't equal expected."
    );

    let resolved = provider
      .serializer_for(Format::Binary)
      .unwrap_or_else(|err| panic!("Unexpected error resolving {}: {err}", Format::Binary));
    assert!(
      same_serializer(&resolved, &serializers[0]),
      "BINARY didn't resolve to the BINARY serializer."
    );
  }

  /// Unregistered formats fail with a no-suitable-serializer error.
  pub fn get_serializer_no_suitable_serializer(&self) {
    let (_, provider) = self.build_with_stubs();
    for format in [Format::Java.as_str(), "binary", UNKNOWN_FORMAT] {
      match provider.serializer(Some(format)) {
        Ok(serializer) => panic!("No error resolving {format:?}, got {serializer:?} - expected a no-suitable-serializer error."),
        Err(err) => assert!(
          err.is_no_suitable_serializer(),
          "Resolving {format:?} failed with {:?} ({err}), expected a no-suitable-serializer error.",
          err.kind()
        ),
      }
    }
  }

  /// An absent format fails with a null-argument error, never with a lookup failure.
  pub fn get_serializer_null_argument(&self) {
    let (_, provider) = self.build_with_stubs();
    match provider.serializer(None) {
      Ok(serializer) => panic!("No error resolving a null format, got {serializer:?} - expected a null-argument error."),
      Err(err) => assert!(
        err.is_null_argument(),
        "Resolving a null format failed with {:?} ({err}), expected a null-argument error.",
        err.kind()
      ),
    }
  }

  /// Changing the returned format list never changes what the provider reports afterwards.
  pub fn immutable_format_list(&self) {
    let (_, provider) = self.build_with_stubs();
    let mut formats = provider.available_formats();
    let before = formats.clone();

    formats.push(UNKNOWN_FORMAT.to_string());
    if let Some(first) = formats.first_mut() {
      first.push_str(" (changed)");
    }
    formats.reverse();

    let after = provider.available_formats();
    assert_eq!(after, before, "Available format list can be modified - breaks the immutable requirement.");
    assert!(
      !after.iter().any(|format| format == UNKNOWN_FORMAT),
      "The new format was added to the list."
    );
  }

  /// Runs every case.
  pub fn run_all(&self) {
    self.available_formats();
    self.available_formats_null_serializers();
    self.available_formats_null_element();
    self.get_serializer();
    self.get_serializer_no_suitable_serializer();
    self.get_serializer_null_argument();
    self.immutable_format_list();
  }
}
