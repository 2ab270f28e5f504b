/// Generates a module of `#[test]` functions running the provider conformance cases.
///
/// ```ignore
/// glue_serialization_testkit_rs::provider_conformance_tests!(
///   in_memory,
///   InMemoryProviderBuilder::with_capacity(2),
///   2
/// );
/// ```
///
/// The builder expression is evaluated once per test; items of the enclosing module are in scope.
#[macro_export]
macro_rules! provider_conformance_tests {
  ($name:ident, $builder:expr, $capacity:expr $(,)?) => {
    mod $name {
      #[allow(unused_imports)]
      use super::*;

      fn suite() -> $crate::ProviderConformanceSuite<impl $crate::ProviderBuilder> {
        $crate::ProviderConformanceSuite::new($builder, $capacity).expect("valid provider suite parameters")
      }

      #[test]
      fn available_formats() {
        suite().available_formats();
      }

      #[test]
      fn available_formats_null_serializers() {
        suite().available_formats_null_serializers();
      }

      #[test]
      fn available_formats_null_element() {
        suite().available_formats_null_element();
      }

      #[test]
      fn get_serializer() {
        suite().get_serializer();
      }

      #[test]
      fn get_serializer_no_suitable_serializer() {
        suite().get_serializer_no_suitable_serializer();
      }

      #[test]
      fn get_serializer_null_argument() {
        suite().get_serializer_null_argument();
      }

      #[test]
      fn immutable_format_list() {
        suite().immutable_format_list();
      }
    }
  };
}

/// Generates a module of `#[test]` functions running the serializer conformance cases against
/// the serializer produced by `$serializer` (a [`SharedSerializer`](glue_serialization_core_rs::SharedSerializer)).
#[macro_export]
macro_rules! serializer_conformance_tests {
  ($name:ident, $serializer:expr $(,)?) => {
    mod $name {
      #[allow(unused_imports)]
      use super::*;

      fn suite() -> $crate::SerializerConformanceSuite {
        $crate::SerializerConformanceSuite::new($serializer)
      }

      #[test]
      fn format() {
        suite().format();
      }

      #[test]
      fn serialize_null_argument() {
        suite().serialize_null_argument();
      }

      #[test]
      fn deserialize_null_argument() {
        suite().deserialize_null_argument();
      }

      #[test]
      fn round_trip() {
        suite().round_trip();
      }
    }
  };
}
