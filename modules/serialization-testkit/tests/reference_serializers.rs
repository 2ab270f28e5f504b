use std::sync::Arc;

use glue_serialization_core_rs::{
  Format, InMemorySerializationProvider, JsonSerializer, ProtoSerializer, Representation, SerializationProvider,
  Serializer, SharedSerializer,
};
use glue_serialization_testkit_rs::{
  check_format_hint_normalization, serializer_conformance_tests, SerializerConformanceSuite, ROUND_TRIP_PAYLOADS,
};
use rstest::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();
}

fn provider() -> InMemorySerializationProvider {
  InMemorySerializationProvider::new(vec![
    Arc::new(ProtoSerializer::new()) as SharedSerializer,
    Arc::new(JsonSerializer::new()) as SharedSerializer,
  ])
}

serializer_conformance_tests!(json, Arc::new(JsonSerializer::new()));
serializer_conformance_tests!(proto, Arc::new(ProtoSerializer::new()));
serializer_conformance_tests!(
  proto_as_serializable,
  Arc::new(ProtoSerializer::with_format_hint(Some("SERIALIZABLE")))
);

#[rstest(format)]
#[case("BINARY")]
#[case("STRING")]
fn serializers_resolved_by_name_conform(format: &str) {
  init_tracing();
  let provider = provider();
  let suite = SerializerConformanceSuite::from_provider(&provider, format).expect("registered format");
  assert_eq!(suite.serializer().format().as_str(), format);
  suite.run_all();
}

#[test]
fn resolving_an_unregistered_format_fails() {
  let err = SerializerConformanceSuite::from_provider(&provider(), "XML").expect_err("not registered");
  assert!(err.is_no_suitable_serializer());
}

#[test]
fn proto_serializer_normalises_format_hints() {
  init_tracing();
  check_format_hint_normalization(ProtoSerializer::with_format_hint);
}

#[test]
fn null_handling_differs_between_reference_serializers() {
  let json = JsonSerializer::new();
  assert!(json.serialize(None).expect_err("strict").is_null_argument());

  let proto = ProtoSerializer::new();
  let representation = proto.serialize(None).expect("permissive");
  assert_eq!(representation, Representation::Binary(Vec::new()));
}

#[test]
fn json_representation_of_special_characters_is_escaped() {
  let json = JsonSerializer::new();
  let special = ROUND_TRIP_PAYLOADS[3];
  let representation = json
    .serialize(Some(&serde_json::Value::from(special)))
    .expect("serialize");
  let text = representation.as_text().expect("textual");
  assert!(text.starts_with('"') && text.ends_with('"'));
  assert!(text.contains("\\\"") && text.contains("\\\\"));
}

#[test]
fn each_reference_serializer_reports_its_format() {
  let provider = provider();
  assert_eq!(provider.available_formats(), vec!["BINARY", "STRING"]);
  assert_eq!(provider.serializer_for(Format::Binary).expect("binary").format(), Format::Binary);
  assert_eq!(provider.serializer_for(Format::String).expect("string").format(), Format::String);
}
