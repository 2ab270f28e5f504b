//! Serializer implementation encoding payloads as protobuf messages.

use prost::Message as ProstMessage;
use prost_types::NullValue;
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::SerializationError;
use crate::format::Format;
use crate::representation::{Payload, Representation};
use crate::serializer::Serializer;

/// Binary serializer backed by `prost`.
///
/// Absent payloads are accepted: they encode to an empty byte string, which decodes back to no
/// payload. Numbers keep their JSON flavour on the wire (unsigned, signed or floating point), so
/// `3` and `3.0` stay distinct and 64-bit integers survive unrounded.
#[derive(Debug, Clone, Default)]
pub struct ProtoSerializer {
  format: Format,
}

impl ProtoSerializer {
  /// Creates a serializer bound to [`Format::Binary`].
  #[must_use]
  pub const fn new() -> Self {
    Self { format: Format::Binary }
  }

  /// Creates a serializer registered under the format named by `hint`.
  ///
  /// Unknown or absent hints are normalised, see [`Format::from_hint`].
  #[must_use]
  pub fn with_format_hint(hint: Option<&str>) -> Self {
    Self {
      format: Format::from_hint(hint),
    }
  }
}

impl Serializer for ProtoSerializer {
  fn format(&self) -> Format {
    self.format
  }

  fn serialize(&self, payload: Option<&Payload>) -> Result<Representation, SerializationError> {
    let Some(payload) = payload else {
      tracing::trace!("encoding absent payload as an empty representation");
      return Ok(Representation::Binary(Vec::new()));
    };
    let bytes = to_node(payload)?.encode_to_vec();
    tracing::trace!("encoded payload as {} bytes of protobuf", bytes.len());
    Ok(Representation::Binary(bytes))
  }

  fn deserialize(&self, representation: Option<&Representation>) -> Result<Option<Payload>, SerializationError> {
    let bytes = match representation {
      None => return Ok(None),
      Some(Representation::Binary(bytes)) => bytes,
      Some(Representation::Text(_)) => {
        return Err(SerializationError::serialization(
          "protobuf serializer expects a binary representation",
        ))
      }
    };
    let node = PayloadNode::decode(bytes.as_slice())
      .map_err(|err| SerializationError::with_source("malformed protobuf representation", err))?;
    match node.kind {
      None => Ok(None),
      kind => from_node(kind).map(Some),
    }
  }
}

/// Wire form of a payload value. A node without a kind is an absent payload.
#[derive(Clone, PartialEq, ProstMessage)]
struct PayloadNode {
  #[prost(oneof = "NodeKind", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
  kind: Option<NodeKind>,
}

#[derive(Clone, PartialEq, prost::Oneof)]
enum NodeKind {
  #[prost(enumeration = "NullValue", tag = "1")]
  Null(i32),
  #[prost(bool, tag = "2")]
  Bool(bool),
  #[prost(uint64, tag = "3")]
  Unsigned(u64),
  #[prost(sint64, tag = "4")]
  Signed(i64),
  #[prost(double, tag = "5")]
  Float(f64),
  #[prost(string, tag = "6")]
  Text(String),
  #[prost(message, tag = "7")]
  List(NodeList),
  #[prost(message, tag = "8")]
  Object(NodeObject),
}

#[derive(Clone, PartialEq, ProstMessage)]
struct NodeList {
  #[prost(message, repeated, tag = "1")]
  items: Vec<PayloadNode>,
}

// Entries keep the payload's key order.
#[derive(Clone, PartialEq, ProstMessage)]
struct NodeObject {
  #[prost(message, repeated, tag = "1")]
  fields: Vec<NodeField>,
}

#[derive(Clone, PartialEq, ProstMessage)]
struct NodeField {
  #[prost(string, tag = "1")]
  key: String,
  #[prost(message, optional, tag = "2")]
  value: Option<PayloadNode>,
}

fn to_node(payload: &JsonValue) -> Result<PayloadNode, SerializationError> {
  let kind = match payload {
    JsonValue::Null => NodeKind::Null(NullValue::NullValue as i32),
    JsonValue::Bool(value) => NodeKind::Bool(*value),
    JsonValue::Number(number) => number_to_kind(number)?,
    JsonValue::String(text) => NodeKind::Text(text.clone()),
    JsonValue::Array(items) => NodeKind::List(NodeList {
      items: items.iter().map(to_node).collect::<Result<_, _>>()?,
    }),
    JsonValue::Object(fields) => NodeKind::Object(NodeObject {
      fields: fields
        .iter()
        .map(|(key, value)| {
          Ok(NodeField {
            key: key.clone(),
            value: Some(to_node(value)?),
          })
        })
        .collect::<Result<_, SerializationError>>()?,
    }),
  };
  Ok(PayloadNode { kind: Some(kind) })
}

fn number_to_kind(number: &Number) -> Result<NodeKind, SerializationError> {
  if let Some(value) = number.as_u64() {
    return Ok(NodeKind::Unsigned(value));
  }
  if let Some(value) = number.as_i64() {
    return Ok(NodeKind::Signed(value));
  }
  number
    .as_f64()
    .map(NodeKind::Float)
    .ok_or_else(|| SerializationError::serialization(format!("{number} is not representable as a double")))
}

fn from_node(kind: Option<NodeKind>) -> Result<JsonValue, SerializationError> {
  let value = match kind {
    None | Some(NodeKind::Null(_)) => JsonValue::Null,
    Some(NodeKind::Bool(value)) => JsonValue::Bool(value),
    Some(NodeKind::Unsigned(value)) => JsonValue::Number(Number::from(value)),
    Some(NodeKind::Signed(value)) => JsonValue::Number(Number::from(value)),
    Some(NodeKind::Float(value)) => JsonValue::Number(
      Number::from_f64(value)
        .ok_or_else(|| SerializationError::serialization(format!("{value} cannot be represented as a JSON number")))?,
    ),
    Some(NodeKind::Text(text)) => JsonValue::String(text),
    Some(NodeKind::List(list)) => JsonValue::Array(
      list
        .items
        .into_iter()
        .map(|item| from_node(item.kind))
        .collect::<Result<_, _>>()?,
    ),
    Some(NodeKind::Object(object)) => JsonValue::Object(
      object
        .fields
        .into_iter()
        .map(|field| Ok((field.key, from_node(field.value.and_then(|value| value.kind))?)))
        .collect::<Result<Map<_, _>, SerializationError>>()?,
    ),
  };
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::*;
  use serde_json::json;

  #[rstest(payload)]
  #[case(json!(null))]
  #[case(json!(true))]
  #[case(json!(42))]
  #[case(json!(-7))]
  #[case(json!(0.25))]
  #[case(json!("°^!\"§$%&/()=?"))]
  #[case(json!([1, "two", [false], {}]))]
  #[case(json!({"name": "glue", "tags": ["a", "b"], "nested": {"depth": 2}}))]
  fn round_trips_payloads(payload: Payload) {
    let serializer = ProtoSerializer::new();
    let representation = serializer.serialize(Some(&payload)).expect("serialize");
    assert!(!representation.is_empty());
    let restored = serializer.deserialize(Some(&representation)).expect("deserialize");
    assert_eq!(restored, Some(payload));
  }

  #[test]
  fn absent_payload_survives_round_trip() {
    let serializer = ProtoSerializer::new();
    let representation = serializer.serialize(None).expect("serialize");
    assert_eq!(representation, Representation::Binary(Vec::new()));
    assert_eq!(serializer.deserialize(Some(&representation)).expect("deserialize"), None);
    assert_eq!(serializer.deserialize(None).expect("deserialize"), None);
  }

  #[test]
  fn null_payload_is_not_absent() {
    let serializer = ProtoSerializer::new();
    let representation = serializer.serialize(Some(&JsonValue::Null)).expect("serialize");
    assert_eq!(representation.as_bytes(), &[0x08, 0x00]);
    assert_eq!(
      serializer.deserialize(Some(&representation)).expect("deserialize"),
      Some(JsonValue::Null)
    );
  }

  #[rstest(payload)]
  #[case(json!(3.0))]
  #[case(json!(3))]
  #[case(json!(-0.0))]
  #[case(json!(9_007_199_254_740_993_u64))]
  #[case(json!(u64::MAX))]
  #[case(json!(i64::MIN))]
  #[case(json!([1, 1.0, -1, -1.5]))]
  fn numbers_round_trip_exactly(payload: Payload) {
    let serializer = ProtoSerializer::new();
    let representation = serializer.serialize(Some(&payload)).expect("serialize");
    let restored = serializer
      .deserialize(Some(&representation))
      .expect("deserialize")
      .expect("payload");
    assert_eq!(restored, payload);
    assert_eq!(restored.to_string(), payload.to_string());
  }

  #[test]
  fn integral_floats_stay_floats() {
    let serializer = ProtoSerializer::new();
    let representation = serializer.serialize(Some(&json!(3.0))).expect("serialize");
    let restored = serializer
      .deserialize(Some(&representation))
      .expect("deserialize")
      .expect("payload");
    assert!(restored.is_f64());
    assert_ne!(restored, json!(3));

    let representation = serializer.serialize(Some(&json!(-0.0))).expect("serialize");
    let restored = serializer
      .deserialize(Some(&representation))
      .expect("deserialize")
      .expect("payload");
    assert!(restored.as_f64().is_some_and(f64::is_sign_negative));
  }

  #[test]
  fn large_integers_are_not_rounded() {
    let serializer = ProtoSerializer::new();
    for payload in [json!(9_007_199_254_740_993_u64), json!(u64::MAX), json!(i64::MIN)] {
      let representation = serializer.serialize(Some(&payload)).expect("serialize");
      let restored = serializer
        .deserialize(Some(&representation))
        .expect("deserialize")
        .expect("payload");
      assert_eq!(restored.as_u64(), payload.as_u64());
      assert_eq!(restored.as_i64(), payload.as_i64());
      assert!(!restored.is_f64());
    }
  }

  #[test]
  fn rejects_malformed_bytes() {
    let serializer = ProtoSerializer::new();
    let err = serializer
      .deserialize(Some(&Representation::Binary(vec![0xFF])))
      .expect_err("malformed");
    assert!(err.is_serialization());
    assert!(std::error::Error::source(&err).is_some());
  }

  #[test]
  fn rejects_text_representations() {
    let serializer = ProtoSerializer::new();
    let err = serializer
      .deserialize(Some(&Representation::from("not binary")))
      .expect_err("text");
    assert!(err.is_serialization());
  }

  #[rstest(hint, expected)]
  #[case(None, Format::Binary)]
  #[case(Some("SERIALIZABLE"), Format::Serializable)]
  #[case(Some("JAVA"), Format::Java)]
  #[case(Some("protobuf"), Format::Binary)]
  fn normalises_format_hint(hint: Option<&str>, expected: Format) {
    assert_eq!(ProtoSerializer::with_format_hint(hint).format(), expected);
  }
}
