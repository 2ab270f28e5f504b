//! Definition of the recognised serialization format identifiers.

use crate::error::UnknownFormat;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed set of format identifiers a serializer may be bound to.
///
/// Identifiers are case-sensitive: `"BINARY"` is recognised, `"binary"` is not.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Format {
  /// Raw bytes.
  #[default]
  Binary,
  /// Native object-graph encoding of the peer runtime.
  Java,
  /// Textual encoding.
  String,
  /// XML documents.
  Xml,
  /// Opaque serializable object streams.
  Serializable,
}

impl Format {
  /// Every recognised format, in declaration order.
  pub const ALL: [Format; 5] = [
    Format::Binary,
    Format::Java,
    Format::String,
    Format::Xml,
    Format::Serializable,
  ];

  /// Returns the wire identifier of this format.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Format::Binary => "BINARY",
      Format::Java => "JAVA",
      Format::String => "STRING",
      Format::Xml => "XML",
      Format::Serializable => "SERIALIZABLE",
    }
  }

  /// Returns `true` when `identifier` names one of the recognised formats.
  #[must_use]
  pub fn is_recognized(identifier: &str) -> bool {
    identifier.parse::<Format>().is_ok()
  }

  /// Normalises a construction-time format hint.
  ///
  /// A recognised hint is kept as is. An absent or unrecognised hint falls back to
  /// [`Format::default`]; the unknown text is never echoed back.
  #[must_use]
  pub fn from_hint(hint: Option<&str>) -> Self {
    match hint.map(str::parse::<Format>) {
      Some(Ok(format)) => format,
      Some(Err(err)) => {
        tracing::warn!("{}, falling back to {}", err, Format::default());
        Format::default()
      }
      None => {
        tracing::debug!("no format hint given, using {}", Format::default());
        Format::default()
      }
    }
  }
}

impl Display for Format {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl AsRef<str> for Format {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl FromStr for Format {
  type Err = UnknownFormat;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Format::ALL
      .into_iter()
      .find(|format| format.as_str() == s)
      .ok_or_else(|| UnknownFormat(s.to_string()))
  }
}

impl From<Format> for String {
  fn from(format: Format) -> Self {
    format.as_str().to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rstest::*;

  #[rstest(identifier, expected)]
  #[case("BINARY", Format::Binary)]
  #[case("JAVA", Format::Java)]
  #[case("STRING", Format::String)]
  #[case("XML", Format::Xml)]
  #[case("SERIALIZABLE", Format::Serializable)]
  fn parses_recognised_identifiers(identifier: &str, expected: Format) {
    assert_eq!(identifier.parse::<Format>(), Ok(expected));
    assert_eq!(expected.to_string(), identifier);
  }

  #[rstest(identifier)]
  #[case("binary")]
  #[case("Binary")]
  #[case("")]
  #[case(" BINARY")]
  #[case("A new format!")]
  fn rejects_unknown_identifiers(identifier: &str) {
    assert_eq!(
      identifier.parse::<Format>(),
      Err(UnknownFormat(identifier.to_string()))
    );
    assert!(!Format::is_recognized(identifier));
  }

  #[rstest(hint, expected)]
  #[case(None, Format::Binary)]
  #[case(Some("XML"), Format::Xml)]
  #[case(Some("STRING"), Format::String)]
  #[case(Some("xml"), Format::Binary)]
  #[case(Some("protobuf"), Format::Binary)]
  fn normalises_format_hints(hint: Option<&str>, expected: Format) {
    assert_eq!(Format::from_hint(hint), expected);
  }

  #[test]
  fn all_lists_each_format_once() {
    let mut identifiers = Format::ALL.map(Format::as_str).to_vec();
    identifiers.sort_unstable();
    identifiers.dedup();
    assert_eq!(identifiers.len(), Format::ALL.len());
  }
}
