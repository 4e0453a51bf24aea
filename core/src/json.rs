use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::optional::Optional;

/// The JSON encoding of an absent optional.
pub const JSON_NULL: [u8; 4] = *b"null";

/// Returns whether `data` is exactly the absence sentinel `null`. Surrounding whitespace is not accepted.
#[inline]
pub fn is_json_null(data: &[u8]) -> bool {
  data == JSON_NULL
}

impl<T: Serialize> Optional<T> {
  /// Encodes to JSON: `null` when absent, the encoding of the held value when present.
  pub fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
    match self.pointer() {
      Some(value) => serde_json::to_vec(value),
      None => Ok(JSON_NULL.to_vec()),
    }
  }
}

impl<T: DeserializeOwned> Optional<T> {
  pub fn from_json_slice(data: &[u8]) -> serde_json::Result<Self> {
    if is_json_null(data) {
      return Ok(Self::empty());
    }
    serde_json::from_slice(data).map(Self::of)
  }

  /// Decodes `data` and assigns the result to `self`. On a decode error `self` keeps its previous value.
  pub fn set_from_json(&mut self, data: &[u8]) -> serde_json::Result<()> {
    self.assign_from(Self::from_json_slice(data))
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_sentinel() {
    assert!(is_json_null(b"null"));
    assert!(!is_json_null(b" null"));
    assert!(!is_json_null(b"NULL"));
    assert!(!is_json_null(b"nul"));
  }

  #[test]
  fn encode() {
    assert_eq!(Optional::<i32>::empty().to_json_vec().unwrap(), b"null");
    assert_eq!(Optional::of(100).to_json_vec().unwrap(), b"100");
    assert_eq!(Optional::of("a b".to_string()).to_json_vec().unwrap(), br#""a b""#);
  }

  #[test]
  fn set_from_json() {
    let mut optional = Optional::<i32>::empty();
    optional.set_from_json(b"1").unwrap();
    assert_eq!(optional.get(), (1, true));

    let mut optional = Optional::of(100);
    optional.set_from_json(b"1").unwrap();
    assert_eq!(optional.get(), (1, true));

    optional.set_from_json(b"null").unwrap();
    assert_eq!(optional.get(), (0, false));
  }

  #[test]
  fn set_from_json_failure_keeps_value() {
    let mut optional = Optional::of(100);
    assert!(optional.set_from_json(b"\"Hello World!\"").is_err());
    assert_eq!(optional.get(), (100, true));

    let mut optional = Optional::<i32>::empty();
    assert!(optional.set_from_json(b"{").is_err());
    assert!(optional.is_empty());
  }

  #[test]
  fn whitespace_is_not_null() {
    // Padded `null` goes to the value decoder, which rejects null for a plain integer.
    let mut optional = Optional::of(5);
    assert!(optional.set_from_json(b" null").is_err());
    assert_eq!(optional, Optional::of(5));
  }

  #[test]
  fn round_trip() {
    for optional in [Optional::of(-3i64), Optional::empty()] {
      let encoded = optional.to_json_vec().unwrap();
      assert_eq!(Optional::from_json_slice(&encoded).unwrap(), optional);
    }
  }
}
