use serde::de::DeserializeOwned;
use serde::Serialize;

use optional_core::json::{is_json_null, JSON_NULL};

use crate::SliceOptional;

impl<T: Serialize> SliceOptional<T> {
  /// Encodes to JSON: `null` when absent, an array when present.
  pub fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
    match self.pointer() {
      Some(values) => serde_json::to_vec(values),
      None => Ok(JSON_NULL.to_vec()),
    }
  }
}

impl<T: DeserializeOwned> SliceOptional<T> {
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
