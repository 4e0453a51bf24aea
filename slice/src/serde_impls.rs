use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SliceOptional;

/// Absent serializes as none (`null` in JSON), present as a sequence, also when it has no elements.
impl<T: Serialize> Serialize for SliceOptional<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.pointer().serialize(serializer)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SliceOptional<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<Vec<T>>::deserialize(deserializer).map(SliceOptional::from_option)
  }
}
