use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;

/// Absent serializes as none (`null` in JSON), present as some value.
impl<T: Serialize> Serialize for Optional<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.pointer().serialize(serializer)
  }
}

/// None (`null` in JSON) deserializes as absent; anything else is handed to `T`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Optional::from_option)
  }
}
