use thiserror::Error;

/// Returned, or panicked with, when the value of an absent optional is forcibly taken.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
#[error("optional value is empty")]
pub struct EmptyOptionalError;

impl EmptyOptionalError {
  /// Panics with this error as the message. Used by the `must_get` family of accessors.
  #[cold]
  #[track_caller]
  pub fn panic() -> ! {
    panic!("{}", EmptyOptionalError)
  }
}


/// Returned when a SQLite value's storage class does not match the SQL type it is decoded as.
#[cfg(feature = "sqlite")]
#[derive(Debug, Error)]
#[error("expected SQLite {expected} value, found storage class {found:?}")]
pub struct SqliteTypeMismatchError {
  pub expected: &'static str,
  pub found: Option<diesel::sqlite::SqliteType>,
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn message() {
    assert_eq!(EmptyOptionalError.to_string(), "optional value is empty");
  }

  #[test]
  #[should_panic(expected = "optional value is empty")]
  fn panic_uses_message() {
    EmptyOptionalError::panic();
  }
}
