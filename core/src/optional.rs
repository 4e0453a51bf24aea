use std::fmt::{self, Debug, Display, Formatter};

use crate::assign::{self, Presence};
use crate::error::EmptyOptionalError;

/// A value that is either present or absent.
///
/// Unlike a bare [`Option`], this type carries its own serialization and database binding contracts: an absent
/// optional is `null` in JSON and `NULL` in a database column, and decoding into an existing optional only replaces it
/// once the new value has been fully decoded (see [`assign_from`](Self::assign_from)).
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Optional<T> {
  inner: Option<T>,
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::empty() }
}


// Construction

impl<T> Optional<T> {
  /// Creates an absent optional.
  #[inline]
  pub const fn empty() -> Self { Self { inner: None } }
  /// Creates a present optional holding `value`.
  #[inline]
  pub const fn of(value: T) -> Self { Self { inner: Some(value) } }
  #[inline]
  pub const fn from_option(inner: Option<T>) -> Self { Self { inner } }

  /// Creates an optional from a nullable reference: absent when `value` is `None`, otherwise present with a copy of
  /// the referenced value.
  #[inline]
  pub fn from_ref(value: Option<&T>) -> Self where
    T: Clone
  {
    Self::from_option(value.cloned())
  }

  /// Creates a present optional holding `value`, unless `value` equals the zero value of `T`, in which case the
  /// optional is absent.
  #[inline]
  pub fn zero_collapse(value: T) -> Self where
    T: Default + PartialEq
  {
    if value == T::default() {
      Self::empty()
    } else {
      Self::of(value)
    }
  }
}


// Access

impl<T> Optional<T> {
  /// Returns a copy of the held value and `true`, or the zero value of `T` and `false` when absent.
  #[inline]
  pub fn get(&self) -> (T, bool) where
    T: Default + Clone
  {
    match &self.inner {
      Some(value) => (value.clone(), true),
      None => (T::default(), false),
    }
  }

  /// Returns the held value.
  ///
  /// # Panics
  ///
  /// Panics with [`EmptyOptionalError`] when absent. Only call this where presence was already established.
  #[inline]
  #[track_caller]
  pub fn must_get(self) -> T {
    match self.inner {
      Some(value) => value,
      None => EmptyOptionalError::panic(),
    }
  }

  #[inline]
  pub fn ok_or_empty(self) -> Result<T, EmptyOptionalError> {
    self.inner.ok_or(EmptyOptionalError)
  }

  #[inline]
  pub fn is_empty(&self) -> bool { self.inner.is_none() }
  #[inline]
  pub fn is_present(&self) -> bool { self.inner.is_some() }

  /// Borrows the held value, or returns `None` when absent. The borrow lives as long as this optional.
  #[inline]
  pub fn pointer(&self) -> Option<&T> { self.inner.as_ref() }
  #[inline]
  pub fn pointer_mut(&mut self) -> Option<&mut T> { self.inner.as_mut() }

  #[inline]
  pub fn as_ref(&self) -> Optional<&T> { Optional { inner: self.inner.as_ref() } }

  #[inline]
  pub fn into_option(self) -> Option<T> { self.inner }
}


// Transformation

impl<T> Optional<T> {
  /// Re-evaluates presence with the [zero-collapse](Self::zero_collapse) rule.
  #[inline]
  pub fn omit_zero(self) -> Self where
    T: Default + PartialEq
  {
    match self.inner {
      Some(value) => Self::zero_collapse(value),
      None => self,
    }
  }

  /// Maps the held value with `f`. `f` is not called when absent.
  #[inline]
  pub fn convert<O>(self, f: impl FnOnce(T) -> O) -> Optional<O> {
    Optional { inner: self.inner.map(f) }
  }

  /// Replaces `self` with the decoded optional in `result` if decoding succeeded. On failure `self` is left as it was
  /// and the error is returned.
  pub fn assign_from<E: Display>(&mut self, result: Result<Self, E>) -> Result<(), E> {
    assign::assign_from(self, result)
  }
}

/// Maps the value held by `optional` with `f`, keeping absence.
#[inline]
pub fn convert<T, O>(optional: Optional<T>, f: impl FnOnce(T) -> O) -> Optional<O> {
  optional.convert(f)
}


impl<T> Presence for Optional<T> {
  #[inline]
  fn is_present(&self) -> bool { self.inner.is_some() }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(inner: Option<T>) -> Self { Self::from_option(inner) }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}

impl<T: Debug> Debug for Optional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      Some(value) => f.debug_tuple("Optional").field(value).finish(),
      None => f.write_str("Optional::Empty"),
    }
  }
}
