use std::fmt::{self, Debug, Display, Formatter};

use optional_core::assign::{self, Presence};
use optional_core::{EmptyOptionalError, Optional};

#[cfg(feature = "serde")]
pub mod serde_impls;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "diesel")]
pub mod diesel_impls;

/// A sequence that is either present or absent.
///
/// A present but zero-length sequence is distinct from an absent one, except when constructed through
/// [`of_omit_zero`](Self::of_omit_zero) or re-evaluated with [`omit_zero`](Self::omit_zero). The sequence is owned
/// exclusively; [`get`](Self::get) and [`get_mut`](Self::get_mut) borrow it, [`get_copy`](Self::get_copy) returns an
/// independent copy.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct SliceOptional<T> {
  inner: Option<Vec<T>>,
}

impl<T> Default for SliceOptional<T> {
  #[inline]
  fn default() -> Self { Self::empty() }
}


// Construction

impl<T> SliceOptional<T> {
  #[inline]
  pub const fn empty() -> Self { Self { inner: None } }
  /// Creates a present optional holding `values`, even when `values` is empty.
  #[inline]
  pub const fn of(values: Vec<T>) -> Self { Self { inner: Some(values) } }
  /// Creates an optional holding `values`, absent when `values` is empty.
  #[inline]
  pub fn of_omit_zero(values: Vec<T>) -> Self { Self::of(values).omit_zero() }
  #[inline]
  pub const fn from_option(inner: Option<Vec<T>>) -> Self { Self { inner } }

  /// Creates an optional from a nullable reference, copying the referenced elements.
  #[inline]
  pub fn from_ref(values: Option<&[T]>) -> Self where
    T: Clone
  {
    Self::from_option(values.map(<[T]>::to_vec))
  }
}


// Access

impl<T> SliceOptional<T> {
  /// Borrows the held sequence and returns `true`, or returns an empty slice and `false` when absent.
  #[inline]
  pub fn get(&self) -> (&[T], bool) {
    match &self.inner {
      Some(values) => (values.as_slice(), true),
      None => (&[], false),
    }
  }
  /// Mutably borrows the held sequence. Mutations are visible through later calls to [`get`](Self::get).
  #[inline]
  pub fn get_mut(&mut self) -> (&mut [T], bool) {
    match &mut self.inner {
      Some(values) => (values.as_mut_slice(), true),
      None => (&mut [], false),
    }
  }

  /// Returns a copy of the held sequence and `true`, or an empty sequence and `false` when absent.
  pub fn get_copy(&self) -> (Vec<T>, bool) where
    T: Clone
  {
    match &self.inner {
      Some(values) => (values.clone(), true),
      None => (Vec::new(), false),
    }
  }

  /// Borrows the held sequence.
  ///
  /// # Panics
  ///
  /// Panics with [`EmptyOptionalError`] when absent.
  #[inline]
  #[track_caller]
  pub fn must_get(&self) -> &[T] {
    match &self.inner {
      Some(values) => values,
      None => EmptyOptionalError::panic(),
    }
  }
  /// Copies the held sequence.
  ///
  /// # Panics
  ///
  /// Panics with [`EmptyOptionalError`] when absent.
  #[inline]
  #[track_caller]
  pub fn must_get_copy(&self) -> Vec<T> where
    T: Clone
  {
    self.must_get().to_vec()
  }

  #[inline]
  pub fn is_empty(&self) -> bool { self.inner.is_none() }
  #[inline]
  pub fn is_present(&self) -> bool { self.inner.is_some() }

  #[inline]
  pub fn pointer(&self) -> Option<&Vec<T>> { self.inner.as_ref() }
  #[inline]
  pub fn pointer_mut(&mut self) -> Option<&mut Vec<T>> { self.inner.as_mut() }

  #[inline]
  pub fn into_option(self) -> Option<Vec<T>> { self.inner }
  #[inline]
  pub fn into_optional(self) -> Optional<Vec<T>> { Optional::from_option(self.inner) }
}


// Transformation

impl<T> SliceOptional<T> {
  /// Re-evaluates presence as "holds at least one element".
  #[inline]
  pub fn omit_zero(self) -> Self {
    Self { inner: self.inner.filter(|values| !values.is_empty()) }
  }

  /// Replaces `self` with the decoded optional in `result` if decoding succeeded. On failure `self` is left as it was
  /// and the error is returned.
  pub fn assign_from<E: Display>(&mut self, result: Result<Self, E>) -> Result<(), E> {
    assign::assign_from(self, result)
  }
}


impl<T> Presence for SliceOptional<T> {
  #[inline]
  fn is_present(&self) -> bool { self.inner.is_some() }
}

impl<T> From<Vec<T>> for SliceOptional<T> {
  #[inline]
  fn from(values: Vec<T>) -> Self { Self::of(values) }
}
impl<T> From<Option<Vec<T>>> for SliceOptional<T> {
  #[inline]
  fn from(inner: Option<Vec<T>>) -> Self { Self::from_option(inner) }
}
impl<T> From<Optional<Vec<T>>> for SliceOptional<T> {
  #[inline]
  fn from(optional: Optional<Vec<T>>) -> Self { Self::from_option(optional.into_option()) }
}
impl<T> From<SliceOptional<T>> for Option<Vec<T>> {
  #[inline]
  fn from(optional: SliceOptional<T>) -> Self { optional.into_option() }
}

impl<T: Debug> Debug for SliceOptional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      Some(values) => f.debug_tuple("SliceOptional").field(values).finish(),
      None => f.write_str("SliceOptional::Empty"),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty() {
    let optional = SliceOptional::<i32>::empty();
    assert_eq!(optional.get(), (&[][..], false));
    assert_eq!(optional.get_copy(), (vec![], false));
    assert!(optional.is_empty());
    assert_eq!(optional.pointer(), None);
    assert_eq!(optional, SliceOptional::default());
  }

  #[test]
  fn of_keeps_zero_length_present() {
    let optional = SliceOptional::<i32>::of(Vec::new());
    assert_eq!(optional.get(), (&[][..], true));
    assert!(optional.is_present());
    assert_ne!(optional, SliceOptional::empty());
  }

  #[test]
  fn of_omit_zero() {
    assert!(SliceOptional::<i32>::of_omit_zero(Vec::new()).is_empty());
    assert_eq!(SliceOptional::of_omit_zero(vec![1]).get(), (&[1][..], true));
  }

  #[test]
  fn omit_zero() {
    assert!(SliceOptional::<i32>::of(Vec::new()).omit_zero().is_empty());
    assert_eq!(SliceOptional::of(vec![1, 2]).omit_zero(), SliceOptional::of(vec![1, 2]));
    assert!(SliceOptional::<i32>::empty().omit_zero().is_empty());
  }

  #[test]
  fn from_ref_copies() {
    let source = vec![1, 2, 3];
    let optional = SliceOptional::from_ref(Some(source.as_slice()));
    assert_eq!(optional.get(), (&[1, 2, 3][..], true));
    assert!(SliceOptional::<i32>::from_ref(None).is_empty());
  }

  #[test]
  fn get_mut_aliases() {
    let mut optional = SliceOptional::of(vec![1, 2, 3]);
    let (values, present) = optional.get_mut();
    assert!(present);
    values[0] = 10;
    assert_eq!(optional.get(), (&[10, 2, 3][..], true));

    if let Some(values) = optional.pointer_mut() {
      values.push(4);
    }
    assert_eq!(optional.must_get(), &[10, 2, 3, 4]);
  }

  #[test]
  fn get_copy_does_not_alias() {
    let optional = SliceOptional::of(vec![1, 2, 3]);
    let (mut copy, present) = optional.get_copy();
    assert!(present);
    assert_eq!(copy, vec![1, 2, 3]);
    copy[0] = 10;
    copy.push(4);
    assert_eq!(optional.get(), (&[1, 2, 3][..], true));

    let mut copy = optional.must_get_copy();
    copy.clear();
    assert_eq!(optional.must_get(), &[1, 2, 3]);
  }

  #[test]
  fn get_mut_empty() {
    let mut optional = SliceOptional::<i32>::empty();
    let (values, present) = optional.get_mut();
    assert!(values.is_empty());
    assert!(!present);
  }

  #[test]
  #[should_panic(expected = "optional value is empty")]
  fn must_get_empty_panics() {
    SliceOptional::<i32>::empty().must_get();
  }

  #[test]
  #[should_panic(expected = "optional value is empty")]
  fn must_get_copy_empty_panics() {
    SliceOptional::<i32>::empty().must_get_copy();
  }

  #[test]
  fn conversions() {
    assert_eq!(SliceOptional::from(vec![1]), SliceOptional::of(vec![1]));
    assert_eq!(SliceOptional::<i32>::from(None), SliceOptional::empty());
    assert_eq!(SliceOptional::from(Optional::of(vec![1])), SliceOptional::of(vec![1]));
    assert_eq!(SliceOptional::of(vec![1]).into_optional(), Optional::of(vec![1]));
    assert_eq!(Option::from(SliceOptional::of(vec![2])), Some(vec![2]));
  }

  #[test]
  fn assign_from() {
    let mut optional = SliceOptional::of(vec![1]);
    assert_eq!(optional.assign_from(Err(EmptyOptionalError)), Err(EmptyOptionalError));
    assert_eq!(optional, SliceOptional::of(vec![1]));
    assert_eq!(optional.assign_from(Ok::<_, EmptyOptionalError>(SliceOptional::of(vec![2, 3]))), Ok(()));
    assert_eq!(optional, SliceOptional::of(vec![2, 3]));
  }

  #[test]
  fn debug() {
    assert_eq!(format!("{:?}", SliceOptional::of(vec![1, 2])), "SliceOptional([1, 2])");
    assert_eq!(format!("{:?}", SliceOptional::<i32>::empty()), "SliceOptional::Empty");
  }
}
