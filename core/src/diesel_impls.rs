//! Binds [`Optional`] to `Nullable` SQL columns: absent is `NULL`, present is whatever the held value binds as.
//!
//! Decoding first runs the backend's [`CheckValue`] hook on the raw value. On SQLite this rejects values whose storage
//! class does not match the column's SQL type, where the plain `FromSql` impls would coerce (text decoding as integer
//! `0`, for example).

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, Queryable};
use diesel::expression::{AsExpression, TypedExpressionType};
use diesel::internal::derives::as_expression::Bound;
use diesel::query_dsl::LoadQuery;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{is_nullable, Nullable, SingleValue, SqlType};
use diesel::{QueryResult, RunQueryDsl};
use tracing::instrument;

use crate::optional::Optional;

impl<T, ST, DB> ToSql<Nullable<ST>, DB> for Optional<T> where
  T: ToSql<ST, DB>,
  DB: Backend,
  ST: SqlType,
{
  #[inline]
  fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, DB>) -> serialize::Result {
    match self.pointer() {
      Some(value) => value.to_sql(out),
      None => Ok(IsNull::Yes),
    }
  }
}

/// Backend hook that validates a raw non-null value before it is decoded as `ST`.
pub trait CheckValue<ST>: Backend {
  #[inline]
  fn check_value(_value: &Self::RawValue<'_>) -> deserialize::Result<()> { Ok(()) }
}

#[cfg(feature = "postgres")]
impl<ST> CheckValue<ST> for diesel::pg::Pg {}

#[cfg(feature = "mysql")]
impl<ST> CheckValue<ST> for diesel::mysql::Mysql {}

#[cfg(feature = "sqlite")]
impl<ST: 'static> CheckValue<ST> for diesel::sqlite::Sqlite {
  fn check_value(value: &Self::RawValue<'_>) -> deserialize::Result<()> {
    use std::any::TypeId;

    use diesel::sql_types::{BigInt, Binary, Bool, Double, Float, Integer, SmallInt};
    use diesel::sqlite::SqliteType;

    use crate::error::SqliteTypeMismatchError;

    let id = TypeId::of::<ST>();
    let is = |other: TypeId| id == other;
    let found = value.value_type();
    let (expected, accepted) = if is(TypeId::of::<Integer>()) || is(TypeId::of::<BigInt>())
      || is(TypeId::of::<SmallInt>()) || is(TypeId::of::<Bool>()) {
      ("INTEGER", matches!(found, Some(SqliteType::Long)))
    } else if is(TypeId::of::<Double>()) || is(TypeId::of::<Float>()) {
      ("REAL", matches!(found, Some(SqliteType::Double | SqliteType::Long)))
    } else if is(TypeId::of::<Binary>()) {
      ("BLOB", matches!(found, Some(SqliteType::Binary)))
    } else {
      return Ok(());
    };
    if accepted {
      Ok(())
    } else {
      Err(SqliteTypeMismatchError { expected, found }.into())
    }
  }
}

impl<T, ST, DB> FromSql<Nullable<ST>, DB> for Optional<T> where
  T: FromSql<ST, DB>,
  DB: CheckValue<ST>,
  ST: SqlType,
{
  #[inline]
  fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
    DB::check_value(&bytes)?;
    T::from_sql(bytes).map(Self::of)
  }

  #[inline]
  fn from_nullable_sql(bytes: Option<DB::RawValue<'_>>) -> deserialize::Result<Self> {
    match bytes {
      Some(bytes) => Self::from_sql(bytes),
      None => Ok(Self::empty()),
    }
  }
}

impl<T, ST, DB> Queryable<ST, DB> for Optional<T> where
  DB: Backend,
  ST: SingleValue,
  Self: FromSql<ST, DB>,
{
  type Row = Self;

  #[inline]
  fn build(row: Self::Row) -> deserialize::Result<Self> { Ok(row) }
}

impl<T, ST> AsExpression<Nullable<ST>> for Optional<T> where
  ST: SqlType<IsNull = is_nullable::NotNull>,
  Nullable<ST>: TypedExpressionType,
{
  type Expression = Bound<Nullable<ST>, Self>;

  #[inline]
  fn as_expression(self) -> Self::Expression { Bound::new(self) }
}

impl<'a, T, ST> AsExpression<Nullable<ST>> for &'a Optional<T> where
  ST: SqlType<IsNull = is_nullable::NotNull>,
  Nullable<ST>: TypedExpressionType,
{
  type Expression = Bound<Nullable<ST>, Self>;

  #[inline]
  fn as_expression(self) -> Self::Expression { Bound::new(self) }
}


impl<T> Optional<T> {
  /// Runs `query`, which must produce a single nullable value, and assigns the result to `self`. When the query or
  /// decoding the value fails, `self` keeps its previous value.
  #[instrument(skip_all, err)]
  pub fn scan<'q, Q, C>(&mut self, query: Q, conn: &mut C) -> QueryResult<()> where
    Q: RunQueryDsl<C> + LoadQuery<'q, C, Self>,
  {
    let scanned = query.get_result::<Self>(conn);
    self.assign_from(scanned)
  }
}
