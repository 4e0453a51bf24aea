//! Binds [`SliceOptional`] to `Nullable` SQL columns through the backend's `Vec` binding. On PostgreSQL that is the
//! array convention (`Nullable<Array<ST>>`); on SQLite `SliceOptional<u8>` binds as `Nullable<Binary>`.

use std::fmt::Debug;

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, Queryable};
use diesel::expression::{AsExpression, TypedExpressionType};
use diesel::internal::derives::as_expression::Bound;
use diesel::query_dsl::LoadQuery;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{is_nullable, Nullable, SingleValue, SqlType};
use diesel::{QueryResult, RunQueryDsl};
use optional_core::diesel_impls::CheckValue;
use tracing::instrument;

use crate::SliceOptional;

impl<T, ST, DB> ToSql<Nullable<ST>, DB> for SliceOptional<T> where
  T: Debug,
  Vec<T>: ToSql<ST, DB>,
  DB: Backend,
  ST: SqlType,
{
  #[inline]
  fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, DB>) -> serialize::Result {
    match self.pointer() {
      Some(values) => values.to_sql(out),
      None => Ok(IsNull::Yes),
    }
  }
}

impl<T, ST, DB> FromSql<Nullable<ST>, DB> for SliceOptional<T> where
  Vec<T>: FromSql<ST, DB>,
  DB: CheckValue<ST>,
  ST: SqlType,
{
  #[inline]
  fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
    DB::check_value(&bytes)?;
    Vec::<T>::from_sql(bytes).map(Self::of)
  }

  #[inline]
  fn from_nullable_sql(bytes: Option<DB::RawValue<'_>>) -> deserialize::Result<Self> {
    match bytes {
      Some(bytes) => Self::from_sql(bytes),
      None => Ok(Self::empty()),
    }
  }
}

impl<T, ST, DB> Queryable<ST, DB> for SliceOptional<T> where
  DB: Backend,
  ST: SingleValue,
  Self: FromSql<ST, DB>,
{
  type Row = Self;

  #[inline]
  fn build(row: Self::Row) -> deserialize::Result<Self> { Ok(row) }
}

impl<T, ST> AsExpression<Nullable<ST>> for SliceOptional<T> where
  ST: SqlType<IsNull = is_nullable::NotNull>,
  Nullable<ST>: TypedExpressionType,
{
  type Expression = Bound<Nullable<ST>, Self>;

  #[inline]
  fn as_expression(self) -> Self::Expression { Bound::new(self) }
}

impl<'a, T, ST> AsExpression<Nullable<ST>> for &'a SliceOptional<T> where
  ST: SqlType<IsNull = is_nullable::NotNull>,
  Nullable<ST>: TypedExpressionType,
{
  type Expression = Bound<Nullable<ST>, Self>;

  #[inline]
  fn as_expression(self) -> Self::Expression { Bound::new(self) }
}


impl<T> SliceOptional<T> {
  /// Runs `query`, which must produce a single nullable sequence, and assigns the result to `self`. When the query or
  /// decoding the value fails, `self` keeps its previous value.
  #[instrument(skip_all, err)]
  pub fn scan<'q, Q, C>(&mut self, query: Q, conn: &mut C) -> QueryResult<()> where
    Q: RunQueryDsl<C> + LoadQuery<'q, C, Self>,
  {
    let scanned = query.get_result::<Self>(conn);
    self.assign_from(scanned)
  }
}
