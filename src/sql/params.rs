//! Typed values bound to builder-produced queries.

use chrono::NaiveDate;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value that can be bound positionally to a PostgreSQL query. Each
/// variant reports its own type so placeholders need no casts.
#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Int(i32),
    BigInt(i64),
    Text(String),
    Date(NaiveDate),
    IntArray(Vec<i32>),
    TextArray(Vec<String>),
}

impl From<i32> for PgBindValue {
    fn from(v: i32) -> Self {
        PgBindValue::Int(v)
    }
}

impl From<i64> for PgBindValue {
    fn from(v: i64) -> Self {
        PgBindValue::BigInt(v)
    }
}

impl From<&str> for PgBindValue {
    fn from(v: &str) -> Self {
        PgBindValue::Text(v.to_string())
    }
}

impl From<String> for PgBindValue {
    fn from(v: String) -> Self {
        PgBindValue::Text(v)
    }
}

impl From<NaiveDate> for PgBindValue {
    fn from(v: NaiveDate) -> Self {
        PgBindValue::Date(v)
    }
}

impl From<Vec<i32>> for PgBindValue {
    fn from(v: Vec<i32>) -> Self {
        PgBindValue::IntArray(v)
    }
}

impl From<Vec<String>> for PgBindValue {
    fn from(v: Vec<String>) -> Self {
        PgBindValue::TextArray(v)
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            PgBindValue::Int(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf),
            PgBindValue::BigInt(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf),
            PgBindValue::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf),
            PgBindValue::Date(d) => <NaiveDate as Encode<Postgres>>::encode_by_ref(d, buf),
            PgBindValue::IntArray(v) => <Vec<i32> as Encode<Postgres>>::encode_by_ref(v, buf),
            PgBindValue::TextArray(v) => <Vec<String> as Encode<Postgres>>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::Int(_) => <i32 as Type<Postgres>>::type_info(),
            PgBindValue::BigInt(_) => <i64 as Type<Postgres>>::type_info(),
            PgBindValue::Text(_) => <String as Type<Postgres>>::type_info(),
            PgBindValue::Date(_) => <NaiveDate as Type<Postgres>>::type_info(),
            PgBindValue::IntArray(_) => <Vec<i32> as Type<Postgres>>::type_info(),
            PgBindValue::TextArray(_) => <Vec<String> as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
