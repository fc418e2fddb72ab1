//! Nullable column values that encode SQL NULL as JSON `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::decode::Decode;
use sqlx::postgres::{PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Type, ValueRef};

/// A column value paired with a validity flag. `valid == false` means the
/// database returned NULL; `value` then holds `T::default()` and is never
/// serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Nullable<T> {
    pub fn new(value: T) -> Self {
        Nullable { value, valid: true }
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: Default> Nullable<T> {
    pub fn null() -> Self {
        Nullable {
            value: T::default(),
            valid: false,
        }
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Nullable::new(v),
            None => Nullable::null(),
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            self.value.serialize(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

impl<T: Type<Postgres>> Type<Postgres> for Nullable<T> {
    fn type_info() -> PgTypeInfo {
        T::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        T::compatible(ty)
    }
}

impl<'r, T> Decode<'r, Postgres> for Nullable<T>
where
    T: Decode<'r, Postgres> + Default,
{
    fn decode(value: PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        if value.is_null() {
            return Ok(Nullable::null());
        }
        T::decode(value).map(Nullable::new)
    }
}
