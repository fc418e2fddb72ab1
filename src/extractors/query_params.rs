//! Query-string extractor that keeps repeated keys (`?ref=a&ref=b`).

use crate::error::AppError;
use crate::service::validation::parse_int;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

/// Raw query parameters in request order. Empty values count as absent.
#[derive(Clone, Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

#[async_trait]
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(format!("query string: {}", e)))?;
        Ok(QueryParams(pairs))
    }
}

impl QueryParams {
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        QueryParams(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Every non-empty value for `name`.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Zero or one value; a repeated key is rejected.
    pub fn optional(&self, name: &str) -> Result<Option<&str>, AppError> {
        let values = self.values(name);
        match values.as_slice() {
            [] => Ok(None),
            [v] => Ok(Some(*v)),
            _ => Err(AppError::BadRequest(format!("{} given {} times", name, values.len()))),
        }
    }

    /// Exactly one value.
    pub fn single(&self, name: &str) -> Result<&str, AppError> {
        self.optional(name)?
            .ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
    }

    /// At least one value.
    pub fn required_values(&self, name: &str) -> Result<Vec<&str>, AppError> {
        let values = self.values(name);
        if values.is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", name)));
        }
        Ok(values)
    }

    pub fn required_int(&self, name: &str) -> Result<i32, AppError> {
        parse_int(name, self.single(name)?)
    }

    pub fn optional_int(&self, name: &str) -> Result<Option<i32>, AppError> {
        self.optional(name)?.map(|v| parse_int(name, v)).transpose()
    }

    pub fn int_values(&self, name: &str) -> Result<Vec<i32>, AppError> {
        self.values(name).into_iter().map(|v| parse_int(name, v)).collect()
    }
}
