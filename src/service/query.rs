//! Executes builder-produced queries against PostgreSQL.

use crate::error::AppError;
use crate::sql::{PgBindValue, QueryBuf};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{FromRow, PgPool, Postgres};

pub struct QueryService;

impl QueryService {
    /// All rows, in the order the database returned them.
    pub async fn fetch_all<T>(pool: &PgPool, q: &QueryBuf) -> Result<Vec<T>, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = Self::bind_as::<T>(sqlx::query_as::<_, T>(&q.sql), &q.params)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// One text column from one row, e.g. a database-built GeoJSON document.
    pub async fn fetch_text(pool: &PgPool, q: &QueryBuf) -> Result<String, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let doc = Self::bind_scalar(sqlx::query_scalar::<_, String>(&q.sql), &q.params)
            .fetch_one(pool)
            .await?;
        Ok(doc)
    }

    fn bind_as<'q, T>(
        mut query: QueryAs<'q, Postgres, T, PgArguments>,
        params: &[PgBindValue],
    ) -> QueryAs<'q, Postgres, T, PgArguments> {
        for p in params {
            query = query.bind(p.clone());
        }
        query
    }

    fn bind_scalar<'q, T>(
        mut query: QueryScalar<'q, Postgres, T, PgArguments>,
        params: &[PgBindValue],
    ) -> QueryScalar<'q, Postgres, T, PgArguments> {
        for p in params {
            query = query.bind(p.clone());
        }
        query
    }
}
