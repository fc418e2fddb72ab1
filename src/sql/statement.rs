//! Fixed SQL statements: declared once per endpoint, prepared at startup,
//! then executed with bound parameters for every request.
//!
//! sqlx keeps a prepared-statement cache per pooled connection, so a
//! statement is parsed by the server once per connection and reused after
//! that. Preparing every statement during startup surfaces broken SQL before
//! the listener opens.

use crate::error::StartupError;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{Executor, FromRow, PgPool, Postgres};

#[derive(Debug)]
pub struct Statement {
    pub name: &'static str,
    pub sql: &'static str,
}

impl Statement {
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Statement { name, sql }
    }

    /// Rows scanned into `T`; bind parameters in declaration order.
    pub fn query_as<'q, T>(&'static self) -> QueryAs<'q, Postgres, T, PgArguments>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        tracing::debug!(statement = self.name, "execute");
        sqlx::query_as::<_, T>(self.sql).persistent(true)
    }

    /// Single-column result, e.g. a GeoJSON document built by the database.
    pub fn query_scalar<'q, T>(&'static self) -> QueryScalar<'q, Postgres, T, PgArguments>
    where
        (T,): for<'r> FromRow<'r, PgRow>,
    {
        tracing::debug!(statement = self.name, "execute");
        sqlx::query_scalar::<_, T>(self.sql).persistent(true)
    }
}

/// All fixed statements the router can execute.
pub struct StatementRegistry {
    statements: Vec<&'static Statement>,
}

impl StatementRegistry {
    pub fn new(statements: Vec<&'static Statement>) -> Self {
        StatementRegistry { statements }
    }

    pub fn count(&self) -> usize {
        self.statements.len()
    }

    /// Prepare each statement on one pooled connection. The first failure
    /// is returned with the statement's name.
    pub async fn prepare_all(&self, pool: &PgPool) -> Result<(), StartupError> {
        let mut conn = pool.acquire().await.map_err(|source| StartupError::Connect {
            attempts: 1,
            source,
        })?;
        for stmt in &self.statements {
            (&mut *conn)
                .prepare(stmt.sql)
                .await
                .map_err(|source| StartupError::Prepare {
                    name: stmt.name,
                    source,
                })?;
            tracing::debug!(statement = stmt.name, "prepared");
        }
        tracing::info!(count = self.count(), "statements prepared");
        Ok(())
    }
}
