//! Shared application state for all routes.

use sqlx::PgPool;

/// Built once at startup and cloned into every handler. The pool is the
/// only shared resource; it hands each request its own connection.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
