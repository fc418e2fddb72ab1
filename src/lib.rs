//! Read-only HTTP API over humanities research datasets stored in PostgreSQL.
//!
//! Each endpoint validates its parameters, runs a fixed or filter-built SQL
//! query, scans rows into typed records, and answers with JSON (or with a
//! GeoJSON document assembled by the database).

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod nullable;
pub mod queries;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;

pub use config::Config;
pub use error::{AppError, ConfigError, StartupError};
pub use nullable::Nullable;
pub use server::{apply_middleware, build_router, run};
pub use state::AppState;
