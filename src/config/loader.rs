//! Load configuration from environment variables, each with a default.

use crate::config::types::*;
use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_DB_HOST: &str = "DATASET_API_DBHOST";
pub const ENV_DB_PORT: &str = "DATASET_API_DBPORT";
pub const ENV_DB_NAME: &str = "DATASET_API_DBNAME";
pub const ENV_DB_USER: &str = "DATASET_API_DBUSER";
pub const ENV_DB_PASS: &str = "DATASET_API_DBPASS";
pub const ENV_DB_SSL: &str = "DATASET_API_SSL";
pub const ENV_DB_MAX_CONNECTIONS: &str = "DATASET_API_DB_MAX_CONNECTIONS";
pub const ENV_DB_CONNECT_RETRIES: &str = "DATASET_API_DB_CONNECT_RETRIES";
pub const ENV_INTERFACE: &str = "DATASET_API_INTERFACE";
pub const ENV_PORT: &str = "DATASET_API_PORT";
pub const ENV_LOGGING: &str = "DATASET_API_LOGGING";

impl Config {
    /// Read the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let string = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let ssl_mode = match get(ENV_DB_SSL) {
            Some(v) => PgSslMode::from_str(&v).map_err(|_| ConfigError::Invalid {
                var: ENV_DB_SSL,
                value: v,
            })?,
            None => PgSslMode::Prefer,
        };

        let database = DatabaseConfig {
            url: get(ENV_DATABASE_URL),
            host: string(ENV_DB_HOST, DEFAULT_DB_HOST),
            port: parse_or(get(ENV_DB_PORT), ENV_DB_PORT, DEFAULT_DB_PORT)?,
            name: string(ENV_DB_NAME, DEFAULT_DB_NAME),
            user: string(ENV_DB_USER, DEFAULT_DB_USER),
            password: lookup(ENV_DB_PASS).unwrap_or_default(),
            ssl_mode,
            max_connections: parse_or(get(ENV_DB_MAX_CONNECTIONS), ENV_DB_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS)?,
            connect_retries: parse_or(get(ENV_DB_CONNECT_RETRIES), ENV_DB_CONNECT_RETRIES, DEFAULT_CONNECT_RETRIES)?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: ENV_DB_MAX_CONNECTIONS,
                value: "0".into(),
            });
        }

        Ok(Config {
            database,
            interface: string(ENV_INTERFACE, DEFAULT_INTERFACE),
            port: parse_or(get(ENV_PORT), ENV_PORT, DEFAULT_PORT)?,
            log_requests: match get(ENV_LOGGING) {
                Some(v) => parse_switch(&v).ok_or(ConfigError::Invalid {
                    var: ENV_LOGGING,
                    value: v,
                })?,
                None => true,
            },
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl);
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(self.ssl_mode))
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { var, value: v }),
        None => Ok(default),
    }
}

fn parse_switch(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
