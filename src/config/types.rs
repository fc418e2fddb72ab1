//! Runtime configuration types.

use sqlx::postgres::PgSslMode;
use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "cdh";
pub const DEFAULT_DB_USER: &str = "cdh";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_CONNECT_RETRIES: u32 = 5;
pub const DEFAULT_INTERFACE: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8090;

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub interface: String,
    pub port: u16,
    /// Per-request access logging.
    pub log_requests: bool,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        // Bare IPv6 interfaces need brackets.
        match self.interface.parse::<std::net::IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.interface, self.port),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection URL; when present the discrete fields are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    pub connect_retries: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("connect_retries", &self.connect_retries)
            .finish()
    }
}
