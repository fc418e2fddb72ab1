//! Typed errors and HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Fixed body for unmatched routes and empty single-entity lookups.
pub const NOT_FOUND_BODY: &str = "404 page not found";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
    #[error("invalid database url: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Fatal conditions before the server accepts traffic.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database unreachable after {attempts} attempts: {source}")]
    Connect {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },
    #[error("prepare statement '{name}': {source}")]
    Prepare {
        name: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-request failures. Each variant maps to one HTTP status; none of the
/// inner detail reaches the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Encode(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Plain-text response carrying only the status reason phrase.
pub fn status_text(status: StatusCode) -> Response {
    let body = if status == StatusCode::NOT_FOUND {
        NOT_FOUND_BODY
    } else {
        status.canonical_reason().unwrap_or("Error")
    };
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        status_text(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(AppError::BadRequest("year".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("ref".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Db(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn body_hides_detail() {
        let res = AppError::Db(sqlx::Error::Protocol("secret table name".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"Internal Server Error");
    }

    #[tokio::test]
    async fn not_found_body_is_fixed() {
        let res = AppError::NotFound("John 99:99".into()).into_response();
        let bytes = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], NOT_FOUND_BODY.as_bytes());
    }
}
