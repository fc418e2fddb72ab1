//! Operational routes: liveness, readiness, build info.

use crate::db::ping;
use crate::queries;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

/// Datasets served under their own path prefix.
pub const DATASETS: [&str; 5] = ["ahcb", "apb", "bom", "pinkerton", "relcensus"];

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness report. `statements` is the number of fixed statements the
/// router executes, all of which were prepared before the listener opened.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    statements: usize,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
    datasets: [&'static str; 5],
}

async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// 200 when the pool answers a round-trip, 503 otherwise.
async fn ready(State(state): State<AppState>) -> Response {
    let statements = queries::registry().count();
    match ping(&state.pool).await {
        Ok(()) => Json(Readiness {
            status: "ok",
            database: "ok",
            statements,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            let body = Readiness {
                status: "degraded",
                database: "unavailable",
                statements,
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        datasets: DATASETS,
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
