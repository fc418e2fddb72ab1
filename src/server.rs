//! Router assembly, cross-cutting middleware, and process lifecycle:
//! initialize (config, pool, statements) → serve → shut down on signal.

use crate::config::Config;
use crate::db::connect_with_backoff;
use crate::error::{status_text, StartupError};
use crate::queries;
use crate::routes::{common_routes, dataset_routes};
use crate::state::AppState;
use axum::{http::StatusCode, response::Response, Router};
use std::any::Any;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

async fn not_found() -> Response {
    status_text(StatusCode::NOT_FOUND)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "handler panicked");
    status_text(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Wrap `router` so that, outermost first, requests are logged (when
/// enabled), responses compressed, panics turned into 500s, and CORS
/// headers added for any origin.
pub fn apply_middleware(router: Router, log_requests: bool) -> Router {
    let router = router
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new());
    if log_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Full application: operational and dataset routes, plain-text 404 fallback, middleware.
pub fn build_router(state: AppState, log_requests: bool) -> Router {
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(dataset_routes(state))
        .fallback(not_found);
    apply_middleware(app, log_requests)
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Run the server until a termination signal. Any failure before the
/// listener is up is returned and should end the process.
pub async fn run(config: Config) -> Result<(), StartupError> {
    tracing::info!(config = ?config, "initializing");
    let pool = connect_with_backoff(&config.database).await?;

    let statements = queries::registry();
    if let Err(e) = statements.prepare_all(&pool).await {
        pool.close().await;
        return Err(e);
    }

    let app = build_router(AppState { pool: pool.clone() }, config.log_requests);
    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    tracing::info!("closing database pool");
    pool.close().await;
    served?;
    tracing::info!("stopped");
    Ok(())
}
