//! Router assembly and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use bilo_core::error::{BiloError, Result};

use crate::config::ServerSection;
use crate::obs::{self, HttpMetrics};
use crate::ops::{self, ServiceInfo};

/// Attach the shared routes and layers to a service's API router.
pub fn assemble(api: Router, info: ServiceInfo, server: &ServerSection) -> Router {
    let metrics = Arc::new(HttpMetrics::default());
    let app = api
        .merge(ops::router(info, Arc::clone(&metrics)))
        .layer(middleware::from_fn_with_state(metrics, obs::track_requests));

    if server.cors {
        app.layer(cors_layer())
    } else {
        app
    }
}

/// Any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind and serve until ctrl-c / SIGTERM. Bind failure is the only error
/// a healthy configuration can produce.
pub async fn serve(app: Router, listen: SocketAddr, info: ServiceInfo) -> Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| BiloError::Internal(format!("failed to bind {listen}: {e}")))?;

    tracing::info!(%listen, service = info.name, version = info.version, "service starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(info.name))
        .await
        .map_err(|e| BiloError::Internal(format!("server failed: {e}")))?;

    tracing::info!(service = info.name, "service stopped");
    Ok(())
}

async fn shutdown_signal(service: &'static str) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
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
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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
    tracing::info!(service, "shutdown signal received, draining");
}
