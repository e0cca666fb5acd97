//! Axum router wiring for the analytics API.

use axum::{routing::get, Router};

use bilo_http::server;

use crate::{app_state::AppState, handlers, SERVICE};

pub fn build_router(state: AppState) -> Router {
    let server_cfg = state.cfg().server.clone();
    let api = Router::new()
        .route("/metrics", get(handlers::list_metrics).post(handlers::track_metric))
        .route(
            "/metrics/:metric_name",
            get(handlers::get_metric_aggregation).delete(handlers::clear_metric),
        )
        .route(
            "/events",
            get(handlers::list_events)
                .post(handlers::track_event)
                .delete(handlers::clear_events),
        )
        .route("/dashboard", get(handlers::dashboard))
        .with_state(state);

    server::assemble(api, SERVICE, &server_cfg)
}
