//! Axum router wiring for the calculator API.

use axum::{
    routing::{get, post},
    Router,
};

use bilo_http::server;

use crate::{app_state::AppState, handlers, SERVICE};

pub fn build_router(state: AppState) -> Router {
    let server_cfg = state.cfg().server.clone();
    let api = Router::new()
        .route("/calculate", post(handlers::calculate))
        .route("/emission-factors", get(handlers::emission_factors))
        .with_state(state);

    server::assemble(api, SERVICE, &server_cfg)
}
