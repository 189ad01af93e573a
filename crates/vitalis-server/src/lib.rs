//! vitalis-server
//!
//! HTTP API: operator signup/login, the session list, and on-demand report
//! generation with static download of the resulting PDFs.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use vitalis_core::report_keys::REPORTS_ROUTE;

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/sessions", get(routes::sessions::list_sessions))
        .route(
            "/generate-report",
            get(routes::reports::generate_report).post(routes::reports::generate_report),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Public
        .route("/", get(routes::index::index))
        .route("/health", get(routes::health::health_check))
        .route("/auth/signup", post(routes::auth::signup))
        .route("/auth/login", post(routes::auth::login))
        .merge(protected)
        .nest_service(REPORTS_ROUTE, ServeDir::new(state.reports.dir()))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
