//! Axum router construction for the horoscope API.
//!
//! Assembles all routes into a single [`Router`] with CORS enabled for
//! the browser front end and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /health` -- liveness and engine identifier
/// - `POST /natal-chart` -- natal chart
/// - `POST /daily-transits` -- transits against a chart
/// - `GET /current-sky` -- current sky
///
/// CORS allows any origin; the service holds no credentials or user data.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/natal-chart", post(handlers::natal_chart_handler))
        .route("/daily-transits", post(handlers::daily_transits_handler))
        .route("/current-sky", get(handlers::current_sky_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
