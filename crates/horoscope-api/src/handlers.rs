//! REST endpoint handlers.
//!
//! Each handler reads the engine from [`AppState`], runs one chart
//! operation, and wraps the result in a `{"status": "ok", ...}` envelope.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness and engine identifier |
//! | `POST` | `/natal-chart` | Natal chart from birth details |
//! | `POST` | `/daily-transits` | Transits for a date against a chart |
//! | `GET` | `/current-sky` | Positions and aspects right now |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;
use horoscope_core::{NatalChartRequest, current_sky, daily_transits, natal_chart};
use horoscope_types::{Chart, SkyReport, TransitReport};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Value of the `status` field in every successful response.
const STATUS_OK: &str = "ok";

// ---------------------------------------------------------------------------
// Request and response bodies
// ---------------------------------------------------------------------------

/// Body of `POST /daily-transits`.
#[derive(Debug, Deserialize)]
pub struct TransitRequest {
    /// A chart previously returned by `POST /natal-chart`.
    pub natal_chart: Chart,
    /// Target date, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`; today if absent.
    pub date: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: &'static str,
    /// Identifier of the ephemeris engine.
    pub engine: String,
}

/// Response of `POST /natal-chart`.
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    /// Always `ok`.
    pub status: &'static str,
    /// The computed chart.
    pub chart: Chart,
}

/// Response of `POST /daily-transits`.
#[derive(Debug, Serialize)]
pub struct TransitResponse {
    /// Always `ok`.
    pub status: &'static str,
    /// The transit report.
    pub transits: TransitReport,
}

/// Response of `GET /current-sky`.
#[derive(Debug, Serialize)]
pub struct SkyResponse {
    /// Always `ok`.
    pub status: &'static str,
    /// The current sky.
    pub sky: SkyReport,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Report liveness and the engine in use.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_OK,
        engine: state.engine.identifier().to_owned(),
    })
}

/// Compute a natal chart from birth details.
pub async fn natal_chart_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NatalChartRequest>, JsonRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let Json(request) = body?;
    let chart = natal_chart(state.engine.as_ref(), &request, &state.defaults)?;
    Ok(Json(ChartResponse {
        status: STATUS_OK,
        chart,
    }))
}

/// Compute transits for a date against a submitted chart.
pub async fn daily_transits_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TransitRequest>, JsonRejection>,
) -> Result<Json<TransitResponse>, ApiError> {
    let Json(request) = body?;
    let transits = daily_transits(
        state.engine.as_ref(),
        &request.natal_chart,
        request.date.as_deref(),
        Utc::now(),
    )?;
    Ok(Json(TransitResponse {
        status: STATUS_OK,
        transits,
    }))
}

/// Report the sky at the moment of the request.
pub async fn current_sky_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SkyResponse>, ApiError> {
    let sky = current_sky(state.engine.as_ref(), Utc::now())?;
    Ok(Json(SkyResponse {
        status: STATUS_OK,
        sky,
    }))
}
