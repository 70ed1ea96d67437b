//! HTTP API routes for the interactive charts page.
//!
//! ## Endpoints
//!
//! - `GET /api/data`    - Chart series for a time range, LTTB-downsampled
//! - `GET /api/range`   - Earliest/latest capture and capture count
//! - `GET /api/modes`   - Mode zones for background shading
//! - `GET /api/metrics` - The metric catalog

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::error;
use serde::{Deserialize, Serialize};

use crate::{
    charts::service::{parse_downsample, ChartQuery},
    db::models::{ChartData, DataRange, ModeZone},
    metrics::{available_metrics, MetricInfo},
    AppState,
};

// ── Request / Response types ────────────────────────────────────────────

/// Query string of `GET /api/data`.
#[derive(Debug, Default, Deserialize)]
pub struct DataParams {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Comma-separated metric ids.
    pub metrics: Option<String>,
    /// Maximum number of points; parsed leniently.
    pub downsample: Option<String>,
}

impl DataParams {
    fn into_query(self) -> ChartQuery {
        let metrics: Vec<String> = self
            .metrics
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        ChartQuery {
            target: parse_downsample(self.downsample.as_deref()),
            start: self.start,
            end: self.end,
            metrics: if metrics.is_empty() { None } else { Some(metrics) },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Body of `GET /api/data`. Reportable failures still answer 200, with empty
/// arrays and `error` set.
#[derive(Debug, Serialize)]
pub struct DataResponse {
    #[serde(flatten)]
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ModesResponse {
    pub zones: Vec<ModeZone>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: Vec<MetricInfo>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ── Router creation ─────────────────────────────────────────────────────

pub fn create_charts_router() -> Router<AppState> {
    Router::new()
        .route("/api/data", get(data_handler))
        .route("/api/range", get(range_handler))
        .route("/api/modes", get(modes_handler))
        .route("/api/metrics", get(metrics_handler))
}

// ── Handlers ────────────────────────────────────────────────────────────

/// `GET /api/data` -- chart series for a time range.
async fn data_handler(
    State(state): State<AppState>,
    Query(params): Query<DataParams>,
) -> Result<Json<DataResponse>, ChartApiError> {
    match state.charts.query_chart_data(params.into_query()).await {
        Ok(data) => Ok(Json(DataResponse { data, error: None })),
        Err(err) if err.is_reportable() => Ok(Json(DataResponse {
            data: ChartData::empty(&[]),
            error: Some(err.to_string()),
        })),
        Err(err) => Err(ChartApiError::Store(format!("{err:#}"))),
    }
}

/// `GET /api/range` -- span and size of the capture database.
async fn range_handler(State(state): State<AppState>) -> Result<Json<DataRange>, ChartApiError> {
    let range = state
        .charts
        .data_range()
        .await
        .map_err(|e| ChartApiError::Store(format!("{e:#}")))?;
    Ok(Json(range))
}

/// `GET /api/modes` -- mode zones for background shading.
async fn modes_handler(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<ModesResponse>, ChartApiError> {
    let zones = state
        .charts
        .mode_zones(params.start.as_deref(), params.end.as_deref())
        .await
        .map_err(|e| ChartApiError::Store(format!("{e:#}")))?;
    Ok(Json(ModesResponse { zones }))
}

/// `GET /api/metrics` -- the metric catalog.
async fn metrics_handler() -> Json<MetricsResponse> {
    Json(MetricsResponse {
        metrics: available_metrics(),
    })
}

// ── Error type ──────────────────────────────────────────────────────────

/// API error type for chart endpoints.
#[derive(Debug)]
pub enum ChartApiError {
    /// Reading the capture database failed.
    Store(String),
}

impl IntoResponse for ChartApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ChartApiError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        error!("Chart request failed: {message}");
        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
