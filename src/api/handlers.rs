//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{CurveQuery, CurveResponse, ErrorResponse, PowerQuery, PowerResponse};
use crate::curve::{self, CurveError};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Evaluates one wind speed.
///
/// `GET /power?wind_speed=7` → 200 + `PowerResponse` JSON
/// `GET /power?wind_speed=7&interpolation=Quadratic` → 400 + `ErrorResponse`
pub async fn get_power(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PowerQuery>,
) -> Result<Json<PowerResponse>, ApiError> {
    let parameters = query.resolve(&state.params).map_err(bad_request)?;
    let power_mw = curve::evaluate(query.wind_speed, &parameters).map_err(bad_request)?;

    Ok(Json(PowerResponse {
        wind_speed_ms: query.wind_speed,
        power_mw,
        parameters,
    }))
}

/// Returns the sampled curve for the configured turbine.
///
/// `GET /curve` → sweep bounds from the server config
/// `GET /curve?from=0&to=10&step=1` → 11 points
/// `GET /curve?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_curve(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CurveQuery>,
) -> Result<Json<CurveResponse>, ApiError> {
    let from = query.from.unwrap_or(state.sweep.from);
    let to = query.to.unwrap_or(state.sweep.to);
    let step = query.step.unwrap_or(state.sweep.step);

    let points = curve::sample(&state.params, from, to, step).map_err(bad_request)?;
    Ok(Json(CurveResponse {
        parameters: state.params,
        points,
    }))
}

fn bad_request(err: CurveError) -> ApiError {
    tracing::debug!("rejecting request: {err}");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
