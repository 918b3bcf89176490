//! REST API over the power curve evaluator.
//!
//! Provides two GET endpoints:
//! - `/power`: evaluate one wind speed, optionally overriding turbine fields
//! - `/curve`: sampled curve for the configured turbine

mod handlers;
mod types;

pub use types::{CurveQuery, CurveResponse, ErrorResponse, PowerQuery, PowerResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::SweepSection;
use crate::curve::TurbineCurveParameters;

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`; no locks needed since the
/// evaluator is pure and all data is read-only.
pub struct AppState {
    /// Turbine used when a request leaves a field unset.
    pub params: TurbineCurveParameters,
    /// Default sweep bounds for `/curve`.
    pub sweep: SweepSection,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/power", get(handlers::get_power))
        .route("/curve", get(handlers::get_curve))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}
