//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    state::AppState,
    tasks::start_ticker,
};
use super::responses::{ApiResponse, DisplayResponse, HealthResponse, StatusResponse};

/// Request body for POST /start
#[derive(Debug, Clone, Deserialize)]
pub struct StartRequest {
    /// Initial countdown duration in whole seconds
    pub seconds: u64,
}

/// Handle POST /start - Arm the countdown and start the ticker
///
/// A ticker left over from a previous countdown is cancelled first, so at most
/// one tick process drives the clock at any time.
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.take_ticker() {
        Ok(Some(handle)) => {
            info!("Cancelling previous ticker before restart");
            handle.stop().await;
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to take ticker handle: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    let snapshot = match state.begin_countdown(request.seconds) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to arm countdown: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let handle = start_ticker(Arc::clone(&state));
    if let Err(e) = state.set_ticker(handle) {
        error!("Failed to store ticker handle: {}", e);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    info!("Start endpoint called - countdown running from {} seconds", request.seconds);
    Ok(Json(ApiResponse::counting(
        format!("Countdown started with {} seconds", request.seconds),
        snapshot,
    )))
}

/// Handle POST /stop - Cancel the running ticker
///
/// Idempotent: stopping when no ticker is running reports the idle state
/// instead of failing.
pub async fn stop_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let handle = match state.take_ticker() {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to take ticker handle: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let snapshot = match state.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to read countdown state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match handle {
        Some(handle) => {
            handle.stop().await;
            state.record_action("stop");
            info!("Stop endpoint called - ticker cancelled");
            Ok(Json(ApiResponse::stopped(
                "Countdown ticker cancelled".to_string(),
                snapshot,
            )))
        }
        None => {
            info!("Stop endpoint called - no ticker running");
            Ok(Json(ApiResponse::idle(
                "No countdown ticker running".to_string(),
                snapshot,
            )))
        }
    }
}

/// Handle GET /status - Return the countdown and server metadata
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let snapshot = match state.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to read countdown state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        countdown: snapshot,
        ticker_running: state.ticker_running(),
        frame: state.current_frame(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /display - Return the last rendered frame only
pub async fn display_handler(State(state): State<Arc<AppState>>) -> Json<DisplayResponse> {
    Json(DisplayResponse {
        display: state.current_frame(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
