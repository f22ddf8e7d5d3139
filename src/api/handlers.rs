//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    error::TimerError,
    state::{AppState, PowerAction, DURATION_PRESETS},
};

use super::responses::{ApiResponse, DurationsResponse, HealthResponse, StatusResponse};

/// Handle POST /action/:action - Arm a power action
pub async fn select_action_handler(
    State(state): State<Arc<AppState>>,
    Path(action): Path<PowerAction>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.record_command(&format!("action {}", action));

    match state.timer.select_action(action).await {
        Ok(snapshot) => {
            info!("Action endpoint called - {} armed", action);
            Ok(Json(ApiResponse::ok(
                format!("Armed action set to {}", action),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to select action: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /duration/:seconds - Arm a countdown duration
pub async fn select_duration_handler(
    State(state): State<Arc<AppState>>,
    Path(seconds): Path<u64>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.record_command(&format!("duration {}", seconds));

    match state.timer.select_duration(seconds).await {
        Ok(snapshot) => {
            info!("Duration endpoint called - {}s armed", seconds);
            Ok(Json(ApiResponse::ok(
                format!("Armed duration set to {} seconds", seconds),
                snapshot,
            )))
        }
        Err(e @ TimerError::InvalidDuration) => {
            // Rejected selection, prior value retained.
            Ok(Json(ApiResponse::error(e.to_string(), state.snapshot())))
        }
        Err(e) => {
            error!("Failed to select duration: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /toggle - Start or stop the countdown
pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.record_command("toggle");

    match state.timer.toggle_start().await {
        Ok(snapshot) => {
            let message = if snapshot.running {
                format!("Countdown started: {}", snapshot.remaining_display)
            } else {
                "Countdown stopped".to_string()
            };
            info!("Toggle endpoint called - {}", message);
            Ok(Json(ApiResponse::ok(message, snapshot)))
        }
        Err(e) => {
            error!("Failed to toggle countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /durations - Preset durations for menu layers
pub async fn durations_handler() -> Json<DurationsResponse> {
    Json(DurationsResponse {
        durations: DURATION_PRESETS.to_vec(),
    })
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let snapshot = state.snapshot();
    let (last_command, last_command_time) = state.last_command();

    Json(StatusResponse {
        toggle_label: snapshot.toggle_label().to_string(),
        timer: snapshot,
        uptime: state.uptime(),
        port: state.port,
        host: state.host.clone(),
        last_command,
        last_command_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
