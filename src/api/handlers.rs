//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::{
    state::AppState,
    timer::{Action, EngineStatus},
};
use super::responses::{ApiResponse, StatusResponse, HealthResponse};

/// Apply one button press and describe the result
async fn press(state: &AppState, action: Action) -> Result<Json<ApiResponse>, StatusCode> {
    match state.apply(action).await {
        Ok(outcome) if outcome.applied => {
            let message = match action {
                Action::Start if outcome.previous == EngineStatus::Paused => {
                    format!("Resumed at {}", outcome.snapshot.clock)
                }
                Action::Start => format!("{} started", outcome.snapshot.label),
                Action::Pause => format!("Paused at {}", outcome.snapshot.clock),
                Action::Resume => format!("Resumed at {}", outcome.snapshot.clock),
                Action::Reset => "Timer reset".to_string(),
            };
            Ok(Json(ApiResponse::applied(message, outcome.snapshot)))
        }
        Ok(outcome) => {
            let message = format!(
                "{} ignored while timer is {:?}",
                action.as_str(),
                outcome.snapshot.status
            )
            .to_lowercase();
            Ok(Json(ApiResponse::ignored(message, outcome.snapshot)))
        }
        Err(e) => {
            error!("Failed to {} timer: {}", action.as_str(), e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle POST /start - Start the next phase, or resume when paused
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    press(&state, Action::Start).await
}

/// Handle POST /pause - Pause a running countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    press(&state, Action::Pause).await
}

/// Handle POST /resume - Resume a paused countdown
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    press(&state, Action::Resume).await
}

/// Handle POST /reset - Cancel the countdown and restart the cycle
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    press(&state, Action::Reset).await
}

/// Handle GET /status - Return the clock face and server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.get_timer_state(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
