// src/routes/health.rs

use axum::{extract::State, Json};

use crate::models::{HealthResponse, HEALTHY};
use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY,
        environment: state.config.environment.clone(),
        uptime: state.uptime().as_secs_f64(),
    })
}
