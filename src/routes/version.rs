// src/routes/version.rs

use axum::{extract::State, Json};

use crate::models::VersionResponse;
use crate::AppState;

pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
    })
}
