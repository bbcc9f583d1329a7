// src/routes/root.rs

use axum::{extract::State, Json};
use chrono::Utc;

use crate::models::RootResponse;
use crate::AppState;

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let config = &state.config;
    Json(RootResponse::new(&config.environment, &config.version, Utc::now()))
}
