// src/routes/mod.rs

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub mod health;
pub mod root;
pub mod version;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/version", get(version::version))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
