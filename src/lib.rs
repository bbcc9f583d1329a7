// src/lib.rs

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;

pub mod config;
pub mod models;
pub mod routes;
pub mod startup;
pub mod telemetry;

/// Shared by every handler. `started_at` is taken when the server binds its
/// listener, so `uptime()` counts from then rather than from process start.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
