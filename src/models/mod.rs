// src/models/mod.rs

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

pub const GREETING: &str = "Hello from CI/CD Pipeline! , Gitops";
pub const HEALTHY: &str = "healthy";

// ───────────────────────────────────────
// GET /
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub environment: String,
    pub version: String,
    pub timestamp: String,
}

impl RootResponse {
    pub fn new(environment: &str, version: &str, now: DateTime<Utc>) -> Self {
        Self {
            message: GREETING,
            environment: environment.to_owned(),
            version: version.to_owned(),
            timestamp: iso_timestamp(now),
        }
    }
}

// ───────────────────────────────────────
// GET /health
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    /// Seconds since the server started, fractional.
    pub uptime: f64,
}

// ───────────────────────────────────────
// GET /version
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub environment: String,
}

/// `2026-10-18T09:30:00.123Z`: millisecond precision, UTC, `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamp_has_millis_and_zulu() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(iso_timestamp(at), "2024-03-05T07:08:09.000Z");
    }

    #[test]
    fn root_body_has_expected_keys() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let body = serde_json::to_value(RootResponse::new("staging", "9.9.9", at)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Hello from CI/CD Pipeline! , Gitops",
                "environment": "staging",
                "version": "9.9.9",
                "timestamp": "2024-01-01T00:00:00.000Z",
            })
        );
    }
}
