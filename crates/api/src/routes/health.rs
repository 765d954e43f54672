//! Liveness endpoint for the birthday service, mounted at the root.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const SERVICE_NAME: &str = "birthday-api";

/// `ok` when the database answers, `degraded` otherwise. The endpoint
/// responds 200 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

impl HealthStatus {
    fn from_database(db_healthy: bool) -> Self {
        if db_healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match birthday_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Birthday database unreachable");
            false
        }
    };

    Json(HealthResponse {
        service: SERVICE_NAME,
        status: HealthStatus::from_database(db_healthy),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `GET /health`, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_degrades_status() {
        assert_eq!(HealthStatus::from_database(true), HealthStatus::Ok);
        assert_eq!(HealthStatus::from_database(false), HealthStatus::Degraded);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(HealthResponse {
            service: SERVICE_NAME,
            status: HealthStatus::Degraded,
            version: "0.0.0",
            db_healthy: false,
        })
        .unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["service"], "birthday-api");
    }
}
