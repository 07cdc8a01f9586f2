//! Health check

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use grocery_types::Health;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health::ok())),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health::unavailable()))
        }
    }
}
