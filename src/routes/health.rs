use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::fs;

use crate::AppState;

/// Health check endpoint
///
/// Reports whether the data directory is usable.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.clone();
    let storage_status = tokio::task::spawn_blocking(move || {
        match fs::metadata(store.data_dir()) {
            Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => "available",
            Ok(_) => {
                tracing::error!("Data directory is not writable: {:?}", store.data_dir());
                "unavailable"
            }
            Err(e) => {
                tracing::error!("Storage health check failed: {:?}", e);
                "unavailable"
            }
        }
    })
    .await
    .unwrap_or("error");

    Json(json!({
        "status": if storage_status == "available" { "healthy" } else { "unhealthy" },
        "storage": storage_status,
        "sessions": state.sessions.len(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
