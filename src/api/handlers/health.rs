//! Health and metrics handlers

use axum::extract::State;
use serde_json::json;
use std::sync::Arc;

use crate::api::server::RegistryServer;

/// Health check
pub async fn health_check() -> axum::response::Json<serde_json::Value> {
    axum::response::Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Prometheus-style metrics
pub async fn metrics(State(state): State<Arc<RegistryServer>>) -> String {
    let count = state.store.len().await;
    format!(
        "# HELP user_count Number of user records in the store\n\
         # TYPE user_count gauge\n\
         user_count {}\n",
        count
    )
}
