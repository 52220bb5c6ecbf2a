use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::store::ContentStore;

/// GET /health
/// Returns a simple status object with service version and storage backend.
pub async fn health_handler<S: ContentStore>(State(state): State<AppState<S>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio",
        "store": state.store.backend()
    }))
}
