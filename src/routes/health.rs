use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::{AppState, Dataset};

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "cache_entries": state.cache_size(),
        "cached": {
            "gps": state.is_cached(Dataset::Gps),
            "wellness": state.is_cached(Dataset::Wellness)
        }
    }))
}
