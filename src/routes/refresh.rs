use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/refresh", post(refresh))
}

#[derive(Serialize)]
struct RefreshResponse {
    invalidated: usize,
    message: &'static str,
}

async fn refresh(State(state): State<AppState>) -> Json<RefreshResponse> {
    let invalidated = state.invalidate();
    Json(RefreshResponse {
        invalidated,
        message: "Data cache cleared. Next request reloads from the source.",
    })
}
