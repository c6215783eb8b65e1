use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::error::{AppError, SyncError};
use crate::state::AppState;
use crate::sync::{sync_label, SyncJob};
use crate::types::session::DayType;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/sync", post(sync))
}

#[derive(Deserialize)]
struct SyncRequest {
    day_type: String,
    opponent: Option<String>,
}

async fn sync(
    State(state): State<AppState>,
    Json(request): Json<SyncRequest>,
) -> Result<Response, AppError> {
    let day_type = DayType::from_str(&request.day_type)
        .ok_or_else(|| SyncError::UnknownDayType(request.day_type.clone()))?;
    let label = sync_label(&day_type, request.opponent.as_deref())?;
    let job = SyncJob::from_config(&state.config().sync)?;

    let outcome = tokio::task::spawn_blocking(move || job.run(&day_type, &label))
        .await
        .map_err(|e| AppError::Internal(format!("Sync task failed: {}", e)))??;

    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    Ok((status, Json(outcome)).into_response())
}
