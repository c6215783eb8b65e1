use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("No {0} data source configured")]
    NotConfigured(&'static str),
    #[error("Failed to fetch sheet export: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("No sync program configured")]
    NotConfigured,
    #[error("Unknown day type: {0}")]
    UnknownDayType(String),
    #[error("An opponent is required on match day")]
    MissingOpponent,
    #[error("Failed to open sync log {path}: {source}")]
    Log {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Source(SourceError::NotConfigured(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Source(_) => StatusCode::BAD_GATEWAY,
            AppError::Sync(SyncError::UnknownDayType(_) | SyncError::MissingOpponent) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Sync(SyncError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Sync(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
