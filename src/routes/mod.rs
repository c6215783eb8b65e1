pub mod gps;
pub mod health;
pub mod refresh;
pub mod sync;
pub mod wellness;

use axum::Router;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(refresh::router())
        .merge(gps::router())
        .merge(wellness::router())
        .merge(sync::router())
}

fn query_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{} must be YYYY-MM-DD, got '{}'", name, v))),
    }
}

fn required_date(name: &str, value: Option<&str>) -> Result<NaiveDate, AppError> {
    query_date(name, value)?.ok_or_else(|| AppError::BadRequest(format!("Missing {}", name)))
}
