use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::normalize::NormalizeReport;
use crate::pipeline::report;
use crate::routes::{query_date, required_date};
use crate::state::AppState;
use crate::types::report::{AcwrSummary, PlayerReport, SessionDay, SessionReport};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/gps/dates", get(dates))
        .route("/api/gps/athletes", get(athletes))
        .route("/api/gps/session-report", get(session_report))
        .route("/api/gps/player-report", get(player_report))
        .route("/api/gps/acwr-summary", get(acwr_summary))
}

#[derive(Serialize)]
struct DatesResponse {
    days: Vec<SessionDay>,
    load: NormalizeReport,
}

#[derive(Serialize)]
struct AthletesResponse {
    athletes: Vec<String>,
}

#[derive(Deserialize)]
struct SessionQuery {
    date: Option<String>,
    session: Option<String>,
}

#[derive(Deserialize)]
struct PlayerQuery {
    athlete: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

#[derive(Deserialize)]
struct SummaryQuery {
    date: Option<String>,
}

async fn dates(State(state): State<AppState>) -> Result<Json<DatesResponse>, AppError> {
    let table = state.gps().await?;
    Ok(Json(DatesResponse {
        days: report::session_days(&table.records),
        load: table.report.clone(),
    }))
}

async fn athletes(State(state): State<AppState>) -> Result<Json<AthletesResponse>, AppError> {
    let table = state.gps().await?;
    Ok(Json(AthletesResponse {
        athletes: report::athletes(&table.records),
    }))
}

async fn session_report(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SessionReport>, AppError> {
    let date = required_date("date", query.date.as_deref())?;
    let session = query
        .session
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing session".to_string()))?;

    let table = state.gps().await?;
    Ok(Json(report::session_report(&table.records, date, session)))
}

async fn player_report(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<PlayerReport>, AppError> {
    let athlete = query
        .athlete
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing athlete".to_string()))?;
    let start = query_date("start", query.start.as_deref())?;
    let end = query_date("end", query.end.as_deref())?;

    let table = state.gps().await?;
    Ok(Json(report::player_report(
        &table.records,
        athlete,
        start,
        end,
        &state.workload_engine(),
        state.config().acwr_source,
    )))
}

async fn acwr_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<AcwrSummary>, AppError> {
    let date = required_date("date", query.date.as_deref())?;
    let table = state.gps().await?;
    Ok(Json(report::acwr_summary(
        &table.records,
        date,
        &state.workload_engine(),
        state.config().acwr_source,
    )))
}
