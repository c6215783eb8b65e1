use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::report;
use crate::routes::query_date;
use crate::state::AppState;
use crate::types::report::{WellnessDaily, WellnessTrend};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/wellness/dates", get(dates))
        .route("/api/wellness/players", get(players))
        .route("/api/wellness/daily", get(daily))
        .route("/api/wellness/trend", get(trend))
}

#[derive(Serialize)]
struct DatesResponse {
    dates: Vec<NaiveDate>,
}

#[derive(Serialize)]
struct PlayersResponse {
    players: Vec<String>,
}

#[derive(Deserialize)]
struct DailyQuery {
    date: Option<String>,
}

#[derive(Deserialize)]
struct TrendQuery {
    player: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

async fn dates(State(state): State<AppState>) -> Result<Json<DatesResponse>, AppError> {
    let table = state.wellness().await?;
    Ok(Json(DatesResponse {
        dates: report::wellness_dates(&table.records),
    }))
}

async fn players(State(state): State<AppState>) -> Result<Json<PlayersResponse>, AppError> {
    let table = state.wellness().await?;
    let mut players = vec![report::ALL_PLAYERS.to_string()];
    players.extend(report::wellness_players(&table.records));
    Ok(Json(PlayersResponse { players }))
}

async fn daily(
    State(state): State<AppState>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<WellnessDaily>, AppError> {
    let date = query_date("date", query.date.as_deref())?;
    let table = state.wellness().await?;
    Ok(Json(report::wellness_daily(
        &table.records,
        date,
        &state.config().banding,
    )))
}

async fn trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<WellnessTrend>, AppError> {
    let start = query_date("start", query.start.as_deref())?;
    let end = query_date("end", query.end.as_deref())?;
    let table = state.wellness().await?;
    Ok(Json(report::wellness_trend(
        &table.records,
        query.player.as_deref(),
        start,
        end,
    )))
}
