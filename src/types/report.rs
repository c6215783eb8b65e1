use chrono::NaiveDate;
use serde::Serialize;

use crate::types::risk::{AcwrBand, Flag, WellnessBand};
use crate::types::session::MetricFamily;
use crate::types::wellness::WellnessMetric;
use crate::types::workload::WorkloadPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub axis: Axis,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: String,
    pub title: String,
    pub y_label: String,
    pub y2_label: Option<String>,
    pub x: Vec<String>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDay {
    pub date: NaiveDate,
    pub sessions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionTotals {
    pub total_distance: f64,
    pub msr_dist: f64,
    pub hir_dist: f64,
    pub sprint_dist: f64,
    pub acc_eff_3: f64,
    pub dcc_eff_3: f64,
    pub avg_total_duration: f64,
    pub avg_m_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteSessionRow {
    pub athlete_name: String,
    pub total_distance: f64,
    pub m_min: f64,
    pub msr_dist: f64,
    pub hir_dist: f64,
    pub sprint_dist: f64,
    pub acc_eff_3: f64,
    pub dcc_eff_3: f64,
    pub max_speed: f64,
    pub max_speed_pct: f64,
    pub footstrike_imbalance: f64,
    pub footstrike: Flag,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootstrikeAlert {
    pub athlete_name: String,
    pub imbalance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub date: NaiveDate,
    pub session: String,
    pub warning: Option<String>,
    pub totals: Option<SessionTotals>,
    pub footstrike_alerts: Vec<FootstrikeAlert>,
    /// Sorted by m/min, highest first.
    pub athletes: Vec<AthleteSessionRow>,
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakMetrics {
    pub max_speed: Option<f64>,
    pub max_accel: Option<f64>,
    /// Decelerations are negative, so the peak is the minimum.
    pub max_decel: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestRatio {
    pub date: NaiveDate,
    pub session: String,
    pub ratio: f64,
    pub band: AcwrBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyTrend {
    pub family: MetricFamily,
    pub latest: Option<LatestRatio>,
    pub points: Vec<WorkloadPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub athlete: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub warning: Option<String>,
    pub sessions: usize,
    pub peaks: Option<PeakMetrics>,
    pub acwr: Vec<FamilyTrend>,
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteAcwr {
    pub athlete_name: String,
    pub session: String,
    pub acute: Option<f64>,
    pub chronic: Option<f64>,
    pub ratio: Option<f64>,
    pub band: AcwrBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilySummary {
    pub family: MetricFamily,
    pub athletes: Vec<AthleteAcwr>,
    pub alerts: Vec<AthleteAcwr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcwrSummary {
    pub date: NaiveDate,
    pub warning: Option<String>,
    pub families: Vec<FamilySummary>,
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessEntry {
    pub name: String,
    pub value: Option<f64>,
    pub band: WellnessBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyVariable {
    pub metric: WellnessMetric,
    pub label: &'static str,
    pub scale_max: f64,
    pub entries: Vec<WellnessEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessAlert {
    pub date: NaiveDate,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessDaily {
    pub date: Option<NaiveDate>,
    pub warning: Option<String>,
    pub variables: Vec<DailyVariable>,
    pub urine_alerts: Vec<WellnessAlert>,
    pub muscle_pain: Vec<WellnessAlert>,
    pub short_sleep: Vec<WellnessAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendVariable {
    pub metric: WellnessMetric,
    pub label: &'static str,
    pub scale_max: f64,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessTrend {
    pub player: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub warning: Option<String>,
    pub variables: Vec<TrendVariable>,
    pub muscle_pain: Vec<WellnessAlert>,
    pub urine_alerts: Vec<WellnessAlert>,
    pub short_sleep: Vec<WellnessAlert>,
}
