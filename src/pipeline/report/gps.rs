use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::pipeline::report::{bar, chart, line, mean};
use crate::pipeline::risk::{band_acwr, band_footstrike};
use crate::pipeline::workload::{latest_ratio, WorkloadEngine};
use crate::types::report::{
    AcwrSummary, AthleteAcwr, AthleteSessionRow, Chart, FamilySummary, FamilyTrend,
    FootstrikeAlert, LatestRatio, PeakMetrics, PlayerReport, SessionDay, SessionReport,
    SessionTotals,
};
use crate::types::session::{GpsColumn, MetricFamily, SessionRecord};
use crate::types::workload::{AcwrSource, WorkloadPoint};

pub fn session_days(records: &[SessionRecord]) -> Vec<SessionDay> {
    let mut days: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for record in records {
        let Some(date) = record.date.date() else {
            continue;
        };
        let sessions = days.entry(date).or_default();
        if !record.session.is_empty() && !sessions.contains(&record.session) {
            sessions.push(record.session.clone());
        }
    }

    days.into_iter()
        .rev()
        .map(|(date, sessions)| SessionDay { date, sessions })
        .collect()
}

pub fn athletes(records: &[SessionRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter(|r| !r.athlete_name.is_empty())
        .map(|r| r.athlete_name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

pub fn session_report(records: &[SessionRecord], date: NaiveDate, session: &str) -> SessionReport {
    let rows: Vec<&SessionRecord> = records
        .iter()
        .filter(|r| r.date.date() == Some(date) && r.session == session)
        .collect();

    if rows.is_empty() {
        return SessionReport {
            date,
            session: session.to_string(),
            warning: Some(format!("No data for session '{}' on {}", session, date)),
            totals: None,
            footstrike_alerts: Vec::new(),
            athletes: Vec::new(),
            charts: Vec::new(),
        };
    }

    let sum = |column: GpsColumn| rows.iter().map(|r| value(r, column)).sum::<f64>();
    let totals = SessionTotals {
        total_distance: sum(GpsColumn::TotalDistance),
        msr_dist: sum(GpsColumn::MsrDist),
        hir_dist: sum(GpsColumn::HirDist),
        sprint_dist: sum(GpsColumn::SprintDist),
        acc_eff_3: sum(GpsColumn::AccEff3),
        dcc_eff_3: sum(GpsColumn::DccEff3),
        avg_total_duration: mean(rows.iter().map(|r| value(r, GpsColumn::TotalDuration)))
            .unwrap_or(0.0),
        avg_m_min: mean(rows.iter().map(|r| value(r, GpsColumn::MetersPerMinute))).unwrap_or(0.0),
    };

    let footstrike_alerts = rows
        .iter()
        .filter(|r| band_footstrike(r.metric(GpsColumn::FootstrikeImbalance).value()).is_alert())
        .map(|r| FootstrikeAlert {
            athlete_name: r.athlete_name.clone(),
            imbalance: value(r, GpsColumn::FootstrikeImbalance),
        })
        .collect();

    let mut athletes: Vec<AthleteSessionRow> = rows.iter().map(|r| athlete_row(r)).collect();
    athletes.sort_by(|a, b| b.m_min.total_cmp(&a.m_min));

    SessionReport {
        date,
        session: session.to_string(),
        warning: None,
        totals: Some(totals),
        footstrike_alerts,
        athletes,
        charts: session_charts(&rows),
    }
}

pub fn player_report(
    records: &[SessionRecord],
    athlete: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    engine: &WorkloadEngine,
    source: AcwrSource,
) -> PlayerReport {
    let empty = |warning: String| PlayerReport {
        athlete: athlete.to_string(),
        start,
        end,
        warning: Some(warning),
        sessions: 0,
        peaks: None,
        acwr: Vec::new(),
        charts: Vec::new(),
    };

    let (Some(start), Some(end)) = (start, end) else {
        return empty("Please select a start and end date.".to_string());
    };
    let in_range = |d: NaiveDate| d >= start && d <= end;

    let mut rows: Vec<(NaiveDate, &SessionRecord)> = records
        .iter()
        .filter(|r| r.athlete_name == athlete)
        .filter_map(|r| r.date.date().map(|d| (d, r)))
        .filter(|(d, _)| in_range(*d))
        .collect();
    if rows.is_empty() {
        return empty(format!(
            "No sessions for {} between {} and {}",
            athlete, start, end
        ));
    }
    rows.sort_by_key(|(d, _)| *d);

    let peaks = PeakMetrics {
        max_speed: rows.iter().map(|(_, r)| value(r, GpsColumn::MaxSpeed)).reduce(f64::max),
        max_accel: rows.iter().map(|(_, r)| value(r, GpsColumn::MaxAccel)).reduce(f64::max),
        max_decel: rows.iter().map(|(_, r)| value(r, GpsColumn::MaxDecc)).reduce(f64::min),
    };

    // Windows need the athlete's full history, so the range is applied after.
    let acwr: Vec<FamilyTrend> = MetricFamily::ALL
        .iter()
        .map(|family| {
            let points: Vec<WorkloadPoint> = engine
                .series(source, records, athlete, *family)
                .into_iter()
                .filter(|p| in_range(p.date))
                .collect();
            let latest = latest_ratio(&points).and_then(|p| {
                p.ratio.map(|ratio| LatestRatio {
                    date: p.date,
                    session: p.session.clone(),
                    ratio,
                    band: band_acwr(Some(ratio)),
                })
            });
            FamilyTrend {
                family: *family,
                latest,
                points,
            }
        })
        .collect();

    let charts = player_charts(&rows, &acwr);

    PlayerReport {
        athlete: athlete.to_string(),
        start: Some(start),
        end: Some(end),
        warning: None,
        sessions: rows.len(),
        peaks: Some(peaks),
        acwr,
        charts,
    }
}

pub fn acwr_summary(
    records: &[SessionRecord],
    date: NaiveDate,
    engine: &WorkloadEngine,
    source: AcwrSource,
) -> AcwrSummary {
    let mut names: Vec<&str> = Vec::new();
    for record in records.iter().filter(|r| r.date.date() == Some(date)) {
        if !names.contains(&record.athlete_name.as_str()) {
            names.push(&record.athlete_name);
        }
    }

    if names.is_empty() {
        return AcwrSummary {
            date,
            warning: Some(format!("No sessions on {}", date)),
            families: Vec::new(),
            charts: Vec::new(),
        };
    }

    let families: Vec<FamilySummary> = MetricFamily::ALL
        .iter()
        .map(|family| {
            let athletes: Vec<AthleteAcwr> = names
                .iter()
                .flat_map(|name| {
                    engine
                        .series(source, records, name, *family)
                        .into_iter()
                        .filter(|p| p.date == date)
                        .map(move |p| AthleteAcwr {
                            athlete_name: name.to_string(),
                            session: p.session,
                            acute: p.acute,
                            chronic: p.chronic,
                            ratio: p.ratio,
                            band: band_acwr(p.ratio),
                        })
                })
                .collect();
            let alerts = athletes
                .iter()
                .filter(|a| a.band.is_alert())
                .cloned()
                .collect();
            FamilySummary {
                family: *family,
                athletes,
                alerts,
            }
        })
        .collect();

    let charts = families
        .iter()
        .map(|summary| {
            let x = summary.athletes.iter().map(|a| a.athlete_name.clone()).collect();
            acwr_chart(
                summary.family,
                x,
                summary.athletes.iter().map(|a| (a.acute, a.chronic, a.ratio)),
            )
        })
        .collect();

    AcwrSummary {
        date,
        warning: None,
        families,
        charts,
    }
}

fn value(record: &SessionRecord, column: GpsColumn) -> f64 {
    record.metric(column).or_zero()
}

fn athlete_row(record: &SessionRecord) -> AthleteSessionRow {
    let imbalance = record.metric(GpsColumn::FootstrikeImbalance);
    AthleteSessionRow {
        athlete_name: record.athlete_name.clone(),
        total_distance: value(record, GpsColumn::TotalDistance),
        m_min: value(record, GpsColumn::MetersPerMinute),
        msr_dist: value(record, GpsColumn::MsrDist),
        hir_dist: value(record, GpsColumn::HirDist),
        sprint_dist: value(record, GpsColumn::SprintDist),
        acc_eff_3: value(record, GpsColumn::AccEff3),
        dcc_eff_3: value(record, GpsColumn::DccEff3),
        max_speed: value(record, GpsColumn::MaxSpeed),
        max_speed_pct: value(record, GpsColumn::PorVel) * 100.0,
        footstrike_imbalance: imbalance.or_zero(),
        footstrike: band_footstrike(imbalance.value()),
    }
}

fn session_charts(rows: &[&SessionRecord]) -> Vec<Chart> {
    let x: Vec<String> = rows.iter().map(|r| r.athlete_name.clone()).collect();
    let column = |c: GpsColumn| -> Vec<Option<f64>> { rows.iter().map(|r| Some(value(r, c))).collect() };
    let pct_max_speed = rows
        .iter()
        .map(|r| Some(value(r, GpsColumn::PorVel) * 100.0))
        .collect();

    vec![
        chart(
            "distance_m_min",
            "Total Distance and m/min",
            "Distance (m)",
            Some("m/min"),
            x.clone(),
            vec![
                bar("Distance (m)", column(GpsColumn::TotalDistance)),
                line("m/min", column(GpsColumn::MetersPerMinute)),
            ],
        ),
        chart(
            "top_speed",
            "Top Speed and % Max Speed",
            "Speed (km/h)",
            Some("% Max"),
            x.clone(),
            vec![
                bar("Max Speed (km/h)", column(GpsColumn::MaxSpeed)),
                line("% Max Speed", pct_max_speed),
            ],
        ),
        chart(
            "running_bands",
            "MSR, HIR and Sprint Distance",
            "Distance (m)",
            None,
            x.clone(),
            vec![
                bar("MSR", column(GpsColumn::MsrDist)),
                bar("HIR", column(GpsColumn::HirDist)),
                bar("Sprint", column(GpsColumn::SprintDist)),
            ],
        ),
        chart(
            "acc_dcc",
            "Accelerations and Decelerations >3",
            "Count",
            None,
            x,
            vec![
                bar("Acc >3", column(GpsColumn::AccEff3)),
                bar("Dcc >3", column(GpsColumn::DccEff3)),
            ],
        ),
    ]
}

fn player_charts(rows: &[(NaiveDate, &SessionRecord)], acwr: &[FamilyTrend]) -> Vec<Chart> {
    let x: Vec<String> = rows.iter().map(|(d, _)| d.to_string()).collect();
    let column = |c: GpsColumn| -> Vec<Option<f64>> {
        rows.iter().map(|(_, r)| Some(value(r, c))).collect()
    };

    let mut charts = vec![
        chart(
            "total_distance",
            "Total Distance Over Time",
            "Distance (m)",
            None,
            x.clone(),
            vec![bar("Total Distance", column(GpsColumn::TotalDistance))],
        ),
        chart(
            "running_bands",
            "MSR, HIR and Sprint Distance",
            "Distance (m)",
            None,
            x.clone(),
            vec![
                bar("MSR", column(GpsColumn::MsrDist)),
                bar("HIR", column(GpsColumn::HirDist)),
                bar("Sprint", column(GpsColumn::SprintDist)),
            ],
        ),
        chart(
            "acc_dcc",
            "Accelerations and Decelerations",
            "Count",
            None,
            x,
            vec![
                bar("Acc >3", column(GpsColumn::AccEff3)),
                bar("Dcc >3", column(GpsColumn::DccEff3)),
            ],
        ),
    ];

    charts.extend(acwr.iter().map(|trend| {
        let x = trend.points.iter().map(|p| p.date.to_string()).collect();
        acwr_chart(
            trend.family,
            x,
            trend.points.iter().map(|p| (p.acute, p.chronic, p.ratio)),
        )
    }));
    charts
}

fn acwr_chart(
    family: MetricFamily,
    x: Vec<String>,
    values: impl Iterator<Item = (Option<f64>, Option<f64>, Option<f64>)>,
) -> Chart {
    let mut acute = Vec::new();
    let mut chronic = Vec::new();
    let mut ratio = Vec::new();
    for (a, c, r) in values {
        acute.push(a);
        chronic.push(c);
        ratio.push(r);
    }

    chart(
        &format!("acwr_{}", family.as_str()),
        &format!("ACWR - {}", family.as_str().to_uppercase()),
        "Load",
        Some("ACWR"),
        x,
        vec![bar("Acute", acute), bar("Chronic", chronic), line("Ratio", ratio)],
    )
}
