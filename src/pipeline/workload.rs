use chrono::{Duration, NaiveDate};

use crate::types::session::{MetricFamily, SessionRecord};
use crate::types::workload::{AcwrSource, WorkloadPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadEngine {
    acute_days: u32,
    chronic_days: u32,
}

impl Default for WorkloadEngine {
    fn default() -> Self {
        Self {
            acute_days: 7,
            chronic_days: 28,
        }
    }
}

impl WorkloadEngine {
    pub fn new(acute_days: u32, chronic_days: u32) -> Self {
        let acute_days = acute_days.max(1);
        Self {
            acute_days,
            chronic_days: chronic_days.max(acute_days),
        }
    }

    pub fn acute_days(&self) -> u32 {
        self.acute_days
    }

    pub fn chronic_days(&self) -> u32 {
        self.chronic_days
    }

    /// Trailing calendar-day means. Same-day sessions earlier in sheet order
    /// count toward a point's windows, later ones do not.
    pub fn athlete_series(
        &self,
        records: &[SessionRecord],
        athlete: &str,
        family: MetricFamily,
    ) -> Vec<WorkloadPoint> {
        let sessions = dated_sessions(records, athlete);
        let Some(first_date) = sessions.first().map(|(d, _)| *d) else {
            return Vec::new();
        };

        let loads: Vec<f64> = sessions
            .iter()
            .map(|(_, r)| r.metric(family.load_column()).or_zero())
            .collect();
        let mut prefix = Vec::with_capacity(loads.len() + 1);
        prefix.push(0.0);
        for load in &loads {
            let last = prefix[prefix.len() - 1];
            prefix.push(last + load);
        }

        sessions
            .iter()
            .enumerate()
            .map(|(i, (date, record))| {
                let history_days = (*date - first_date).num_days() + 1;
                let window_mean = |days: u32| -> Option<f64> {
                    if history_days < days as i64 {
                        return None;
                    }
                    let window_start = *date - Duration::days(days as i64 - 1);
                    let start = sessions[..=i].partition_point(|(d, _)| *d < window_start);
                    Some((prefix[i + 1] - prefix[start]) / days as f64)
                };

                let acute = window_mean(self.acute_days);
                let chronic = window_mean(self.chronic_days);
                WorkloadPoint {
                    date: *date,
                    session: record.session.clone(),
                    load: loads[i],
                    acute,
                    chronic,
                    ratio: ratio(acute, chronic),
                }
            })
            .collect()
    }

    pub fn series(
        &self,
        source: AcwrSource,
        records: &[SessionRecord],
        athlete: &str,
        family: MetricFamily,
    ) -> Vec<WorkloadPoint> {
        match source {
            AcwrSource::Computed => self.athlete_series(records, athlete, family),
            AcwrSource::Precomputed => precomputed_series(records, athlete, family),
        }
    }
}

pub fn precomputed_series(
    records: &[SessionRecord],
    athlete: &str,
    family: MetricFamily,
) -> Vec<WorkloadPoint> {
    dated_sessions(records, athlete)
        .into_iter()
        .map(|(date, record)| WorkloadPoint {
            date,
            session: record.session.clone(),
            load: record.metric(family.load_column()).or_zero(),
            acute: record.metric(family.acute_column()).parsed(),
            chronic: record.metric(family.chronic_column()).parsed(),
            ratio: record.metric(family.ratio_column()).parsed(),
        })
        .collect()
}

pub fn latest_ratio(series: &[WorkloadPoint]) -> Option<&WorkloadPoint> {
    series.iter().rev().find(|p| p.ratio.is_some())
}

pub fn ratio(acute: Option<f64>, chronic: Option<f64>) -> Option<f64> {
    match (acute, chronic) {
        (Some(a), Some(c)) if c > 0.0 => Some(a / c),
        _ => None,
    }
}

fn dated_sessions<'a>(
    records: &'a [SessionRecord],
    athlete: &str,
) -> Vec<(NaiveDate, &'a SessionRecord)> {
    let mut sessions: Vec<(NaiveDate, &SessionRecord)> = records
        .iter()
        .filter(|r| r.athlete_name == athlete)
        .filter_map(|r| r.date.date().map(|d| (d, r)))
        .collect();
    sessions.sort_by_key(|(d, _)| *d);
    sessions
}
