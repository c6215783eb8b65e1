use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcwrSource {
    Precomputed,
    Computed,
}

impl AcwrSource {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "precomputed" | "sheet" => Some(AcwrSource::Precomputed),
            "computed" => Some(AcwrSource::Computed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadPoint {
    pub date: NaiveDate,
    pub session: String,
    pub load: f64,
    pub acute: Option<f64>,
    pub chronic: Option<f64>,
    pub ratio: Option<f64>,
}
