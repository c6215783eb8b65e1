use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::value::NumericValue;

pub const GPS_TEXT_COLUMNS: [&str; 4] = ["date", "day_type", "session", "athlete_name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDate {
    Date(NaiveDate),
    Unparsed(String),
}

impl SessionDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            SessionDate::Date(d) => Some(*d),
            SessionDate::Unparsed(_) => None,
        }
    }

    pub fn to_cell(&self) -> String {
        match self {
            SessionDate::Date(d) => d.format("%Y-%m-%d").to_string(),
            SessionDate::Unparsed(raw) => raw.clone(),
        }
    }
}

impl Serialize for SessionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.date().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayType {
    MatchDay,
    Before(u8),
    After(u8),
    PreSeason,
    Other(String),
}

impl DayType {
    pub const LABELS: [&'static str; 9] = [
        "MD", "MD-1", "MD-2", "MD-3", "MD-4", "MD-5", "MD+1", "MD+2", "PRE",
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "MD" => Some(DayType::MatchDay),
            "PRE" => Some(DayType::PreSeason),
            _ => {
                if let Some(n) = s.strip_prefix("MD-") {
                    n.parse().ok().filter(|n| (1..=5).contains(n)).map(DayType::Before)
                } else if let Some(n) = s.strip_prefix("MD+") {
                    n.parse().ok().filter(|n| (1..=2).contains(n)).map(DayType::After)
                } else {
                    None
                }
            }
        }
    }

    /// Unknown labels are kept verbatim rather than rejected.
    pub fn from_cell(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| DayType::Other(s.trim().to_string()))
    }

    pub fn is_match_day(&self) -> bool {
        matches!(self, DayType::MatchDay)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::MatchDay => write!(f, "MD"),
            DayType::Before(n) => write!(f, "MD-{}", n),
            DayType::After(n) => write!(f, "MD+{}", n),
            DayType::PreSeason => write!(f, "PRE"),
            DayType::Other(label) => write!(f, "{}", label),
        }
    }
}

impl Serialize for DayType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricFamily {
    Dist,
    Hir,
    Acc,
}

impl MetricFamily {
    pub const ALL: [MetricFamily; 3] = [MetricFamily::Dist, MetricFamily::Hir, MetricFamily::Acc];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricFamily::Dist => "dist",
            MetricFamily::Hir => "hir",
            MetricFamily::Acc => "acc",
        }
    }

    pub fn load_column(&self) -> GpsColumn {
        match self {
            MetricFamily::Dist => GpsColumn::TotalDistance,
            MetricFamily::Hir => GpsColumn::HirDist,
            MetricFamily::Acc => GpsColumn::AccEff3,
        }
    }

    pub fn acute_column(&self) -> GpsColumn {
        match self {
            MetricFamily::Dist => GpsColumn::AcuteDist,
            MetricFamily::Hir => GpsColumn::AcuteHir,
            MetricFamily::Acc => GpsColumn::AcuteAcc,
        }
    }

    pub fn chronic_column(&self) -> GpsColumn {
        match self {
            MetricFamily::Dist => GpsColumn::ChronicDist,
            MetricFamily::Hir => GpsColumn::ChronicHir,
            MetricFamily::Acc => GpsColumn::ChronicAcc,
        }
    }

    pub fn ratio_column(&self) -> GpsColumn {
        match self {
            MetricFamily::Dist => GpsColumn::AcwrDist,
            MetricFamily::Hir => GpsColumn::AcwrHir,
            MetricFamily::Acc => GpsColumn::AcwrAcc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpsColumn {
    TotalDistance,
    MsrDist,
    HirDist,
    SprintDist,
    AccEff3,
    DccEff3,
    MaxSpeed,
    MaxAccel,
    MaxDecc,
    PorVel,
    FootstrikeImbalance,
    TotalDuration,
    MetersPerMinute,
    AcuteDist,
    ChronicDist,
    AcwrDist,
    AcuteHir,
    ChronicHir,
    AcwrHir,
    AcuteAcc,
    ChronicAcc,
    AcwrAcc,
}

impl GpsColumn {
    pub const ALL: [GpsColumn; 22] = [
        GpsColumn::TotalDistance,
        GpsColumn::MsrDist,
        GpsColumn::HirDist,
        GpsColumn::SprintDist,
        GpsColumn::AccEff3,
        GpsColumn::DccEff3,
        GpsColumn::MaxSpeed,
        GpsColumn::MaxAccel,
        GpsColumn::MaxDecc,
        GpsColumn::PorVel,
        GpsColumn::FootstrikeImbalance,
        GpsColumn::TotalDuration,
        GpsColumn::MetersPerMinute,
        GpsColumn::AcuteDist,
        GpsColumn::ChronicDist,
        GpsColumn::AcwrDist,
        GpsColumn::AcuteHir,
        GpsColumn::ChronicHir,
        GpsColumn::AcwrHir,
        GpsColumn::AcuteAcc,
        GpsColumn::ChronicAcc,
        GpsColumn::AcwrAcc,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            GpsColumn::TotalDistance => "total_distance",
            GpsColumn::MsrDist => "MSR_dist",
            GpsColumn::HirDist => "hir_dist",
            GpsColumn::SprintDist => "Sprint_dist",
            GpsColumn::AccEff3 => "acc_eff_3",
            GpsColumn::DccEff3 => "dcc_eff_3",
            GpsColumn::MaxSpeed => "max_speed",
            GpsColumn::MaxAccel => "max_accel",
            GpsColumn::MaxDecc => "max_decc",
            GpsColumn::PorVel => "por_vel",
            GpsColumn::FootstrikeImbalance => "por_desequilibrio_pisada",
            GpsColumn::TotalDuration => "total_duration",
            GpsColumn::MetersPerMinute => "m_min",
            GpsColumn::AcuteDist => "acute_dist",
            GpsColumn::ChronicDist => "chronic_dist",
            GpsColumn::AcwrDist => "acwr_dist",
            GpsColumn::AcuteHir => "acute_hir",
            GpsColumn::ChronicHir => "chronic_hir",
            GpsColumn::AcwrHir => "acwr_hir",
            GpsColumn::AcuteAcc => "acute_acc",
            GpsColumn::ChronicAcc => "chronic_acc",
            GpsColumn::AcwrAcc => "acwr_acc",
        }
    }

    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpsMetrics {
    pub total_distance: NumericValue,
    #[serde(rename = "MSR_dist")]
    pub msr_dist: NumericValue,
    pub hir_dist: NumericValue,
    #[serde(rename = "Sprint_dist")]
    pub sprint_dist: NumericValue,
    pub acc_eff_3: NumericValue,
    pub dcc_eff_3: NumericValue,
    pub max_speed: NumericValue,
    pub max_accel: NumericValue,
    pub max_decc: NumericValue,
    pub por_vel: NumericValue,
    #[serde(rename = "por_desequilibrio_pisada")]
    pub footstrike_imbalance: NumericValue,
    pub total_duration: NumericValue,
    pub m_min: NumericValue,
    pub acute_dist: NumericValue,
    pub chronic_dist: NumericValue,
    pub acwr_dist: NumericValue,
    pub acute_hir: NumericValue,
    pub chronic_hir: NumericValue,
    pub acwr_hir: NumericValue,
    pub acute_acc: NumericValue,
    pub chronic_acc: NumericValue,
    pub acwr_acc: NumericValue,
    #[serde(flatten)]
    pub extra: BTreeMap<String, NumericValue>,
}

impl Default for GpsMetrics {
    fn default() -> Self {
        let z = NumericValue::ZeroFilled;
        Self {
            total_distance: z,
            msr_dist: z,
            hir_dist: z,
            sprint_dist: z,
            acc_eff_3: z,
            dcc_eff_3: z,
            max_speed: z,
            max_accel: z,
            max_decc: z,
            por_vel: z,
            footstrike_imbalance: z,
            total_duration: z,
            m_min: z,
            acute_dist: z,
            chronic_dist: z,
            acwr_dist: z,
            acute_hir: z,
            chronic_hir: z,
            acwr_hir: z,
            acute_acc: z,
            chronic_acc: z,
            acwr_acc: z,
            extra: BTreeMap::new(),
        }
    }
}

impl GpsMetrics {
    pub fn get(&self, column: GpsColumn) -> NumericValue {
        match column {
            GpsColumn::TotalDistance => self.total_distance,
            GpsColumn::MsrDist => self.msr_dist,
            GpsColumn::HirDist => self.hir_dist,
            GpsColumn::SprintDist => self.sprint_dist,
            GpsColumn::AccEff3 => self.acc_eff_3,
            GpsColumn::DccEff3 => self.dcc_eff_3,
            GpsColumn::MaxSpeed => self.max_speed,
            GpsColumn::MaxAccel => self.max_accel,
            GpsColumn::MaxDecc => self.max_decc,
            GpsColumn::PorVel => self.por_vel,
            GpsColumn::FootstrikeImbalance => self.footstrike_imbalance,
            GpsColumn::TotalDuration => self.total_duration,
            GpsColumn::MetersPerMinute => self.m_min,
            GpsColumn::AcuteDist => self.acute_dist,
            GpsColumn::ChronicDist => self.chronic_dist,
            GpsColumn::AcwrDist => self.acwr_dist,
            GpsColumn::AcuteHir => self.acute_hir,
            GpsColumn::ChronicHir => self.chronic_hir,
            GpsColumn::AcwrHir => self.acwr_hir,
            GpsColumn::AcuteAcc => self.acute_acc,
            GpsColumn::ChronicAcc => self.chronic_acc,
            GpsColumn::AcwrAcc => self.acwr_acc,
        }
    }

    pub fn set(&mut self, column: GpsColumn, value: NumericValue) {
        let slot = match column {
            GpsColumn::TotalDistance => &mut self.total_distance,
            GpsColumn::MsrDist => &mut self.msr_dist,
            GpsColumn::HirDist => &mut self.hir_dist,
            GpsColumn::SprintDist => &mut self.sprint_dist,
            GpsColumn::AccEff3 => &mut self.acc_eff_3,
            GpsColumn::DccEff3 => &mut self.dcc_eff_3,
            GpsColumn::MaxSpeed => &mut self.max_speed,
            GpsColumn::MaxAccel => &mut self.max_accel,
            GpsColumn::MaxDecc => &mut self.max_decc,
            GpsColumn::PorVel => &mut self.por_vel,
            GpsColumn::FootstrikeImbalance => &mut self.footstrike_imbalance,
            GpsColumn::TotalDuration => &mut self.total_duration,
            GpsColumn::MetersPerMinute => &mut self.m_min,
            GpsColumn::AcuteDist => &mut self.acute_dist,
            GpsColumn::ChronicDist => &mut self.chronic_dist,
            GpsColumn::AcwrDist => &mut self.acwr_dist,
            GpsColumn::AcuteHir => &mut self.acute_hir,
            GpsColumn::ChronicHir => &mut self.chronic_hir,
            GpsColumn::AcwrHir => &mut self.acwr_hir,
            GpsColumn::AcuteAcc => &mut self.acute_acc,
            GpsColumn::ChronicAcc => &mut self.chronic_acc,
            GpsColumn::AcwrAcc => &mut self.acwr_acc,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    pub date: SessionDate,
    pub session: String,
    pub day_type: DayType,
    pub athlete_name: String,
    pub metrics: GpsMetrics,
}

impl SessionRecord {
    pub fn metric(&self, column: GpsColumn) -> NumericValue {
        self.metrics.get(column)
    }
}
