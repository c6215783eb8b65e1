use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::value::NumericValue;

pub const TIMESTAMP_COLUMN: &str = "Timestamp";
pub const NAME_COLUMN: &str = "Name";
pub const URINE_COLOR_COLUMN: &str = "URINE COLOR";
pub const SLEEP_HOURS_COLUMN: &str = "HOW MANY HOURS YOU SLEEP?";
pub const MUSCLE_PAIN_COLUMN: &str =
    "IF THE PREVIOUS ANSWER IS 1 OR 2. WHERE (LOW = L / MEDIUM = M /HIGH = H)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessMetric {
    Fatigue,
    SleepQuality,
    MuscleDiscomfort,
    Mood,
    Recovery,
}

impl WellnessMetric {
    pub const ALL: [WellnessMetric; 5] = [
        WellnessMetric::Fatigue,
        WellnessMetric::SleepQuality,
        WellnessMetric::MuscleDiscomfort,
        WellnessMetric::Mood,
        WellnessMetric::Recovery,
    ];

    pub const ORDINALS: [WellnessMetric; 4] = [
        WellnessMetric::Fatigue,
        WellnessMetric::SleepQuality,
        WellnessMetric::MuscleDiscomfort,
        WellnessMetric::Mood,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            WellnessMetric::Fatigue => "FATIGUE",
            WellnessMetric::SleepQuality => "SLEEP QUALITY",
            WellnessMetric::MuscleDiscomfort => "MUSCLE DISCOMFORT",
            WellnessMetric::Mood => "MOOD",
            WellnessMetric::Recovery => "HOW HAVE YOU RECOVERED?",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|m| {
            m.header().eq_ignore_ascii_case(s) || m.key().eq_ignore_ascii_case(s)
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            WellnessMetric::Fatigue => "fatigue",
            WellnessMetric::SleepQuality => "sleep_quality",
            WellnessMetric::MuscleDiscomfort => "muscle_discomfort",
            WellnessMetric::Mood => "mood",
            WellnessMetric::Recovery => "recovery",
        }
    }

    pub fn is_ordinal(&self) -> bool {
        !matches!(self, WellnessMetric::Recovery)
    }

    pub fn scale_max(&self) -> f64 {
        if self.is_ordinal() {
            5.0
        } else {
            10.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessRecord {
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub name: String,
    pub fatigue: NumericValue,
    pub sleep_quality: NumericValue,
    pub muscle_discomfort: NumericValue,
    pub mood: NumericValue,
    pub recovery: NumericValue,
    pub urine_color: Option<String>,
    pub sleep_hours: Option<String>,
    pub muscle_pain_location: Option<String>,
}

impl WellnessRecord {
    pub fn metric(&self, metric: WellnessMetric) -> NumericValue {
        match metric {
            WellnessMetric::Fatigue => self.fatigue,
            WellnessMetric::SleepQuality => self.sleep_quality,
            WellnessMetric::MuscleDiscomfort => self.muscle_discomfort,
            WellnessMetric::Mood => self.mood,
            WellnessMetric::Recovery => self.recovery,
        }
    }
}
