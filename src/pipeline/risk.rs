use std::collections::HashMap;

use crate::pipeline::numeric::coerce;
use crate::types::risk::{AcwrBand, Flag, Polarity, WellnessBand};
use crate::types::value::CoercionMode;
use crate::types::wellness::WellnessMetric;

pub const ACWR_DANGER_LOW: f64 = 0.7;
pub const ACWR_SAFE_LOW: f64 = 0.8;
pub const ACWR_SAFE_HIGH: f64 = 1.2;
pub const ACWR_DANGER_HIGH: f64 = 1.4;

pub const FOOTSTRIKE_LIMIT: f64 = 10.0;

pub const ORDINAL_CAUTION: f64 = 3.0;
pub const RECOVERY_DANGER_BELOW: f64 = 5.0;
pub const RECOVERY_CAUTION_UP_TO: f64 = 7.0;
pub const URINE_ALERT_ABOVE: f64 = 4.0;
pub const SHORT_SLEEP_BUCKETS: [&str; 2] = ["1-5", "5-7"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BandingConfig {
    overrides: HashMap<WellnessMetric, Polarity>,
}

impl BandingConfig {
    pub fn with_polarity(mut self, metric: WellnessMetric, polarity: Polarity) -> Self {
        self.overrides.insert(metric, polarity);
        self
    }

    pub fn polarity(&self, metric: WellnessMetric) -> Polarity {
        self.overrides
            .get(&metric)
            .copied()
            .unwrap_or(Polarity::HigherIsBetter)
    }
}

/// `0.8` and `1.2` are both inside the normal band.
pub fn band_acwr(ratio: Option<f64>) -> AcwrBand {
    let Some(v) = ratio.filter(|v| !v.is_nan()) else {
        return AcwrBand::Unavailable;
    };

    if v < ACWR_DANGER_LOW {
        AcwrBand::DangerLow
    } else if v < ACWR_SAFE_LOW {
        AcwrBand::CautionLow
    } else if v <= ACWR_SAFE_HIGH {
        AcwrBand::Normal
    } else if v <= ACWR_DANGER_HIGH {
        AcwrBand::CautionHigh
    } else {
        AcwrBand::DangerHigh
    }
}

pub fn band_footstrike(imbalance: Option<f64>) -> Flag {
    match imbalance.filter(|v| !v.is_nan()) {
        None => Flag::Missing,
        Some(v) if (-FOOTSTRIKE_LIMIT..=FOOTSTRIKE_LIMIT).contains(&v) => Flag::Clear,
        Some(_) => Flag::Alert,
    }
}

pub fn band_ordinal(score: Option<f64>, polarity: Polarity) -> WellnessBand {
    let Some(v) = score.filter(|v| !v.is_nan()) else {
        return WellnessBand::Missing;
    };

    let (bad, good) = match polarity {
        Polarity::HigherIsBetter => (v < ORDINAL_CAUTION, v > ORDINAL_CAUTION),
        Polarity::LowerIsBetter => (v > ORDINAL_CAUTION, v < ORDINAL_CAUTION),
    };
    if bad {
        WellnessBand::Danger
    } else if good {
        WellnessBand::Normal
    } else {
        WellnessBand::Caution
    }
}

pub fn band_recovery(score: Option<f64>) -> WellnessBand {
    match score.filter(|v| !v.is_nan()) {
        None => WellnessBand::Missing,
        Some(v) if v < RECOVERY_DANGER_BELOW => WellnessBand::Danger,
        Some(v) if v <= RECOVERY_CAUTION_UP_TO => WellnessBand::Caution,
        Some(_) => WellnessBand::Normal,
    }
}

pub fn band_wellness(metric: WellnessMetric, score: Option<f64>, config: &BandingConfig) -> WellnessBand {
    if metric.is_ordinal() {
        band_ordinal(score, config.polarity(metric))
    } else {
        band_recovery(score)
    }
}

pub fn band_urine(code: Option<&str>) -> Flag {
    let value = code.and_then(|c| coerce(c, CoercionMode::MissingPreserving).value());
    match value {
        None => Flag::Missing,
        Some(v) if v > URINE_ALERT_ABOVE => Flag::Alert,
        Some(_) => Flag::Clear,
    }
}

pub fn band_sleep(bucket: Option<&str>) -> Flag {
    match bucket.map(str::trim).filter(|b| !b.is_empty()) {
        None => Flag::Missing,
        Some(b) if SHORT_SLEEP_BUCKETS.contains(&b) => Flag::Alert,
        Some(_) => Flag::Clear,
    }
}

pub fn band_muscle_pain(location: Option<&str>) -> Flag {
    match location.map(str::trim).filter(|l| !l.is_empty()) {
        None => Flag::Missing,
        Some(_) => Flag::Alert,
    }
}
