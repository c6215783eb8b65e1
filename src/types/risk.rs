use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Caution,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrBand {
    DangerLow,
    CautionLow,
    Normal,
    CautionHigh,
    DangerHigh,
    Unavailable,
}

impl AcwrBand {
    pub fn severity(&self) -> Option<Severity> {
        match self {
            AcwrBand::DangerLow | AcwrBand::DangerHigh => Some(Severity::Danger),
            AcwrBand::CautionLow | AcwrBand::CautionHigh => Some(Severity::Caution),
            AcwrBand::Normal => Some(Severity::Normal),
            AcwrBand::Unavailable => None,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self.severity(), Some(Severity::Caution | Severity::Danger))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessBand {
    Danger,
    Caution,
    Normal,
    Missing,
}

impl WellnessBand {
    pub fn severity(&self) -> Option<Severity> {
        match self {
            WellnessBand::Danger => Some(Severity::Danger),
            WellnessBand::Caution => Some(Severity::Caution),
            WellnessBand::Normal => Some(Severity::Normal),
            WellnessBand::Missing => None,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, WellnessBand::Danger | WellnessBand::Caution)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Alert,
    Clear,
    Missing,
}

impl Flag {
    pub fn is_alert(&self) -> bool {
        matches!(self, Flag::Alert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}
