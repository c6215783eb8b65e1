use serde::{Deserialize, Serialize, Serializer};

/// Result of coercing one text cell into a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Parsed(f64),
    ZeroFilled,
    Missing,
}

impl NumericValue {
    pub fn value(&self) -> Option<f64> {
        match self {
            NumericValue::Parsed(v) => Some(*v),
            NumericValue::ZeroFilled => Some(0.0),
            NumericValue::Missing => None,
        }
    }

    pub fn parsed(&self) -> Option<f64> {
        match self {
            NumericValue::Parsed(v) => Some(*v),
            _ => None,
        }
    }

    pub fn or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn to_cell(&self) -> String {
        match self {
            NumericValue::Parsed(v) => v.to_string(),
            NumericValue::ZeroFilled | NumericValue::Missing => String::new(),
        }
    }
}

impl Serialize for NumericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionMode {
    ZeroFill,
    MissingPreserving,
}
