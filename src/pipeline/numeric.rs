use std::borrow::Cow;

use crate::types::value::{CoercionMode, NumericValue};

/// `"1.234,56"` reads as `1234.56`; unparseable text reads as `0.0`.
pub fn parse_locale_number(text: &str) -> f64 {
    coerce(text, CoercionMode::ZeroFill).or_zero()
}

pub fn coerce(text: &str, mode: CoercionMode) -> NumericValue {
    match mode {
        CoercionMode::ZeroFill => parse_locale(text)
            .map(NumericValue::Parsed)
            .unwrap_or(NumericValue::ZeroFilled),
        CoercionMode::MissingPreserving => parse_strict(text)
            .map(NumericValue::Parsed)
            .unwrap_or(NumericValue::Missing),
    }
}

pub fn extract_ordinal(text: &str) -> NumericValue {
    text.chars()
        .find_map(|c| c.to_digit(10))
        .map(|d| NumericValue::Parsed(d as f64))
        .unwrap_or(NumericValue::Missing)
}

fn parse_locale(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let normalized: Cow<str> = if trimmed.contains(',') {
        Cow::Owned(trimmed.replace('.', "").replace(',', "."))
    } else {
        Cow::Borrowed(trimmed)
    };
    parse_strict(&normalized)
}

fn parse_strict(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
