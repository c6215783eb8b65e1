use squadload_rs::pipeline::numeric::{coerce, extract_ordinal, parse_locale_number};
use squadload_rs::types::value::{CoercionMode, NumericValue};

#[test]
fn comma_is_the_decimal_separator_when_present() {
    assert_eq!(parse_locale_number("1.234,56"), 1234.56);
    assert_eq!(parse_locale_number("5.432,1"), 5432.1);
    assert_eq!(parse_locale_number("1,5"), 1.5);
    assert_eq!(parse_locale_number("-4,1"), -4.1);
}

#[test]
fn text_without_comma_parses_as_is() {
    assert_eq!(parse_locale_number("12.5"), 12.5);
    assert_eq!(parse_locale_number("  7 "), 7.0);
    assert_eq!(parse_locale_number("-3"), -3.0);
}

#[test]
fn english_thousands_separator_is_read_as_decimal_comma() {
    // Periods are dropped whenever a comma is present.
    assert_eq!(parse_locale_number("1,234.56"), 1.23456);
}

#[test]
fn unparseable_text_reads_as_zero() {
    assert_eq!(parse_locale_number(""), 0.0);
    assert_eq!(parse_locale_number("abc"), 0.0);
    assert_eq!(parse_locale_number("1,2,3"), 0.0);
}

#[test]
fn zero_fill_keeps_real_zero_apart_from_failure() {
    assert_eq!(coerce("0", CoercionMode::ZeroFill), NumericValue::Parsed(0.0));
    assert_eq!(coerce("n/a", CoercionMode::ZeroFill), NumericValue::ZeroFilled);
    assert_eq!(coerce("NaN", CoercionMode::ZeroFill), NumericValue::ZeroFilled);
    assert_eq!(coerce("inf", CoercionMode::ZeroFill), NumericValue::ZeroFilled);
    assert_eq!(NumericValue::ZeroFilled.value(), Some(0.0));
    assert_eq!(NumericValue::ZeroFilled.parsed(), None);
}

#[test]
fn missing_preserving_uses_plain_float_syntax() {
    assert_eq!(
        coerce("6.5", CoercionMode::MissingPreserving),
        NumericValue::Parsed(6.5)
    );
    assert_eq!(
        coerce("4,5", CoercionMode::MissingPreserving),
        NumericValue::Missing
    );
    assert_eq!(coerce("", CoercionMode::MissingPreserving), NumericValue::Missing);
    assert_eq!(NumericValue::Missing.value(), None);
}

#[test]
fn ordinal_is_the_first_digit_in_the_answer() {
    assert_eq!(extract_ordinal("2 - high"), NumericValue::Parsed(2.0));
    assert_eq!(extract_ordinal("Very good (4)"), NumericValue::Parsed(4.0));
    assert_eq!(extract_ordinal("10"), NumericValue::Parsed(1.0));
    assert_eq!(extract_ordinal("no answer"), NumericValue::Missing);
    assert_eq!(extract_ordinal(""), NumericValue::Missing);
}
