//! Truthiness predicates and integer parsing
//!
//! Response headers and error payloads arrive as loosely typed values. Every
//! presence test in the crate goes through the predicates defined here so that
//! "is there an error" and "is this paging value set" mean the same thing at
//! every call site.
//!
//! A value is truthy unless it is `null`, `false`, a zero number, or an empty
//! string. Arrays and objects are always truthy, even when empty.

use serde_json::Value;

/// Whether a JSON value counts as set.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number_is_truthy(number),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Like [`is_truthy`], treating an absent value as falsy.
#[must_use]
pub fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

/// Whether a JSON number is non-zero.
#[must_use]
pub fn number_is_truthy(number: &serde_json::Number) -> bool {
    if let Some(int) = number.as_i64() {
        return int != 0;
    }
    if let Some(int) = number.as_u64() {
        return int != 0;
    }
    number.as_f64().is_some_and(|float| float != 0.0)
}

/// Whether a parsed integer counts as set (`None` is the not-a-number case).
#[must_use]
pub const fn int_is_truthy(value: Option<i64>) -> bool {
    matches!(value, Some(int) if int != 0)
}

/// Parse a base-10 integer prefix.
///
/// Leading whitespace is skipped and an optional sign is accepted. Parsing
/// stops at the first non-digit. Returns `None` when no digit is found.
/// Magnitudes beyond `i64` saturate.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: Vec<i64> = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|byte| i64::from(byte - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let parsed = digits.iter().fold(0_i64, |acc, digit| {
        let shifted = acc.saturating_mul(10);
        if negative {
            shifted.saturating_sub(*digit)
        } else {
            shifted.saturating_add(*digit)
        }
    });
    Some(parsed)
}
