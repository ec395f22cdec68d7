//! Guards over dynamic input.
//!
//! Each `is_*` function is a pure predicate. Each `require_*` function runs
//! the same check, emits the matching diagnostic on failure and returns
//! `Err(ValidationError)`. Variadic guards stop at the first failing value.
//!
//! Typed Rust signatures already rule out most of what these guards check, so
//! they are only applied where input is genuinely dynamic: JSON values handed
//! in by a caller, read back from a store, or built from request bodies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(http|https)://[^ "]+$"#).expect("URL pattern is a valid regex")
});

/// Returns `true` if `url` is an absolute `http://` or `https://` URL with no
/// spaces or double quotes.
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// Decimal literal: optional sign, digits with an optional fraction (or a
/// bare fraction), optional exponent.
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("decimal pattern is a valid regex")
});

/// Converts a JSON value to a number the way a loosely typed index would be.
///
/// Numbers pass through and booleans become `0`/`1`. Strings are trimmed; an
/// empty string is zero, otherwise only numeric literals are accepted:
/// decimals with optional exponent, `0x`/`0o`/`0b` integers and
/// `[+-]Infinity`. Everything else is `NaN`.
pub fn as_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric_literal(s.trim()),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn parse_numeric_literal(text: &str) -> f64 {
    match text {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        return parse_radix_integer(&text[2..], radix);
    }

    if DECIMAL_LITERAL.is_match(text) {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

pub fn require_present(values: &[&Value]) -> Result<()> {
    if values.iter().any(|v| v.is_null()) {
        return Err(ValidationError::Missing.emit());
    }
    Ok(())
}

pub fn require_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| ValidationError::NotObject.emit())
}

pub fn require_callback<F: ?Sized>(callback: Option<&F>) -> Result<&F> {
    callback.ok_or_else(|| ValidationError::NotCallable.emit())
}

/// Fails if any value is not a number (see [`as_number`]).
pub fn require_numbers(values: &[&Value]) -> Result<()> {
    if values.iter().any(|v| as_number(v).is_nan()) {
        return Err(ValidationError::NotNumber.emit());
    }
    Ok(())
}

pub fn require_strings(values: &[&Value]) -> Result<()> {
    if values.iter().any(|v| !v.is_string()) {
        return Err(ValidationError::NotString.emit());
    }
    Ok(())
}

/// Single-value form of [`require_strings`] that hands back the text.
pub fn require_string(value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| ValidationError::NotString.emit())
}

pub fn require_url(url: &str) -> Result<()> {
    if !is_valid_url(url) {
        return Err(ValidationError::InvalidUrl.emit());
    }
    Ok(())
}

/// Request bodies must be plain JSON objects.
pub fn require_body(body: &Value) -> Result<&Map<String, Value>> {
    body.as_object().ok_or_else(|| ValidationError::InvalidBody.emit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_accepts_http_and_https() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/api/v1?q=1#frag"));
        assert!(is_valid_url("https://localhost:8080"));
    }

    #[test]
    fn url_rejects_malformed() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://exa mple.com"));
        assert!(!is_valid_url("https://example.com/\"quoted\""));
        assert!(!is_valid_url("HTTP://example.com"));
        assert!(!is_valid_url(" https://example.com"));
    }

    #[test]
    fn require_url_reports_invalid() {
        assert_eq!(require_url("nope"), Err(ValidationError::InvalidUrl));
        assert_eq!(require_url("https://ok.dev"), Ok(()));
    }

    #[test]
    fn presence_stops_at_null() {
        assert_eq!(require_present(&[&json!(1), &json!("x")]), Ok(()));
        assert_eq!(
            require_present(&[&json!(1), &Value::Null]),
            Err(ValidationError::Missing)
        );
        assert_eq!(require_present(&[]), Ok(()));
    }

    #[test]
    fn numbers_follow_loose_coercion() {
        assert_eq!(as_number(&json!(3)), 3.0);
        assert_eq!(as_number(&json!("2")), 2.0);
        assert_eq!(as_number(&json!(" ")), 0.0);
        assert_eq!(as_number(&json!(true)), 1.0);
        assert!(as_number(&json!("two")).is_nan());
        assert!(as_number(&json!([1])).is_nan());

        assert_eq!(require_numbers(&[&json!(1), &json!("4")]), Ok(()));
        assert_eq!(
            require_numbers(&[&json!(1), &json!({})]),
            Err(ValidationError::NotNumber)
        );
    }

    #[test]
    fn numeric_string_literals() {
        assert_eq!(as_number(&json!(" -1.5e2 ")), -150.0);
        assert_eq!(as_number(&json!("1.")), 1.0);
        assert_eq!(as_number(&json!(".5")), 0.5);
        assert_eq!(as_number(&json!("0x10")), 16.0);
        assert_eq!(as_number(&json!("0B101")), 5.0);
        assert_eq!(as_number(&json!("0o17")), 15.0);
        assert_eq!(as_number(&json!("Infinity")), f64::INFINITY);
        assert_eq!(as_number(&json!("-Infinity")), f64::NEG_INFINITY);
    }

    #[test]
    fn rust_only_float_spellings_are_not_numbers() {
        let spellings = [
            "inf", "infinity", "-inf", "NaN", "nan", "INFINITY", "0x", "-0x10", "0xg", "1e", "e5",
            ".",
        ];
        for text in spellings {
            assert!(as_number(&json!(text)).is_nan(), "{text}");
        }
        assert_eq!(
            require_numbers(&[&json!("infinity")]),
            Err(ValidationError::NotNumber)
        );
    }

    #[test]
    fn strings_and_objects() {
        assert_eq!(require_string(&json!("abc")), Ok("abc"));
        assert_eq!(require_string(&json!(5)), Err(ValidationError::NotString));
        assert_eq!(
            require_strings(&[&json!("a"), &json!(null)]),
            Err(ValidationError::NotString)
        );

        assert!(require_object(&json!({"a": 1})).is_ok());
        assert_eq!(require_object(&json!([1, 2])), Err(ValidationError::NotObject));
    }

    #[test]
    fn body_must_be_plain_object() {
        assert!(require_body(&json!({"x": 1})).is_ok());
        assert_eq!(require_body(&json!("x")), Err(ValidationError::InvalidBody));
        assert_eq!(require_body(&json!([1])), Err(ValidationError::InvalidBody));
    }

    #[test]
    fn callback_must_be_given() {
        let double = |v: &Value| json!(v.as_i64().unwrap_or(0) * 2);
        let f: &dyn Fn(&Value) -> Value = &double;
        assert!(require_callback(Some(f)).is_ok());
        assert_eq!(
            require_callback::<dyn Fn(&Value) -> Value>(None).err(),
            Some(ValidationError::NotCallable)
        );
    }
}
