//! Argument literals accepted on the command line and in replay files

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use sqlog_core::LogValue;
use std::borrow::Cow;

use crate::error::CliError;

const TIMESTAMP_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse one command line argument.
///
/// | Literal                  | Value                 |
/// |--------------------------|-----------------------|
/// | `null`                   | NULL                  |
/// | `true`, `false`          | boolean               |
/// | `42`, `-1.5`             | number                |
/// | `x:deadbeef`             | bytes                 |
/// | `@2024-01-02 03:04:05`   | timestamp             |
/// | `'42'`                   | text, quotes stripped |
/// | anything else            | text                  |
pub fn parse_arg(literal: &str) -> Result<LogValue<'static>, CliError> {
    if literal.eq_ignore_ascii_case("null") {
        return Ok(LogValue::Null);
    }
    if let Ok(b) = literal.parse::<bool>() {
        return Ok(LogValue::from(b));
    }
    if let Ok(i) = literal.parse::<i64>() {
        return Ok(LogValue::from(i));
    }
    if let Ok(u) = literal.parse::<u64>() {
        return Ok(LogValue::from(u));
    }
    if literal.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(f) = literal.parse::<f64>() {
            return Ok(LogValue::from(f));
        }
    }
    if let Some(encoded) = literal.strip_prefix("x:") {
        let bytes = hex::decode(encoded).map_err(|e| invalid(literal, e))?;
        return Ok(LogValue::from(bytes));
    }
    if let Some(ts) = literal.strip_prefix('@') {
        return parse_timestamp(ts)
            .map(LogValue::from)
            .ok_or_else(|| invalid(literal, "expected YYYY-MM-DD[ HH:MM:SS]"));
    }
    if let Some(text) = literal
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        return Ok(LogValue::Text(Cow::Owned(text.to_string())));
    }
    Ok(LogValue::Text(Cow::Owned(literal.to_string())))
}

/// Map one JSON replay argument.
///
/// Arrays made up entirely of integers in `0..=255` are bytes; everything
/// else follows the `serde_json::Value` conversion of the core crate.
pub fn json_arg(value: Value) -> LogValue<'static> {
    if let Value::Array(items) = &value {
        let bytes: Option<Vec<u8>> = items
            .iter()
            .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect();
        if let Some(bytes) = bytes {
            return LogValue::from(bytes);
        }
    }
    LogValue::from(value)
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn invalid(literal: &str, reason: impl ToString) -> CliError {
    CliError::InvalidArgument {
        literal: literal.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlog_core::render::render_value;

    fn rendered(literal: &str) -> String {
        render_value(&parse_arg(literal).unwrap()).to_string()
    }

    #[test]
    fn scalars() {
        assert_eq!(rendered("null"), "NULL");
        assert_eq!(rendered("true"), "true");
        assert_eq!(rendered("42"), "42");
        assert_eq!(rendered("18446744073709551615"), "18446744073709551615");
        assert_eq!(rendered("-1.5"), "-1.5");
    }

    #[test]
    fn words_that_parse_as_floats_stay_text() {
        assert_eq!(rendered("inf"), "'inf'");
        assert_eq!(rendered("NaN"), "'NaN'");
    }

    #[test]
    fn bytes_and_timestamps() {
        assert_eq!(rendered("x:68656c6c6f"), "'hello'");
        assert_eq!(rendered("x:ff00"), "'<binary>'");
        assert_eq!(rendered("@2024-01-02 03:04:05"), "'2024-01-02 03:04:05'");
        assert_eq!(rendered("@2024-01-02T03:04:05.5"), "'2024-01-02 03:04:05'");
        assert_eq!(rendered("@2024-01-02"), "'2024-01-02 00:00:00'");
    }

    #[test]
    fn quoted_text_forces_text() {
        assert_eq!(rendered("'42'"), "'42'");
        assert_eq!(rendered("alice"), "'alice'");
        assert_eq!(rendered("a'b"), "'a'b'");
    }

    #[test]
    fn bad_literals_are_errors() {
        assert!(matches!(
            parse_arg("x:zz"),
            Err(CliError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_arg("@yesterday"),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn json_arrays_of_octets_are_bytes() {
        assert_eq!(json_arg(json!([104, 105])), LogValue::from(b"hi".to_vec()));
        assert_eq!(render_value(&json_arg(json!([255, 0]))), "'<binary>'");
        assert_eq!(render_value(&json_arg(json!([1, 300]))), "'[1,300]'");
        assert_eq!(json_arg(json!(null)), LogValue::Null);
        assert_eq!(render_value(&json_arg(json!("x"))), "'x'");
    }
}
