use chrono::NaiveDateTime;
use std::fmt;

use crate::error::ValuerError;

/// A value type that can produce its own canonical scalar form.
///
/// Implement this for money, enum or wrapper types that the log should print
/// the way the driver would bind them. The accessor result is always printed
/// quoted; `Ok(None)` and `Err(_)` both print as `NULL`.
///
/// ```
/// use sqlog_core::value::{DriverValue, LogValue, SqlValuer};
/// use sqlog_core::error::ValuerError;
/// use sqlog_core::render::render_value;
///
/// #[derive(Debug)]
/// struct Money { cents: i64 }
///
/// impl SqlValuer for Money {
///     fn value(&self) -> Result<Option<DriverValue>, ValuerError> {
///         Ok(Some(DriverValue::Text(format!("{}.{:02}", self.cents / 100, self.cents % 100))))
///     }
/// }
///
/// let price = Money { cents: 1999 };
/// assert_eq!(render_value(&LogValue::valuer(&price)), "'19.99'");
/// ```
pub trait SqlValuer: fmt::Debug + Sync {
    fn value(&self) -> Result<Option<DriverValue>, ValuerError>;
}

/// Scalar produced by a [`SqlValuer`].
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl fmt::Display for DriverValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverValue::Int(i) => write!(f, "{i}"),
            DriverValue::Float(v) => write!(f, "{v}"),
            DriverValue::Bool(b) => write!(f, "{b}"),
            DriverValue::Bytes(bytes) => {
                f.write_str("[")?;
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte}")?;
                }
                f.write_str("]")
            }
            DriverValue::Text(s) => f.write_str(s),
            DriverValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f")),
        }
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        DriverValue::Int(value)
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        DriverValue::Float(value)
    }
}

impl From<bool> for DriverValue {
    fn from(value: bool) -> Self {
        DriverValue::Bool(value)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(value: Vec<u8>) -> Self {
        DriverValue::Bytes(value)
    }
}

impl From<String> for DriverValue {
    fn from(value: String) -> Self {
        DriverValue::Text(value)
    }
}

impl From<&str> for DriverValue {
    fn from(value: &str) -> Self {
        DriverValue::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for DriverValue {
    fn from(value: NaiveDateTime) -> Self {
        DriverValue::Timestamp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn bytes_display_as_decimal_list() {
        assert_eq!(DriverValue::Bytes(vec![1, 2, 255]).to_string(), "[1 2 255]");
        assert_eq!(DriverValue::Bytes(vec![]).to_string(), "[]");
    }

    #[test]
    fn timestamp_display_keeps_fraction() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(8, 5, 1, 250)
            .unwrap();
        assert_eq!(DriverValue::from(ts).to_string(), "2024-03-09 08:05:01.250");

        let whole = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(8, 5, 1)
            .unwrap();
        assert_eq!(DriverValue::from(whole).to_string(), "2024-03-09 08:05:01");
    }

    #[test]
    fn scalars_display_plainly() {
        assert_eq!(DriverValue::from(12i64).to_string(), "12");
        assert_eq!(DriverValue::from(true).to_string(), "true");
        assert_eq!(DriverValue::from("x'y").to_string(), "x'y");
    }
}
