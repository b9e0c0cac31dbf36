//! `From` implementations feeding [`LogValue`]

use super::{LogValue, Primitive, SqlValuer};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::borrow::Cow;

#[cfg(feature = "uuid")]
use uuid::Uuid;

#[cfg(feature = "rust-decimal")]
use rust_decimal::Decimal;

//------------------------------------------------------------------------------
// Primitives
//------------------------------------------------------------------------------

macro_rules! impl_from_primitive {
    ($variant:ident as $target:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl<'a> From<$ty> for LogValue<'a> {
                #[inline]
                fn from(value: $ty) -> Self {
                    LogValue::Primitive(Primitive::$variant(value as $target))
                }
            }
        )+
    };
}

impl_from_primitive!(Int as i64: i8, i16, i32, i64, isize);
impl_from_primitive!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_primitive!(Float as f64: f64);
impl_from_primitive!(Float32 as f32: f32);

impl<'a> From<bool> for LogValue<'a> {
    #[inline]
    fn from(value: bool) -> Self {
        LogValue::Primitive(Primitive::Bool(value))
    }
}

impl<'a> From<Primitive> for LogValue<'a> {
    #[inline]
    fn from(value: Primitive) -> Self {
        LogValue::Primitive(value)
    }
}

//------------------------------------------------------------------------------
// Text
//------------------------------------------------------------------------------

impl<'a> From<&'a str> for LogValue<'a> {
    fn from(value: &'a str) -> Self {
        LogValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for LogValue<'a> {
    fn from(value: &'a String) -> Self {
        LogValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl<'a> From<String> for LogValue<'a> {
    fn from(value: String) -> Self {
        LogValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for LogValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        LogValue::Text(value)
    }
}

impl<'a> From<char> for LogValue<'a> {
    fn from(value: char) -> Self {
        LogValue::Text(Cow::Owned(value.to_string()))
    }
}

//------------------------------------------------------------------------------
// Binary
//------------------------------------------------------------------------------

impl<'a> From<&'a [u8]> for LogValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        LogValue::Bytes(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a Vec<u8>> for LogValue<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        LogValue::Bytes(Cow::Borrowed(value.as_slice()))
    }
}

impl<'a> From<Vec<u8>> for LogValue<'a> {
    fn from(value: Vec<u8>) -> Self {
        LogValue::Bytes(Cow::Owned(value))
    }
}

impl<'a, const N: usize> From<[u8; N]> for LogValue<'a> {
    fn from(value: [u8; N]) -> Self {
        LogValue::Bytes(Cow::Owned(value.to_vec()))
    }
}

impl<'a> From<Cow<'a, [u8]>> for LogValue<'a> {
    fn from(value: Cow<'a, [u8]>) -> Self {
        LogValue::Bytes(value)
    }
}

//------------------------------------------------------------------------------
// Temporal
//------------------------------------------------------------------------------

impl<'a> From<NaiveDateTime> for LogValue<'a> {
    fn from(value: NaiveDateTime) -> Self {
        LogValue::Timestamp(value)
    }
}

impl<'a> From<NaiveDate> for LogValue<'a> {
    fn from(value: NaiveDate) -> Self {
        LogValue::Timestamp(value.and_time(NaiveTime::MIN))
    }
}

// Printed in the zone the value carries, not converted to local time.
impl<'a, Tz: TimeZone> From<DateTime<Tz>> for LogValue<'a> {
    fn from(value: DateTime<Tz>) -> Self {
        LogValue::Timestamp(value.naive_local())
    }
}

#[cfg(feature = "time")]
fn naive_from_time_parts(date: time::Date, clock: time::Time) -> Option<NaiveDateTime> {
    let month = u8::from(date.month()) as u32;
    let date = NaiveDate::from_ymd_opt(date.year(), month, date.day() as u32)?;
    let clock = NaiveTime::from_hms_nano_opt(
        clock.hour() as u32,
        clock.minute() as u32,
        clock.second() as u32,
        clock.nanosecond(),
    )?;
    Some(date.and_time(clock))
}

#[cfg(feature = "time")]
impl<'a> From<time::PrimitiveDateTime> for LogValue<'a> {
    fn from(value: time::PrimitiveDateTime) -> Self {
        match naive_from_time_parts(value.date(), value.time()) {
            Some(ts) => LogValue::Timestamp(ts),
            None => LogValue::display(value),
        }
    }
}

#[cfg(feature = "time")]
impl<'a> From<time::OffsetDateTime> for LogValue<'a> {
    fn from(value: time::OffsetDateTime) -> Self {
        match naive_from_time_parts(value.date(), value.time()) {
            Some(ts) => LogValue::Timestamp(ts),
            None => LogValue::display(value),
        }
    }
}

//------------------------------------------------------------------------------
// Wrappers
//------------------------------------------------------------------------------

impl<'a> From<&'a dyn SqlValuer> for LogValue<'a> {
    fn from(value: &'a dyn SqlValuer) -> Self {
        LogValue::Valuer(value)
    }
}

/// One level of `Option` is unwrapped; `None` is an absent argument.
impl<'a, T> From<Option<T>> for LogValue<'a>
where
    T: Into<LogValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => LogValue::Null,
        }
    }
}

//------------------------------------------------------------------------------
// Optional crates
//------------------------------------------------------------------------------

#[cfg(feature = "uuid")]
impl<'a> From<Uuid> for LogValue<'a> {
    fn from(value: Uuid) -> Self {
        LogValue::Text(Cow::Owned(value.to_string()))
    }
}

#[cfg(feature = "uuid")]
impl<'a> From<&'a Uuid> for LogValue<'a> {
    fn from(value: &'a Uuid) -> Self {
        LogValue::Text(Cow::Owned(value.to_string()))
    }
}

// Decimals print quoted, the way a driver binds them as text.
#[cfg(feature = "rust-decimal")]
impl<'a> From<Decimal> for LogValue<'a> {
    fn from(value: Decimal) -> Self {
        LogValue::Text(Cow::Owned(value.to_string()))
    }
}

#[cfg(feature = "serde")]
impl<'a> From<serde_json::Value> for LogValue<'a> {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => LogValue::Null,
            Value::Bool(b) => LogValue::Primitive(Primitive::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LogValue::Primitive(Primitive::Int(i))
                } else if let Some(u) = n.as_u64() {
                    LogValue::Primitive(Primitive::UInt(u))
                } else {
                    n.as_f64()
                        .map(|f| LogValue::Primitive(Primitive::Float(f)))
                        .unwrap_or_else(|| LogValue::display(n))
                }
            }
            Value::String(s) => LogValue::Text(Cow::Owned(s)),
            other @ (Value::Array(_) | Value::Object(_)) => LogValue::display(other),
        }
    }
}
