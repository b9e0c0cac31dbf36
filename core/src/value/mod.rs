//! Argument values as the query log sees them
//!
//! Every bound argument is converted into a [`LogValue`] before rendering. The
//! variant decides the rendering rule, so the dispatch in
//! [`render_value`](crate::render::render_value) is an exhaustive `match`
//! rather than runtime type inspection.

mod conversions;
mod valuer;

pub use valuer::{DriverValue, SqlValuer};

use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::fmt;

/// A single bound argument, classified by shape.
///
/// # Examples
///
/// ```
/// use sqlog_core::value::{LogValue, Primitive};
///
/// assert_eq!(LogValue::from(42), LogValue::Primitive(Primitive::Int(42)));
/// assert_eq!(LogValue::from(None::<i32>), LogValue::Null);
/// assert!(matches!(LogValue::from("alice"), LogValue::Text(_)));
/// assert!(matches!(LogValue::from(vec![0xffu8]), LogValue::Bytes(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub enum LogValue<'a> {
    /// Absent argument (`None`, SQL NULL)
    #[default]
    Null,
    /// Date and time, printed without zone or fraction
    Timestamp(NaiveDateTime),
    /// Raw binary payload
    Bytes(Cow<'a, [u8]>),
    /// Custom type that knows its own scalar form
    Valuer(&'a dyn SqlValuer),
    /// Number or boolean, printed unquoted
    Primitive(Primitive),
    /// Anything else, printed quoted
    Text(Cow<'a, str>),
}

impl<'a> LogValue<'a> {
    /// Wrap a self-describing scalar.
    pub fn valuer(value: &'a dyn SqlValuer) -> Self {
        LogValue::Valuer(value)
    }

    /// Generic textual form of any displayable value.
    pub fn display(value: impl fmt::Display) -> LogValue<'static> {
        LogValue::Text(Cow::Owned(value.to_string()))
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, LogValue::Null)
    }

    /// Detach from any borrowed data.
    ///
    /// A [`LogValue::Valuer`] is resolved immediately: its accessor result
    /// becomes [`LogValue::Text`], and a failing or empty accessor becomes
    /// [`LogValue::Null`]. Rendering the result yields the same text as
    /// rendering `self`.
    pub fn into_owned(self) -> LogValue<'static> {
        match self {
            LogValue::Null => LogValue::Null,
            LogValue::Timestamp(ts) => LogValue::Timestamp(ts),
            LogValue::Bytes(bytes) => LogValue::Bytes(Cow::Owned(bytes.into_owned())),
            LogValue::Valuer(valuer) => match valuer.value() {
                Ok(Some(value)) => LogValue::display(value),
                _ => LogValue::Null,
            },
            LogValue::Primitive(p) => LogValue::Primitive(p),
            LogValue::Text(text) => LogValue::Text(Cow::Owned(text.into_owned())),
        }
    }
}

impl PartialEq for LogValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LogValue::Null, LogValue::Null) => true,
            (LogValue::Timestamp(a), LogValue::Timestamp(b)) => a == b,
            (LogValue::Bytes(a), LogValue::Bytes(b)) => a == b,
            (LogValue::Valuer(a), LogValue::Valuer(b)) => std::ptr::addr_eq(*a, *b),
            (LogValue::Primitive(a), LogValue::Primitive(b)) => a == b,
            (LogValue::Text(a), LogValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// Numeric and boolean scalars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Primitive {
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Kept apart from `Float` so `0.1f32` prints as `0.1`
    Float32(f32),
    Bool(bool),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Int(i) => write!(f, "{i}"),
            Primitive::UInt(u) => write!(f, "{u}"),
            Primitive::Float(v) => write!(f, "{v}"),
            Primitive::Float32(v) => write!(f, "{v}"),
            Primitive::Bool(b) => write!(f, "{b}"),
        }
    }
}
