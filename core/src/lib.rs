//! Core of sqlog: turns a query event into one readable log line.
//!
//! A query event is a start [`Instant`](std::time::Instant), a SQL template
//! with `?` or `$n` placeholders, and the bound arguments. The
//! [`QueryLogFormatter`] inlines the arguments into the template and adds a
//! timestamp and elapsed-time banner:
//!
//! ```text
//! [2024-01-15 10:30:00] [1.25ms] SELECT * FROM users WHERE id = 42 AND name = 'alice'
//! ```
//!
//! A [`QueryLogger`] pairs the formatter with an on/off gate and a [`Sink`].

pub mod clock;
pub mod elapsed;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod placeholder;
pub mod profiling;
pub mod render;
pub mod segments;
pub mod settings;
pub mod sink;
pub mod trace;
pub mod value;

// Re-export key types and traits
pub use clock::{Clock, FixedClock, SystemClock};
pub use elapsed::Elapsed;
pub use error::{ConfigError, SinkError, ValuerError};
pub use formatter::{LogField, QueryLogFormatter};
pub use logger::{LogConfig, QueryLogger};
pub use segments::{DisplaySegments, Segment, Style};
pub use settings::{ColorMode, LogSettings, SinkSettings};
pub use sink::{ConsoleSink, ConsoleTarget, Sink, TracingSink, WriterSink};
pub use value::{DriverValue, LogValue, Primitive, SqlValuer};

/// Collect arguments of mixed types into a `[LogValue; N]`.
///
/// ```
/// use sqlog_core::{args, LogValue};
///
/// let name = String::from("alice");
/// let values = args![1, &name, None::<i32>, true];
/// assert_eq!(values.len(), 4);
/// assert_eq!(values[2], LogValue::Null);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::value::LogValue::from($value)),*]
    };
}
