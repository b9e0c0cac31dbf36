//! # sqlog
//!
//! Readable, single-line SQL query logs with the bound arguments inlined.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use sqlog::prelude::*;
//!
//! let logger = QueryLogger::new(LogConfig::new(WriterSink::new(std::io::sink())));
//!
//! let start = Instant::now();
//! // ... run the query ...
//! logger.log(
//!     start,
//!     "SELECT * FROM users WHERE id = ? AND name = ?",
//!     &args![42, "alice"],
//! );
//! ```
//!
//! Produces a line like:
//!
//! ```text
//! [2024-01-15 10:30:00] [0.08ms] SELECT * FROM users WHERE id = 42 AND name = 'alice'
//! ```
//!
//! ## Argument Rendering
//!
//! | Argument                         | Rendered as                        |
//! |----------------------------------|------------------------------------|
//! | `None`                           | `NULL`                             |
//! | integers, floats, `bool`         | unquoted                           |
//! | chrono date/time values          | `'YYYY-MM-DD HH:MM:SS'`            |
//! | bytes                            | `'decoded text'` or `'<binary>'`   |
//! | [`SqlValuer`](value::SqlValuer)  | `'accessor result'` or `NULL`      |
//! | anything else                    | `'text'` (quotes are not escaped)  |
//!
//! ## Placeholders
//!
//! Templates containing `$1`, `$2`, ... are substituted by index; all other
//! templates have their `?` markers filled in order.
//!
//! ## Features
//!
//! | Feature        | Effect                                                 |
//! |----------------|--------------------------------------------------------|
//! | `serde`        | settings deserialization, `serde_json::Value` arguments |
//! | `uuid`         | `uuid::Uuid` arguments                                 |
//! | `rust-decimal` | `rust_decimal::Decimal` arguments                      |
//! | `time`         | `time` crate date/time arguments                       |
//! | `tracing`      | a debug event per formatted query                      |
//! | `profiling`    | puffin scopes around formatting                        |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use sqlog_types as types;

pub use sqlog_core::{
    ColorMode, ConfigError, DisplaySegments, DriverValue, Elapsed, LogConfig, LogField, LogSettings,
    LogValue, QueryLogFormatter, QueryLogger, Segment, Sink, SinkError, SinkSettings, SqlValuer,
    Style, ValuerError, args, clock, elapsed, error, formatter, logger, placeholder, render,
    segments, settings, sink, value,
};
pub use sqlog_types::PlaceholderStyle;

/// Prelude module for commonly used types
pub mod prelude {
    pub use sqlog_core::args;
    pub use sqlog_core::clock::{Clock, FixedClock, SystemClock};
    pub use sqlog_core::formatter::{LogField, QueryLogFormatter};
    pub use sqlog_core::logger::{LogConfig, QueryLogger};
    pub use sqlog_core::segments::{DisplaySegments, Style};
    pub use sqlog_core::sink::{ConsoleSink, Sink, TracingSink, WriterSink};
    pub use sqlog_core::value::{DriverValue, LogValue, SqlValuer};
    pub use sqlog_types::PlaceholderStyle;
}
