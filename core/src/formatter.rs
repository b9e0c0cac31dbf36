//! The query log formatter
//!
//! [`QueryLogFormatter::format`] is total: every input produces a line, and
//! malformed input degrades to `NULL`, `'<binary>'` or untouched template text.

use compact_str::CompactString;
use smallvec::SmallVec;
use std::time::Instant;

use crate::clock::{Clock, SystemClock};
use crate::elapsed::Elapsed;
use crate::placeholder::substitute;
use crate::render::render_value;
use crate::segments::DisplaySegments;
use crate::value::LogValue;

/// One positional field of an untyped log call.
///
/// See [`QueryLogFormatter::format_fields`].
#[derive(Debug, Clone)]
pub enum LogField<'a> {
    /// When the query started
    Start(Instant),
    /// The SQL template
    Sql(&'a str),
    /// Bound arguments in order
    Args(&'a [LogValue<'a>]),
}

/// Turns a query event into [`DisplaySegments`].
///
/// Holds nothing but a clock, so one formatter can be shared freely between
/// threads.
///
/// ```
/// use std::time::{Duration, Instant};
/// use chrono::NaiveDate;
/// use sqlog_core::clock::FixedClock;
/// use sqlog_core::formatter::QueryLogFormatter;
/// use sqlog_core::value::LogValue;
///
/// let start = Instant::now();
/// let wall = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let clock = FixedClock::new(start + Duration::from_micros(1_500), wall);
/// let formatter = QueryLogFormatter::with_clock(clock);
///
/// let line = formatter.format(start, "SELECT * FROM t WHERE id = ?", &[LogValue::from(42)]);
/// assert_eq!(line.to_string(), "\n[2024-01-01 12:00:00] [1.50ms] SELECT * FROM t WHERE id = 42");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryLogFormatter<C = SystemClock> {
    clock: C,
}

impl QueryLogFormatter<SystemClock> {
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> QueryLogFormatter<C> {
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Format one query event.
    pub fn format(&self, start: Instant, sql: &str, args: &[LogValue<'_>]) -> DisplaySegments {
        crate::sqlog_profile_function!();

        let wall = self.clock.wall();
        let elapsed = Elapsed::between(start, self.clock.now());

        let rendered: SmallVec<[CompactString; 8]> = {
            crate::sqlog_profile_scope!("sqlog", "render_values");
            args.iter().map(render_value).collect()
        };
        let sql = {
            crate::sqlog_profile_scope!("sqlog", "substitute");
            substitute(sql, &rendered)
        };
        crate::sqlog_trace_query!(&sql, args.len());

        DisplaySegments::from_parts(wall, elapsed, sql)
    }

    /// Format a positional field list: `[Start, Sql]` or `[Start, Sql, Args, ..]`.
    ///
    /// Anything shorter, or fields in the wrong positions, produce an empty
    /// result rather than an error. Fields after `Args` are ignored.
    pub fn format_fields(&self, fields: &[LogField<'_>]) -> DisplaySegments {
        match fields {
            [LogField::Start(start), LogField::Sql(sql)] => self.format(*start, sql, &[]),
            [LogField::Start(start), LogField::Sql(sql), LogField::Args(args), ..] => {
                self.format(*start, sql, args)
            }
            _ => DisplaySegments::empty(),
        }
    }
}
