//! Gate and sink wiring
//!
//! A [`QueryLogger`] is built once at startup and handed to the code that runs
//! queries. Its configuration never changes afterwards, so checking the gate
//! is a plain field read and the logger can be cloned into every task.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::clock::{Clock, SystemClock};
use crate::formatter::{LogField, QueryLogFormatter};
use crate::segments::DisplaySegments;
use crate::sink::{ConsoleSink, DiscardSink, Sink};
use crate::value::LogValue;

/// Whether to log, and where.
#[derive(Clone)]
pub struct LogConfig {
    enabled: bool,
    sink: Arc<dyn Sink>,
}

impl LogConfig {
    /// Enabled, writing to `sink`.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::shared(Arc::new(sink))
    }

    /// Enabled, writing to a sink that is also held elsewhere.
    pub fn shared(sink: Arc<dyn Sink>) -> Self {
        Self {
            enabled: true,
            sink,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            sink: Arc::new(DiscardSink),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl fmt::Debug for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogConfig")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Formats query events and hands them to the configured sink.
///
/// Sink failures are reported through `tracing` and otherwise ignored; the
/// next call logs normally.
///
/// ```
/// use std::time::Instant;
/// use sqlog_core::logger::{LogConfig, QueryLogger};
/// use sqlog_core::sink::WriterSink;
/// use sqlog_core::value::LogValue;
///
/// let logger = QueryLogger::new(LogConfig::new(WriterSink::new(std::io::sink())));
/// assert!(logger.is_enabled());
/// logger.log(Instant::now(), "DELETE FROM sessions WHERE id = $1", &[LogValue::from(9)]);
///
/// assert!(!QueryLogger::disabled().is_enabled());
/// ```
#[derive(Debug, Clone)]
pub struct QueryLogger<C = SystemClock> {
    config: LogConfig,
    formatter: QueryLogFormatter<C>,
}

impl QueryLogger<SystemClock> {
    pub fn new(config: LogConfig) -> Self {
        Self {
            config,
            formatter: QueryLogFormatter::new(),
        }
    }

    /// A logger that never formats anything.
    pub fn disabled() -> Self {
        Self::new(LogConfig::disabled())
    }

    /// Enabled, writing colored lines to stdout.
    pub fn console() -> Self {
        Self::new(LogConfig::new(ConsoleSink::stdout()))
    }
}

impl Default for QueryLogger<SystemClock> {
    fn default() -> Self {
        Self::disabled()
    }
}

impl<C: Clock> QueryLogger<C> {
    /// Swap the clock, keeping the configuration.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> QueryLogger<C2> {
        QueryLogger {
            config: self.config,
            formatter: QueryLogFormatter::with_clock(clock),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn formatter(&self) -> &QueryLogFormatter<C> {
        &self.formatter
    }

    /// Log one query event if the gate is open.
    pub fn log(&self, start: Instant, sql: &str, args: &[LogValue<'_>]) {
        if !self.is_enabled() {
            return;
        }
        let segments = self.formatter.format(start, sql, args);
        self.emit(&segments);
    }

    /// Log a positional field list if the gate is open.
    ///
    /// Field lists that format to nothing are not written.
    pub fn print(&self, fields: &[LogField<'_>]) {
        if !self.is_enabled() {
            return;
        }
        let segments = self.formatter.format_fields(fields);
        if segments.is_empty() {
            return;
        }
        self.emit(&segments);
    }

    fn emit(&self, segments: &DisplaySegments) {
        if let Err(err) = self.config.sink.write(segments) {
            crate::sqlog_trace_sink_error!(err);
        }
    }
}
