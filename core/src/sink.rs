//! Destinations for rendered query log lines

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::error::SinkError;
use crate::segments::{DisplaySegments, Style};

/// Receives one formatted line per logged query.
pub trait Sink: Send + Sync {
    fn write(&self, segments: &DisplaySegments) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, segments: &DisplaySegments) -> Result<(), SinkError> {
        (**self).write(segments)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, segments: &DisplaySegments) -> Result<(), SinkError> {
        (**self).write(segments)
    }
}

/// Standard stream a [`ConsoleSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Console output, colored by default.
///
/// Each line is written as `prefix + segments + "\n"`. The default prefix is
/// `"\r\n"`.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    target: ConsoleTarget,
    style: Style,
    prefix: Cow<'static, str>,
}

impl ConsoleSink {
    pub const DEFAULT_PREFIX: &'static str = "\r\n";

    pub const fn new(target: ConsoleTarget) -> Self {
        Self {
            target,
            style: Style::Ansi,
            prefix: Cow::Borrowed(Self::DEFAULT_PREFIX),
        }
    }

    pub const fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub const fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn style(&self) -> Style {
        self.style
    }

    fn line(&self, segments: &DisplaySegments) -> String {
        let mut line = String::from(self.prefix.as_ref());
        line.push_str(&segments.render(self.style));
        line.push('\n');
        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, segments: &DisplaySegments) -> Result<(), SinkError> {
        let line = self.line(segments);
        match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            ConsoleTarget::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }
}

/// Plain-text lines to any writer (a file, a buffer, a socket).
///
/// Writes are serialized through a mutex and flushed after every line.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|_| SinkError::Poisoned)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, segments: &DisplaySegments) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writeln!(writer, "{}", segments.render(Style::Plain))?;
        writer.flush()?;
        Ok(())
    }
}

/// Forwards each line to `tracing` as an `info` event on target `sqlog::query`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&self, segments: &DisplaySegments) -> Result<(), SinkError> {
        let elapsed_ms = segments
            .elapsed()
            .map(|e| e.as_millis_f64())
            .unwrap_or_default();
        let sql = segments.sql().unwrap_or_default();
        tracing::info!(target: "sqlog::query", elapsed_ms, sql, "query");
        Ok(())
    }
}

/// Drops everything. Backs a disabled logger.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DiscardSink;

impl Sink for DiscardSink {
    fn write(&self, _segments: &DisplaySegments) -> Result<(), SinkError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elapsed::Elapsed;
    use chrono::NaiveDate;
    use std::time::Duration;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn sample(sql: &str) -> DisplaySegments {
        let ts = NaiveDate::from_ymd_opt(2021, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        DisplaySegments::from_parts(ts, Elapsed::from(Duration::from_millis(1)), sql.to_string())
    }

    #[test]
    fn writer_sink_appends_plain_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.write(&sample("SELECT 1")).unwrap();
        sink.write(&sample("SELECT 2")).unwrap();

        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            "\n[2021-06-01 09:00:00] [1.00ms] SELECT 1\n\n[2021-06-01 09:00:00] [1.00ms] SELECT 2\n"
        );
    }

    #[test]
    fn console_line_has_prefix_and_newline() {
        let sink = ConsoleSink::stdout().with_style(Style::Plain);
        assert_eq!(
            sink.line(&sample("SELECT 1")),
            "\r\n\n[2021-06-01 09:00:00] [1.00ms] SELECT 1\n"
        );

        let bare = ConsoleSink::stderr()
            .with_style(Style::Plain)
            .with_prefix("");
        assert!(bare.line(&sample("x")).starts_with("\n["));
    }

    #[test]
    fn writer_errors_surface() {
        struct Refuse;

        impl Write for Refuse {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = WriterSink::new(Refuse);
        assert!(matches!(
            sink.write(&sample("SELECT 1")),
            Err(SinkError::Io(_))
        ));
    }

    #[derive(Clone, Default)]
    struct Events(Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>);

    #[derive(Default)]
    struct Fields(Vec<(String, String)>);

    impl Visit for Fields {
        fn record_f64(&mut self, field: &Field, value: f64) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl<S: Subscriber> Layer<S> for Events {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            self.0
                .lock()
                .unwrap()
                .push((event.metadata().target().to_string(), fields.0));
        }
    }

    #[test]
    fn tracing_sink_records_sql_and_elapsed() {
        let events = Events::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.write(&sample("SELECT 1")).unwrap();
        });

        let events = events.0.lock().unwrap();
        let (target, fields) = events
            .iter()
            .find(|(target, _)| target == "sqlog::query")
            .expect("query event");
        assert_eq!(target, "sqlog::query");

        let field = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(field("sql"), Some("SELECT 1"));
        assert_eq!(field("elapsed_ms"), Some("1"));
        assert_eq!(field("message"), Some("query"));
    }

    #[test]
    fn discard_accepts_lines() {
        assert!(DiscardSink.write(&DisplaySegments::empty()).is_ok());
        assert!(DiscardSink.write(&sample("SELECT 1")).is_ok());
    }
}
