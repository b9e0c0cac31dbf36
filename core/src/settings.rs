//! Declarative logger configuration
//!
//! With the `serde` feature these types deserialize from a config file:
//!
//! ```toml
//! enabled = true
//! color = "never"
//!
//! [sink]
//! kind = "file"
//! path = "queries.log"
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::logger::{LogConfig, QueryLogger};
use crate::segments::Style;
use crate::sink::{ConsoleSink, Sink, TracingSink, WriterSink};

/// Whether and where to log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LogSettings {
    pub enabled: bool,
    pub sink: SinkSettings,
    pub color: ColorMode,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: SinkSettings::default(),
            color: ColorMode::default(),
        }
    }
}

/// Destination for log lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SinkSettings {
    #[default]
    Stdout,
    Stderr,
    /// Plain text appended (or truncated, with `append = false`) to a file
    File {
        path: PathBuf,
        #[cfg_attr(feature = "serde", serde(default = "default_append"))]
        append: bool,
    },
    /// `info` events on target `sqlog::query`
    Tracing,
}

#[cfg(feature = "serde")]
fn default_append() -> bool {
    true
}

/// Color handling for console sinks. File and tracing sinks are always plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Color when `colored` decides the stream supports it
    #[default]
    Auto,
    /// Color unconditionally; callers must also force `colored`'s override
    Always,
    Never,
}

impl ColorMode {
    pub const fn style(self) -> Style {
        match self {
            ColorMode::Auto | ColorMode::Always => Style::Ansi,
            ColorMode::Never => Style::Plain,
        }
    }
}

impl LogSettings {
    /// Open the configured sink and build a logger.
    pub fn build(&self) -> Result<QueryLogger, ConfigError> {
        if !self.enabled {
            return Ok(QueryLogger::disabled());
        }
        let sink = self.open_sink()?;
        tracing::debug!(sink = ?self.sink, color = ?self.color, "sqlog logger configured");
        Ok(QueryLogger::new(LogConfig::shared(sink)))
    }

    fn open_sink(&self) -> Result<Arc<dyn Sink>, ConfigError> {
        let style = self.color.style();
        let sink: Arc<dyn Sink> = match &self.sink {
            SinkSettings::Stdout => Arc::new(ConsoleSink::stdout().with_style(style)),
            SinkSettings::Stderr => Arc::new(ConsoleSink::stderr().with_style(style)),
            SinkSettings::File { path, append } => {
                let mut options = OpenOptions::new();
                options.create(true);
                if *append {
                    options.append(true);
                } else {
                    options.write(true).truncate(true);
                }
                let file = options.open(path).map_err(|source| ConfigError::Open {
                    path: path.clone(),
                    source,
                })?;
                Arc::new(WriterSink::new(file))
            }
            SinkSettings::Tracing => Arc::new(TracingSink),
        };
        Ok(sink)
    }
}
