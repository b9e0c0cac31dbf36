//! The rendered pieces of one log line

use chrono::NaiveDateTime;
use colored::Colorize;
use smallvec::SmallVec;
use std::fmt;

use crate::elapsed::Elapsed;
use crate::render::TIMESTAMP_FORMAT;

/// How a sink wants segments turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// No escape codes
    #[default]
    Plain,
    /// Yellow timestamp and bold cyan elapsed banner, subject to `colored`'s
    /// terminal and `NO_COLOR` detection
    Ansi,
}

/// One piece of a log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// When the line was written
    Timestamp(NaiveDateTime),
    /// How long the query ran
    Elapsed(Elapsed),
    /// The SQL with arguments inlined
    Sql(String),
}

impl Segment {
    pub fn render(&self, style: Style) -> String {
        match (self, style) {
            (Segment::Timestamp(ts), Style::Plain) => {
                format!("\n[{}]", ts.format(TIMESTAMP_FORMAT))
            }
            (Segment::Timestamp(ts), Style::Ansi) => {
                let banner = format!("[{}]", ts.format(TIMESTAMP_FORMAT));
                format!("\n{}", banner.yellow())
            }
            (Segment::Elapsed(elapsed), Style::Plain) => format!(" [{elapsed}] "),
            (Segment::Elapsed(elapsed), Style::Ansi) => {
                format!(" {} ", format!("[{elapsed}]").cyan().bold())
            }
            (Segment::Sql(sql), _) => sql.clone(),
        }
    }
}

/// Ordered segments of one log line: timestamp banner, elapsed banner, SQL.
///
/// An empty value means nothing was formatted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplaySegments(SmallVec<[Segment; 3]>);

impl DisplaySegments {
    pub const fn empty() -> Self {
        Self(SmallVec::new_const())
    }

    pub fn from_parts(timestamp: NaiveDateTime, elapsed: Elapsed, sql: String) -> Self {
        Self(SmallVec::from_buf([
            Segment::Timestamp(timestamp),
            Segment::Elapsed(elapsed),
            Segment::Sql(sql),
        ]))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.iter().find_map(|segment| match segment {
            Segment::Timestamp(ts) => Some(*ts),
            _ => None,
        })
    }

    pub fn elapsed(&self) -> Option<Elapsed> {
        self.iter().find_map(|segment| match segment {
            Segment::Elapsed(elapsed) => Some(*elapsed),
            _ => None,
        })
    }

    pub fn sql(&self) -> Option<&str> {
        self.iter().find_map(|segment| match segment {
            Segment::Sql(sql) => Some(sql.as_str()),
            _ => None,
        })
    }

    /// Concatenate every segment.
    ///
    /// `Style::Plain` yields `\n[<timestamp>] [<ms>ms] <sql>`.
    pub fn render(&self, style: Style) -> String {
        self.iter().map(|segment| segment.render(style)).collect()
    }
}

impl fmt::Display for DisplaySegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Style::Plain))
    }
}

impl<'a> IntoIterator for &'a DisplaySegments {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn sample() -> DisplaySegments {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        DisplaySegments::from_parts(
            ts,
            Elapsed::from(Duration::from_micros(3_456)),
            "SELECT 1".to_string(),
        )
    }

    #[test]
    fn plain_layout() {
        assert_eq!(
            sample().render(Style::Plain),
            "\n[2024-05-06 07:08:09] [3.45ms] SELECT 1"
        );
        assert_eq!(sample().to_string(), sample().render(Style::Plain));
    }

    #[test]
    fn ansi_keeps_text() {
        let line = sample().render(Style::Ansi);
        assert!(line.starts_with('\n'));
        assert!(line.contains("[2024-05-06 07:08:09]"));
        assert!(line.contains("[3.45ms]"));
        assert!(line.ends_with(" SELECT 1"));
    }

    #[test]
    fn accessors() {
        let segments = sample();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments.sql(), Some("SELECT 1"));
        assert_eq!(
            segments.elapsed().map(|e| e.to_string()).as_deref(),
            Some("3.45ms")
        );
        assert!(segments.timestamp().is_some());
    }

    #[test]
    fn empty_renders_nothing() {
        let segments = DisplaySegments::empty();
        assert!(segments.is_empty());
        assert_eq!(segments.render(Style::Ansi), "");
        assert_eq!(segments.sql(), None);
    }
}
