//! Tracing utilities for query log observability.
//!
//! Enable the `tracing` feature to emit a debug event for every formatted
//! query. The macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event with the rendered SQL and argument count.
///
/// ```ignore
/// sqlog_trace_query!(&sql, args.len());
/// ```
#[macro_export]
macro_rules! sqlog_trace_query {
    ($sql:expr, $arg_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(sql = %$sql, args = $arg_count, "sqlog.query");
    };
}

/// Emit a warn-level tracing event when a sink rejects a line.
#[macro_export]
macro_rules! sqlog_trace_sink_error {
    ($err:expr) => {
        ::tracing::warn!(error = %$err, "sqlog.sink: failed to write query log");
    };
}
