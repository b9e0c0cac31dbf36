//! Replay command implementation
//!
//! Reads JSON lines of recorded query events and logs each one:
//!
//! ```text
//! {"sql": "SELECT * FROM users WHERE id = $1", "args": [42], "elapsed_ms": 1.5}
//! ```

use serde::Deserialize;
use sqlog_core::{Clock, LogValue, QueryLogger};
use std::io::BufRead;

use crate::error::CliError;
use crate::literal::json_arg;
use crate::output;

/// One recorded query event
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayEvent {
    pub sql: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
    #[serde(default)]
    pub elapsed_ms: f64,
}

/// Outcome of a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub logged: usize,
    pub skipped: usize,
}

/// Run the replay command over any line source
pub fn run<C: Clock + Clone, R: BufRead>(
    logger: &QueryLogger<C>,
    input: R,
) -> Result<ReplayStats, CliError> {
    let mut stats = ReplayStats::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|e| CliError::IoError(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }

        let event: ReplayEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                eprintln!("{}", output::warn_line(&format!("line {}: {e}", index + 1)));
                tracing::debug!(line = index + 1, error = %e, "skipping malformed replay event");
                stats.skipped += 1;
                continue;
            }
        };

        let values: Vec<LogValue<'static>> = event.args.into_iter().map(json_arg).collect();
        let (logger, start) = super::logger_for(logger, event.elapsed_ms);
        logger.log(start, &event.sql, &values);
        stats.logged += 1;
    }

    Ok(stats)
}
