//! CLI command implementations
//!
//! Each command module implements a specific sqlog CLI command.

pub mod format;
pub mod replay;

use chrono::Local;
use sqlog_core::{Clock, FixedClock, QueryLogger};
use std::time::{Duration, Instant};

/// Pin a logger's clock so the query appears to have run for `elapsed_ms`.
///
/// Negative, infinite or NaN durations count as zero.
pub(crate) fn logger_for<C: Clock>(
    logger: &QueryLogger<C>,
    elapsed_ms: f64,
) -> (QueryLogger<FixedClock>, Instant)
where
    C: Clone,
{
    let elapsed = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        Duration::from_nanos((elapsed_ms * 1_000_000.0).round() as u64)
    } else {
        Duration::ZERO
    };
    let start = Instant::now();
    let clock = FixedClock::new(start + elapsed, Local::now().naive_local());
    (logger.clone().with_clock(clock), start)
}
