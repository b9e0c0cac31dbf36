//! Clock readings used by the formatter

use chrono::{Local, NaiveDateTime};
use std::time::Instant;

/// Source of "now".
///
/// `now` measures elapsed time; `wall` stamps the log line.
pub trait Clock {
    fn now(&self) -> Instant;
    fn wall(&self) -> NaiveDateTime;
}

/// The process clock, with the banner in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one reading. Useful for tests and for replaying
/// recorded events.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: Instant,
    wall: NaiveDateTime,
}

impl FixedClock {
    pub const fn new(now: Instant, wall: NaiveDateTime) -> Self {
        Self { now, wall }
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> Instant {
        self.now
    }

    #[inline]
    fn wall(&self) -> NaiveDateTime {
        self.wall
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn wall(&self) -> NaiveDateTime {
        (**self).wall()
    }
}
