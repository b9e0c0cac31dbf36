use std::fmt;
use std::time::{Duration, Instant};

/// Time spent executing a query.
///
/// Displays as milliseconds with exactly two decimals (`12.34ms`). The value
/// is truncated to 10µs resolution, never rounded up.
///
/// ```
/// use std::time::Duration;
/// use sqlog_core::elapsed::Elapsed;
///
/// assert_eq!(Elapsed::from(Duration::from_micros(1_239)).to_string(), "1.23ms");
/// assert_eq!(Elapsed::from(Duration::from_secs(2)).to_string(), "2000.00ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elapsed(Duration);

impl Elapsed {
    /// Time from `start` to `now`; zero if `now` is earlier.
    #[inline]
    pub fn between(start: Instant, now: Instant) -> Self {
        Self(now.saturating_duration_since(start))
    }

    #[inline]
    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    /// Milliseconds at display resolution.
    pub fn as_millis_f64(&self) -> f64 {
        self.hundredths_of_ms() as f64 / 100.0
    }

    #[inline]
    fn hundredths_of_ms(&self) -> u128 {
        self.0.as_nanos() / 10_000
    }
}

impl From<Duration> for Elapsed {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = self.hundredths_of_ms();
        write!(f, "{}.{:02}ms", hundredths / 100, hundredths % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_two_decimals() {
        assert_eq!(Elapsed::default().to_string(), "0.00ms");
        assert_eq!(
            Elapsed::from(Duration::from_nanos(9_999)).to_string(),
            "0.00ms"
        );
        assert_eq!(
            Elapsed::from(Duration::from_nanos(10_000)).to_string(),
            "0.01ms"
        );
        assert_eq!(
            Elapsed::from(Duration::from_micros(500)).to_string(),
            "0.50ms"
        );
        assert_eq!(
            Elapsed::from(Duration::from_millis(7)).to_string(),
            "7.00ms"
        );
        assert_eq!(
            Elapsed::from(Duration::from_secs(3_600)).to_string(),
            "3600000.00ms"
        );
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(
            Elapsed::from(Duration::from_nanos(1_999_999)).to_string(),
            "1.99ms"
        );
    }

    #[test]
    fn never_negative() {
        let start = Instant::now();
        let later = start + Duration::from_millis(5);
        assert_eq!(Elapsed::between(later, start), Elapsed::default());
        assert_eq!(
            Elapsed::between(start, later).as_duration(),
            Duration::from_millis(5)
        );
    }

    #[test]
    fn millis_as_float() {
        let elapsed = Elapsed::from(Duration::from_micros(12_345));
        assert!((elapsed.as_millis_f64() - 12.34).abs() < 1e-9);
    }
}
