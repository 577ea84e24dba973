//! Time sources for bounded lifetimes.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Epoch shared by every MonotonicClock in the process, captured on first use.
// All wrappers must measure against the same epoch so birth times are
// comparable across wrappers.
static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// A monotonic time source.
///
/// Implementations report elapsed time since their epoch. Reads must be
/// cheap, never block, and be safe to perform concurrently.
pub trait Clock {
    /// Elapsed time since the clock's epoch.
    fn now(&self) -> Duration;
}

/// The default process-wide monotonic clock.
///
/// Every instance reads the same lazily-captured epoch, so birth timestamps
/// taken through any `MonotonicClock` are mutually comparable.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Create a new handle to the shared clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        EPOCH.elapsed()
    }
}

/// A hand-driven clock for deterministic tests.
///
/// Clones share the same underlying reading, so a wrapper constructed with
/// one handle observes `advance`/`set` calls made through another.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vigil::bounded::{BoundedLifetime, Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let spark = BoundedLifetime::with_clock("spark", Duration::from_secs(5), clock.clone());
///
/// clock.advance(Duration::from_secs(6));
/// assert!(spark.dead());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    elapsed: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Create a clock at elapsed time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        *self.elapsed.lock() += delta;
    }

    /// Set the clock to an absolute elapsed time.
    pub fn set(&self, elapsed: Duration) {
        *self.elapsed.lock() = elapsed;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.elapsed.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_never_goes_backward() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn monotonic_clocks_share_an_epoch() {
        let a = MonotonicClock::new().now();
        let b = MonotonicClock::new().now();
        // separate instances read the same epoch
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_advances_on_demand() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);

        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now(), Duration::from_secs(2));

        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_millis(2500));
    }

    #[test]
    fn manual_clock_set_is_absolute() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(10));

        clock.set(Duration::from_secs(3));
        assert_eq!(clock.now(), Duration::from_secs(3));
    }

    #[test]
    fn manual_clock_clones_share_state() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }
}
