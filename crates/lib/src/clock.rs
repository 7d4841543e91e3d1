//! Time provider abstraction
//!
//! The `now` token accepted by time parsing is resolved through a [`Clock`],
//! so production code reads real system time while tests pin it.
//!
//! # Example
//!
//! ```
//! use arbor::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let now = clock.now();
//! assert!(clock.now_millis() > 0);
//! # let _ = now;
//! ```

use std::fmt::Debug;

use chrono::{DateTime, TimeZone, Utc};

#[cfg(any(test, feature = "testing"))]
use std::sync::Mutex;

/// A time provider for resolving the current timestamp.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current time as milliseconds since Unix epoch.
    fn now_millis(&self) -> u64;

    /// Returns the current time as a UTC timestamp.
    ///
    /// Derived from [`Clock::now_millis`].
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.now_millis() as i64)
            .single()
            .unwrap_or_default()
    }
}

/// Production clock using real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock pinned to a fixed instant.
///
/// Unlike [`SystemClock`] the value only changes through [`FixedClock::set`]
/// and [`FixedClock::advance`].
///
/// ```
/// use arbor::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1000);
/// assert_eq!(clock.now_millis(), 1000);
/// clock.advance(500);
/// assert_eq!(clock.now_millis(), 1500);
/// ```
#[cfg(any(test, feature = "testing"))]
pub struct FixedClock {
    millis: Mutex<u64>,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Create a new fixed clock with the given time in milliseconds.
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Mutex::new(millis),
        }
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, ms: u64) {
        *self.millis.lock().unwrap() += ms;
    }

    /// Set the clock to a specific time in milliseconds.
    pub fn set(&self, ms: u64) {
        *self.millis.lock().unwrap() = ms;
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        *self.millis.lock().unwrap()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00 UTC
        Self::new(1704067200000)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Debug for FixedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedClock")
            .field("millis", &*self.millis.lock().unwrap())
            .finish()
    }
}
