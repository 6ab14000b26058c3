//! A pinned `Clock` so clock-derived seeds are reproducible.

use chrono::{DateTime, TimeZone, Utc};
use seedling_core::clock::Clock;

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to `seconds` + `nanos` after the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if the instant is outside chrono's representable range.
    #[must_use]
    pub fn at_unix(seconds: i64, nanos: u32) -> Self {
        Self(
            Utc.timestamp_opt(seconds, nanos)
                .single()
                .expect("FixedClock::at_unix requires a representable instant"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
