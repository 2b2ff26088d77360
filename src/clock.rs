//! Sources of "now" for [`Date::now_from`](crate::Date::now_from).
//!
//! [`Date::now`](crate::Date::now) reads the host's local timezone, which is
//! process-wide state. Passing a [`Clock`] instead keeps callers and tests
//! independent of it.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

/// Provides the current instant, together with the zone it should be read in.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system clock, read in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// The system clock, read in an explicit timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZonedClock<Tz> {
    zone: Tz,
}

impl<Tz: TimeZone> ZonedClock<Tz> {
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }
}

impl<Tz> Clock for ZonedClock<Tz>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.zone).fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self(instant.fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
