//! Resolution of an instant to its Nepal-local civil date.
//!
//! The converter only ever sees the resolved [`NaiveDate`]; wall-clock reads
//! and time-zone lookups stay behind [`Clock`] and [`LocalDateResolver`].

use chrono::{DateTime, NaiveDate, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// IANA name of the Nepal time zone.
pub const NEPAL_TZ_NAME: &str = "Asia/Kathmandu";

/// Nepal's standard offset from UTC, +05:45, in seconds.
pub const NEPAL_UTC_OFFSET_SECS: i32 = 5 * 3600 + 45 * 60;

/// Resolves an instant to the civil date observed at that instant.
pub trait LocalDateResolver {
    /// Returns the local calendar date of `instant`, or `None` if shifting
    /// it by the local offset leaves chrono's representable range.
    fn local_date(&self, instant: DateTime<Utc>) -> Option<NaiveDate>;
}

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The operating-system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Nepal-local date resolution.
///
/// Uses the `Asia/Kathmandu` zone from the bundled time-zone database. When
/// the zone cannot be resolved, or when built with [`NepalZone::fixed`],
/// the fixed +05:45 offset is applied instead.
#[derive(Debug, Clone, Copy)]
pub struct NepalZone {
    tz: Option<Tz>,
}

impl NepalZone {
    /// Resolves through the time-zone database, falling back to +05:45.
    pub fn new() -> Self {
        let tz = match NEPAL_TZ_NAME.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(e) => {
                tracing::warn!(zone = NEPAL_TZ_NAME, error = %e, "time zone unavailable, using fixed +05:45 offset");
                None
            }
        };
        Self { tz }
    }

    /// Always applies the fixed +05:45 offset.
    pub fn fixed() -> Self {
        Self { tz: None }
    }

    /// Returns `true` if this resolver uses the fixed-offset fallback.
    pub fn is_fixed(&self) -> bool {
        self.tz.is_none()
    }
}

impl Default for NepalZone {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalDateResolver for NepalZone {
    fn local_date(&self, instant: DateTime<Utc>) -> Option<NaiveDate> {
        let offset_secs = match self.tz {
            Some(tz) => tz
                .offset_from_utc_datetime(&instant.naive_utc())
                .fix()
                .local_minus_utc(),
            None => NEPAL_UTC_OFFSET_SECS,
        };
        shifted_date(instant, offset_secs)
    }
}

fn shifted_date(instant: DateTime<Utc>, offset_secs: i32) -> Option<NaiveDate> {
    instant
        .naive_utc()
        .checked_add_signed(TimeDelta::seconds(i64::from(offset_secs)))
        .map(|local| local.date())
}
