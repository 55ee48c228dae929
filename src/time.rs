use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::data::ConfigError;

/// Wall-clock source. Injected wherever "now" matters so that searches
/// are reproducible under test.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The host's clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzmeet_libs::time::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
/// let clock = FixedClock(instant);
///
/// assert_eq!(clock.now_utc(), instant);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Civil-time capability: what a UTC instant looks like on a named
/// timezone's wall clock. The slot search only ever talks to this trait,
/// so the timezone-data backend can be swapped without touching it.
pub trait TimeZoneClock {
    /// The locally observed hour in `0..=23`, with whatever standard or
    /// daylight-saving offset is in effect at `instant`. Minutes are
    /// discarded.
    fn local_hour(&self, instant: DateTime<Utc>, timezone_id: &str) -> Result<u32, ConfigError>;

    /// Medium date and short time on that timezone's wall clock, for
    /// presentation only.
    fn format_local(&self, instant: DateTime<Utc>, timezone_id: &str)
        -> Result<String, ConfigError>;
}

/// `TimeZoneClock` backed by the IANA timezone database that `chrono-tz`
/// compiles in.
#[derive(Clone, Copy, Debug, Default)]
pub struct TzDatabaseClock;

fn resolve(timezone_id: &str) -> Result<Tz, ConfigError> {
    timezone_id
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(timezone_id.to_string()))
}

impl TimeZoneClock for TzDatabaseClock {
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tzmeet_libs::time::{TimeZoneClock, TzDatabaseClock};
    ///
    /// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
    ///
    /// // 06:00 UTC is 11:30 in Kolkata; the half hour is dropped
    /// assert_eq!(TzDatabaseClock.local_hour(instant, "Asia/Kolkata"), Ok(11));
    /// assert_eq!(TzDatabaseClock.local_hour(instant, "America/New_York"), Ok(1));
    ///
    /// assert!(TzDatabaseClock.local_hour(instant, "Invalid/Zone").is_err());
    /// ```
    fn local_hour(&self, instant: DateTime<Utc>, timezone_id: &str) -> Result<u32, ConfigError> {
        let tz = resolve(timezone_id)?;

        Ok(instant.with_timezone(&tz).hour())
    }

    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tzmeet_libs::time::{TimeZoneClock, TzDatabaseClock};
    ///
    /// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
    ///
    /// assert_eq!(
    ///     TzDatabaseClock.format_local(instant, "Asia/Kolkata").unwrap(),
    ///     "Jan 1, 2024, 11:30 AM"
    /// );
    /// ```
    fn format_local(
        &self,
        instant: DateTime<Utc>,
        timezone_id: &str,
    ) -> Result<String, ConfigError> {
        let tz = resolve(timezone_id)?;

        Ok(instant
            .with_timezone(&tz)
            .format("%b %-d, %Y, %-l:%M %p")
            .to_string())
    }
}
