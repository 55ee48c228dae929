use chrono::{DateTime, Days, NaiveTime, TimeZone, Utc};
use itertools::iproduct;
use log::{debug, trace};

use crate::data::{ConfigError, Participant, WorkingHours};
use crate::time::{Clock, TimeZoneClock, TzDatabaseClock};

/// Days scanned when the caller does not say otherwise.
pub const DEFAULT_MAX_DAYS: u64 = 7;

/// First and last UTC hour ever proposed as a candidate. Slots outside
/// 06:00..=20:00 UTC are never offered, even when some timezone
/// combination would only work there.
pub const SCAN_START_HOUR_UTC: u32 = 6;
pub const SCAN_END_HOUR_UTC: u32 = 20;

/// Exhaustive search for the earliest hour-aligned UTC instant at which
/// every participant's local hour falls inside the working-hours window.
///
/// The configuration is read-only for the lifetime of the search; each
/// call to [`find_earliest`](SlotSearch::find_earliest) is a pure
/// function of it and the injected clock.
pub struct SlotSearch<Z = TzDatabaseClock> {
    pub participants: Vec<Participant>,
    pub working_hours: WorkingHours,
    pub zones: Z,
}

impl SlotSearch<TzDatabaseClock> {
    /// Constructs a search over the compiled-in timezone database.
    pub fn new(participants: Vec<Participant>, working_hours: WorkingHours) -> Self {
        SlotSearch::with_zones(participants, working_hours, TzDatabaseClock)
    }
}

impl<Z> SlotSearch<Z>
where
    Z: TimeZoneClock,
{
    /// Same as [`SlotSearch::new`], with a caller-provided timezone
    /// backend.
    pub fn with_zones(
        participants: Vec<Participant>,
        working_hours: WorkingHours,
        zones: Z,
    ) -> Self {
        SlotSearch {
            participants,
            working_hours,
            zones,
        }
    }

    /// [`find_earliest_within`](SlotSearch::find_earliest_within) over the
    /// default seven-day horizon.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tzmeet_libs::data::{Participant, WorkingHours};
    /// use tzmeet_libs::schedule::SlotSearch;
    /// use tzmeet_libs::time::FixedClock;
    ///
    /// let search = SlotSearch::new(
    ///     vec![
    ///         Participant::new("Alice", "America/New_York"),
    ///         Participant::new("Bob", "Europe/London"),
    ///     ],
    ///     WorkingHours::default(),
    /// );
    ///
    /// let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap());
    ///
    /// // 14:00 UTC is 9 AM in New York and 2 PM in London
    /// assert_eq!(
    ///     search.find_earliest(&clock),
    ///     Ok(Some(Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap()))
    /// );
    /// ```
    pub fn find_earliest(&self, clock: &impl Clock) -> Result<Option<DateTime<Utc>>, ConfigError> {
        self.find_earliest_within(clock, DEFAULT_MAX_DAYS)
    }

    /// Scans `max_days` days of the candidate grid in ascending
    /// `(day, hour)` order and returns the first instant that works for
    /// everyone, or `Ok(None)` once the grid is exhausted. `Ok(None)` is a
    /// domain result, not a failure.
    ///
    /// The scan anchors on the injected clock's current UTC *date*; the
    /// first day's early candidates may therefore lie in the past.
    /// "Earliest" is relative to the fixed grid of
    /// [`SCAN_START_HOUR_UTC`]`..=`[`SCAN_END_HOUR_UTC`], not to
    /// continuous time.
    ///
    /// # Errors
    /// Any participant whose `timezone_id` does not resolve aborts the
    /// whole scan with `ConfigError::InvalidTimezone`; no participant is
    /// skipped. An empty participant list is `ConfigError::NoParticipants`.
    pub fn find_earliest_within(
        &self,
        clock: &impl Clock,
        max_days: u64,
    ) -> Result<Option<DateTime<Utc>>, ConfigError> {
        if self.participants.is_empty() {
            return Err(ConfigError::NoParticipants);
        }

        let origin = clock.now_utc().date_naive();
        let scan_hours: Vec<NaiveTime> = (SCAN_START_HOUR_UTC..=SCAN_END_HOUR_UTC)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .collect();

        for (day_offset, slot) in iproduct!(0..max_days, scan_hours) {
            let day = origin + Days::new(day_offset);
            let candidate = Utc.from_utc_datetime(&day.and_time(slot));

            if self.works_for_everyone(candidate)? {
                debug!("found common slot {} on day {}", candidate, day_offset);
                return Ok(Some(candidate));
            }
        }

        debug!("no common slot within {} day(s) of {}", max_days, origin);
        Ok(None)
    }

    fn works_for_everyone(&self, candidate: DateTime<Utc>) -> Result<bool, ConfigError> {
        for participant in &self.participants {
            let local_hour = self.zones.local_hour(candidate, &participant.timezone_id)?;

            trace!(
                "{}: {} is local hour {} in {}",
                participant.name,
                candidate,
                local_hour,
                participant.timezone_id
            );

            if !self.working_hours.contains(local_hour) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
