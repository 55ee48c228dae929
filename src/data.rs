#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("\"{0}\" is not a resolvable timezone identifier")]
    InvalidTimezone(String),
    #[error("No participants to schedule")]
    NoParticipants,
    #[error("Invalid working hours. Expected 0 <= start < end <= 23, got {start_hour}..{end_hour}")]
    InvalidWorkingHours { start_hour: u32, end_hour: u32 },
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "timezoneId"))]
    pub timezone_id: String,
}

impl Participant {
    /// Constructs a new Participant living in the given timezone.
    /// The `timezone_id` is not resolved here; an unresolvable id
    /// surfaces as a `ConfigError` from the first conversion that uses it.
    pub fn new(name: &str, timezone_id: &str) -> Participant {
        Participant {
            name: name.to_string(),
            timezone_id: timezone_id.to_string(),
        }
    }
}

/// Half-open local-hour window [start, end) shared by all participants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkingHours {
    #[cfg_attr(feature = "serde", serde(rename = "startHour"))]
    start_hour: u32,
    #[cfg_attr(feature = "serde", serde(rename = "endHour"))]
    end_hour: u32,
}

impl Default for WorkingHours {
    /// The 9-to-18 window.
    fn default() -> WorkingHours {
        WorkingHours {
            start_hour: 9,
            end_hour: 18,
        }
    }
}

impl WorkingHours {
    /// Constructs a validated window.
    ///
    /// # Examples
    /// ```
    /// use tzmeet_libs::data::{ConfigError, WorkingHours};
    ///
    /// assert!(WorkingHours::new(8, 16).is_ok());
    ///
    /// assert_eq!(
    ///     WorkingHours::new(18, 9),
    ///     Err(ConfigError::InvalidWorkingHours {
    ///         start_hour: 18,
    ///         end_hour: 9,
    ///     })
    /// );
    ///
    /// assert!(WorkingHours::new(9, 24).is_err());
    /// ```
    pub fn new(start_hour: u32, end_hour: u32) -> Result<WorkingHours, ConfigError> {
        if end_hour > 23 || start_hour >= end_hour {
            return Err(ConfigError::InvalidWorkingHours {
                start_hour,
                end_hour,
            });
        }

        Ok(WorkingHours {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(self) -> u32 {
        self.end_hour
    }

    /// Half-open membership check: `start_hour <= hour < end_hour`.
    ///
    /// Only a meeting's *start* hour is ever tested, so a meeting accepted
    /// at `end_hour - 1` may run past the window. Known limitation.
    ///
    /// # Examples
    /// ```
    /// use tzmeet_libs::data::WorkingHours;
    ///
    /// let window = WorkingHours::default();
    ///
    /// assert!(window.contains(9));
    /// assert!(window.contains(17));
    /// assert!(!window.contains(8));
    /// assert!(!window.contains(18));
    /// ```
    pub fn contains(self, hour: u32) -> bool {
        (self.start_hour..self.end_hour).contains(&hour)
    }
}
