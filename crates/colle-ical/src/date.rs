//! Date-time values in the fixed `YYYYMMDDTHHMMSSZ` iCalendar text form.
//!
//! An [`IcalDate`] carries wall-clock fields only. No time-zone conversion
//! happens here: callers hand in fields that are already expressed in the
//! calendar's zone, and the trailing `Z` is a literal suffix, not a UTC
//! marker. Viewers read the value against the `TZID` parameter of the
//! property that carries it.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::section::Encode;

/// A calendar timestamp with second precision.
///
/// Field order matters: the derived `Ord` compares year, month, day, hour,
/// minute, second in turn, which matches the ordering of the encoded text
/// for in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IcalDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
}

impl IcalDate {
    /// A date at midnight.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self::with_time(year, month, day, 0, 0, 0)
    }

    pub fn with_time(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build a value from an instant, read in the process's local time zone.
    ///
    /// Seconds are dropped. The result is a local wall-clock time, so it is
    /// only meaningful when the local zone matches the calendar's `TZID`.
    /// Prefer [`IcalDate::from_zoned`] when the target zone is known.
    pub fn from_native(instant: DateTime<Utc>) -> Self {
        Self::from_zoned(&instant.with_timezone(&Local))
    }

    /// Build a value from the wall-clock fields of `datetime` in its own zone.
    /// Seconds are dropped.
    pub fn from_zoned<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::with_time(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            0,
        )
    }

    /// Render as `YYYYMMDDTHHMMSSZ`.
    ///
    /// No range validation: out-of-range fields are written as-is.
    pub fn to_ical(&self) -> String {
        format!(
            "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl Encode for IcalDate {
    fn encode(&self) -> String {
        self.to_ical()
    }
}

impl std::fmt::Display for IcalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ical())
    }
}
