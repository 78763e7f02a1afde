//! Document-wide defaults threaded through calendar and event construction.

use serde::{Deserialize, Serialize};

/// Time zone used when neither the calendar nor the event names one.
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// iCalendar version written when the calendar does not override it.
pub const DEFAULT_VERSION: &str = "2.0";

/// Defaults applied by [`Calendar::new`](crate::Calendar::new) and
/// [`Event::new`](crate::Event::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcalConfig {
    /// IANA zone name written into `TIMEZONE-ID` and `TZID` parameters.
    /// Not validated.
    pub default_timezone: String,
    pub version: String,
}

impl IcalConfig {
    pub fn with_timezone(timezone: impl Into<String>) -> Self {
        Self {
            default_timezone: timezone.into(),
            ..Self::default()
        }
    }
}

impl Default for IcalConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}
