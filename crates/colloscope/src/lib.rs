//! # colloscope
//!
//! Reads a colloscope export (students, groups, weekly colle slots and their
//! appointments) and builds one [`colle_ical::Calendar`] per student.
//!
//! ## Modules
//!
//! - [`model`] — serde model of the export and the rooms table, id lookups
//! - [`schedule`] — session timing, event records and per-student calendars
//! - [`wording`] — French `de`/`d'` composition
//! - [`error`] — Error types

pub mod error;
pub mod model;
pub mod schedule;
pub mod wording;

pub use error::{ColloscopeError, Result};
pub use model::{rooms_from_json, Colloscope, Room};
pub use schedule::{build_calendars, parse_timezone, student_calendar, ScheduleOptions, StudentCalendar};
pub use wording::with_of;
