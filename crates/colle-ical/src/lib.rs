//! # colle-ical
//!
//! A small iCalendar document model: dates, content lines, `BEGIN`/`END`
//! sections, events and a calendar that resolves overlapping events as they
//! are added.
//!
//! Every operation is total. Missing optional fields are omitted, unchecked
//! date fields are written as given, and nothing is escaped.
//!
//! ## Quick start
//!
//! ```rust
//! use colle_ical::{Calendar, CalendarOptions, Encode, Event, EventData, IcalConfig, IcalDate};
//!
//! let config = IcalConfig::default();
//! let mut calendar = Calendar::new(CalendarOptions::named("Colles"), &config);
//!
//! let data = EventData::new(
//!     "Maths",
//!     IcalDate::with_time(2025, 3, 10, 16, 0, 0),
//!     IcalDate::with_time(2025, 3, 10, 17, 0, 0),
//!     "Colle de Maths",
//! )
//! .id("12-3");
//! calendar.add(vec![Event::new(data, &config)]);
//!
//! let text = calendar.encode();
//! assert!(text.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\n"));
//! assert!(text.contains("DTSTART;TZID=\"Europe/Paris\":20250310T160000Z\n"));
//! assert!(text.ends_with("END:VEVENT\nEND:VCALENDAR\n"));
//! ```
//!
//! ## Modules
//!
//! - [`date`] — `IcalDate` and its `YYYYMMDDTHHMMSSZ` encoding
//! - [`property`] — `KEY:VALUE` content lines
//! - [`section`] — `BEGIN`/`END` blocks and the `Encode` trait
//! - [`event`] — `VEVENT` blocks built from `EventData` records
//! - [`calendar`] — `VCALENDAR` with overlap resolution
//! - [`overlap`] — overlap test and `OverlapPolicy`
//! - [`diagnostics`] — advisory duplicate-UID scan
//! - [`config`] — default time zone and version

pub mod calendar;
pub mod config;
pub mod date;
pub mod diagnostics;
pub mod event;
pub mod overlap;
pub mod property;
pub mod section;

pub use calendar::{Calendar, CalendarOptions};
pub use config::IcalConfig;
pub use date::IcalDate;
pub use diagnostics::{duplicate_uids, DuplicateUid};
pub use event::{Event, EventData, EventId};
pub use overlap::{find_overlaps, OverlapPolicy};
pub use property::{Property, PropertyValue};
pub use section::{Encode, Node, Section, SectionName};
