//! The top-level `VCALENDAR` document and its overlap-resolving event list.

use tracing::debug;

use crate::config::IcalConfig;
use crate::event::Event;
use crate::overlap::{find_overlaps, OverlapPolicy};
use crate::property::Property;
use crate::section::{Encode, Section, SectionName};

/// Header values for a new [`Calendar`]. Unset fields fall back to
/// [`IcalConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarOptions {
    pub name: String,
    pub version: Option<String>,
    pub timezone: Option<String>,
}

impl CalendarOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A calendar holding an ordered list of events.
///
/// Events only enter through [`Calendar::add_events`], and are encoded in
/// stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    name: String,
    timezone: String,
    section: Section,
    events: Vec<Event>,
}

impl Calendar {
    pub fn new(options: CalendarOptions, config: &IcalConfig) -> Self {
        let version = options.version.unwrap_or_else(|| config.version.clone());
        let timezone = options
            .timezone
            .unwrap_or_else(|| config.default_timezone.clone());

        // X-WR-CALNAME repeats NAME for clients that only read the former.
        let section = Section::new(
            SectionName::Calendar,
            vec![
                Property::new("VERSION", version),
                Property::new("NAME", options.name.as_str()),
                Property::new("X-WR-CALNAME", options.name.as_str()),
                Property::new("TIMEZONE-ID", timezone.as_str()),
            ],
        );

        Self {
            name: options.name,
            timezone,
            section,
            events: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Add events one by one, resolving overlaps with already stored events.
    ///
    /// - [`OverlapPolicy::KeepBoth`] appends everything unchecked.
    /// - [`OverlapPolicy::RemoveFirst`] removes *all* stored events that
    ///   overlap the incoming one, then appends it.
    /// - [`OverlapPolicy::RemoveLast`] leaves the stored list untouched and
    ///   drops the incoming event.
    ///
    /// Incoming events are checked against the list as it stands after the
    /// previous ones were processed, so they can also displace each other.
    pub fn add_events(&mut self, events: impl IntoIterator<Item = Event>, policy: OverlapPolicy) {
        match policy {
            OverlapPolicy::KeepBoth => self.events.extend(events),
            OverlapPolicy::RemoveFirst => {
                for event in events {
                    self.replace_overlapping(event);
                }
            }
            OverlapPolicy::RemoveLast => {
                for event in events {
                    self.push_if_free(event);
                }
            }
        }
    }

    fn replace_overlapping(&mut self, event: Event) {
        let overlaps = find_overlaps(&self.events, &event);
        if !overlaps.is_empty() {
            debug!(
                calendar = %self.name,
                uid = event.uid(),
                replaced = overlaps.len(),
                "overlapping events replaced"
            );
            let mut index = 0;
            self.events.retain(|_| {
                let keep = !overlaps.contains(&index);
                index += 1;
                keep
            });
        }
        self.events.push(event);
    }

    fn push_if_free(&mut self, event: Event) {
        let overlaps = find_overlaps(&self.events, &event);
        if overlaps.is_empty() {
            self.events.push(event);
        } else {
            debug!(
                calendar = %self.name,
                uid = event.uid(),
                overlapping = overlaps.len(),
                "overlapping event dropped"
            );
        }
    }

    /// Add events with the default [`OverlapPolicy::RemoveFirst`].
    pub fn add(&mut self, events: impl IntoIterator<Item = Event>) {
        self.add_events(events, OverlapPolicy::default());
    }

    /// Encode the calendar, appending `extra` after the stored events.
    /// `extra` is not stored and is not checked for overlaps.
    pub fn encode_with(&self, extra: &[Event]) -> String {
        let children: Vec<&Event> = self.events.iter().chain(extra).collect();
        self.section.encode_with(&children)
    }
}

impl Encode for Calendar {
    fn encode(&self) -> String {
        self.encode_with(&[])
    }
}
