//! `VEVENT` blocks built from plain event records.

use serde::{Deserialize, Serialize};

use crate::config::IcalConfig;
use crate::date::IcalDate;
use crate::property::Property;
use crate::section::{Encode, Section, SectionName};

/// Explicit event identifier, written to `UID` as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Text(s)
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Number(n)
    }
}

/// The record an [`Event`] is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub summary: String,
    pub start: IcalDate,
    pub end: IcalDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl EventData {
    pub fn new(
        summary: impl Into<String>,
        start: IcalDate,
        end: IcalDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            start,
            end,
            description: description.into(),
            id: None,
            organizer: None,
            location: None,
            timezone: None,
        }
    }

    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = Some(organizer.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// The `UID` value: the explicit id, or the non-empty content fields
    /// (summary, start, end, description, location) joined with `-`.
    ///
    /// Distinct events with identical content get the same fallback UID.
    pub fn uid(&self) -> String {
        if let Some(id) = &self.id {
            return id.to_string();
        }

        let start = self.start.to_ical();
        let end = self.end.to_ical();
        [
            Some(self.summary.as_str()),
            Some(start.as_str()),
            Some(end.as_str()),
            Some(self.description.as_str()),
            self.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
    }
}

/// One occurrence, rendered as a `VEVENT` block.
///
/// Properties are fixed at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    data: EventData,
    uid: String,
    section: Section,
}

impl Event {
    /// Map a record to `SUMMARY`, `DTSTART`, `DTEND`, `DESCRIPTION`, `UID`,
    /// `ORGANIZER` and `LOCATION`, in that order. The last two are omitted
    /// when absent.
    pub fn new(data: EventData, config: &IcalConfig) -> Self {
        let timezone = data
            .timezone
            .as_deref()
            .unwrap_or(config.default_timezone.as_str());
        let uid = data.uid();

        let section = Section::new(
            SectionName::Event,
            vec![
                Property::new("SUMMARY", data.summary.as_str()),
                Property::new(format!("DTSTART;TZID=\"{}\"", timezone), data.start),
                Property::new(format!("DTEND;TZID=\"{}\"", timezone), data.end),
                Property::new("DESCRIPTION", data.description.as_str()),
                Property::new("UID", uid.as_str()),
                Property::optional("ORGANIZER", data.organizer.as_deref()),
                Property::optional("LOCATION", data.location.as_deref()),
            ],
        );

        Self { data, uid, section }
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }

    pub fn summary(&self) -> &str {
        &self.data.summary
    }

    pub fn start(&self) -> IcalDate {
        self.data.start
    }

    pub fn end(&self) -> IcalDate {
        self.data.end
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    /// Whether the two events share at least one instant. Endpoints are
    /// inclusive, so an event ending when the other starts overlaps it.
    pub fn overlaps(&self, other: &Event) -> bool {
        let (s1, e1) = (self.start(), self.end());
        let (s2, e2) = (other.start(), other.end());
        (s1 <= s2 && s2 <= e1) || (s2 <= s1 && s1 <= e2)
    }

    /// Encode with extra children appended inside the `VEVENT` block.
    pub fn encode_with<E: Encode>(&self, extra: &[E]) -> String {
        self.section.encode_with(extra)
    }
}

impl Encode for Event {
    fn encode(&self) -> String {
        self.section.encode()
    }
}

impl From<Event> for Section {
    fn from(event: Event) -> Self {
        event.section
    }
}
