//! Content lines: `KEY:VALUE`.

use crate::date::IcalDate;
use crate::section::Encode;

/// The value side of a content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Date(IcalDate),
}

impl PropertyValue {
    /// Empty text counts as absent, like a missing value.
    fn is_blank(&self) -> bool {
        matches!(self, PropertyValue::Text(text) if text.is_empty())
    }
}

impl Encode for PropertyValue {
    fn encode(&self) -> String {
        match self {
            PropertyValue::Text(text) => text.clone(),
            PropertyValue::Date(date) => date.encode(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<IcalDate> for PropertyValue {
    fn from(date: IcalDate) -> Self {
        PropertyValue::Date(date)
    }
}

/// A single `KEY:VALUE` line.
///
/// The key may carry parameters (`DTSTART;TZID="Europe/Paris"`); it is
/// written verbatim. Neither key nor value is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: Option<PropertyValue>,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A property whose value may be missing. Missing values encode to nothing.
    pub fn optional<V: Into<PropertyValue>>(key: impl Into<String>, value: Option<V>) -> Self {
        Self {
            key: key.into(),
            value: value.map(Into::into),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&PropertyValue> {
        self.value.as_ref()
    }
}

impl Encode for Property {
    fn encode(&self) -> String {
        match &self.value {
            Some(value) if !value.is_blank() => {
                format!("{}:{}\n", self.key, value.encode())
            }
            _ => String::new(),
        }
    }
}
