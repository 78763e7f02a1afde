//! Overlap detection between stored events and an incoming one.
//!
//! Endpoints are inclusive: an event ending exactly when another starts
//! overlaps it. Comparison is done on [`IcalDate`](crate::IcalDate) fields,
//! which order the same way as their fixed-width text.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// What [`Calendar::add_events`](crate::Calendar::add_events) does when an
/// incoming event overlaps stored ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Drop every stored event that overlaps the incoming one, then store it.
    #[default]
    RemoveFirst,
    /// Keep the stored events and discard the incoming one.
    RemoveLast,
    /// Store everything without checking.
    KeepBoth,
}

impl OverlapPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapPolicy::RemoveFirst => "remove-first",
            OverlapPolicy::RemoveLast => "remove-last",
            OverlapPolicy::KeepBoth => "keep-both",
        }
    }
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remove-first" => Ok(OverlapPolicy::RemoveFirst),
            "remove-last" => Ok(OverlapPolicy::RemoveLast),
            "keep-both" => Ok(OverlapPolicy::KeepBoth),
            other => Err(format!(
                "unknown overlap policy '{}' (expected remove-first, remove-last or keep-both)",
                other
            )),
        }
    }
}

/// Indices of the events in `stored` that overlap `candidate`, in order.
pub fn find_overlaps(stored: &[Event], candidate: &Event) -> Vec<usize> {
    stored
        .iter()
        .enumerate()
        .filter(|(_, event)| event.overlaps(candidate))
        .map(|(index, _)| index)
        .collect()
}
