//! Advisory checks over finished calendars.
//!
//! Nothing here changes a calendar. Callers decide whether a finding is
//! worth a warning or a failure.

use std::collections::HashMap;

use crate::event::Event;

/// A `UID` carried by more than one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateUid {
    pub uid: String,
    /// Positions of the events sharing the UID, in input order.
    pub positions: Vec<usize>,
}

/// Find UIDs shared by several events.
///
/// Derived UIDs are built from event content, so two distinct sessions with
/// the same summary, times, description and location collide. Results are
/// ordered by the first position at which each UID appears.
pub fn duplicate_uids(events: &[Event]) -> Vec<DuplicateUid> {
    let mut seen: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for (position, event) in events.iter().enumerate() {
        let positions = seen.entry(event.uid()).or_default();
        if positions.is_empty() {
            order.push(event.uid());
        }
        positions.push(position);
    }

    order
        .into_iter()
        .filter_map(|uid| {
            let positions = seen.remove(uid)?;
            (positions.len() > 1).then(|| DuplicateUid {
                uid: uid.to_string(),
                positions,
            })
        })
        .collect()
}
