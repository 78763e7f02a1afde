//! Property-based tests for date encoding and overlap policies using proptest.
//!
//! These check invariants that hold for any generated schedule, not just the
//! examples in `calendar_tests.rs`.

use colle_ical::{
    Calendar, CalendarOptions, Encode, Event, EventData, IcalConfig, IcalDate, OverlapPolicy,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A valid wall-clock date in 2024-2026. Day is capped at 28.
fn arb_date() -> impl Strategy<Value = IcalDate> {
    (2024i32..=2026, 1u32..=12, 1u32..=28, 0u32..=23, 0u32..=59, 0u32..=59)
        .prop_map(|(y, mo, d, h, mi, s)| IcalDate::with_time(y, mo, d, h, mi, s))
}

/// An event starting at minute offset `start` of a fixed day, lasting
/// `length` minutes (never crossing midnight).
fn arb_slot() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=1200, 0u32..=180)
}

fn slot_event(index: usize, (start, length): (u32, u32)) -> Event {
    let end = start + length;
    let data = EventData::new(
        format!("E{}", index),
        IcalDate::with_time(2025, 3, 10, start / 60, start % 60, 0),
        IcalDate::with_time(2025, 3, 10, end / 60, end % 60, 0),
        "generated",
    )
    .id(index.to_string());
    Event::new(data, &IcalConfig::default())
}

fn empty_calendar() -> Calendar {
    Calendar::new(CalendarOptions::named("prop"), &IcalConfig::default())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn date_encoding_has_fixed_shape(date in arb_date()) {
        let text = date.encode();
        prop_assert_eq!(text.len(), 16);
        prop_assert_eq!(&text[8..9], "T");
        prop_assert_eq!(&text[15..16], "Z");
        prop_assert!(text[..8].chars().all(|c| c.is_ascii_digit()));
        prop_assert!(text[9..15].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn date_order_matches_text_order(a in arb_date(), b in arb_date()) {
        prop_assert_eq!(a.cmp(&b), a.encode().cmp(&b.encode()));
    }

    #[test]
    fn keep_both_stores_everything(slots in prop::collection::vec(arb_slot(), 0..20)) {
        let events: Vec<Event> = slots.into_iter().enumerate().map(|(i, s)| slot_event(i, s)).collect();
        let expected: Vec<String> = events.iter().map(|e| e.uid().to_string()).collect();

        let mut calendar = empty_calendar();
        calendar.add_events(events, OverlapPolicy::KeepBoth);

        let stored: Vec<String> = calendar.events().iter().map(|e| e.uid().to_string()).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn remove_first_leaves_no_overlaps(slots in prop::collection::vec(arb_slot(), 0..20)) {
        let events: Vec<Event> = slots.into_iter().enumerate().map(|(i, s)| slot_event(i, s)).collect();
        let last_uid = events.last().map(|e| e.uid().to_string());

        let mut calendar = empty_calendar();
        calendar.add_events(events, OverlapPolicy::RemoveFirst);

        let stored = calendar.events();
        for (i, a) in stored.iter().enumerate() {
            for b in &stored[i + 1..] {
                prop_assert!(!a.overlaps(b), "{} overlaps {}", a.uid(), b.uid());
            }
        }
        // The newest event always survives.
        prop_assert_eq!(stored.last().map(|e| e.uid().to_string()), last_uid);
    }

    #[test]
    fn remove_last_keeps_stored_events(
        first in prop::collection::vec(arb_slot(), 1..10),
        second in prop::collection::vec(arb_slot(), 0..10),
    ) {
        let mut calendar = empty_calendar();
        calendar.add_events(
            first.into_iter().enumerate().map(|(i, s)| slot_event(i, s)),
            OverlapPolicy::RemoveLast,
        );
        let before: Vec<String> = calendar.events().iter().map(|e| e.uid().to_string()).collect();

        calendar.add_events(
            second.into_iter().enumerate().map(|(i, s)| slot_event(100 + i, s)),
            OverlapPolicy::RemoveLast,
        );

        let after: Vec<String> = calendar.events().iter().map(|e| e.uid().to_string()).collect();
        prop_assert_eq!(&after[..before.len()], &before[..]);
        for (i, a) in calendar.events().iter().enumerate() {
            for b in &calendar.events()[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn encoding_twice_is_identical(slots in prop::collection::vec(arb_slot(), 0..10)) {
        let mut calendar = empty_calendar();
        calendar.add(slots.into_iter().enumerate().map(|(i, s)| slot_event(i, s)));
        prop_assert_eq!(calendar.encode(), calendar.encode());
    }
}
