//! Tests for calendar construction, overlap resolution and encoding.

use colle_ical::{
    duplicate_uids, find_overlaps, Calendar, CalendarOptions, Encode, Event, EventData,
    IcalConfig, IcalDate, OverlapPolicy,
};

/// Helper to create an event on a given day from hour/minute ranges.
fn event(
    summary: &str,
    day: u32,
    start_hour: u32,
    start_min: u32,
    end_hour: u32,
    end_min: u32,
) -> Event {
    let data = EventData::new(
        summary,
        IcalDate::with_time(2025, 3, day, start_hour, start_min, 0),
        IcalDate::with_time(2025, 3, day, end_hour, end_min, 0),
        format!("{} description", summary),
    );
    Event::new(data, &IcalConfig::default())
}

fn calendar() -> Calendar {
    Calendar::new(CalendarOptions::named("Calendrier des colles de Test"), &IcalConfig::default())
}

fn summaries(calendar: &Calendar) -> Vec<&str> {
    calendar.events().iter().map(|e| e.summary()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction and encoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_calendar_is_well_formed() {
    assert_eq!(
        calendar().encode(),
        "BEGIN:VCALENDAR\n\
         VERSION:2.0\n\
         NAME:Calendrier des colles de Test\n\
         X-WR-CALNAME:Calendrier des colles de Test\n\
         TIMEZONE-ID:Europe/Paris\n\
         END:VCALENDAR\n"
    );
}

#[test]
fn options_override_version_and_timezone() {
    let options = CalendarOptions {
        name: "C".to_string(),
        version: Some("2.1".to_string()),
        timezone: Some("Asia/Tokyo".to_string()),
    };
    let text = Calendar::new(options, &IcalConfig::default()).encode();

    assert!(text.contains("VERSION:2.1\n"));
    assert!(text.contains("TIMEZONE-ID:Asia/Tokyo\n"));
}

#[test]
fn config_timezone_is_the_default() {
    let config = IcalConfig::with_timezone("Europe/Brussels");
    let calendar = Calendar::new(CalendarOptions::named("C"), &config);
    assert_eq!(calendar.timezone(), "Europe/Brussels");
    assert!(calendar.encode().contains("TIMEZONE-ID:Europe/Brussels\n"));
}

#[test]
fn events_are_encoded_in_stored_order() {
    let mut cal = calendar();
    cal.add(vec![event("A", 10, 9, 0, 10, 0), event("B", 11, 9, 0, 10, 0)]);

    let text = cal.encode();
    let a = text.find("SUMMARY:A\n").unwrap();
    let b = text.find("SUMMARY:B\n").unwrap();
    assert!(a < b);
    assert!(text.ends_with("END:VEVENT\nEND:VCALENDAR\n"));
}

#[test]
fn encode_with_appends_extra_events_without_storing_them() {
    let mut cal = calendar();
    cal.add(vec![event("Stored", 10, 9, 0, 10, 0)]);
    let extra = vec![event("Extra", 10, 9, 30, 10, 30)];

    let text = cal.encode_with(&extra);

    let stored = text.find("SUMMARY:Stored\n").unwrap();
    let appended = text.find("SUMMARY:Extra\n").unwrap();
    assert!(stored < appended);
    assert_eq!(cal.len(), 1);
}

#[test]
fn encoding_is_idempotent() {
    let mut cal = calendar();
    cal.add(vec![event("A", 10, 9, 0, 10, 0), event("B", 12, 14, 0, 15, 0)]);
    assert_eq!(cal.encode(), cal.encode());
}

// ─────────────────────────────────────────────────────────────────────────────
// RemoveFirst
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn disjoint_events_are_both_kept() {
    let mut cal = calendar();
    cal.add_events(
        vec![event("A", 10, 9, 0, 10, 0), event("B", 10, 11, 0, 12, 0)],
        OverlapPolicy::RemoveFirst,
    );
    assert_eq!(summaries(&cal), vec!["A", "B"]);
}

#[test]
fn overlapping_event_replaces_stored_one() {
    let mut cal = calendar();
    cal.add_events(vec![event("A", 10, 9, 0, 10, 0)], OverlapPolicy::RemoveFirst);
    cal.add_events(vec![event("B", 10, 9, 30, 10, 30)], OverlapPolicy::RemoveFirst);
    assert_eq!(summaries(&cal), vec!["B"]);
}

#[test]
fn touching_endpoints_count_as_overlap() {
    let mut cal = calendar();
    cal.add(vec![event("A", 10, 9, 0, 10, 0), event("B", 10, 10, 0, 11, 0)]);
    assert_eq!(summaries(&cal), vec!["B"]);
}

#[test]
fn contained_event_overlaps() {
    let mut cal = calendar();
    cal.add(vec![event("Long", 10, 8, 0, 12, 0), event("Short", 10, 9, 0, 9, 30)]);
    assert_eq!(summaries(&cal), vec!["Short"]);
}

#[test]
fn remove_first_removes_every_overlapping_event() {
    let mut cal = calendar();
    cal.add(vec![
        event("Morning", 10, 9, 0, 10, 0),
        event("Other day", 11, 9, 0, 10, 0),
        event("Noon", 10, 11, 0, 12, 0),
    ]);
    assert_eq!(cal.len(), 3);

    // Spans both Morning and Noon.
    cal.add(vec![event("Wide", 10, 9, 30, 11, 30)]);

    assert_eq!(summaries(&cal), vec!["Other day", "Wide"]);
}

#[test]
fn replacement_is_moved_to_the_end() {
    let mut cal = calendar();
    cal.add(vec![event("A", 10, 9, 0, 10, 0), event("B", 11, 9, 0, 10, 0)]);
    cal.add(vec![event("A2", 10, 9, 0, 10, 0)]);
    assert_eq!(summaries(&cal), vec!["B", "A2"]);
}

#[test]
fn events_in_one_batch_displace_each_other() {
    let mut cal = calendar();
    cal.add_events(
        vec![event("First", 10, 9, 0, 10, 0), event("Second", 10, 9, 30, 10, 30)],
        OverlapPolicy::RemoveFirst,
    );
    assert_eq!(summaries(&cal), vec!["Second"]);
}

#[test]
fn default_policy_is_remove_first() {
    assert_eq!(OverlapPolicy::default(), OverlapPolicy::RemoveFirst);
}

// ─────────────────────────────────────────────────────────────────────────────
// RemoveLast
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn remove_last_drops_overlapping_candidate() {
    let mut cal = calendar();
    cal.add_events(vec![event("A", 10, 9, 0, 10, 0)], OverlapPolicy::RemoveLast);
    let before = cal.clone();

    cal.add_events(vec![event("B", 10, 9, 30, 10, 30)], OverlapPolicy::RemoveLast);

    assert_eq!(cal, before);
    assert_eq!(summaries(&cal), vec!["A"]);
}

#[test]
fn remove_last_still_adds_disjoint_events() {
    let mut cal = calendar();
    cal.add_events(
        vec![event("A", 10, 9, 0, 10, 0), event("B", 10, 14, 0, 15, 0)],
        OverlapPolicy::RemoveLast,
    );
    assert_eq!(summaries(&cal), vec!["A", "B"]);
}

#[test]
fn remove_last_checks_each_event_of_a_batch() {
    let mut cal = calendar();
    cal.add_events(
        vec![
            event("A", 10, 9, 0, 10, 0),
            event("B", 10, 9, 30, 10, 30),
            event("C", 10, 14, 0, 15, 0),
        ],
        OverlapPolicy::RemoveLast,
    );
    assert_eq!(summaries(&cal), vec!["A", "C"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// KeepBoth
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn keep_both_stores_overlapping_events_in_order() {
    let mut cal = calendar();
    cal.add_events(
        vec![
            event("A", 10, 9, 0, 10, 0),
            event("B", 10, 9, 0, 10, 0),
            event("C", 10, 9, 30, 11, 0),
        ],
        OverlapPolicy::KeepBoth,
    );
    assert_eq!(summaries(&cal), vec!["A", "B", "C"]);
}

#[test]
fn keep_both_does_not_check_against_stored_events() {
    let mut cal = calendar();
    cal.add(vec![event("A", 10, 9, 0, 10, 0)]);
    cal.add_events(vec![event("B", 10, 9, 0, 10, 0)], OverlapPolicy::KeepBoth);
    assert_eq!(summaries(&cal), vec!["A", "B"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlap helpers and diagnostics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_overlaps_returns_indices_in_order() {
    let stored = vec![
        event("A", 10, 9, 0, 10, 0),
        event("B", 10, 12, 0, 13, 0),
        event("C", 10, 9, 45, 9, 50),
    ];
    let candidate = event("X", 10, 9, 30, 10, 0);
    assert_eq!(find_overlaps(&stored, &candidate), vec![0, 2]);
}

#[test]
fn overlaps_across_midnight() {
    let late = Event::new(
        EventData::new(
            "Late",
            IcalDate::with_time(2025, 3, 10, 23, 0, 0),
            IcalDate::with_time(2025, 3, 11, 1, 0, 0),
            "",
        ),
        &IcalConfig::default(),
    );
    let early = event("Early", 11, 0, 30, 2, 0);
    assert!(late.overlaps(&early));
    assert!(early.overlaps(&late));
}

#[test]
fn policy_parses_from_kebab_case() {
    assert_eq!("keep-both".parse::<OverlapPolicy>(), Ok(OverlapPolicy::KeepBoth));
    assert_eq!("remove-last".parse::<OverlapPolicy>(), Ok(OverlapPolicy::RemoveLast));
    assert!("sideways".parse::<OverlapPolicy>().is_err());
    assert_eq!(OverlapPolicy::RemoveFirst.to_string(), "remove-first");
}

#[test]
fn duplicate_uids_reports_collisions() {
    let events = vec![
        event("A", 10, 9, 0, 10, 0),
        event("B", 11, 9, 0, 10, 0),
        event("A", 10, 9, 0, 10, 0),
    ];

    let duplicates = duplicate_uids(&events);

    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].uid, events[0].uid());
    assert_eq!(duplicates[0].positions, vec![0, 2]);
}

#[test]
fn explicit_ids_avoid_collisions() {
    let config = IcalConfig::default();
    let make = |id: &str| {
        Event::new(
            EventData::new("S", IcalDate::new(2025, 3, 10), IcalDate::new(2025, 3, 10), "D")
                .id(id),
            &config,
        )
    };
    assert!(duplicate_uids(&[make("1-1"), make("1-2")]).is_empty());
}
