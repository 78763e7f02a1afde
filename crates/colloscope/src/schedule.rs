//! Turn colloscope appointments into per-student calendars.
//!
//! Each appointment becomes one event. Times are computed as wall-clock
//! values in the configured zone: the session starts on the week's Monday at
//! the colle's local time, shifted by whole 24-hour days, and lasts the
//! colle's duration. The resulting instants are read back in the same zone.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use colle_ical::{
    Calendar, CalendarOptions, Event, EventData, IcalConfig, IcalDate, OverlapPolicy,
};
use tracing::{debug, info};

use crate::error::{ColloscopeError, Result};
use crate::model::{room_for, Appointment, Colloscope, Room, Student, Week};
use crate::wording::with_of;

/// Monday dates from this month onwards belong to the starting year of the
/// school year; earlier months belong to the next calendar year.
pub const SCHOOL_YEAR_FIRST_MONTH: u32 = 8;

pub const DEFAULT_SCHOOL_YEAR: i32 = 2024;

/// Settings for building calendars from a colloscope.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOptions {
    /// Zone the colle times are expressed in. Also written as the
    /// calendar's `TIMEZONE-ID` and each event's `TZID`.
    pub timezone: Tz,
    /// Calendar year in which the school year starts.
    pub school_year: i32,
    pub policy: OverlapPolicy,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Paris,
            school_year: DEFAULT_SCHOOL_YEAR,
            policy: OverlapPolicy::default(),
        }
    }
}

impl ScheduleOptions {
    /// Calendar year of a Monday falling in `month`.
    pub fn year_for_month(&self, month: u32) -> i32 {
        if month >= SCHOOL_YEAR_FIRST_MONTH {
            self.school_year
        } else {
            self.school_year + 1
        }
    }

    pub fn ical_config(&self) -> IcalConfig {
        IcalConfig::with_timezone(self.timezone.name())
    }
}

/// Parse an IANA zone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| ColloscopeError::InvalidTimezone(name.to_string()))
}

/// A finished calendar for one student, with the file name it is saved under.
#[derive(Debug, Clone)]
pub struct StudentCalendar {
    pub student_id: u64,
    pub file_name: String,
    pub calendar: Calendar,
}

/// `<first>_<last>.ics`.
pub fn file_name_for(student: &Student) -> String {
    format!("{}_{}.ics", student.user.first_name, student.user.last_name)
}

/// `Calendrier des colles <de|d'><first> <last>`.
pub fn calendar_name_for(student: &Student) -> String {
    format!(
        "Calendrier des colles {} {}",
        with_of(&student.user.first_name),
        student.user.last_name
    )
}

/// Start and end of the session held in `week` for a colle starting
/// `day_offset` days after Monday at `hour:minutes`, lasting
/// `duration_minutes`.
///
/// Offsets too large for a date-time are reported as
/// [`ColloscopeError::OutOfRange`], tagged with `code`.
pub fn session_interval(
    week: &Week,
    code: &str,
    day_offset: i64,
    hour: i64,
    minutes: i64,
    duration_minutes: i64,
    options: &ScheduleOptions,
) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
    let out_of_range = |field| ColloscopeError::OutOfRange(field, code.to_string());

    let (day, month) = week.monday_day_month()?;
    let year = options.year_for_month(month);
    let monday = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ColloscopeError::InvalidMonday(week.monday.clone()))?;

    let local = TimeDelta::try_hours(hour)
        .zip(TimeDelta::try_minutes(minutes))
        .and_then(|(h, m)| h.checked_add(&m))
        .and_then(|offset| monday.and_time(NaiveTime::MIN).checked_add_signed(offset))
        .ok_or_else(|| out_of_range("start time"))?;
    // Ambiguous times (autumn fold) resolve to the first occurrence.
    let start = options
        .timezone
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| {
            ColloscopeError::InvalidLocalTime(local.to_string(), options.timezone.name().to_string())
        })?;

    // Whole days are added as 24-hour steps, so a DST change inside the
    // week moves the wall-clock hour.
    let start = TimeDelta::try_days(day_offset)
        .and_then(|days| start.checked_add_signed(days))
        .ok_or_else(|| out_of_range("day"))?;
    let end = TimeDelta::try_minutes(duration_minutes)
        .and_then(|length| start.checked_add_signed(length))
        .ok_or_else(|| out_of_range("duration"))?;
    Ok((start, end))
}

/// The event record for one appointment.
pub fn appointment_event(
    colloscope: &Colloscope,
    rooms: &[Room],
    appointment: &Appointment,
    options: &ScheduleOptions,
) -> Result<EventData> {
    let colle = colloscope.colle(appointment.colle)?;
    let week = colloscope.week(appointment.week)?;
    let colleur = &colloscope.colleur(colle.colleur)?.user;
    let teaching = colloscope.teaching(colle.teaching)?;

    let (start, end) = session_interval(
        week,
        &colle.code,
        colle.day,
        colle.hour,
        colle.minutes,
        colle.duration_minutes()?,
        options,
    )?;

    let summary = format!(
        "{} : Colle {} avec {}",
        colle.code,
        with_of(&teaching.short_name),
        colleur.last_name
    );
    let description = format!(
        "{} : Colle {} avec {} {}",
        colle.code,
        with_of(&teaching.discipline.name),
        colleur.first_name,
        colleur.last_name
    );

    let mut data = EventData::new(
        summary,
        IcalDate::from_zoned(&start),
        IcalDate::from_zoned(&end),
        description,
    )
    .id(format!("{}-{}", colle.id, appointment.week));
    if let Some(room) = room_for(rooms, &colle.code) {
        data = data.location(room);
    }
    Ok(data)
}

/// Every event concerning `student`, in export order, before overlap
/// resolution.
pub fn student_events(
    colloscope: &Colloscope,
    rooms: &[Room],
    student: &Student,
    options: &ScheduleOptions,
) -> Result<Vec<EventData>> {
    colloscope
        .appointments_for(student.id)
        .into_iter()
        .map(|appointment| appointment_event(colloscope, rooms, appointment, options))
        .collect()
}

/// Build the calendar of one student, resolving overlaps with
/// `options.policy`.
pub fn student_calendar(
    colloscope: &Colloscope,
    rooms: &[Room],
    student: &Student,
    options: &ScheduleOptions,
) -> Result<Calendar> {
    let config = options.ical_config();
    let events: Vec<Event> = student_events(colloscope, rooms, student, options)?
        .into_iter()
        .map(|data| Event::new(data, &config))
        .collect();
    let found = events.len();

    let mut calendar = Calendar::new(CalendarOptions::named(calendar_name_for(student)), &config);
    calendar.add_events(events, options.policy);

    debug!(
        student = student.id,
        found,
        kept = calendar.len(),
        "student calendar built"
    );
    Ok(calendar)
}

/// Build one calendar per student, in export order.
pub fn build_calendars(
    colloscope: &Colloscope,
    rooms: &[Room],
    options: &ScheduleOptions,
) -> Result<Vec<StudentCalendar>> {
    let calendars = colloscope
        .students
        .iter()
        .map(|student| {
            Ok(StudentCalendar {
                student_id: student.id,
                file_name: file_name_for(student),
                calendar: student_calendar(colloscope, rooms, student, options)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        students = calendars.len(),
        timezone = options.timezone.name(),
        policy = %options.policy,
        "calendars built"
    );
    Ok(calendars)
}
