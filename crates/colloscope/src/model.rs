//! Serde model of the colloscope export and the rooms table.
//!
//! Field names on the wire are the export's French keys; the Rust side uses
//! English names.

use serde::{Deserialize, Serialize};

use crate::error::{ColloscopeError, Result};

/// First and last name of a student or a colleur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub user: User,
}

/// A colle group and its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    #[serde(rename = "eleves", default)]
    pub students: Vec<u64>,
}

/// One occurrence: a colle slot in a given week, assigned to a group or to
/// individual students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub colle: u64,
    #[serde(rename = "semaine")]
    pub week: u64,
    #[serde(rename = "groupe", default)]
    pub group: Option<u64>,
    #[serde(rename = "eleves", default)]
    pub students: Vec<u64>,
}

/// A weekly colle slot: who examines which teaching, on which weekday and
/// at what time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colle {
    pub id: u64,
    pub colleur: u64,
    #[serde(rename = "enseignement")]
    pub teaching: u64,
    /// Days after the week's Monday (0 = Monday).
    #[serde(rename = "jour")]
    pub day: i64,
    #[serde(rename = "heure")]
    pub hour: i64,
    pub minutes: i64,
    #[serde(rename = "heure_fin")]
    pub end_hour: i64,
    #[serde(rename = "minutes_fin")]
    pub end_minutes: i64,
    /// Short code shown in summaries, also the key into the rooms table.
    #[serde(rename = "identifiant")]
    pub code: String,
}

impl Colle {
    /// Session length in minutes.
    pub fn duration_minutes(&self) -> Result<i64> {
        let hours = self.end_hour.checked_sub(self.hour);
        let minutes = self.end_minutes.checked_sub(self.minutes);
        hours
            .and_then(|h| h.checked_mul(60))
            .zip(minutes)
            .and_then(|(h, m)| h.checked_add(m))
            .ok_or_else(|| ColloscopeError::OutOfRange("duration", self.code.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub id: u64,
    /// Monday of the week as `dd/mm`.
    #[serde(rename = "date_lundi")]
    pub monday: String,
}

impl Week {
    /// Parse `monday` into `(day, month)`.
    pub fn monday_day_month(&self) -> Result<(u32, u32)> {
        let invalid = || ColloscopeError::InvalidMonday(self.monday.clone());
        let (day, month) = self.monday.split_once('/').ok_or_else(invalid)?;
        let day = day.trim().parse().map_err(|_| invalid())?;
        let month = month.trim().parse().map_err(|_| invalid())?;
        Ok((day, month))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colleur {
    pub id: u64,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    #[serde(rename = "nom")]
    pub name: String,
}

/// A taught subject: full discipline name plus its short form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teaching {
    pub id: u64,
    #[serde(rename = "raccourci")]
    pub short_name: String,
    pub discipline: Discipline,
}

/// Room assigned to a colle code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room: String,
}

/// The whole colloscope export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colloscope {
    #[serde(rename = "eleves", default)]
    pub students: Vec<Student>,
    #[serde(rename = "groupes", default)]
    pub groups: Vec<Group>,
    #[serde(rename = "rendezvous", default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub colles: Vec<Colle>,
    #[serde(rename = "semaines", default)]
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub colleurs: Vec<Colleur>,
    #[serde(rename = "enseignements", default)]
    pub teachings: Vec<Teaching>,
}

impl Colloscope {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn student(&self, id: u64) -> Result<&Student> {
        find(&self.students, "student", id, |s| s.id)
    }

    pub fn colle(&self, id: u64) -> Result<&Colle> {
        find(&self.colles, "colle", id, |c| c.id)
    }

    pub fn week(&self, id: u64) -> Result<&Week> {
        find(&self.weeks, "week", id, |w| w.id)
    }

    pub fn colleur(&self, id: u64) -> Result<&Colleur> {
        find(&self.colleurs, "colleur", id, |c| c.id)
    }

    pub fn teaching(&self, id: u64) -> Result<&Teaching> {
        find(&self.teachings, "teaching", id, |t| t.id)
    }

    /// Ids of the groups `student` belongs to.
    pub fn groups_of(&self, student: u64) -> Vec<u64> {
        self.groups
            .iter()
            .filter(|g| g.students.contains(&student))
            .map(|g| g.id)
            .collect()
    }

    /// Appointments concerning `student`, through one of their groups or by
    /// being listed individually. Export order is kept.
    pub fn appointments_for(&self, student: u64) -> Vec<&Appointment> {
        let groups = self.groups_of(student);
        self.appointments
            .iter()
            .filter(|a| {
                a.group.is_some_and(|g| groups.contains(&g)) || a.students.contains(&student)
            })
            .collect()
    }
}

/// Parse the rooms table.
pub fn rooms_from_json(json: &str) -> Result<Vec<Room>> {
    Ok(serde_json::from_str(json)?)
}

/// Room for a colle code, if any.
pub fn room_for<'a>(rooms: &'a [Room], code: &str) -> Option<&'a str> {
    rooms.iter().find(|r| r.id == code).map(|r| r.room.as_str())
}

fn find<'a, T>(items: &'a [T], kind: &'static str, id: u64, key: impl Fn(&T) -> u64) -> Result<&'a T> {
    items
        .iter()
        .find(|item| key(*item) == id)
        .ok_or(ColloscopeError::UnknownReference { kind, id })
}
