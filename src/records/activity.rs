use crate::records::{load_collection, new_id, save_collection, today, RecordError};
use crate::store::Storage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

pub const ACTIVITY_KEY: &str = "omni_activity";

/// Flat burn estimate per minute of activity
pub const CALORIES_PER_MINUTE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Walking,
    Running,
    Cycling,
    Gym,
    Yoga,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Walking,
        ActivityKind::Running,
        ActivityKind::Cycling,
        ActivityKind::Gym,
        ActivityKind::Yoga,
        ActivityKind::Swimming,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
            ActivityKind::Cycling => "Cycling",
            ActivityKind::Gym => "Gym",
            ActivityKind::Yoga => "Yoga",
            ActivityKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RecordError::Invalid(format!("unknown activity '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub duration_minutes: u32,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityTotals {
    pub minutes: u32,
    pub calories: u32,
}

/// Logged workouts, newest first
pub struct ActivityLog<S: Storage> {
    storage: S,
    entries: Vec<ActivityEntry>,
}

impl<S: Storage> ActivityLog<S> {
    pub fn open(storage: S) -> Result<Self, RecordError> {
        let entries = load_collection(&storage, ACTIVITY_KEY)?;
        Ok(Self { storage, entries })
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn add(&mut self, kind: ActivityKind, minutes: u32) -> Result<ActivityEntry, RecordError> {
        if minutes == 0 {
            return Err(RecordError::Invalid(
                "duration must be at least one minute".to_string(),
            ));
        }

        let entry = ActivityEntry {
            id: new_id(),
            kind,
            duration_minutes: minutes,
            date: today(),
            calories: Some(minutes.saturating_mul(CALORIES_PER_MINUTE)),
        };
        let mut entries = self.entries.clone();
        entries.insert(0, entry.clone());
        self.commit(entries)?;
        info!(kind = %kind, minutes, "logged activity");
        Ok(entry)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), RecordError> {
        let entries: Vec<ActivityEntry> =
            self.entries.iter().filter(|e| e.id != id).cloned().collect();
        if entries.len() == self.entries.len() {
            return Err(RecordError::NotFound(id.to_string()));
        }
        self.commit(entries)
    }

    pub fn totals(&self) -> ActivityTotals {
        self.entries
            .iter()
            .fold(ActivityTotals::default(), |acc, e| ActivityTotals {
                minutes: acc.minutes.saturating_add(e.duration_minutes),
                calories: acc.calories.saturating_add(e.calories.unwrap_or(0)),
            })
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, entries: Vec<ActivityEntry>) -> Result<(), RecordError> {
        save_collection(&mut self.storage, ACTIVITY_KEY, &entries)?;
        self.entries = entries;
        Ok(())
    }
}
