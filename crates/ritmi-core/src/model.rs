//! Data model for the weekly planner.
//!
//! Fixed commitments and variable activities are supplied whole at the
//! start of an allocation run; the [`WeeklySchedule`] is its sole durable
//! output.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Day of the week, the seven keys of a weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Canonical iteration order. Even distribution walks days in this order,
/// which is what makes it deterministic.
pub const WEEK_DAYS: [WeekDay; 7] = [
    WeekDay::Monday,
    WeekDay::Tuesday,
    WeekDay::Wednesday,
    WeekDay::Thursday,
    WeekDay::Friday,
    WeekDay::Saturday,
    WeekDay::Sunday,
];

impl WeekDay {
    /// Position in the canonical week, 0 = Monday.
    pub fn index(self) -> usize {
        match self {
            WeekDay::Monday => 0,
            WeekDay::Tuesday => 1,
            WeekDay::Wednesday => 2,
            WeekDay::Thursday => 3,
            WeekDay::Friday => 4,
            WeekDay::Saturday => 5,
            WeekDay::Sunday => 6,
        }
    }

    /// Lowercase name as used in the serialized schedule.
    pub fn name(self) -> &'static str {
        match self {
            WeekDay::Monday => "monday",
            WeekDay::Tuesday => "tuesday",
            WeekDay::Wednesday => "wednesday",
            WeekDay::Thursday => "thursday",
            WeekDay::Friday => "friday",
            WeekDay::Saturday => "saturday",
            WeekDay::Sunday => "sunday",
        }
    }

    /// Capitalized display name for exports.
    pub fn display_name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
        }
    }

    /// Parse a day name; accepts the full lowercase name or a three-letter
    /// abbreviation ("mon".."sun").
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        let lower = name.to_ascii_lowercase();
        for day in WEEK_DAYS {
            if day.name() == lower || day.name()[..3] == lower {
                return Ok(day);
            }
        }
        Err(ValidationError::UnknownWeekDay(name.to_string()))
    }
}

/// A half-open span of minutes within a day, `0 <= start < end <= 1440`.
///
/// Represents either an occupied or a free span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: i64,
    pub end: i64,
}

impl TimeInterval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of the interval in minutes.
    pub fn span(&self) -> i64 {
        self.end - self.start
    }
}

/// A recurring weekly commitment with a fixed start and end time.
///
/// Trusted input: times are pre-validated "HH:MM" strings with
/// `start_time < end_time`, and commitments on the same day do not overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedCommitment {
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<WeekDay>,
    #[serde(default)]
    pub color: Option<String>,
}

/// A weekly activity with a total duration but no fixed position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableActivity {
    pub id: String,
    pub name: String,
    pub total_hours: f64,
    pub distribute_evenly: bool,
    #[serde(default)]
    pub color: Option<String>,
}

impl VariableActivity {
    /// Total requested minutes for the week.
    pub fn total_minutes(&self) -> i64 {
        (self.total_hours * 60.0).round() as i64
    }
}

/// One placed block in the generated schedule.
///
/// A fixed commitment listing N days expands into N instances sharing
/// `source_id`; a variable activity expands into as many instances as
/// free-interval fragments were needed. Every instance gets a fresh `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedInstance {
    pub id: String,
    pub source_id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub day: WeekDay,
    pub is_fixed: bool,
    #[serde(default)]
    pub color: Option<String>,
}

/// The generated week: every day maps to a start-time-ordered list of
/// placed instances. Days with nothing scheduled hold an empty list,
/// never go absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub monday: Vec<PlacedInstance>,
    #[serde(default)]
    pub tuesday: Vec<PlacedInstance>,
    #[serde(default)]
    pub wednesday: Vec<PlacedInstance>,
    #[serde(default)]
    pub thursday: Vec<PlacedInstance>,
    #[serde(default)]
    pub friday: Vec<PlacedInstance>,
    #[serde(default)]
    pub saturday: Vec<PlacedInstance>,
    #[serde(default)]
    pub sunday: Vec<PlacedInstance>,
}

impl WeeklySchedule {
    /// Instances placed on the given day.
    pub fn day(&self, day: WeekDay) -> &[PlacedInstance] {
        match day {
            WeekDay::Monday => &self.monday,
            WeekDay::Tuesday => &self.tuesday,
            WeekDay::Wednesday => &self.wednesday,
            WeekDay::Thursday => &self.thursday,
            WeekDay::Friday => &self.friday,
            WeekDay::Saturday => &self.saturday,
            WeekDay::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: WeekDay) -> &mut Vec<PlacedInstance> {
        match day {
            WeekDay::Monday => &mut self.monday,
            WeekDay::Tuesday => &mut self.tuesday,
            WeekDay::Wednesday => &mut self.wednesday,
            WeekDay::Thursday => &mut self.thursday,
            WeekDay::Friday => &mut self.friday,
            WeekDay::Saturday => &mut self.saturday,
            WeekDay::Sunday => &mut self.sunday,
        }
    }

    /// Iterate days in canonical order with their instance lists.
    pub fn iter_days(&self) -> impl Iterator<Item = (WeekDay, &[PlacedInstance])> {
        WEEK_DAYS.iter().map(move |&d| (d, self.day(d)))
    }

    /// All instances across the week, in day-then-start order.
    pub fn all_instances(&self) -> impl Iterator<Item = &PlacedInstance> {
        self.iter_days().flat_map(|(_, slots)| slots.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_day_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WeekDay::Monday).unwrap(), "\"monday\"");
        let day: WeekDay = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(day, WeekDay::Sunday);
    }

    #[test]
    fn week_day_from_name() {
        assert_eq!(WeekDay::from_name("wednesday").unwrap(), WeekDay::Wednesday);
        assert_eq!(WeekDay::from_name("Wed").unwrap(), WeekDay::Wednesday);
        assert!(WeekDay::from_name("someday").is_err());
    }

    #[test]
    fn total_minutes_rounds() {
        let activity = VariableActivity {
            id: "a".to_string(),
            name: "Reading".to_string(),
            total_hours: 1.5,
            distribute_evenly: true,
            color: None,
        };
        assert_eq!(activity.total_minutes(), 90);

        let fractional = VariableActivity {
            total_hours: 0.255,
            ..activity
        };
        assert_eq!(fractional.total_minutes(), 15);
    }

    #[test]
    fn schedule_serialization_keeps_all_days() {
        let schedule = WeeklySchedule::default();
        let json = serde_json::to_value(&schedule).unwrap();
        for day in WEEK_DAYS {
            assert!(json.get(day.name()).is_some(), "missing day {}", day.name());
        }
    }

    #[test]
    fn commitment_serialization_round_trips() {
        let commitment = FixedCommitment {
            id: "fixed-1".to_string(),
            name: "Morning standup".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            days: vec![WeekDay::Monday, WeekDay::Thursday],
            color: Some("#dc3545".to_string()),
        };
        let json = serde_json::to_string(&commitment).unwrap();
        let decoded: FixedCommitment = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.days, commitment.days);
        assert_eq!(decoded.start_time, "09:00");
    }
}
