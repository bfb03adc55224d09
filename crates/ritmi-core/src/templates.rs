//! Built-in starter planners.
//!
//! Each template returns a freshly-populated [`PlannerFile`] with new ids,
//! ready to be saved and generated from. Commitments that cross midnight in
//! spirit (sleep) are split at the day boundary so every entry keeps
//! `start_time < end_time`.

use uuid::Uuid;

use crate::model::{FixedCommitment, VariableActivity, WeekDay};
use crate::storage::PlannerFile;

// Category palette carried over from the web UI.
const COLOR_SLEEP: &str = "#6f42c1";
const COLOR_WORK: &str = "#dc3545";
const COLOR_MEALS: &str = "#fd7e14";
const COLOR_STUDY: &str = "#007bff";
const COLOR_EXERCISE: &str = "#28a745";
const COLOR_LEISURE: &str = "#6c757d";
const COLOR_SELF_CARE: &str = "#20c997";
const COLOR_PROJECTS: &str = "#17a2b8";

const WEEKDAYS: [WeekDay; 5] = [
    WeekDay::Monday,
    WeekDay::Tuesday,
    WeekDay::Wednesday,
    WeekDay::Thursday,
    WeekDay::Friday,
];
const WEEKEND: [WeekDay; 2] = [WeekDay::Saturday, WeekDay::Sunday];

/// Names of the built-in templates.
pub fn names() -> &'static [&'static str] {
    &["work", "study", "weekend", "exam"]
}

/// Look up a built-in template by name.
pub fn builtin(name: &str) -> Option<PlannerFile> {
    match name {
        "work" => Some(work_template()),
        "study" => Some(study_template()),
        "weekend" => Some(weekend_template()),
        "exam" => Some(exam_template()),
        _ => None,
    }
}

fn fixed(
    name: &str,
    start: &str,
    end: &str,
    days: &[WeekDay],
    color: &str,
) -> FixedCommitment {
    FixedCommitment {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        days: days.to_vec(),
        color: Some(color.to_string()),
    }
}

fn variable(name: &str, hours: f64, evenly: bool, color: &str) -> VariableActivity {
    VariableActivity {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        total_hours: hours,
        distribute_evenly: evenly,
        color: Some(color.to_string()),
    }
}

/// Standard 40-hour work week.
fn work_template() -> PlannerFile {
    PlannerFile {
        fixed: vec![
            fixed("Sleep", "23:00", "24:00", &WEEKDAYS, COLOR_SLEEP),
            fixed("Sleep", "00:00", "07:00", &WEEKDAYS, COLOR_SLEEP),
            fixed("Sleep", "00:00", "09:00", &WEEKEND, COLOR_SLEEP),
            fixed("Work", "09:00", "13:00", &WEEKDAYS, COLOR_WORK),
            fixed("Work", "14:00", "18:00", &WEEKDAYS, COLOR_WORK),
            fixed("Breakfast", "07:30", "08:00", &WEEKDAYS, COLOR_MEALS),
            fixed("Lunch", "13:00", "14:00", &WEEKDAYS, COLOR_MEALS),
            fixed("Dinner", "20:00", "21:00", &crate::model::WEEK_DAYS, COLOR_MEALS),
        ],
        variable: vec![
            variable("Exercise", 4.0, true, COLOR_EXERCISE),
            variable("Personal time", 10.0, false, COLOR_SELF_CARE),
            variable("Side projects", 6.0, false, COLOR_PROJECTS),
        ],
        timezone: None,
    }
}

/// Student week with morning and afternoon classes.
fn study_template() -> PlannerFile {
    let mwf = [WeekDay::Monday, WeekDay::Wednesday, WeekDay::Friday];
    let tt = [WeekDay::Tuesday, WeekDay::Thursday];

    PlannerFile {
        fixed: vec![
            fixed("Sleep", "23:30", "24:00", &WEEKDAYS, COLOR_SLEEP),
            fixed("Sleep", "00:00", "07:30", &WEEKDAYS, COLOR_SLEEP),
            fixed("Sleep", "00:00", "09:00", &WEEKEND, COLOR_SLEEP),
            fixed("Morning classes", "09:00", "13:00", &mwf, COLOR_STUDY),
            fixed("Afternoon classes", "15:00", "19:00", &tt, COLOR_STUDY),
            fixed("Breakfast", "08:00", "08:30", &WEEKDAYS, COLOR_MEALS),
            fixed("Lunch", "13:00", "14:00", &WEEKDAYS, COLOR_MEALS),
            fixed("Dinner", "20:00", "21:00", &crate::model::WEEK_DAYS, COLOR_MEALS),
            fixed("Group study", "16:00", "18:00", &[WeekDay::Wednesday], COLOR_STUDY),
        ],
        variable: vec![
            variable("Individual study", 15.0, true, COLOR_STUDY),
            variable("Exercise", 3.0, true, COLOR_EXERCISE),
            variable("Free time", 10.0, false, COLOR_LEISURE),
        ],
        timezone: None,
    }
}

/// Relaxed weekend or vacation week.
fn weekend_template() -> PlannerFile {
    let all = crate::model::WEEK_DAYS;

    PlannerFile {
        fixed: vec![
            fixed("Sleep", "00:00", "09:00", &all, COLOR_SLEEP),
            fixed("Breakfast", "09:30", "10:30", &all, COLOR_MEALS),
            fixed("Lunch", "14:00", "15:00", &all, COLOR_MEALS),
            fixed("Dinner", "21:00", "22:00", &all, COLOR_MEALS),
        ],
        variable: vec![
            variable("Day trips", 10.0, false, COLOR_LEISURE),
            variable("Exercise", 4.0, true, COLOR_EXERCISE),
            variable("Time with friends", 12.0, false, COLOR_LEISURE),
        ],
        timezone: None,
    }
}

/// Intensive exam preparation: early days, scheduled breaks, and three
/// evenly-spread study tracks.
fn exam_template() -> PlannerFile {
    let all = crate::model::WEEK_DAYS;

    PlannerFile {
        fixed: vec![
            fixed("Sleep", "00:00", "07:00", &all, COLOR_SLEEP),
            fixed("Breakfast", "07:00", "07:30", &all, COLOR_MEALS),
            fixed("Lunch", "13:00", "13:30", &all, COLOR_MEALS),
            fixed("Dinner", "20:00", "20:30", &all, COLOR_MEALS),
            fixed("Break", "10:30", "11:00", &all, COLOR_SELF_CARE),
            fixed("Break", "16:30", "17:00", &all, COLOR_SELF_CARE),
        ],
        variable: vec![
            variable("Study subject 1", 14.0, true, COLOR_STUDY),
            variable("Study subject 2", 14.0, true, "#0077b6"),
            variable("Study subject 3", 14.0, true, "#48cae4"),
            variable("Short exercise", 3.5, true, COLOR_EXERCISE),
            variable("Unwind time", 7.0, true, COLOR_LEISURE),
        ],
        timezone: None,
    }
}
