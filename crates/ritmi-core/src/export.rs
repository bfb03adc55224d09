//! CSV and iCalendar rendering of a weekly schedule.
//!
//! Consumers read the schedule structure only; nothing here feeds back
//! into the allocation engine.

use chrono::{Datelike, Duration, NaiveDate};

use crate::clock::{clock_or_zero, DAY_MINUTES};
use crate::model::{PlacedInstance, WeekDay, WeeklySchedule};

/// Render the schedule as CSV with a `Day,Name,Start,End,Type` header.
/// Names containing commas are quoted.
pub fn to_csv(schedule: &WeeklySchedule) -> String {
    let mut csv = String::from("Day,Name,Start,End,Type\n");

    for (day, slots) in schedule.iter_days() {
        for slot in slots {
            let name = if slot.name.contains(',') {
                format!("\"{}\"", slot.name)
            } else {
                slot.name.clone()
            };
            let kind = if slot.is_fixed { "Fixed" } else { "Flexible" };
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                day.display_name(),
                name,
                slot.start_time,
                slot.end_time,
                kind
            ));
        }
    }

    csv
}

/// Render the schedule as an iCalendar document.
///
/// `week_start` is the date of the schedule's Monday; each instance becomes
/// one VEVENT on its day of that week. End times of `"24:00"` roll over to
/// midnight of the following day. Output is deterministic for a given
/// schedule and week start.
pub fn to_ical(schedule: &WeeklySchedule, week_start: NaiveDate) -> String {
    let mut ical = String::new();
    ical.push_str("BEGIN:VCALENDAR\r\n");
    ical.push_str("VERSION:2.0\r\n");
    ical.push_str("PRODID:-//Ritmi//Weekly Planner//EN\r\n");
    ical.push_str("CALSCALE:GREGORIAN\r\n");

    let stamp = format!("{}T000000", week_start.format("%Y%m%d"));

    for (day, slots) in schedule.iter_days() {
        let date = date_of(week_start, day);
        for slot in slots {
            push_event(&mut ical, slot, date, &stamp);
        }
    }

    ical.push_str("END:VCALENDAR\r\n");
    ical
}

/// Monday of the given week plus the day's offset.
fn date_of(week_start: NaiveDate, day: WeekDay) -> NaiveDate {
    week_start + Duration::days(day.index() as i64)
}

fn push_event(ical: &mut String, slot: &PlacedInstance, date: NaiveDate, stamp: &str) {
    let kind = if slot.is_fixed {
        "Fixed commitment"
    } else {
        "Flexible activity"
    };

    ical.push_str("BEGIN:VEVENT\r\n");
    ical.push_str(&format!("UID:{}\r\n", slot.id));
    ical.push_str(&format!("DTSTAMP:{stamp}\r\n"));
    ical.push_str(&format!(
        "DTSTART:{}\r\n",
        format_datetime(date, clock_or_zero(&slot.start_time))
    ));
    ical.push_str(&format!(
        "DTEND:{}\r\n",
        format_datetime(date, clock_or_zero(&slot.end_time))
    ));
    ical.push_str(&format!("SUMMARY:{}\r\n", escape_text(&slot.name)));
    ical.push_str(&format!("DESCRIPTION:{kind}\r\n"));
    if let Some(color) = &slot.color {
        ical.push_str(&format!("CATEGORIES:{}\r\n", escape_text(color)));
    }
    ical.push_str("END:VEVENT\r\n");
}

/// Local date-time in iCalendar basic format, rolling minutes past the end
/// of the day onto the next date.
fn format_datetime(date: NaiveDate, minutes: i64) -> String {
    let (date, minutes) = if minutes >= DAY_MINUTES {
        (date + Duration::days(1), minutes - DAY_MINUTES)
    } else {
        (date, minutes)
    };
    format!(
        "{:04}{:02}{:02}T{:02}{:02}00",
        date.year(),
        date.month(),
        date.day(),
        minutes / 60,
        minutes % 60
    )
}

/// Escape TEXT values per RFC 5545.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
