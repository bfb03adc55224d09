//! Free-interval computation between occupied spans of a day.
//!
//! Finds the complementary free intervals that the allocator can place
//! variable activities into.

use crate::clock::{clock_or_zero, DAY_MINUTES};
use crate::model::{TimeInterval, WeekDay, WeeklySchedule, WEEK_DAYS};

/// Compute the free intervals inside `bounds` left by `occupied`.
///
/// Occupied intervals may be unsorted, may touch the bounds, and may
/// overlap each other; overlaps collapse into a single covered span via the
/// `max` merge on the sweep cursor.
///
/// The output is disjoint, sorted by start, and together with the input
/// covers `bounds` exactly. Empty input yields the whole bounds; inputs
/// that tile the bounds exactly yield nothing.
pub fn free_intervals(occupied: &[TimeInterval], bounds: TimeInterval) -> Vec<TimeInterval> {
    if occupied.is_empty() {
        return vec![bounds];
    }

    let mut sorted: Vec<TimeInterval> = occupied.to_vec();
    sorted.sort_by_key(|interval| interval.start);

    let mut free = Vec::new();
    let mut cursor = bounds.start;

    for interval in &sorted {
        if cursor >= bounds.end {
            break;
        }
        if interval.start > cursor {
            free.push(TimeInterval::new(cursor, interval.start.min(bounds.end)));
        }
        cursor = cursor.max(interval.end);
    }

    if cursor < bounds.end {
        free.push(TimeInterval::new(cursor, bounds.end));
    }

    free
}

/// Per-day free-interval lists for one allocation run.
///
/// Owned exclusively by the run that created it: seeded from the fixed
/// instances, consumed by the allocator day by day, and discarded once the
/// final schedule is assembled.
#[derive(Debug, Clone)]
pub struct FreeTimeState {
    days: [Vec<TimeInterval>; 7],
}

impl FreeTimeState {
    /// Seed the state from the fixed instances already placed on a schedule.
    pub fn from_schedule(schedule: &WeeklySchedule) -> Self {
        let full_day = TimeInterval::new(0, DAY_MINUTES);
        let mut days: [Vec<TimeInterval>; 7] = Default::default();

        for day in WEEK_DAYS {
            let occupied: Vec<TimeInterval> = schedule
                .day(day)
                .iter()
                .map(|slot| {
                    TimeInterval::new(clock_or_zero(&slot.start_time), clock_or_zero(&slot.end_time))
                })
                .collect();
            days[day.index()] = free_intervals(&occupied, full_day);
        }

        Self { days }
    }

    /// Fully free week, one `[0, 1440)` interval per day.
    pub fn unoccupied() -> Self {
        Self::from_schedule(&WeeklySchedule::default())
    }

    /// Current free intervals of a day.
    pub fn day(&self, day: WeekDay) -> &[TimeInterval] {
        &self.days[day.index()]
    }

    /// Replace a day's free intervals after an allocation pass.
    pub fn replace_day(&mut self, day: WeekDay, intervals: Vec<TimeInterval>) {
        self.days[day.index()] = intervals;
    }

    /// Total free minutes remaining on a day.
    pub fn day_capacity(&self, day: WeekDay) -> i64 {
        self.day(day).iter().map(TimeInterval::span).sum()
    }

    /// Whether a day still has a single interval of at least `min_span`.
    pub fn has_block_of(&self, day: WeekDay, min_span: i64) -> bool {
        self.day(day).iter().any(|interval| interval.span() >= min_span)
    }
}
