//! Greedy placement of a duration request into one day's free intervals.

use uuid::Uuid;

use crate::clock::format_clock;
use crate::freetime::FreeTimeState;
use crate::model::{PlacedInstance, TimeInterval, VariableActivity, WeekDay};

/// Minimum placeable block, in minutes. Fixed policy constant: fragments
/// smaller than this are left as unusable free time.
pub const MIN_BLOCK_MINUTES: i64 = 30;

/// Outcome of one day-allocation pass.
#[derive(Debug, Clone)]
pub struct DayAllocation {
    /// Instances created for this day, largest fragment first.
    pub placed: Vec<PlacedInstance>,
    /// Minutes actually placed; may be less than requested. Unmet duration
    /// is dropped silently.
    pub allocated_minutes: i64,
}

/// Place up to `request_minutes` of `activity` into the day's free
/// intervals, splitting across intervals if needed.
///
/// Free intervals are taken largest first, which favors fewer, larger
/// fragments over many tiny ones. An interval can absorb a partial fill
/// (one smaller than the remaining request) only when its span exceeds
/// [`MIN_BLOCK_MINUTES`]; an interval at exactly the minimum is used only
/// when it covers the whole remaining request. Consumed intervals shrink to
/// their leftover tail; the day's state is replaced in place.
pub fn allocate_in_day(
    activity: &VariableActivity,
    day: WeekDay,
    request_minutes: i64,
    state: &mut FreeTimeState,
) -> DayAllocation {
    let mut allocation = DayAllocation {
        placed: Vec::new(),
        allocated_minutes: 0,
    };

    if request_minutes <= 0 {
        return allocation;
    }

    let mut remaining = request_minutes;

    let mut intervals: Vec<TimeInterval> = state.day(day).to_vec();
    intervals.sort_by_key(|interval| std::cmp::Reverse(interval.span()));

    let mut kept: Vec<TimeInterval> = Vec::with_capacity(intervals.len());

    for interval in intervals {
        if remaining <= 0 {
            kept.push(interval);
            continue;
        }

        let span = interval.span();
        let usable = if span >= remaining {
            span >= MIN_BLOCK_MINUTES
        } else {
            // A partial fill must leave room beyond the minimum block, so a
            // window of exactly 30 minutes never hosts part of a larger ask.
            span > MIN_BLOCK_MINUTES
        };
        if !usable {
            kept.push(interval);
            continue;
        }

        let take = remaining.min(span);
        allocation.placed.push(PlacedInstance {
            id: Uuid::new_v4().to_string(),
            source_id: activity.id.clone(),
            name: activity.name.clone(),
            start_time: format_clock(interval.start),
            end_time: format_clock(interval.start + take),
            day,
            is_fixed: false,
            color: activity.color.clone(),
        });

        if interval.start + take < interval.end {
            kept.push(TimeInterval::new(interval.start + take, interval.end));
        }

        remaining -= take;
        allocation.allocated_minutes += take;
    }

    state.replace_day(day, kept);
    allocation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{parse_clock, DAY_MINUTES};
    use crate::model::{WeeklySchedule, WEEK_DAYS};

    fn activity(name: &str) -> VariableActivity {
        VariableActivity {
            id: format!("{name}-id"),
            name: name.to_string(),
            total_hours: 0.0,
            distribute_evenly: false,
            color: None,
        }
    }

    fn state_with(day: WeekDay, intervals: Vec<TimeInterval>) -> FreeTimeState {
        let mut state = FreeTimeState::from_schedule(&WeeklySchedule::default());
        for other in WEEK_DAYS {
            if other != day {
                state.replace_day(other, Vec::new());
            }
        }
        state.replace_day(day, intervals);
        state
    }

    fn minutes(slot: &PlacedInstance) -> i64 {
        parse_clock(&slot.end_time).unwrap() - parse_clock(&slot.start_time).unwrap()
    }

    #[test]
    fn allocates_at_interval_start() {
        let mut state = state_with(WeekDay::Monday, vec![TimeInterval::new(480, 1260)]);
        let out = allocate_in_day(&activity("Study"), WeekDay::Monday, 60, &mut state);

        assert_eq!(out.allocated_minutes, 60);
        assert_eq!(out.placed.len(), 1);
        assert_eq!(out.placed[0].start_time, "08:00");
        assert_eq!(out.placed[0].end_time, "09:00");
        assert!(!out.placed[0].is_fixed);
        assert_eq!(state.day(WeekDay::Monday), &[TimeInterval::new(540, 1260)]);
    }

    #[test]
    fn splits_across_intervals_largest_first() {
        let mut state = state_with(
            WeekDay::Tuesday,
            vec![TimeInterval::new(0, 40), TimeInterval::new(600, 660)],
        );
        let out = allocate_in_day(&activity("Deep work"), WeekDay::Tuesday, 90, &mut state);

        assert_eq!(out.allocated_minutes, 90);
        assert_eq!(out.placed.len(), 2);
        // 60-minute interval first, then the 40-minute one absorbs the rest.
        assert_eq!(out.placed[0].start_time, "10:00");
        assert_eq!(out.placed[0].end_time, "11:00");
        assert_eq!(out.placed[1].start_time, "00:00");
        assert_eq!(out.placed[1].end_time, "00:30");
        assert_eq!(state.day(WeekDay::Tuesday), &[TimeInterval::new(30, 40)]);
    }

    #[test]
    fn minimum_window_rejects_larger_request() {
        let mut state = state_with(WeekDay::Monday, vec![TimeInterval::new(480, 510)]);
        let out = allocate_in_day(&activity("Study"), WeekDay::Monday, 60, &mut state);

        assert!(out.placed.is_empty());
        assert_eq!(out.allocated_minutes, 0);
        // The window is reserved untouched.
        assert_eq!(state.day(WeekDay::Monday), &[TimeInterval::new(480, 510)]);
    }

    #[test]
    fn minimum_window_accepts_exact_request() {
        let mut state = state_with(WeekDay::Monday, vec![TimeInterval::new(480, 510)]);
        let out = allocate_in_day(&activity("Study"), WeekDay::Monday, 30, &mut state);

        assert_eq!(out.allocated_minutes, 30);
        assert_eq!(out.placed.len(), 1);
        assert!(state.day(WeekDay::Monday).is_empty());
    }

    #[test]
    fn sub_minimum_fragments_are_reserved() {
        let mut state = state_with(
            WeekDay::Friday,
            vec![TimeInterval::new(0, 20), TimeInterval::new(100, 125)],
        );
        let out = allocate_in_day(&activity("Errand"), WeekDay::Friday, 45, &mut state);

        assert!(out.placed.is_empty());
        assert_eq!(state.day(WeekDay::Friday).len(), 2);
    }

    #[test]
    fn partial_allocation_is_silent() {
        let mut state = state_with(WeekDay::Sunday, vec![TimeInterval::new(0, 120)]);
        let out = allocate_in_day(&activity("Marathon"), WeekDay::Sunday, 500, &mut state);

        assert_eq!(out.allocated_minutes, 120);
        assert!(state.day(WeekDay::Sunday).is_empty());
    }

    #[test]
    fn placed_minutes_match_allocated_total() {
        let mut state = state_with(
            WeekDay::Wednesday,
            vec![
                TimeInterval::new(0, 90),
                TimeInterval::new(200, 260),
                TimeInterval::new(400, 1000),
            ],
        );
        let out = allocate_in_day(&activity("Project"), WeekDay::Wednesday, 300, &mut state);

        let placed_total: i64 = out.placed.iter().map(minutes).sum();
        assert_eq!(placed_total, out.allocated_minutes);
        assert_eq!(placed_total, 300);
    }

    #[test]
    fn zero_request_leaves_state_untouched() {
        let mut state = state_with(WeekDay::Monday, vec![TimeInterval::new(0, DAY_MINUTES)]);
        let out = allocate_in_day(&activity("Nothing"), WeekDay::Monday, 0, &mut state);

        assert!(out.placed.is_empty());
        assert_eq!(state.day(WeekDay::Monday), &[TimeInterval::new(0, DAY_MINUTES)]);
    }
}
