//! Weekly distribution of a variable activity across the seven days.
//!
//! Two policies, selected per activity by its `distribute_evenly` flag:
//! an even floor/remainder split over the available days, or a randomized
//! spread driven by an injected RNG. Even distribution is deterministic for
//! identical inputs; the random policy intentionally yields a different
//! schedule on every regeneration.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::allocator::{allocate_in_day, MIN_BLOCK_MINUTES};
use crate::freetime::FreeTimeState;
use crate::model::{PlacedInstance, VariableActivity, WeekDay, WEEK_DAYS};

/// Distribute an activity's total weekly minutes over the week, mutating
/// the free-time state and returning the instances placed.
pub fn distribute_week<R: Rng>(
    activity: &VariableActivity,
    state: &mut FreeTimeState,
    rng: &mut R,
) -> Vec<PlacedInstance> {
    let total = activity.total_minutes();
    if total <= 0 {
        return Vec::new();
    }

    if activity.distribute_evenly {
        distribute_evenly(activity, total, state)
    } else {
        distribute_randomly(activity, total, state, rng)
    }
}

/// Even split: each available day gets `floor(total / days)` minutes, and
/// the first `total % days` days in canonical week order get one extra
/// minute each.
fn distribute_evenly(
    activity: &VariableActivity,
    total: i64,
    state: &mut FreeTimeState,
) -> Vec<PlacedInstance> {
    let available: Vec<WeekDay> = WEEK_DAYS
        .iter()
        .copied()
        .filter(|&day| state.has_block_of(day, MIN_BLOCK_MINUTES))
        .collect();

    if available.is_empty() {
        return Vec::new();
    }

    let per_day = total / available.len() as i64;
    let mut remainder = total % available.len() as i64;

    let mut placed = Vec::new();
    for day in available {
        let mut quota = per_day;
        if remainder > 0 {
            quota += 1;
            remainder -= 1;
        }
        if quota > 0 {
            placed.extend(allocate_in_day(activity, day, quota, state).placed);
        }
    }

    placed
}

/// Randomized spread: shuffle the days that have at least the minimum
/// block of capacity, draw one random target per day, then sweep the week
/// in canonical order for whatever is still unplaced.
fn distribute_randomly<R: Rng>(
    activity: &VariableActivity,
    total: i64,
    state: &mut FreeTimeState,
    rng: &mut R,
) -> Vec<PlacedInstance> {
    let mut candidates: Vec<(WeekDay, i64)> = WEEK_DAYS
        .iter()
        .copied()
        .filter_map(|day| {
            let capacity = state.day_capacity(day);
            (capacity >= MIN_BLOCK_MINUTES).then_some((day, capacity))
        })
        .collect();

    if candidates.is_empty() {
        return Vec::new();
    }

    candidates.shuffle(rng);

    let mut placed = Vec::new();
    let mut remaining = total;

    for (day, capacity) in candidates {
        if remaining <= 0 {
            break;
        }

        let draw = (rng.gen::<f64>() * capacity as f64).floor() as i64;
        let target = remaining.min(draw.max(MIN_BLOCK_MINUTES));

        let allocation = allocate_in_day(activity, day, target, state);
        remaining -= allocation.allocated_minutes;
        placed.extend(allocation.placed);
    }

    // Draws may under-allocate relative to capacity; a second week-order
    // pass drains whatever placeable free time is left.
    if remaining > 0 {
        for day in WEEK_DAYS {
            if remaining <= 0 {
                break;
            }
            if state.day(day).is_empty() {
                continue;
            }
            let allocation = allocate_in_day(activity, day, remaining, state);
            remaining -= allocation.allocated_minutes;
            placed.extend(allocation.placed);
        }
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::parse_clock;
    use crate::model::{TimeInterval, WeeklySchedule};
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn activity(hours: f64, evenly: bool) -> VariableActivity {
        VariableActivity {
            id: "var-1".to_string(),
            name: "Study".to_string(),
            total_hours: hours,
            distribute_evenly: evenly,
            color: None,
        }
    }

    fn rng() -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(42)
    }

    fn placed_minutes(placed: &[PlacedInstance]) -> i64 {
        placed
            .iter()
            .map(|slot| {
                parse_clock(&slot.end_time).unwrap() - parse_clock(&slot.start_time).unwrap()
            })
            .sum()
    }

    #[test]
    fn even_split_conserves_total() {
        let mut state = FreeTimeState::unoccupied();
        let placed = distribute_week(&activity(7.0, true), &mut state, &mut rng());
        assert_eq!(placed_minutes(&placed), 420);
        // One 60-minute block on each fully free day.
        assert_eq!(placed.len(), 7);
    }

    #[test]
    fn even_split_hands_remainder_to_first_days() {
        let mut state = FreeTimeState::unoccupied();
        // 200 minutes over 7 days: floor 28, remainder 4, so mon-thu get 29.
        let placed = distribute_week(&activity(200.0 / 60.0, true), &mut state, &mut rng());

        assert_eq!(placed_minutes(&placed), 200);
        let monday: i64 = placed_minutes(
            &placed
                .iter()
                .filter(|p| p.day == WeekDay::Monday)
                .cloned()
                .collect::<Vec<_>>(),
        );
        let friday: i64 = placed_minutes(
            &placed
                .iter()
                .filter(|p| p.day == WeekDay::Friday)
                .cloned()
                .collect::<Vec<_>>(),
        );
        assert_eq!(monday, 29);
        assert_eq!(friday, 28);
    }

    #[test]
    fn even_split_skips_days_without_usable_block() {
        let mut state = FreeTimeState::unoccupied();
        // Monday keeps only a sub-minimum sliver.
        state.replace_day(WeekDay::Monday, vec![TimeInterval::new(0, 20)]);

        let placed = distribute_week(&activity(6.0, true), &mut state, &mut rng());
        assert!(placed.iter().all(|p| p.day != WeekDay::Monday));
        assert_eq!(placed_minutes(&placed), 360);
    }

    #[test]
    fn no_available_days_places_nothing() {
        let mut state = FreeTimeState::unoccupied();
        for day in WEEK_DAYS {
            state.replace_day(day, vec![TimeInterval::new(0, 20)]);
        }

        assert!(distribute_week(&activity(5.0, true), &mut state, &mut rng()).is_empty());
        assert!(distribute_week(&activity(5.0, false), &mut state, &mut rng()).is_empty());
    }

    #[test]
    fn zero_hours_places_nothing() {
        let mut state = FreeTimeState::unoccupied();
        assert!(distribute_week(&activity(0.0, true), &mut state, &mut rng()).is_empty());
    }

    #[test]
    fn random_spread_places_full_total_when_capacity_allows() {
        let mut state = FreeTimeState::unoccupied();
        let placed = distribute_week(&activity(10.0, false), &mut state, &mut rng());
        assert_eq!(placed_minutes(&placed), 600);
    }

    #[test]
    fn random_spread_is_deterministic_under_a_fixed_seed() {
        let run = || {
            let mut state = FreeTimeState::unoccupied();
            let placed = distribute_week(&activity(8.0, false), &mut state, &mut rng());
            placed
                .iter()
                .map(|p| (p.day, p.start_time.clone(), p.end_time.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn random_spread_respects_free_intervals() {
        let mut state = FreeTimeState::unoccupied();
        for day in WEEK_DAYS {
            state.replace_day(day, vec![TimeInterval::new(540, 720)]);
        }

        let placed = distribute_week(&activity(12.0, false), &mut state, &mut rng());
        for slot in &placed {
            let start = parse_clock(&slot.start_time).unwrap();
            let end = parse_clock(&slot.end_time).unwrap();
            assert!(start >= 540 && end <= 720, "{slot:?} outside free window");
        }
        // 12h asked, 3h per day available at most.
        assert!(placed_minutes(&placed) <= 7 * 180);
    }
}
