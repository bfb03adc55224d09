//! Schedule assembler: orchestrates one allocation run over the week.
//!
//! Seeds fixed commitments, computes free time per day, distributes the
//! variable activities (even-distribution ones first, so they get first
//! claim on free time), and returns the start-time-ordered week. The run is
//! single-threaded and synchronous; regenerating fully replaces the
//! previous schedule rather than merging into it.

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use uuid::Uuid;

use crate::clock::clock_or_zero;
use crate::distributor::distribute_week;
use crate::freetime::FreeTimeState;
use crate::model::{
    FixedCommitment, PlacedInstance, VariableActivity, WeeklySchedule, WEEK_DAYS,
};

/// Planner configuration.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Random seed for the random-distribution policy (None = from entropy).
    /// Even distribution is deterministic regardless.
    pub seed: Option<u64>,
}

/// Weekly schedule generator.
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with default config (entropy-seeded randomness).
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Generate the weekly schedule for the given inputs.
    ///
    /// Fixed commitments are trusted as already non-overlapping; if a caller
    /// supplies overlapping ones anyway, the free-interval sweep absorbs the
    /// overlap and the holes still come out right.
    pub fn generate(
        &self,
        variable: &[VariableActivity],
        fixed: &[FixedCommitment],
    ) -> WeeklySchedule {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        self.generate_with_rng(variable, fixed, &mut rng)
    }

    /// Generate with a caller-supplied RNG.
    pub fn generate_with_rng<R: Rng>(
        &self,
        variable: &[VariableActivity],
        fixed: &[FixedCommitment],
        rng: &mut R,
    ) -> WeeklySchedule {
        let mut schedule = WeeklySchedule::default();

        // Expand every fixed commitment into one instance per listed day.
        for commitment in fixed {
            for &day in &commitment.days {
                schedule.day_mut(day).push(PlacedInstance {
                    id: Uuid::new_v4().to_string(),
                    source_id: commitment.id.clone(),
                    name: commitment.name.clone(),
                    start_time: commitment.start_time.clone(),
                    end_time: commitment.end_time.clone(),
                    day,
                    is_fixed: true,
                    color: commitment.color.clone(),
                });
            }
        }

        let mut state = FreeTimeState::from_schedule(&schedule);

        // Even-distribution activities run first and get first claim on
        // free time; the rest pick over what is left.
        let ordered = variable
            .iter()
            .filter(|a| a.distribute_evenly)
            .chain(variable.iter().filter(|a| !a.distribute_evenly));

        for activity in ordered {
            for instance in distribute_week(activity, &mut state, rng) {
                schedule.day_mut(instance.day).push(instance);
            }
        }

        for day in WEEK_DAYS {
            schedule
                .day_mut(day)
                .sort_by_key(|slot| clock_or_zero(&slot.start_time));
        }

        schedule
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a weekly schedule with default planner settings.
///
/// This is the single entry point collaborators are expected to call.
pub fn generate_weekly_schedule(
    variable: &[VariableActivity],
    fixed: &[FixedCommitment],
) -> WeeklySchedule {
    Planner::new().generate(variable, fixed)
}
