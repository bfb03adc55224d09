//! # Ritmi Core Library
//!
//! This library provides the core business logic for the Ritmi weekly
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI layer being a thin
//! wrapper over the same core library.
//!
//! ## Architecture
//!
//! - **Allocation engine**: pure, single-threaded placement of fixed
//!   commitments and variable activities onto a seven-day, minute-granularity
//!   calendar (free-interval sweep, greedy bin-packing, even/random
//!   distribution)
//! - **Storage**: TOML-based planner configuration and a JSON snapshot of
//!   the last generated schedule
//! - **Export**: CSV and iCalendar rendering of a weekly schedule
//!
//! ## Key Components
//!
//! - [`Planner`]: schedule assembler, the single entry point of the engine
//! - [`PlannerFile`]: persisted commitments and activities
//! - [`WeeklySchedule`]: the durable output structure

pub mod allocator;
pub mod clock;
pub mod distributor;
pub mod error;
pub mod export;
pub mod freetime;
pub mod model;
pub mod planner;
pub mod storage;
pub mod templates;

pub use allocator::{allocate_in_day, DayAllocation, MIN_BLOCK_MINUTES};
pub use clock::{format_clock, parse_clock, DAY_MINUTES};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use freetime::{free_intervals, FreeTimeState};
pub use model::{
    FixedCommitment, PlacedInstance, TimeInterval, VariableActivity, WeekDay, WeeklySchedule,
    WEEK_DAYS,
};
pub use planner::{generate_weekly_schedule, Planner, PlannerConfig};
pub use storage::{PlannerFile, ScheduleSnapshot};
