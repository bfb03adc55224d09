//! JSON snapshot of the last generated weekly schedule.
//!
//! The schedule is persisted verbatim and reloaded as an opaque snapshot;
//! a regeneration replaces it wholesale, never merges into it.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StorageError;
use crate::model::WeeklySchedule;

const SNAPSHOT_FILE: &str = "schedule.json";

/// Store for the generated schedule.
pub struct ScheduleSnapshot {
    path: PathBuf,
}

impl ScheduleSnapshot {
    /// Snapshot at the default location `~/.config/ritmi/schedule.json`.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = data_dir().map_err(|e| StorageError::ReadFailed {
            path: PathBuf::from(SNAPSHOT_FILE),
            message: e.to_string(),
        })?;
        Ok(Self::at(dir.join(SNAPSHOT_FILE)))
    }

    /// Snapshot at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a schedule has been stored.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist a schedule, replacing any previous one.
    pub fn save(&self, schedule: &WeeklySchedule) -> Result<(), StorageError> {
        let json =
            serde_json::to_string_pretty(schedule).map_err(|e| StorageError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, json).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Load the stored schedule.
    pub fn load(&self) -> Result<WeeklySchedule, StorageError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| StorageError::ReadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| StorageError::ReadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Delete the stored schedule, if any.
    pub fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| StorageError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}
