//! TOML-based planner configuration.
//!
//! Stores the user's fixed commitments and variable activities, plus a
//! timezone label the engine never interprets. The file lives at
//! `~/.config/ritmi/planner.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::model::{FixedCommitment, VariableActivity};

const PLANNER_FILE: &str = "planner.toml";

/// The persisted planner inputs.
///
/// Serialized to/from TOML at `~/.config/ritmi/planner.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerFile {
    /// Fixed weekly commitments, trusted as non-overlapping per day.
    #[serde(default)]
    pub fixed: Vec<FixedCommitment>,
    /// Variable activities to distribute over the week.
    #[serde(default)]
    pub variable: Vec<VariableActivity>,
    /// Display timezone label; informational only, never used for
    /// conversion.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl PlannerFile {
    /// Default path of the planner file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from(PLANNER_FILE),
            message: e.to_string(),
        })?;
        Ok(dir.join(PLANNER_FILE))
    }

    /// Load from the default path, falling back to an empty planner when
    /// the file does not exist yet.
    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) if path.exists() => Self::load_from(&path).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Remove a commitment or activity by id; returns whether anything
    /// was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.fixed.len() + self.variable.len();
        self.fixed.retain(|c| c.id != id);
        self.variable.retain(|a| a.id != id);
        before != self.fixed.len() + self.variable.len()
    }
}
