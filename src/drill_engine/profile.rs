//! Local player profile: a display name and a class label, stored as one JSON
//! record under a fixed key.
//!
//! The record is a best-effort cache. A missing or unreadable record means
//! "no profile" and the player registers again.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::drill_engine::{config::DrillConfig, error::DrillError};

pub const PROFILE_KEY: &str = "maths3e_player";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub class_label: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store whose record lives in `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        ProfileStore { path: dir.as_ref().join(format!("{PROFILE_KEY}.json")) }
    }

    /// Store under the configured `profile_dir`.
    pub fn from_config(config: &DrillConfig) -> Self {
        Self::new(&config.profile_dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Option<PlayerProfile> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read profile");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed profile, ignoring");
                None
            }
        }
    }

    pub fn register(&self, name: &str, class_label: &str) -> Result<PlayerProfile, DrillError> {
        let profile = PlayerProfile {
            name: name.trim().to_string(),
            class_label: class_label.trim().to_string(),
            created_at: Utc::now(),
        };
        self.save(&profile)?;
        tracing::debug!(name = %profile.name, "profile registered");
        Ok(profile)
    }

    pub fn save(&self, profile: &PlayerProfile) -> Result<(), DrillError> {
        let json = serde_json::to_string(profile)?;
        std::fs::write(&self.path, json).map_err(|e| DrillError::io(&self.path, e))
    }

    /// Remove the record. Logging out without a profile is fine.
    pub fn logout(&self) -> Result<(), DrillError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DrillError::io(&self.path, e)),
        }
    }
}
