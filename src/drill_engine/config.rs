//! Drill configuration, loadable from TOML. Every field has a default so an
//! empty file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::drill_engine::{checker::AnswerMode, error::DrillError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Questions in a practice-mode session.
    #[serde(default = "default_session_size")]
    pub questions_per_session: usize,
    /// Questions in a theorem, fraction or powers round.
    #[serde(default = "default_round_size")]
    pub questions_per_round: usize,
    /// Share of correct answers needed to pass a round.
    #[serde(default = "default_pass_ratio")]
    pub pass_ratio: f64,
    #[serde(default)]
    pub tolerance: Tolerance,
    /// Directory holding the player profile record.
    #[serde(default = "default_profile_dir")]
    pub profile_dir: PathBuf,
}

/// Epsilons of the numeric answer mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// For answers that are exact integers.
    #[serde(default = "default_exact")]
    pub exact: f64,
    /// For rounded measurements.
    #[serde(default = "default_measure")]
    pub measure: f64,
}

fn default_session_size() -> usize {
    10
}
fn default_round_size() -> usize {
    5
}
fn default_pass_ratio() -> f64 {
    0.6
}
fn default_exact() -> f64 {
    0.01
}
fn default_measure() -> f64 {
    0.2
}
fn default_profile_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { exact: default_exact(), measure: default_measure() }
    }
}

impl Tolerance {
    pub fn exact_mode(&self) -> AnswerMode {
        AnswerMode::Numeric { tolerance: self.exact }
    }

    pub fn measure_mode(&self) -> AnswerMode {
        AnswerMode::Numeric { tolerance: self.measure }
    }
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            questions_per_session: default_session_size(),
            questions_per_round: default_round_size(),
            pass_ratio: default_pass_ratio(),
            tolerance: Tolerance::default(),
            profile_dir: default_profile_dir(),
        }
    }
}

impl DrillConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, DrillError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, DrillError> {
        let content = std::fs::read_to_string(path).map_err(|e| DrillError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = DrillConfig::from_toml_str("").unwrap();
        assert_eq!(config, DrillConfig::default());
        assert_eq!(config.questions_per_session, 10);
        assert_eq!(config.questions_per_round, 5);
        assert_eq!(config.tolerance.exact, 0.01);
        assert_eq!(config.tolerance.measure, 0.2);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = DrillConfig::from_toml_str(
            r#"
            questions_per_session = 20
            [tolerance]
            measure = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.questions_per_session, 20);
        assert_eq!(config.pass_ratio, 0.6);
        assert_eq!(config.tolerance.exact, 0.01);
        assert_eq!(config.tolerance.measure_mode(), AnswerMode::Numeric { tolerance: 0.5 });
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = DrillConfig::from_toml_str("questions_per_session = \"dix\"").unwrap_err();
        assert!(matches!(err, DrillError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pass_ratio = 0.8\nprofile_dir = \"/tmp/joueurs\"").unwrap();
        let config = DrillConfig::load(file.path()).unwrap();
        assert_eq!(config.pass_ratio, 0.8);
        assert_eq!(config.profile_dir, PathBuf::from("/tmp/joueurs"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DrillConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, DrillError::Io { .. }));
    }
}
