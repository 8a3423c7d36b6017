//! User configuration.
//!
//! Settings are read from a JSON file. Every field is optional:
//!
//! ```json
//! {
//!   "checklist_file": "checklist.csv",
//!   "trips_file": "trips.json",
//!   "database_file": "/home/me/.local/share/tripist/tripist.db",
//!   "task_cutoff_days": 7
//! }
//! ```
//!
//! Command line flags take precedence over anything loaded here.

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ResultExt, TripistError},
    params::Cutoff,
};

/// Default checklist location, relative to the working directory.
pub const DEFAULT_CHECKLIST_FILE: &str = "checklist.csv";

/// Default number of days ahead tasks are created for.
pub const DEFAULT_TASK_CUTOFF_DAYS: i64 = 7;

/// Name of the configuration file under the XDG config directory.
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Travel checklist to expand
    pub checklist_file: PathBuf,

    /// Itinerary export listing upcoming trips
    pub trips_file: Option<PathBuf>,

    /// Local tracker database; the XDG data directory when unset
    pub database_file: Option<PathBuf>,

    /// Create tasks up to this many days before they are due
    pub task_cutoff_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checklist_file: PathBuf::from(DEFAULT_CHECKLIST_FILE),
            trips_file: None,
            database_file: None,
            task_cutoff_days: DEFAULT_TASK_CUTOFF_DAYS,
        }
    }
}

impl Config {
    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns [`TripistError::FileSystem`] if the file cannot be read,
    /// [`TripistError::Configuration`] if it is not valid configuration
    /// JSON, and [`TripistError::InvalidInput`] for a negative cutoff.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| TripistError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&json, path)
    }

    /// Loads `$XDG_CONFIG_HOME/tripist/config.json`, falling back to the
    /// defaults when there is no such file.
    pub fn load_default() -> Result<Self> {
        match xdg::BaseDirectories::with_prefix("tripist").find_config_file(CONFIG_FILE_NAME) {
            Some(path) => Self::load(path),
            None => {
                debug!("No {CONFIG_FILE_NAME} in the configuration directories, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn parse(json: &str, path: &Path) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .with_context(format!("Invalid configuration in {}", path.display()))?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.task_cutoff_days < 0 {
            return Err(TripistError::invalid_input("task_cutoff_days")
                .with_reason(format!("must not be negative, got {}", self.task_cutoff_days)));
        }
        Ok(())
    }

    /// The end of the task window for a run starting at `now`. A day count
    /// given on the command line replaces `task_cutoff_days`.
    ///
    /// # Errors
    ///
    /// Returns [`TripistError::InvalidInput`] for a negative or oversized day
    /// count and [`TripistError::Time`] when the cutoff is out of range.
    pub fn cutoff(&self, now: Timestamp, days: Option<i64>) -> Result<Timestamp> {
        Cutoff::Days(days.unwrap_or(self.task_cutoff_days)).resolve(now)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.checklist_file, PathBuf::from("checklist.csv"));
        assert_eq!(config.task_cutoff_days, 7);
        assert!(config.trips_file.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"trips_file": "trips.json", "task_cutoff_days": 14}"#).unwrap();

        let config = Config::load(&path).expect("Failed to load config");
        assert_eq!(config.trips_file, Some(PathBuf::from("trips.json")));
        assert_eq!(config.task_cutoff_days, 14);
        assert_eq!(config.checklist_file, PathBuf::from("checklist.csv"));
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let negative = temp_dir.path().join("negative.json");
        fs::write(&negative, r#"{"task_cutoff_days": -1}"#).unwrap();
        assert!(matches!(
            Config::load(&negative),
            Err(TripistError::InvalidInput { .. })
        ));

        let garbage = temp_dir.path().join("garbage.json");
        fs::write(&garbage, "task_cutoff_days = 3").unwrap();
        assert!(matches!(
            Config::load(&garbage),
            Err(TripistError::Configuration { .. })
        ));

        assert!(matches!(
            Config::load(temp_dir.path().join("missing.json")),
            Err(TripistError::FileSystem { .. })
        ));
    }

    #[test]
    fn test_cutoff() {
        let config = Config {
            task_cutoff_days: 2,
            ..Config::default()
        };
        let now: Timestamp = "2016-07-01T10:00:00Z".parse().unwrap();
        assert_eq!(
            config.cutoff(now, None).unwrap(),
            "2016-07-03T10:00:00Z".parse::<Timestamp>().unwrap()
        );
        assert_eq!(
            config.cutoff(now, Some(5)).unwrap(),
            "2016-07-06T10:00:00Z".parse::<Timestamp>().unwrap()
        );
        assert!(matches!(
            config.cutoff(now, Some(-3)),
            Err(TripistError::InvalidInput { .. })
        ));
        assert!(config.cutoff(now, Some(200_000_000_000_000)).is_err());
    }
}
