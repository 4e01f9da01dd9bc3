//! Runtime settings
//!
//! Loaded from a JSON file named by `MAN_WITH_A_GUN_SETTINGS`. Missing
//! fields take their defaults; a missing or broken file falls back to
//! `Settings::default()`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "MAN_WITH_A_GUN_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target layout seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Minimum time between presented frames (terminal adapter pacing)
    pub frame_interval_ms: u64,
    /// Play field pixels per terminal column
    pub cell_width: u16,
    /// Play field pixels per half-row (each terminal row shows two)
    pub cell_height: u16,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_interval_ms: 16,
            cell_width: 10,
            cell_height: 10,
            log_file: None,
        }
    }
}

/// Why a settings file was rejected
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "malformed settings: {err}"),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Where the active settings came from
#[derive(Debug)]
pub enum LoadOutcome {
    /// No settings file configured
    Defaults,
    Loaded(PathBuf),
    /// The configured file was rejected and defaults are in use
    Fallback(PathBuf, SettingsError),
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        Self::from_json(&json)
    }

    /// Load settings from the file named by `MAN_WITH_A_GUN_SETTINGS`
    ///
    /// Never fails: a bad file yields defaults. The logger is configured from
    /// these settings, so the outcome is returned for the caller to log.
    pub fn load() -> (Self, LoadOutcome) {
        Self::load_from(std::env::var_os(SETTINGS_ENV).map(PathBuf::from))
    }

    /// Load from an optional settings path, falling back to defaults
    pub fn load_from(path: Option<PathBuf>) -> (Self, LoadOutcome) {
        let Some(path) = path else {
            return (Self::default(), LoadOutcome::Defaults);
        };
        match Self::from_path(&path) {
            Ok(settings) => (settings, LoadOutcome::Loaded(path)),
            Err(err) => (Self::default(), LoadOutcome::Fallback(path, err)),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(SettingsError::Invalid("cell size must be non-zero"));
        }
        Ok(())
    }

    /// Configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.frame_interval_ms, 16);
        assert_eq!(settings.cell_width, 10);
        assert_eq!(settings.resolve_seed(), 42);
    }

    #[test]
    fn test_round_trip_through_json() {
        let settings = Settings {
            seed: Some(7),
            frame_interval_ms: 33,
            cell_width: 20,
            cell_height: 20,
            log_file: Some(PathBuf::from("game.log")),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
        assert_eq!(settings.frame_interval(), Duration::from_millis(33));
    }

    #[test]
    fn test_rejects_zero_cells() {
        let err = Settings::from_json(r#"{ "cell_width": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_path(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let (settings, outcome) = Settings::load_from(None);
        assert_eq!(settings, Settings::default());
        assert!(matches!(outcome, LoadOutcome::Defaults));
    }

    #[test]
    fn test_load_reads_file() {
        let path = scratch_file("good-settings.json", r#"{ "seed": 9 }"#);
        let (settings, outcome) = Settings::load_from(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.seed, Some(9));
        assert!(matches!(outcome, LoadOutcome::Loaded(p) if p == path));
    }

    #[test]
    fn test_load_falls_back_on_bad_file() {
        let path = scratch_file("bad-settings.json", "{ seed: ");
        let (settings, outcome) = Settings::load_from(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(matches!(outcome, LoadOutcome::Fallback(p, SettingsError::Parse(_)) if p == path));

        let missing = PathBuf::from("/nonexistent/settings.json");
        let (settings, outcome) = Settings::load_from(Some(missing));
        assert_eq!(settings, Settings::default());
        assert!(matches!(outcome, LoadOutcome::Fallback(_, SettingsError::Io(_))));
    }
}
