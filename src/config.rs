//! User configuration loading.
//!
//! Settings resolve in three layers, lowest precedence first: the YAML
//! config file (`~/.devstrap.yaml` or `--config <path>`), then `DEVSTRAP_*`
//! environment variables, then CLI flags (applied by the caller). A missing
//! default config file is fine; an explicit `--config` path that cannot be
//! read or parsed is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DevstrapError, Result};

/// Resolved user settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Show verbose output, including package-manager output.
    pub verbose: bool,

    /// Skip confirmation prompts.
    pub yes: bool,
}

impl Settings {
    /// Load settings from the given path (or the default location) and
    /// apply environment overrides.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = match config_path {
            Some(path) => Self::from_file(path, true)?,
            None => match default_config_path() {
                Some(path) => Self::from_file(&path, false)?,
                None => Self::default(),
            },
        };
        settings.apply_env();
        Ok(settings)
    }

    fn from_file(path: &Path, explicit: bool) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            // A missing default file is not an error; a missing --config is.
            Err(_) if !explicit => return Ok(Self::default()),
            Err(e) => {
                return Err(DevstrapError::ConfigError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };

        serde_yaml::from_str(&contents).map_err(|e| DevstrapError::ConfigError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn apply_env(&mut self) {
        if let Some(value) = env_flag("DEVSTRAP_VERBOSE") {
            self.verbose = value;
        }
        if let Some(value) = env_flag("DEVSTRAP_YES") {
            self.yes = value;
        }
    }
}

/// Default per-user config location: `~/.devstrap.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".devstrap.yaml"))
}

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_reads_yaml_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "verbose: true\nyes: true\n");

        let settings = Settings::load(Some(&path)).unwrap();
        assert!(settings.verbose);
        assert!(settings.yes);
    }

    #[test]
    fn load_defaults_when_keys_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "verbose: false\n");

        let settings = Settings::load(Some(&path)).unwrap();
        assert!(!settings.verbose);
        assert!(!settings.yes);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Settings::load(Some(Path::new("/no/such/devstrap.yaml"))).unwrap_err();
        assert!(matches!(err, DevstrapError::ConfigError { .. }));
    }

    #[test]
    fn unparsable_config_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "verbose: [not a bool\n");

        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, DevstrapError::ConfigError { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "verbos: true\n");

        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn env_flag_parses_common_spellings() {
        std::env::set_var("DEVSTRAP_TEST_FLAG", "TRUE");
        assert_eq!(env_flag("DEVSTRAP_TEST_FLAG"), Some(true));
        std::env::set_var("DEVSTRAP_TEST_FLAG", "0");
        assert_eq!(env_flag("DEVSTRAP_TEST_FLAG"), Some(false));
        std::env::set_var("DEVSTRAP_TEST_FLAG", "maybe");
        assert_eq!(env_flag("DEVSTRAP_TEST_FLAG"), None);
        std::env::remove_var("DEVSTRAP_TEST_FLAG");
    }
}
