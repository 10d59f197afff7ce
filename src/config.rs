//! Codetrail configuration.
//!
//! Loaded from `~/.codetrail/config.toml`. Defaults apply if missing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::progress::Rewards;

/// Codetrail configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// The learner to act as when neither `--as` nor `CODETRAIL_LEARNER` is set.
    pub learner: Option<String>,

    /// Learner ids that get the admin role.
    pub admins: Vec<String>,

    pub rewards: Rewards,

    /// Where progress is stored. Defaults to `~/.codetrail/`.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.codetrail/config.toml`.
    /// Returns defaults if the file is missing, an error if it is invalid.
    pub fn load() -> Result<Self, String> {
        let path = Self::path().ok_or("could not determine home directory")?;
        Self::load_from(&path)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.codetrail/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".codetrail").join("config.toml"))
    }

    /// Whether `learner` is listed as an admin.
    pub fn is_admin(&self, learner: &str) -> bool {
        self.admins.iter().any(|a| a == learner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.rewards.base_xp, 50);
        assert_eq!(config.rewards.bonus_xp, 25);
    }

    #[test]
    fn parses_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "learner = \"kim\"\n\
             admins = [\"root\"]\n\
             data-dir = \"/tmp/codetrail\"\n\
             \n\
             [rewards]\n\
             bonus-xp = 10\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.learner.as_deref(), Some("kim"));
        assert!(config.is_admin("root"));
        assert!(!config.is_admin("kim"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/codetrail")));
        // Unset keys inside a table keep their defaults.
        assert_eq!(config.rewards.base_xp, 50);
        assert_eq!(config.rewards.bonus_xp, 10);
    }

    #[test]
    fn invalid_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "admins = 3\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("invalid config at"));
        assert!(err.contains("config.toml"));
    }
}
