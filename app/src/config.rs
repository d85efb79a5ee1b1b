//! Runtime settings loaded via OrthoConfig.
//!
//! Settings come from `DINO_RESERVE_*` environment variables and the usual
//! OrthoConfig files. Command-line flags take precedence over anything set
//! here.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use dino_data::{Roster, RosterError};
use ortho_config::OrthoConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const DEFAULT_SUCCESS_DELAY_MS: u64 = 500;

/// Errors raised while turning settings into usable resources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The roster path cannot be expressed as UTF-8.
    #[error("roster path '{path}' is not valid UTF-8")]
    NonUtf8RosterPath {
        /// Lossy rendering of the offending path.
        path: String,
    },
    /// The roster path does not name a file.
    #[error("roster path '{path}' does not name a file")]
    NotAFile {
        /// The configured path.
        path: Utf8PathBuf,
    },
    /// The directory holding the roster could not be opened.
    #[error("failed to open roster directory '{path}': {message}")]
    RosterDirectory {
        /// Directory that failed to open.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The roster file was read but is not a valid roster.
    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Configuration values for the Dino Reserve front end.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DINO_RESERVE")]
pub struct ReserveSettings {
    /// Seed for the mock reservation generator. Unset means a fresh evening
    /// on every run.
    pub seed: Option<u64>,
    /// Roster file replacing the embedded restaurants and customer names.
    pub roster_path: Option<PathBuf>,
    /// Pause between a successful login and the login callback.
    #[ortho_config(default = 500)]
    pub success_delay_ms: u64,
}

impl Default for ReserveSettings {
    fn default() -> Self {
        Self {
            seed: None,
            roster_path: None,
            success_delay_ms: DEFAULT_SUCCESS_DELAY_MS,
        }
    }
}

impl ReserveSettings {
    /// Delay before the login callback fires.
    #[must_use]
    pub const fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }

    /// Builds the generator RNG.
    ///
    /// `override_seed` (usually a command-line flag) wins over the configured
    /// seed; with neither, the RNG is seeded from the thread-local generator.
    #[must_use]
    pub fn rng(&self, override_seed: Option<u64>) -> ChaCha8Rng {
        match override_seed.or(self.seed) {
            Some(seed) => {
                debug!(seed, "seeding reservation generator");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Returns the configured roster, or the embedded one when no path is set.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the configured file cannot be opened or
    /// parsed, or if the embedded roster is invalid.
    pub fn load_roster(&self) -> Result<Cow<'static, Roster>, SettingsError> {
        match &self.roster_path {
            Some(path) => load_roster_file(path).map(Cow::Owned),
            None => Ok(Cow::Borrowed(Roster::builtin()?)),
        }
    }
}

fn load_roster_file(path: &Path) -> Result<Roster, SettingsError> {
    let utf8_path =
        Utf8Path::from_path(path).ok_or_else(|| SettingsError::NonUtf8RosterPath {
            path: path.to_string_lossy().into_owned(),
        })?;
    let file_name = utf8_path
        .file_name()
        .ok_or_else(|| SettingsError::NotAFile {
            path: utf8_path.to_path_buf(),
        })?;
    let parent = match utf8_path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        SettingsError::RosterDirectory {
            path: parent.to_path_buf(),
            message: error.to_string(),
        }
    })?;
    debug!(path = %utf8_path, "loading roster file");
    Ok(Roster::from_file(&dir, Utf8Path::new(file_name))?)
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and resource loading.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rand::Rng;
    use rstest::rstest;

    fn load_from_empty_args() -> ReserveSettings {
        ReserveSettings::load_from_iter([OsString::from("dino-reserve")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("DINO_RESERVE_SEED", None::<String>),
            ("DINO_RESERVE_ROSTER_PATH", None::<String>),
            ("DINO_RESERVE_SUCCESS_DELAY_MS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.seed.is_none());
        assert!(settings.roster_path.is_none());
        assert_eq!(settings.success_delay(), Duration::from_millis(500));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DINO_RESERVE_SEED", Some("42".to_owned())),
            (
                "DINO_RESERVE_ROSTER_PATH",
                Some("/tmp/dino_roster.json".to_owned()),
            ),
            ("DINO_RESERVE_SUCCESS_DELAY_MS", Some("25".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(
            settings.roster_path,
            Some(PathBuf::from("/tmp/dino_roster.json"))
        );
        assert_eq!(settings.success_delay(), Duration::from_millis(25));
    }

    #[rstest]
    fn flag_seed_overrides_configured_seed() {
        let settings = ReserveSettings {
            seed: Some(1),
            ..ReserveSettings::default()
        };

        let from_flag: u64 = settings.rng(Some(2)).random();
        let expected: u64 = ChaCha8Rng::seed_from_u64(2).random();
        let from_config: u64 = settings.rng(None).random();
        let configured: u64 = ChaCha8Rng::seed_from_u64(1).random();

        assert_eq!(from_flag, expected);
        assert_eq!(from_config, configured);
    }

    #[rstest]
    fn embedded_roster_is_used_without_a_path() {
        let roster = ReserveSettings::default()
            .load_roster()
            .expect("embedded roster loads");
        assert!(matches!(roster, Cow::Borrowed(_)));
        assert_eq!(roster.restaurants().len(), 5);
    }

    #[rstest]
    fn missing_roster_file_reports_the_path() {
        let settings = ReserveSettings {
            roster_path: Some(PathBuf::from("/nonexistent-dino-dir/roster.json")),
            ..ReserveSettings::default()
        };

        let err = settings.load_roster().expect_err("directory is missing");
        assert!(matches!(err, SettingsError::RosterDirectory { .. }));
    }
}
