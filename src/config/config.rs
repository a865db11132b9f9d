use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::{ComposectlError, Result};

pub const SETTINGS_FILE_NAME: &str = "composectl.yml";
const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";
const DEFAULT_ENV_FILE: &str = ".env";
const DEFAULT_COMPOSE_PROGRAM: &str = "docker-compose";

/// Settings read from `composectl.yml`. Every key is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Service definition file, relative paths resolve against the base directory
    pub compose_file: PathBuf,

    /// Env file handed to the compose runtime with `--env-file`
    pub env_file: PathBuf,

    /// Program and leading arguments, e.g. `[docker, compose]`
    pub compose_command: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            compose_file: PathBuf::from(DEFAULT_COMPOSE_FILE),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            compose_command: vec![DEFAULT_COMPOSE_PROGRAM.to_string()],
        }
    }
}

impl Settings {
    pub fn from_yaml(path: &Path, yaml: &str) -> Result<Settings> {
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yaml::from_str::<Settings>(yaml).map_err(|source| ComposectlError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Settings> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ComposectlError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        Settings::from_yaml(path, &yaml)
    }

    /// Looks for settings in this order: the explicit file, `<base_dir>/composectl.yml`,
    /// the user's local config dir. Falls back to defaults when none exist.
    pub fn discover(base_dir: &Path, explicit: Option<&Path>) -> Result<(Settings, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Settings::load(path)?, Some(path.to_path_buf())));
        }

        let candidates = std::iter::once(base_dir.join(SETTINGS_FILE_NAME)).chain(
            dirs::config_local_dir().map(|dir| dir.join("composectl").join(SETTINGS_FILE_NAME)),
        );

        for candidate in candidates {
            if candidate.is_file() {
                tracing::debug!("Reading settings from {}", candidate.display());
                return Ok((Settings::load(&candidate)?, Some(candidate)));
            }
        }

        tracing::debug!("No settings file found, using defaults");
        Ok((Settings::default(), None))
    }

    /// `--compose-bin` wins over the settings file. The override is split on
    /// whitespace so `docker compose` works.
    pub fn compose_command(&self, override_bin: Option<&str>) -> Result<Vec<String>> {
        let command = match override_bin {
            Some(bin) => bin.split_whitespace().map(String::from).collect::<Vec<String>>(),
            None => self.compose_command.clone(),
        };

        if command.is_empty() || command[0].is_empty() {
            return Err(ComposectlError::EmptyComposeCommand);
        }

        Ok(command)
    }
}
