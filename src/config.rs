//! Optional defaults, read from a small YAML file.
//!
//! ```yaml
//! length: 16
//! classes: [lowercase, uppercase, digit]
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::validation::{self, PasswordLength, ValidationError};
use crate::{CharacterClass, ClassSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    length: Option<PasswordLength>,
    classes: Option<ClassSet>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    length: Option<i64>,
    #[serde(default)]
    classes: Option<Vec<CharacterClass>>,
}

impl Config {
    /// Load the config at `path`, or from the default location when no path is given. A missing
    /// file is only an error when it was asked for explicitly.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Config::from_file(p),
            None => match default_config_path() {
                Some(p) if p.exists() => Config::from_file(&p),
                _ => {
                    log::debug!("no config file found; using built-in defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|err| ConfigErrorRepr::Io {
            path: path.to_owned(),
            err,
        })?;
        let config = Config::from_yaml(&contents)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Config, ConfigError> {
        // An empty document deserializes as a unit, not as a map with no keys.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let file: ConfigFile = serde_yaml::from_str(contents).map_err(ConfigErrorRepr::Parse)?;
        let length = file
            .length
            .map(PasswordLength::new)
            .transpose()
            .map_err(|err| ConfigErrorRepr::Invalid("length", err))?;
        let classes = file
            .classes
            .map(|list| validation::validate_classes(list.into_iter().collect()))
            .transpose()
            .map_err(|err| ConfigErrorRepr::Invalid("classes", err))?;
        Ok(Config { length, classes })
    }

    pub fn length(&self) -> Option<PasswordLength> {
        self.length
    }

    /// The configured classes, or lowercase only when none are configured.
    pub fn classes(&self) -> ClassSet {
        self.classes.unwrap_or_default()
    }
}

/// `$HOME/.config/passgen/config.yaml`, if `HOME` is set.
pub fn default_config_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    p.push(".config");
    p.push("passgen");
    p.push("config.yaml");
    Some(p)
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ConfigError(ConfigErrorRepr);

impl From<ConfigErrorRepr> for ConfigError {
    fn from(err: ConfigErrorRepr) -> ConfigError {
        ConfigError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum ConfigErrorRepr {
    #[error("failed to read config file {}: {err}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("invalid {0} in config file: {1}")]
    Invalid(&'static str, #[source] ValidationError),
}
