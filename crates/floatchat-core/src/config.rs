use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use crate::{
    classifier::{
        ClassifierError, DataQueryDetector, QueryClassifier, ReplyRule, DEFAULT_REPLY, GREETING,
    },
    dashboard::{Region, TimeRange},
    simulator::DEFAULT_REPLY_DELAY,
};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to get config dir")]
    NoConfigDir,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Get the config directory for floatchat.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    path.push("floatchat");
    Ok(path)
}

/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub time_range: TimeRange,
    pub region: Region,
}

/// Optional overrides for the reply table and data-query triggers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub greeting: Option<String>,
    pub default_reply: Option<String>,
    /// Replaces the built-in table, evaluated in file order
    pub rules: Option<Vec<ReplyRule>>,
    pub data_keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reply_delay_ms: u64,
    /// Seed for the mock data generators; random when unset
    pub seed: Option<u64>,
    pub dashboard: DashboardConfig,
    pub classifier: ClassifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: u64::try_from(DEFAULT_REPLY_DELAY.as_millis()).unwrap_or(1500),
            seed: None,
            dashboard: DashboardConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults when no file exists
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_path()?)
    }

    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    #[must_use]
    pub const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    #[must_use]
    pub fn greeting(&self) -> &str {
        self.classifier.greeting.as_deref().unwrap_or(GREETING)
    }

    /// # Errors
    ///
    /// Returns an error if an overriding rule is invalid
    pub fn build_classifier(&self) -> Result<QueryClassifier, ConfigError> {
        let default_reply = self
            .classifier
            .default_reply
            .clone()
            .unwrap_or_else(|| DEFAULT_REPLY.to_string());

        match &self.classifier.rules {
            Some(rules) => Ok(QueryClassifier::new(rules.clone(), default_reply)?),
            None if self.classifier.default_reply.is_some() => {
                let builtin = QueryClassifier::builtin();
                Ok(builtin.with_default_reply(default_reply))
            }
            None => Ok(QueryClassifier::builtin()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the overriding keyword list is empty or has blanks
    pub fn build_detector(&self) -> Result<DataQueryDetector, ConfigError> {
        match &self.classifier.data_keywords {
            Some(keywords) => Ok(DataQueryDetector::new(keywords)?),
            None => Ok(DataQueryDetector::builtin()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
