//! Scheduler configuration structures.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable holding the waiting-pool capacity.
pub const ENV_CAPACITY: &str = "TRIAGE_CAPACITY";
/// Environment variable holding the history-log capacity.
pub const ENV_HISTORY_CAPACITY: &str = "TRIAGE_HISTORY_CAPACITY";
/// Environment variable holding the maximum label length in bytes.
pub const ENV_MAX_LABEL_LEN: &str = "TRIAGE_MAX_LABEL_LEN";

/// Default label limit; intake records historically held 60-byte names
/// including the terminator.
pub const DEFAULT_MAX_LABEL_LEN: usize = 59;

const fn default_max_label_len() -> usize {
    DEFAULT_MAX_LABEL_LEN
}

/// Scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum number of waiting entities.
    pub capacity: usize,
    /// Maximum number of history entries. Defaults to `capacity`.
    #[serde(default)]
    pub history_capacity: Option<usize>,
    /// Maximum label length accepted by the driver, in bytes.
    #[serde(default = "default_max_label_len")]
    pub max_label_len: usize,
}

impl SchedulerConfig {
    /// Configuration with the given capacity and defaults elsewhere.
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            history_capacity: None,
            max_label_len: DEFAULT_MAX_LABEL_LEN,
        }
    }

    /// Effective history capacity.
    pub fn history_capacity(&self) -> usize {
        self.history_capacity.unwrap_or(self.capacity)
    }

    /// Validate configuration values.
    ///
    /// A capacity of zero is allowed; such a scheduler rejects every
    /// admission.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_label_len == 0 {
            return Err("max_label_len must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, falling back to a
    /// `.env` file found in the working directory or one of its parents.
    ///
    /// Process variables take precedence over the file. A missing file is
    /// fine; a malformed one is an error.
    pub fn from_env() -> Result<Self, String> {
        Self::from_dotenv(dotenvy::dotenv_iter(), |key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), but reads the given `.env` file and
    /// resolves variables through `lookup` before consulting the file.
    pub fn from_env_file_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_dotenv(dotenvy::from_path_iter(path), lookup)
    }

    fn from_dotenv<I, F>(found: Result<I, dotenvy::Error>, lookup: F) -> Result<Self, String>
    where
        I: IntoIterator<Item = Result<(String, String), dotenvy::Error>>,
        F: Fn(&str) -> Option<String>,
    {
        let mut file_vars = HashMap::new();
        match found {
            Ok(iter) => {
                for item in iter {
                    let (key, value) = item.map_err(|e| format!(".env invalid: {e}"))?;
                    file_vars.insert(key, value);
                }
            }
            Err(e) if e.not_found() => {}
            Err(e) => return Err(format!(".env invalid: {e}")),
        }
        Self::from_lookup(|key| lookup(key).or_else(|| file_vars.get(key).cloned()))
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| -> Result<Option<usize>, String> {
            lookup(key)
                .map(|raw| {
                    raw.trim()
                        .parse::<usize>()
                        .map_err(|e| format!("{key} invalid: {e}"))
                })
                .transpose()
        };

        let capacity = parse(ENV_CAPACITY)?.ok_or_else(|| format!("{ENV_CAPACITY} is not set"))?;
        let cfg = Self {
            capacity,
            history_capacity: parse(ENV_HISTORY_CAPACITY)?,
            max_label_len: parse(ENV_MAX_LABEL_LEN)?.unwrap_or(DEFAULT_MAX_LABEL_LEN),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::with_capacity(20)
    }
}
